pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{AnalyzeArgs, AnalyzeSettings, CliConfig, Command};

pub const DEFAULT_PAGE_URL: &str = "http://localhost:5001/";
pub const DEFAULT_OUTPUT_PATH: &str = "./report.html";

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::ProfileConfig;
    use super::{DEFAULT_OUTPUT_PATH, DEFAULT_PAGE_URL};
    use crate::core::page::Page;
    use crate::core::ConfigProvider;
    use crate::domain::model::{BirthForm, FormField};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Args, Parser, Subcommand};
    use url::Url;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "vedic-partner")]
    #[command(about = "Vedic life partner compatibility report client")]
    pub struct CliConfig {
        /// Page URL: origin of the API, `/tamil` in the path selects Tamil,
        /// `?sample=true` prefills the sample birth details
        #[arg(long, global = true)]
        pub page: Option<String>,

        /// TOML profile with server settings and birth details
        #[arg(long, global = true)]
        pub profile: Option<String>,

        /// Request timeout in seconds
        #[arg(long, global = true)]
        pub timeout: Option<u64>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Submit birth details and write the HTML report (default)
        Analyze(AnalyzeArgs),
        /// Query the backend health endpoint
        Health,
    }

    #[derive(Debug, Clone, Default, Args)]
    pub struct AnalyzeArgs {
        #[arg(long)]
        pub male_dob: Option<String>,
        #[arg(long)]
        pub male_tob: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        pub male_lat: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        pub male_lon: Option<String>,
        #[arg(long)]
        pub female_dob: Option<String>,
        #[arg(long)]
        pub female_tob: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        pub female_lat: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        pub female_lon: Option<String>,

        /// Start from the built-in sample birth details
        #[arg(long)]
        pub sample: bool,

        /// Report file to write
        #[arg(short, long)]
        pub output: Option<String>,

        /// Write the printable document instead of the results page
        #[arg(long)]
        pub print: bool,
    }

    impl AnalyzeArgs {
        fn overrides(&self) -> [(FormField, &Option<String>); 8] {
            [
                (FormField::MaleDob, &self.male_dob),
                (FormField::MaleTob, &self.male_tob),
                (FormField::MaleLat, &self.male_lat),
                (FormField::MaleLon, &self.male_lon),
                (FormField::FemaleDob, &self.female_dob),
                (FormField::FemaleTob, &self.female_tob),
                (FormField::FemaleLat, &self.female_lat),
                (FormField::FemaleLon, &self.female_lon),
            ]
        }

        pub fn apply_to(&self, form: &mut BirthForm) {
            for (field, value) in self.overrides() {
                if let Some(value) = value {
                    form.set_field(field, value.clone());
                }
            }
        }
    }

    impl CliConfig {
        pub fn command(&self) -> Command {
            self.command
                .clone()
                .unwrap_or_else(|| Command::Analyze(AnalyzeArgs::default()))
        }

        pub fn load_profile(&self) -> Result<Option<ProfileConfig>> {
            let Some(path) = &self.profile else {
                return Ok(None);
            };
            tracing::info!("📁 Loading profile from: {}", path);
            let profile = ProfileConfig::from_file(path)?;
            profile.validate()?;
            Ok(Some(profile))
        }

        /// CLI flags win over the profile, the profile over defaults.
        pub fn page_url(&self, profile: Option<&ProfileConfig>) -> Result<Url> {
            let page = self
                .page
                .as_deref()
                .or_else(|| profile.and_then(|p| p.server.page_url.as_deref()))
                .unwrap_or(DEFAULT_PAGE_URL);
            validation::validate_url("page", page)
        }

        pub fn timeout_seconds(&self, profile: Option<&ProfileConfig>) -> Option<u64> {
            self.timeout
                .or_else(|| profile.and_then(|p| p.server.timeout_seconds))
        }

        pub fn resolve(
            &self,
            profile: Option<ProfileConfig>,
            args: AnalyzeArgs,
        ) -> Result<AnalyzeSettings> {
            let page_url = self.page_url(profile.as_ref())?;
            let timeout_seconds = self.timeout_seconds(profile.as_ref());
            if let Some(timeout) = timeout_seconds {
                validation::validate_range("timeout", timeout, 1, 600)?;
            }

            let output_path = args
                .output
                .clone()
                .or_else(|| profile.as_ref().and_then(|p| p.output.path.clone()))
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
            validation::validate_path("output", &output_path)?;

            let print_view = args.print
                || profile
                    .as_ref()
                    .and_then(|p| p.output.print)
                    .unwrap_or(false);

            Ok(AnalyzeSettings {
                page_url,
                timeout_seconds,
                output_path,
                print_view,
                profile,
                args,
            })
        }
    }

    /// Everything an `analyze` run needs after merging flags and profile.
    #[derive(Debug, Clone)]
    pub struct AnalyzeSettings {
        pub page_url: Url,
        pub timeout_seconds: Option<u64>,
        pub output_path: String,
        pub print_view: bool,
        profile: Option<ProfileConfig>,
        args: AnalyzeArgs,
    }

    impl AnalyzeSettings {
        /// Page with its form filled: sample data, then profile, then flags.
        pub fn page(&self) -> Page {
            let mut page = Page::from_page_url(&self.page_url);
            if self.args.sample {
                *page.form_mut() = BirthForm::sample();
            }
            if let Some(profile) = &self.profile {
                profile.apply_to(page.form_mut());
            }
            self.args.apply_to(page.form_mut());
            page
        }
    }

    impl ConfigProvider for AnalyzeSettings {
        fn page_url(&self) -> &str {
            self.page_url.as_str()
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn timeout_seconds(&self) -> Option<u64> {
            self.timeout_seconds
        }

        fn print_view(&self) -> bool {
            self.print_view
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::language::Language;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["vedic-partner"]);
            assert!(matches!(config.command(), Command::Analyze(_)));

            let settings = config.resolve(None, AnalyzeArgs::default()).unwrap();
            assert_eq!(settings.page_url(), DEFAULT_PAGE_URL);
            assert_eq!(settings.output_path(), DEFAULT_OUTPUT_PATH);
            assert!(!settings.print_view());
            assert_eq!(settings.page().form(), &BirthForm::default());
        }

        #[test]
        fn test_flags_override_profile() {
            let config = CliConfig::parse_from([
                "vedic-partner",
                "--page",
                "http://example.com/tamil",
                "analyze",
                "--profile",
                "ignored.toml",
                "--male-lat",
                "-12.5",
                "--print",
            ]);
            let Command::Analyze(args) = config.command() else {
                panic!("expected analyze");
            };

            let profile = ProfileConfig::from_toml_str(
                r#"
[server]
page_url = "http://other.example.com/"
timeout_seconds = 15

[male]
dob = "1978-09-18"
lat = 40.0

[output]
path = "./from-profile.html"
"#,
            )
            .unwrap();

            let settings = config.resolve(Some(profile), args).unwrap();
            assert_eq!(settings.page_url(), "http://example.com/tamil");
            assert_eq!(settings.timeout_seconds(), Some(15));
            assert_eq!(settings.output_path(), "./from-profile.html");
            assert!(settings.print_view());

            let page = settings.page();
            assert_eq!(page.language(), Language::Ta);
            assert_eq!(page.form().male.dob, "1978-09-18");
            assert_eq!(page.form().male.lat, "-12.5");
        }

        #[test]
        fn test_sample_flag() {
            let config = CliConfig::parse_from(["vedic-partner", "analyze", "--sample"]);
            let Command::Analyze(args) = config.command() else {
                panic!("expected analyze");
            };
            let settings = config.resolve(None, args).unwrap();
            assert_eq!(settings.page().form(), &BirthForm::sample());
        }

        #[test]
        fn test_invalid_page_url() {
            let config = CliConfig::parse_from(["vedic-partner", "--page", "ftp://host/"]);
            assert!(config.resolve(None, AnalyzeArgs::default()).is_err());
        }
    }
}
