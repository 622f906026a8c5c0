pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{AnalyzeArgs, AnalyzeSettings, CliConfig, Command};

pub use config::cli::LocalStorage;
pub use config::toml_config::ProfileConfig;
pub use core::{
    client::HttpAnalysisClient,
    controller::{FailureKind, FormController, SubmitOutcome},
    page::Page,
};
pub use domain::language::Language;
pub use utils::error::{AppError, Result};
