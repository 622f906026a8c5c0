//! Page language and every static string the client shows.
//!
//! The language is resolved once from the page path; renderers, the
//! validator and the controller all take a [`Language`] instead of
//! looking at the URL themselves.

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    /// Tamil whenever the path contains `/tamil`, English otherwise.
    pub fn from_path(path: &str) -> Self {
        if path.contains("/tamil") {
            Language::Ta
        } else {
            Language::En
        }
    }

    pub fn from_page_url(url: &Url) -> Self {
        Self::from_path(url.path())
    }

    /// Value of the `X-Language` request header.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    pub fn text(self, key: Text) -> &'static str {
        key.get(self)
    }

    pub fn lord_label(self, lord: &str) -> String {
        format!("{}: {}", self.text(Text::Lord), lord)
    }

    pub fn position_label(self, longitude: f64, rasi: &str) -> String {
        match self {
            Language::En => format!("Position: {:.2}° in {}", longitude, rasi),
            Language::Ta => format!("நிலை: {:.2}° {}ல்", longitude, rasi),
        }
    }

    /// The backend always sends the match type in English.
    pub fn match_type_label(self, primary_match_type: &str) -> String {
        let value = match self {
            Language::En => primary_match_type,
            Language::Ta => match primary_match_type {
                "Rahu" => self.text(Text::Rahu),
                "Ketu" => self.text(Text::Ketu),
                _ => self.text(Text::NoMatchType),
            },
        };
        format!("{}: {}", self.text(Text::Type), value)
    }

    pub fn breakdown_label(self, rahu: usize, ketu: usize) -> String {
        format!(
            "{}: {}, {}: {}",
            self.text(Text::Rahu),
            rahu,
            self.text(Text::Ketu),
            ketu
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    Analyzing,
    CompatibilityResults,
    MaleRahuNakshatra,
    MaleKetuNakshatra,
    TotalMatches,
    Lord,
    Type,
    Rahu,
    Ketu,
    CompatibilityVerdict,
    DetailedAnalysis,
    Condition,
    FemaleChartDetails,
    MatchType,
    Status,
    Reasoning,
    NoMatchType,
    NoMatchFound,
    PrimaryMatches,
    SecondaryMatches,
    NoMatchesFound,
    NoMatchesMessage,
    ErrorOccurred,
    NetworkError,
    FieldRequired,
    ValidNumber,
    LatitudeRange,
    LongitudeRange,
    InvalidDate,
}

impl Text {
    pub fn get(self, language: Language) -> &'static str {
        match language {
            Language::En => self.english(),
            Language::Ta => self.tamil(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Text::Title => "🔮 Vedic Life Partner Prediction",
            Text::Analyzing => "Analyzing your charts with Vedic wisdom...",
            Text::CompatibilityResults => "📊 Compatibility Analysis Results",
            Text::MaleRahuNakshatra => "Male Rahu Nakshatra",
            Text::MaleKetuNakshatra => "Male Ketu Nakshatra",
            Text::TotalMatches => "Total Matches",
            Text::Lord => "Lord",
            Text::Type => "Type",
            Text::Rahu => "Rahu",
            Text::Ketu => "Ketu",
            Text::CompatibilityVerdict => "Compatibility Verdict",
            Text::DetailedAnalysis => "📋 Detailed Compatibility Analysis",
            Text::Condition => "Condition",
            Text::FemaleChartDetails => "Female Chart Details",
            Text::MatchType => "Match Type",
            Text::Status => "Status",
            Text::Reasoning => "Reasoning",
            Text::NoMatchType => "No Match",
            Text::NoMatchFound => "No match found",
            Text::PrimaryMatches => "🔴 Primary (Rahu) Matches Found:",
            Text::SecondaryMatches => "🟡 Secondary (Ketu) Matches Found:",
            Text::NoMatchesFound => "❌ No Matches Found",
            Text::NoMatchesMessage => {
                "Neither Rahu nor Ketu nakshatra lords match any female chart conditions."
            }
            Text::ErrorOccurred => "An error occurred during analysis.",
            Text::NetworkError => "Network error. Please check your connection and try again.",
            Text::FieldRequired => "This field is required.",
            Text::ValidNumber => "Please enter a valid number.",
            Text::LatitudeRange => "Latitude must be between -90 and 90.",
            Text::LongitudeRange => "Longitude must be between -180 and 180.",
            Text::InvalidDate => "Invalid date format",
        }
    }

    fn tamil(self) -> &'static str {
        match self {
            Text::Title => "🔮 வேத ஜோதிட வாழ்க்கைத் துணை கணிப்பு",
            Text::Analyzing => "வேத ஞானத்துடன் உங்கள் சார்ட்களை பகுப்பாய்வு செய்கிறது...",
            Text::CompatibilityResults => "📊 பொருத்த பகுப்பாய்வு முடிவுகள்",
            Text::MaleRahuNakshatra => "ஆண் ராகு நட்சத்திரம்",
            Text::MaleKetuNakshatra => "ஆண் கேது நட்சத்திரம்",
            Text::TotalMatches => "மொத்த பொருத்தங்கள்",
            Text::Lord => "ஆட்சியாளர்",
            Text::Type => "வகை",
            Text::Rahu => "ராகு",
            Text::Ketu => "கேது",
            Text::CompatibilityVerdict => "பொருத்த தீர்ப்பு",
            Text::DetailedAnalysis => "📋 விரிவான பொருத்த பகுப்பாய்வு",
            Text::Condition => "நிபந்தனை",
            Text::FemaleChartDetails => "பெண் சார்ட் விவரங்கள்",
            Text::MatchType => "பொருத்த வகை",
            Text::Status => "நிலை",
            Text::Reasoning => "காரணம்",
            Text::NoMatchType => "பொருத்தம் இல்லை",
            Text::NoMatchFound => "பொருத்தம் கண்டறியப்படவில்லை",
            Text::PrimaryMatches => "🔴 முதன்மை (ராகு) பொருத்தங்கள் கண்டறியப்பட்டன:",
            Text::SecondaryMatches => "🟡 இரண்டாம் நிலை (கேது) பொருத்தங்கள் கண்டறியப்பட்டன:",
            Text::NoMatchesFound => "❌ பொருத்தங்கள் கண்டறியப்படவில்லை",
            Text::NoMatchesMessage => {
                "ராகு அல்லது கேது நட்சத்திர ஆட்சியாளர்கள் எந்த பெண் சார்ட் நிபந்தனைகளுடனும் பொருந்தவில்லை."
            }
            Text::ErrorOccurred => "பகுப்பாய்வின் போது பிழை ஏற்பட்டது.",
            Text::NetworkError => {
                "வலையமைப்பு பிழை. உங்கள் இணைப்பை சரிபார்த்து மீண்டும் முயற்சிக்கவும்."
            }
            Text::FieldRequired => "இந்த புலம் தேவை.",
            Text::ValidNumber => "சரியான எண்ணை உள்ளிடவும்.",
            Text::LatitudeRange => "அட்சரேகை -90 முதல் 90 வரை இருக்க வேண்டும்.",
            Text::LongitudeRange => "தீர்க்கரேகை -180 முதல் 180 வரை இருக்க வேண்டும்.",
            Text::InvalidDate => "தவறான தேதி வடிவம்",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path("/tamil"), Language::Ta);
        assert_eq!(Language::from_path("/app/tamil/index"), Language::Ta);
        assert_eq!(Language::from_path("/"), Language::En);
        assert_eq!(Language::from_path("/tamilnadu"), Language::Ta);
        assert_eq!(Language::from_path("tamil"), Language::En);
    }

    #[test]
    fn test_language_from_page_url_ignores_query() {
        let url = Url::parse("http://localhost:5001/?lang=/tamil").unwrap();
        assert_eq!(Language::from_page_url(&url), Language::En);

        let url = Url::parse("http://localhost:5001/tamil?sample=true").unwrap();
        assert_eq!(Language::from_page_url(&url), Language::Ta);
        assert_eq!(Language::from_page_url(&url).code(), "ta");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::En.lord_label("Saturn"), "Lord: Saturn");
        assert_eq!(Language::Ta.lord_label("Saturn"), "ஆட்சியாளர்: Saturn");
        assert_eq!(
            Language::En.position_label(123.456, "Simha"),
            "Position: 123.46° in Simha"
        );
        assert_eq!(
            Language::Ta.position_label(5.0, "Mesha"),
            "நிலை: 5.00° Meshaல்"
        );
        assert_eq!(Language::En.match_type_label("None"), "Type: None");
        assert_eq!(Language::Ta.match_type_label("Ketu"), "வகை: கேது");
        assert_eq!(Language::Ta.match_type_label("None"), "வகை: பொருத்தம் இல்லை");
        assert_eq!(Language::En.breakdown_label(2, 1), "Rahu: 2, Ketu: 1");
        assert_eq!(Language::Ta.breakdown_label(0, 3), "ராகு: 0, கேது: 3");
    }
}
