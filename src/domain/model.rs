use serde::{Deserialize, Serialize};

/// 表單固定送出的時區 (IST)
pub const IST_OFFSET_HOURS: f64 = 5.5;

/// One partner's birth details exactly as they were typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerInput {
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub tob: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    MaleDob,
    MaleTob,
    MaleLat,
    MaleLon,
    FemaleDob,
    FemaleTob,
    FemaleLat,
    FemaleLon,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::MaleDob,
        FormField::MaleTob,
        FormField::MaleLat,
        FormField::MaleLon,
        FormField::FemaleDob,
        FormField::FemaleTob,
        FormField::FemaleLat,
        FormField::FemaleLon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::MaleDob => "male_dob",
            FormField::MaleTob => "male_tob",
            FormField::MaleLat => "male_lat",
            FormField::MaleLon => "male_lon",
            FormField::FemaleDob => "female_dob",
            FormField::FemaleTob => "female_tob",
            FormField::FemaleLat => "female_lat",
            FormField::FemaleLon => "female_lon",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthForm {
    #[serde(default)]
    pub male: PartnerInput,
    #[serde(default)]
    pub female: PartnerInput,
}

impl BirthForm {
    pub fn sample() -> Self {
        Self {
            male: PartnerInput {
                dob: "1978-09-18".to_string(),
                tob: "17:35".to_string(),
                lat: "13.08333333".to_string(),
                lon: "80.28333333".to_string(),
            },
            female: PartnerInput {
                dob: "1984-01-15".to_string(),
                tob: "13:30".to_string(),
                lat: "11.9416".to_string(),
                lon: "79.8083".to_string(),
            },
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::MaleDob => &self.male.dob,
            FormField::MaleTob => &self.male.tob,
            FormField::MaleLat => &self.male.lat,
            FormField::MaleLon => &self.male.lon,
            FormField::FemaleDob => &self.female.dob,
            FormField::FemaleTob => &self.female.tob,
            FormField::FemaleLat => &self.female.lat,
            FormField::FemaleLon => &self.female.lon,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::MaleDob => &mut self.male.dob,
            FormField::MaleTob => &mut self.male.tob,
            FormField::MaleLat => &mut self.male.lat,
            FormField::MaleLon => &mut self.male.lon,
            FormField::FemaleDob => &mut self.female.dob,
            FormField::FemaleTob => &mut self.female.tob,
            FormField::FemaleLat => &mut self.female.lat,
            FormField::FemaleLon => &mut self.female.lon,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            male_dob: self.male.dob.clone(),
            male_tob: self.male.tob.clone(),
            male_lat: self.male.lat.clone(),
            male_lon: self.male.lon.clone(),
            male_tz_offset: IST_OFFSET_HOURS,
            female_dob: self.female.dob.clone(),
            female_tob: self.female.tob.clone(),
            female_lat: self.female.lat.clone(),
            female_lon: self.female.lon.clone(),
            female_tz_offset: IST_OFFSET_HOURS,
        }
    }
}

/// `POST /analyze` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub male_dob: String,
    pub male_tob: String,
    pub male_lat: String,
    pub male_lon: String,
    pub male_tz_offset: f64,
    pub female_dob: String,
    pub female_tob: String,
    pub female_lat: String,
    pub female_lon: String,
    pub female_tz_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub longitude: f64,
    pub rasi: String,
    #[serde(default)]
    pub nakshatra: Option<String>,
    #[serde(default)]
    pub pada: Option<u8>,
    #[serde(default)]
    pub retrograde: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictClass {
    High,
    Moderate,
    #[serde(other)]
    Low,
}

impl VerdictClass {
    pub fn css_class(self) -> &'static str {
        match self {
            VerdictClass::High => "high",
            VerdictClass::Moderate => "moderate",
            VerdictClass::Low => "low",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            VerdictClass::High => "fas fa-heart",
            VerdictClass::Moderate => "fas fa-balance-scale",
            VerdictClass::Low => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRow {
    pub condition: String,
    pub value: String,
    pub match_type: String,
    pub status: String,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl CompatibilityRow {
    pub fn is_match(&self) -> bool {
        self.status == "match"
    }

    /// Empty reasoning counts as missing.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref().filter(|r| !r.is_empty())
    }
}

/// Success payload of `/analyze`, used only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub male_rahu_nakshatra: String,
    pub male_ketu_nakshatra: String,
    pub rahu_nakshatra_lord: String,
    pub ketu_nakshatra_lord: String,
    pub male_rahu: NodePosition,
    pub male_ketu: NodePosition,
    pub total_matches: u32,
    pub primary_match_type: String,
    #[serde(default)]
    pub rahu_matches: Vec<String>,
    #[serde(default)]
    pub ketu_matches: Vec<String>,
    pub verdict: String,
    pub verdict_class: VerdictClass,
    pub message: String,
    #[serde(default)]
    pub compatibility_data: Vec<CompatibilityRow>,
    #[serde(default)]
    pub rahu_reasoning: Option<Vec<String>>,
    #[serde(default)]
    pub ketu_reasoning: Option<Vec<String>>,
}

impl AnalysisReport {
    pub fn rahu_reasons(&self) -> &[String] {
        self.rahu_reasoning.as_deref().unwrap_or_default()
    }

    pub fn ketu_reasons(&self) -> &[String] {
        self.ketu_reasoning.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeResponse {
    Success(Box<AnalysisReport>),
    Failure { error: Option<String> },
}

impl AnalyzeResponse {
    /// Splits on the `success` flag; a missing flag counts as failure.
    /// A `null` body has no flag to read and is a decode error.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Err(serde::de::Error::custom("response body is null"));
        }

        let success = value
            .get("success")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        if success {
            let report: AnalysisReport = serde_json::from_value(value)?;
            Ok(AnalyzeResponse::Success(Box::new(report)))
        } else {
            let error = value
                .get("error")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            Ok(AnalyzeResponse::Failure { error })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFiles {
    pub css_exists: bool,
    pub js_exists: bool,
}

/// `GET /health` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub static_files: Option<StaticFiles>,
    #[serde(default)]
    pub ephemeris_initialized: Option<bool>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
