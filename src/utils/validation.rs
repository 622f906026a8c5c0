use crate::domain::language::{Language, Text};
use crate::domain::model::{BirthForm, FormField};
use crate::utils::error::{AppError, Result};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(AppError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Result of checking one form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid(&'static str),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid(message) => Some(message),
        }
    }
}

/// Overflowing literals such as `1e400` and a spelled-out `Infinity` come
/// back infinite and fail the range check; `NaN`, `inf` and trailing
/// garbage are not numbers.
fn parse_coordinate(value: &str) -> Option<f64> {
    let unsigned = value.trim_start_matches(['+', '-']);
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        Ok(n) if n.is_infinite()
            && (unsigned == "Infinity"
                || unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')) =>
        {
            Some(n)
        }
        _ => None,
    }
}

/// Checks a field by its input name: required first, then the numeric
/// range for `lat`/`lon` names and the format for `_dob`/`_tob` names.
pub fn validate_field(name: &str, value: &str, language: Language) -> FieldCheck {
    let value = value.trim();

    if value.is_empty() {
        return FieldCheck::Invalid(language.text(Text::FieldRequired));
    }

    let is_lat = name.contains("lat");
    let is_lon = name.contains("lon");
    if is_lat || is_lon {
        let Some(number) = parse_coordinate(value) else {
            return FieldCheck::Invalid(language.text(Text::ValidNumber));
        };
        if is_lat && validate_range(name, number, -90.0, 90.0).is_err() {
            return FieldCheck::Invalid(language.text(Text::LatitudeRange));
        }
        if is_lon && validate_range(name, number, -180.0, 180.0).is_err() {
            return FieldCheck::Invalid(language.text(Text::LongitudeRange));
        }
        return FieldCheck::Valid;
    }

    if name.ends_with("_dob") && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return FieldCheck::Invalid(language.text(Text::InvalidDate));
    }
    if name.ends_with("_tob") && NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return FieldCheck::Invalid(language.text(Text::InvalidDate));
    }

    FieldCheck::Valid
}

/// Per-field error state of the birth form.
///
/// A blur always validates; typing only re-validates a field that is
/// already showing an error.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    language: Language,
    errors: HashMap<FormField, &'static str>,
}

impl FormValidator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            errors: HashMap::new(),
        }
    }

    fn apply(&mut self, field: FormField, value: &str) -> FieldCheck {
        let check = validate_field(field.name(), value, self.language);
        match check.message() {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        check
    }

    pub fn on_blur(&mut self, field: FormField, value: &str) -> FieldCheck {
        self.apply(field, value)
    }

    /// `None` when the field had no error and was left alone.
    pub fn on_input(&mut self, field: FormField, value: &str) -> Option<FieldCheck> {
        if self.errors.contains_key(&field) {
            Some(self.apply(field, value))
        } else {
            None
        }
    }

    pub fn validate_form(&mut self, form: &BirthForm) -> bool {
        let mut all_valid = true;
        for field in FormField::ALL {
            if !self.apply(field, form.field(field)).is_valid() {
                all_valid = false;
            }
        }
        all_valid
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Errors in form order.
    pub fn errors(&self) -> Vec<(FormField, &'static str)> {
        FormField::ALL
            .iter()
            .filter_map(|f| self.error(*f).map(|message| (*f, message)))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_error(self) -> Option<AppError> {
        if !self.has_errors() {
            return None;
        }
        let message = self
            .errors()
            .iter()
            .map(|(field, message)| format!("{}: {}", field.name(), message))
            .collect::<Vec<_>>()
            .join("; ");
        Some(AppError::ValidationError { message })
    }
}
