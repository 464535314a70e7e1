use serde::Deserialize;

use crate::modules::time_entries::core::errors::ApplicationError;

/// An hours value as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HoursValue {
    Number(f64),
    Text(String),
}

pub fn required(field: &str, value: Option<String>) -> Result<String, ApplicationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApplicationError::Validation(format!("{field} is required")))
}

pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `None` means "no hours": null, blank and zero all land here.
pub fn normalize_hours(
    label: &str,
    value: Option<HoursValue>,
) -> Result<Option<f64>, ApplicationError> {
    let hours = match value {
        None => return Ok(None),
        Some(HoursValue::Number(n)) => n,
        Some(HoursValue::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(HoursValue::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
            ApplicationError::Validation(format!("hours for {label} must be a number, got '{text}'"))
        })?,
    };
    if !hours.is_finite() || hours < 0.0 {
        return Err(ApplicationError::Validation(format!(
            "hours for {label} must be a non-negative number"
        )));
    }
    Ok((hours > 0.0).then_some(hours))
}

#[cfg(test)]
mod input_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(HoursValue::Text("  ".into())), None)]
    #[case(Some(HoursValue::Number(0.0)), None)]
    #[case(Some(HoursValue::Number(8.0)), Some(8.0))]
    #[case(Some(HoursValue::Text(" 7.5 ".into())), Some(7.5))]
    fn it_should_normalize_hours(#[case] value: Option<HoursValue>, #[case] expected: Option<f64>) {
        assert_eq!(normalize_hours("01-01-2024", value).unwrap(), expected);
    }

    #[rstest]
    #[case(HoursValue::Number(-0.5))]
    #[case(HoursValue::Number(f64::NAN))]
    #[case(HoursValue::Text("eight".into()))]
    fn it_should_reject_bad_hours(#[case] value: HoursValue) {
        assert!(matches!(
            normalize_hours("01-01-2024", Some(value)),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[rstest]
    fn it_should_trim_required_and_drop_blank_optional_values() {
        assert_eq!(required("ticket", Some(" T1 ".into())).unwrap(), "T1");
        assert_eq!(
            required("ticket", Some(" ".into())).unwrap_err().to_string(),
            "validation failed: ticket is required"
        );
        assert_eq!(optional(Some("   ".into())), None);
        assert_eq!(optional(Some("x".into())), Some("x".into()));
    }
}
