//! Web forms post numeric inputs as strings (`"1800"`); API clients send
//! numbers. These helpers accept both.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum FormNumber {
    Number(u64),
    Text(String),
}

fn parse_form_number<E: Error>(value: FormNumber) -> Result<Option<u32>, E> {
    match value {
        FormNumber::Number(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| E::custom(format!("number {n} is too large"))),
        FormNumber::Text(text) if text.trim().is_empty() => Ok(None),
        FormNumber::Text(text) => text
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected a whole number, found \"{text}\""))),
    }
}

pub fn u32_from_form<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    parse_form_number::<D::Error>(FormNumber::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("a value is required"))
}

/// Like [`u32_from_form`], but `null` and blank strings mean "not given".
pub fn optional_u32_from_form<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FormNumber>::deserialize(deserializer)? {
        Some(value) => parse_form_number(value),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(deserialize_with = "u32_from_form")]
        calories: u32,
        #[serde(default, deserialize_with = "optional_u32_from_form")]
        days: Option<u32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let form: Form = serde_json::from_value(json!({ "calories": "1800", "days": 3 })).unwrap();
        assert_eq!(form.calories, 1800);
        assert_eq!(form.days, Some(3));
    }

    #[test]
    fn blank_or_missing_optional_is_none() {
        let form: Form = serde_json::from_value(json!({ "calories": 400, "days": "" })).unwrap();
        assert_eq!(form.days, None);

        let form: Form = serde_json::from_value(json!({ "calories": 400 })).unwrap();
        assert_eq!(form.days, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(serde_json::from_value::<Form>(json!({ "calories": "lots" })).is_err());
        assert!(serde_json::from_value::<Form>(json!({ "calories": "" })).is_err());
        assert!(serde_json::from_value::<Form>(json!({ "calories": -5 })).is_err());
    }
}
