//! Lenient deserializers for backend payloads.
//!
//! The shop backend serialises DECIMAL columns as strings, sends `null` for
//! empty text columns and mixes RFC 3339 timestamps with bare dates. These
//! helpers absorb those variations so the DTOs can stay strictly typed.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

/// `12.5`, `"12.50"`, `null` and `""` are all accepted; the latter two become `0.0`.
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Int(n)) => Ok(n as f64),
        Some(NumberOrText::Float(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed.parse::<f64>().map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Integer variant of [`f64_lenient`]. Fractional numbers are truncated.
pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrText::Int(n)) => Ok(n),
        Some(NumberOrText::Float(n)) => Ok(n.trunc() as i64),
        Some(NumberOrText::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f.trunc() as i64))
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List where entries that fail to decode are dropped. `null` is an empty list.
pub fn vec_skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// Timestamp in RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` form.
///
/// Unparseable values are treated as absent rather than failing the whole
/// record: the console only displays these fields.
pub fn opt_datetime_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "f64_lenient")]
        price: f64,
        #[serde(default, deserialize_with = "i64_lenient")]
        stock: i64,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "opt_datetime_lenient")]
        at: Option<DateTime<Utc>>,
    }

    fn fields(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_from_strings_and_nulls() {
        let p = fields(r#"{"price": "12.50", "stock": "7", "name": null}"#);
        assert_eq!(p.price, 12.5);
        assert_eq!(p.stock, 7);
        assert_eq!(p.name, "");

        let p = fields(r#"{"price": 3, "stock": 4.9}"#);
        assert_eq!(p.price, 3.0);
        assert_eq!(p.stock, 4);

        let p = fields(r#"{"price": null, "stock": ""}"#);
        assert_eq!(p.price, 0.0);
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let res: Result<Fields, _> = serde_json::from_str(r#"{"price": "abc"}"#);
        assert!(res.is_err());
    }

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "vec_skip_invalid")]
        counts: Vec<u8>,
    }

    #[test]
    fn test_list_drops_bad_entries() {
        let listing: Listing = serde_json::from_str(r#"{"counts": [1, "x", 300, 4]}"#).unwrap();
        assert_eq!(listing.counts, vec![1, 4]);

        let listing: Listing = serde_json::from_str(r#"{"counts": null}"#).unwrap();
        assert!(listing.counts.is_empty());
    }

    #[test]
    fn test_datetime_forms() {
        let p = fields(r#"{"at": "2025-01-10T08:30:00.000Z"}"#);
        assert_eq!(p.at.unwrap().day(), 10);

        let p = fields(r#"{"at": "2025-01-10"}"#);
        assert_eq!(p.at.unwrap().month(), 1);

        let p = fields(r#"{"at": "2025-01-10 12:00:00"}"#);
        assert!(p.at.is_some());

        let p = fields(r#"{"at": "not a date"}"#);
        assert!(p.at.is_none());
    }
}
