//! Serde helpers for the stored tournament document.
//!
//! Older documents were written by hand-edited forms, so numbers may show up
//! as strings, `null` or be missing altogether. All of those read as `0`.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Coerces a JSON value into a time. Anything that is not a finite number
/// (or a string holding one) becomes `0`, the "no attempt" sentinel.
pub fn lenient_number(value: Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Averages are persisted as strings with exactly two decimals, e.g. `"12.11"`.
pub mod fixed_two_decimals {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.2}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(lenient_number(Value::deserialize(deserializer)?))
    }
}

/// Plain numeric fields that older documents may hold as strings or `null`.
pub mod lenient_float {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(lenient_number(Value::deserialize(deserializer)?))
    }
}

pub mod lenient_times {
    use super::*;

    pub fn serialize<S: Serializer>(times: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(times)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Option::<Vec<Value>>::deserialize(deserializer)?;

        Ok(values
            .unwrap_or_default()
            .into_iter()
            .map(lenient_number)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::lenient_number;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Row {
        #[serde(with = "super::fixed_two_decimals")]
        average: f64,
        #[serde(default, with = "super::lenient_times")]
        times: Vec<f64>,
        #[serde(default, deserialize_with = "super::lenient_float::deserialize")]
        best: f64,
    }

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(lenient_number(json!(12.5)), 12.5);
        assert_eq!(lenient_number(json!(" 9.75 ")), 9.75);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(lenient_number(json!("DNF")), 0.0);
        assert_eq!(lenient_number(json!(null)), 0.0);
        assert_eq!(lenient_number(json!([1, 2])), 0.0);
        assert_eq!(lenient_number(json!("NaN")), 0.0);
    }

    #[test]
    fn average_is_written_with_two_decimals() {
        let row = Row {
            average: 12.113333,
            times: vec![1.0],
            best: 1.0,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["average"], json!("12.11"));
    }

    #[test]
    fn legacy_row() {
        let row: Row = serde_json::from_value(json!({
            "average": "0.00",
            "times": ["12.3", null, 8, "oops"],
        }))
        .unwrap();

        assert_eq!(
            row,
            Row {
                average: 0.0,
                times: vec![12.3, 0.0, 8.0, 0.0],
                best: 0.0,
            }
        );
    }

    #[test]
    fn missing_times() {
        let row: Row = serde_json::from_value(json!({ "average": 3 })).unwrap();
        assert!(row.times.is_empty());
        assert_eq!(row.average, 3.0);
    }

    #[test]
    fn best_as_null_or_string() {
        let row: Row = serde_json::from_value(json!({
            "average": "0.00",
            "best": null,
        }))
        .unwrap();
        assert_eq!(row.best, 0.0);

        let row: Row = serde_json::from_value(json!({
            "average": "7.90",
            "best": "7.45",
        }))
        .unwrap();
        assert_eq!(row.best, 7.45);

        let row: Row = serde_json::from_value(json!({ "average": 0, "best": 6.5 })).unwrap();
        assert_eq!(row.best, 6.5);
    }
}
