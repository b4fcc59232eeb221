//! Weather/fuel feature inputs

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Number of model input features
pub const FEATURE_COUNT: usize = 9;

/// Feature keys in training order. The scaler and model were fitted on
/// columns in this exact order, so it must never change.
pub const FEATURE_KEYS: [&str; FEATURE_COUNT] = [
    "temperature",
    "rh",
    "ws",
    "rain",
    "ffmc",
    "dmc",
    "dc",
    "isi",
    "bui",
];

/// One observation of the nine weather and fuel-moisture inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: f64,
    pub rh: f64,
    pub ws: f64,
    pub rain: f64,
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
    pub isi: f64,
    pub bui: f64,
}

impl FeatureVector {
    /// Parse from a loose JSON object. Each field may arrive as a JSON
    /// number or a numeric string (the UI posts form values verbatim).
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let mut values = [0.0f64; FEATURE_COUNT];
        for (slot, key) in values.iter_mut().zip(FEATURE_KEYS) {
            let raw = body
                .get(key)
                .ok_or_else(|| AppError::InvalidInput(format!("Missing field: {}", key)))?;
            *slot = parse_feature(key, raw)?;
        }
        Ok(Self::from_values(values))
    }

    /// Build from values given in training order.
    pub fn from_values(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            temperature: v[0],
            rh: v[1],
            ws: v[2],
            rain: v[3],
            ffmc: v[4],
            dmc: v[5],
            dc: v[6],
            isi: v[7],
            bui: v[8],
        }
    }

    /// Values in training order, ready for the scaler.
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(vec![
            self.temperature,
            self.rh,
            self.ws,
            self.rain,
            self.ffmc,
            self.dmc,
            self.dc,
            self.isi,
            self.bui,
        ])
    }
}

fn parse_feature(key: &str, value: &Value) -> Result<f64, AppError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid value for field: {}", key))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidInput(format!("Invalid value for field: {}", key))),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid value for field: {}",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_fields() {
        let body = json!({
            "temperature": 35, "rh": 34, "ws": 17, "rain": 0.0,
            "ffmc": 92.2, "dmc": 23.6, "dc": 97.3, "isi": 13.8, "bui": 29.4
        });

        let features = FeatureVector::from_json(&body).unwrap();
        assert_eq!(features.temperature, 35.0);
        assert_eq!(features.bui, 29.4);
    }

    #[test]
    fn test_parse_string_fields() {
        let body = json!({
            "temperature": "35", "rh": " 34 ", "ws": "17", "rain": "0.0",
            "ffmc": "92.2", "dmc": "23.6", "dc": "97.3", "isi": "13.8", "bui": "29.4"
        });

        let features = FeatureVector::from_json(&body).unwrap();
        assert_eq!(features.rh, 34.0);
        assert_eq!(features.isi, 13.8);
    }

    #[test]
    fn test_missing_field_rejected() {
        let body = json!({
            "temperature": 35, "ws": 17, "rain": 0.0,
            "ffmc": 92.2, "dmc": 23.6, "dc": 97.3, "isi": 13.8, "bui": 29.4
        });

        let err = FeatureVector::from_json(&body).unwrap_err();
        match err {
            AppError::InvalidInput(msg) => assert!(msg.contains("rh")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let body = json!({
            "temperature": 35, "rh": 34, "ws": "abc", "rain": 0.0,
            "ffmc": 92.2, "dmc": 23.6, "dc": 97.3, "isi": 13.8, "bui": 29.4
        });

        let err = FeatureVector::from_json(&body).unwrap_err();
        match err {
            AppError::InvalidInput(msg) => assert!(msg.contains("ws")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_array_follows_training_order() {
        let features = FeatureVector::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let array = features.to_array();

        assert_eq!(array.len(), FEATURE_COUNT);
        assert_eq!(array[0], 1.0); // temperature
        assert_eq!(array[4], 5.0); // ffmc
        assert_eq!(array[8], 9.0); // bui
    }
}
