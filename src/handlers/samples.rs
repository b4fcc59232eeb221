//! Sample data handler

use axum::Json;

use crate::models::features::FeatureVector;

/// GET /sample_data
///
/// Fixed example observations for UI quick-fill; values come from the
/// Algerian forest fires dataset the model was trained on.
pub async fn sample_data() -> Json<Vec<FeatureVector>> {
    Json(samples())
}

fn samples() -> Vec<FeatureVector> {
    vec![
        FeatureVector {
            temperature: 35.0,
            rh: 34.0,
            ws: 17.0,
            rain: 0.0,
            ffmc: 92.2,
            dmc: 23.6,
            dc: 97.3,
            isi: 13.8,
            bui: 29.4,
        },
        FeatureVector {
            temperature: 28.0,
            rh: 67.0,
            ws: 19.0,
            rain: 0.0,
            ffmc: 75.4,
            dmc: 2.9,
            dc: 16.3,
            isi: 2.0,
            bui: 4.0,
        },
        FeatureVector {
            temperature: 39.0,
            rh: 39.0,
            ws: 15.0,
            rain: 0.2,
            ffmc: 89.3,
            dmc: 15.8,
            dc: 35.4,
            isi: 8.2,
            bui: 15.8,
        },
        FeatureVector {
            temperature: 32.0,
            rh: 55.0,
            ws: 14.0,
            rain: 0.0,
            ffmc: 86.2,
            dmc: 8.3,
            dc: 18.4,
            isi: 5.0,
            bui: 8.2,
        },
        FeatureVector {
            temperature: 37.0,
            rh: 55.0,
            ws: 15.0,
            rain: 0.0,
            ffmc: 89.3,
            dmc: 28.3,
            dc: 67.2,
            isi: 8.3,
            bui: 28.3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::features::FEATURE_KEYS;

    #[test]
    fn test_five_samples_with_all_keys() {
        let samples = samples();
        assert_eq!(samples.len(), 5);

        for sample in &samples {
            let value = serde_json::to_value(sample).unwrap();
            let object = value.as_object().unwrap();
            for key in FEATURE_KEYS {
                assert!(object.contains_key(key), "missing key {}", key);
            }
        }
    }
}
