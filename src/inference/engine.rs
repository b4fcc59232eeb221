//! Lazy-loaded inference engine
//!
//! Artifacts load on first use and stay resident for the process lifetime.
//! A failed load leaves the cell empty, so the next request retries; a
//! concurrent duplicate load is harmless since loading is idempotent.

use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::inference::artifacts::{ArtifactError, FeatureScaler, RidgeModel};
use crate::models::features::FeatureVector;

struct Artifacts {
    scaler: FeatureScaler,
    model: RidgeModel,
}

pub struct InferenceEngine {
    scaler_path: PathBuf,
    model_path: PathBuf,
    artifacts: OnceCell<Artifacts>,
}

impl InferenceEngine {
    pub fn new(scaler_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            scaler_path: scaler_path.into(),
            model_path: model_path.into(),
            artifacts: OnceCell::new(),
        }
    }

    /// Raw FWI estimate for one observation. Loads the artifacts on first
    /// use; both transforms are pure, so identical input gives identical
    /// output for the process lifetime.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ArtifactError> {
        let artifacts = self.artifacts()?;
        let scaled = artifacts.scaler.transform(&features.to_array());
        Ok(artifacts.model.predict(&scaled))
    }

    pub fn scaler_loaded(&self) -> bool {
        self.artifacts.get().is_some()
    }

    pub fn model_loaded(&self) -> bool {
        self.artifacts.get().is_some()
    }

    fn artifacts(&self) -> Result<&Artifacts, ArtifactError> {
        self.artifacts.get_or_try_init(|| {
            let scaler = FeatureScaler::load(&self.scaler_path)?;
            tracing::info!("Scaler loaded from {}", self.scaler_path.display());

            let model = RidgeModel::load(&self.model_path)?;
            tracing::info!("Model loaded from {}", self.model_path.display());

            Ok(Artifacts { scaler, model })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const IDENTITY_SCALER: &str =
        r#"{"mean": [0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1]}"#;

    // Picks out the first feature (temperature), so score == temperature.
    const PASSTHROUGH_MODEL: &str =
        r#"{"coefficients": [1,0,0,0,0,0,0,0,0], "intercept": 0.0}"#;

    fn write_artifacts(dir: &TempDir) -> (PathBuf, PathBuf) {
        let scaler_path = dir.path().join("scaler.json");
        let model_path = dir.path().join("ridge_model.json");
        fs::write(&scaler_path, IDENTITY_SCALER).unwrap();
        fs::write(&model_path, PASSTHROUGH_MODEL).unwrap();
        (scaler_path, model_path)
    }

    fn sample_features(temperature: f64) -> FeatureVector {
        FeatureVector::from_values([temperature, 34.0, 17.0, 0.0, 92.2, 23.6, 97.3, 13.8, 29.4])
    }

    #[test]
    fn test_lazy_load_on_first_predict() {
        let dir = TempDir::new().unwrap();
        let (scaler_path, model_path) = write_artifacts(&dir);
        let engine = InferenceEngine::new(scaler_path, model_path);

        assert!(!engine.scaler_loaded());
        assert!(!engine.model_loaded());

        let score = engine.predict(&sample_features(7.5)).unwrap();
        assert!((score - 7.5).abs() < 1e-12);

        assert!(engine.scaler_loaded());
        assert!(engine.model_loaded());
    }

    #[test]
    fn test_failed_load_is_retryable() {
        let dir = TempDir::new().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        let model_path = dir.path().join("ridge_model.json");
        let engine = InferenceEngine::new(&scaler_path, &model_path);

        assert!(engine.predict(&sample_features(1.0)).is_err());
        assert!(!engine.model_loaded());

        // Artifacts appear after the failed attempt; the next request loads.
        fs::write(&scaler_path, IDENTITY_SCALER).unwrap();
        fs::write(&model_path, PASSTHROUGH_MODEL).unwrap();

        assert!(engine.predict(&sample_features(1.0)).is_ok());
        assert!(engine.model_loaded());
    }

    #[test]
    fn test_predict_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let (scaler_path, model_path) = write_artifacts(&dir);
        let engine = InferenceEngine::new(scaler_path, model_path);

        let features = sample_features(5.99);
        let first = engine.predict(&features).unwrap();
        let second = engine.predict(&features).unwrap();
        assert_eq!(first, second);
    }
}
