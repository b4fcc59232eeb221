//! Serialized scaler and model artifacts
//!
//! Both artifacts are fitted by the external training pipeline and exported
//! as JSON; this module only loads and applies them.

use ndarray::Array1;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::features::FEATURE_COUNT;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        path: String,
        actual: usize,
        expected: usize,
    },
}

/// Fitted standardization transform: per-dimension `(x - mean) / scale`.
#[derive(Debug, Clone)]
pub struct FeatureScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

#[derive(Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl FeatureScaler {
    pub fn new(mean: Array1<f64>, scale: Array1<f64>) -> Self {
        Self { mean, scale }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw: ScalerFile = read_json(path)?;
        check_dims(path, raw.mean.len())?;
        check_dims(path, raw.scale.len())?;

        Ok(Self::new(Array1::from(raw.mean), Array1::from(raw.scale)))
    }

    pub fn transform(&self, features: &Array1<f64>) -> Array1<f64> {
        (features - &self.mean) / &self.scale
    }
}

/// Fitted ridge regression: `coefficients · x + intercept`.
#[derive(Debug, Clone)]
pub struct RidgeModel {
    coefficients: Array1<f64>,
    intercept: f64,
}

#[derive(Deserialize)]
struct ModelFile {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl RidgeModel {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw: ModelFile = read_json(path)?;
        check_dims(path, raw.coefficients.len())?;

        Ok(Self::new(Array1::from(raw.coefficients), raw.intercept))
    }

    pub fn predict(&self, scaled: &Array1<f64>) -> f64 {
        self.coefficients.dot(scaled) + self.intercept
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ArtifactError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

fn check_dims(path: &Path, actual: usize) -> Result<(), ArtifactError> {
    if actual != FEATURE_COUNT {
        return Err(ArtifactError::DimensionMismatch {
            path: path.display().to_string(),
            actual,
            expected: FEATURE_COUNT,
        });
    }
    Ok(())
}
