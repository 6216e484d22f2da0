//! Depth regressor handle.
//!
//! The statistical model is opaque to the rest of the crate: it takes a
//! feature vector and returns a raw depth in mbgl. Two capability variants
//! exist, selected once at load time:
//!
//! - [`StandardPredictor`]: a linear model read from a JSON file
//!   (`{"name": ..., "intercept": ..., "coefficients": [...]}`).
//! - [`CallablePredictor`]: any `Fn(&[f64]) -> Result<f64, RegressorError>`,
//!   used for embedding other model runtimes and for tests.
//!
//! Inference takes `&self`. The handle is shared as `Arc<Regressor>` across
//! request tasks and rayon workers without a lock, so callable models must be
//! reentrant.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RegressorError;

// ============================================================================
// Standard (linear) predictor
// ============================================================================

/// On-disk model format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelFile {
    #[serde(default)]
    pub name: Option<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct StandardPredictor {
    name: String,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl StandardPredictor {
    pub fn new(name: impl Into<String>, intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            intercept,
            coefficients,
        }
    }

    pub fn load(path: &Path) -> Result<Self, RegressorError> {
        if !path.exists() {
            return Err(RegressorError::ModelNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegressorError::Io(path.to_path_buf(), e))?;
        let file: LinearModelFile = serde_json::from_str(&content)
            .map_err(|e| RegressorError::Parse(path.to_path_buf(), e))?;

        let name = file.name.unwrap_or_else(|| "linear".to_string());
        info!(
            path = %path.display(),
            name = %name,
            features = file.coefficients.len(),
            "Loaded linear regressor"
        );
        Ok(Self::new(name, file.intercept, file.coefficients))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &[f64]) -> Result<f64, RegressorError> {
        if features.len() != self.coefficients.len() {
            return Err(RegressorError::FeatureMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}

// ============================================================================
// Callable predictor
// ============================================================================

pub type PredictFn = dyn Fn(&[f64]) -> Result<f64, RegressorError> + Send + Sync;

#[derive(Clone)]
pub struct CallablePredictor {
    expected_features: usize,
    func: Arc<PredictFn>,
}

impl CallablePredictor {
    pub fn new<F>(expected_features: usize, func: F) -> Self
    where
        F: Fn(&[f64]) -> Result<f64, RegressorError> + Send + Sync + 'static,
    {
        Self {
            expected_features,
            func: Arc::new(func),
        }
    }
}

impl std::fmt::Debug for CallablePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallablePredictor")
            .field("expected_features", &self.expected_features)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Regressor
// ============================================================================

#[derive(Debug, Clone)]
pub enum Regressor {
    Standard(StandardPredictor),
    Callable(CallablePredictor),
}

impl Regressor {
    /// Load a linear model file.
    pub fn load(path: &Path) -> Result<Self, RegressorError> {
        StandardPredictor::load(path).map(Self::Standard)
    }

    pub fn callable<F>(expected_features: usize, func: F) -> Self
    where
        F: Fn(&[f64]) -> Result<f64, RegressorError> + Send + Sync + 'static,
    {
        Self::Callable(CallablePredictor::new(expected_features, func))
    }

    /// Raw depth for one feature vector. Non-finite outputs are errors.
    pub fn predict(&self, features: &[f64]) -> Result<f64, RegressorError> {
        let expected = self.expected_features();
        if features.len() != expected {
            return Err(RegressorError::FeatureMismatch {
                expected,
                got: features.len(),
            });
        }
        let raw = match self {
            Self::Standard(p) => p.predict(features)?,
            Self::Callable(p) => (p.func)(features)?,
        };
        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(RegressorError::NonFinite)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Standard(_) => "linear",
            Self::Callable(_) => "callable",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Standard(p) => p.name(),
            Self::Callable(_) => "callable",
        }
    }

    pub fn expected_features(&self) -> usize {
        match self {
            Self::Standard(p) => p.coefficients.len(),
            Self::Callable(p) => p.expected_features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn linear_prediction() {
        let r = Regressor::Standard(StandardPredictor::new("t", 2.0, vec![1.0, 0.5]));
        assert_eq!(r.predict(&[3.0, 4.0]).unwrap(), 7.0);
        assert_eq!(r.kind(), "linear");
        assert_eq!(r.expected_features(), 2);
    }

    #[test]
    fn feature_mismatch() {
        let r = Regressor::Standard(StandardPredictor::new("t", 0.0, vec![1.0; 12]));
        let err = r.predict(&[1.0; 3]).unwrap_err();
        assert!(matches!(err, RegressorError::FeatureMismatch { expected: 12, got: 3 }));
    }

    #[test]
    fn non_finite_output_is_error() {
        let r = Regressor::callable(1, |_| Ok(f64::NAN));
        assert!(matches!(r.predict(&[1.0]), Err(RegressorError::NonFinite)));
        let r = Regressor::callable(1, |_| Ok(f64::INFINITY));
        assert!(matches!(r.predict(&[1.0]), Err(RegressorError::NonFinite)));
    }

    #[test]
    fn callable_errors_pass_through() {
        let r = Regressor::callable(1, |_| Err(RegressorError::Inference("boom".into())));
        let err = r.predict(&[0.0]).unwrap_err();
        assert_eq!(err.to_string(), "Inference failed: boom");
    }

    #[test]
    fn load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "cgwb-linear", "intercept": 1.5, "coefficients": [0.0, 2.0]}}"#)
            .unwrap();
        let r = Regressor::load(file.path()).unwrap();
        assert_eq!(r.name(), "cgwb-linear");
        assert_eq!(r.predict(&[9.0, 1.0]).unwrap(), 3.5);
    }

    #[test]
    fn load_missing_file() {
        let err = Regressor::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, RegressorError::ModelNotFound(_)));
    }

    #[test]
    fn load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Regressor::load(file.path()), Err(RegressorError::Parse(..))));
    }

    #[test]
    fn shared_across_threads() {
        let r = Arc::new(Regressor::callable(2, |f| Ok(f[0] + f[1])));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let r = Arc::clone(&r);
                std::thread::spawn(move || r.predict(&[f64::from(i), 1.0]).unwrap())
            })
            .collect();
        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
