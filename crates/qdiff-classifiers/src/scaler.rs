//! Fitted numeric feature scalers

use qdiff_core::Result;
use serde::{Deserialize, Serialize};

/// A fitted scaler for the numeric feature row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`; either step is skipped when its parameters are absent
    Standard {
        n_features_in: usize,
        #[serde(default)]
        mean: Option<Vec<f64>>,
        #[serde(default)]
        scale: Option<Vec<f64>>,
    },

    /// `x * scale + min`
    MinMax {
        n_features_in: usize,
        min: Vec<f64>,
        scale: Vec<f64>,
    },
}

impl Scaler {
    /// Standard scaler with both centering and scaling
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self::Standard {
            n_features_in: mean.len(),
            mean: Some(mean),
            scale: Some(scale),
        }
    }

    /// Number of features the scaler was fit on
    pub fn n_features_in(&self) -> usize {
        match self {
            Self::Standard { n_features_in, .. } | Self::MinMax { n_features_in, .. } => {
                *n_features_in
            }
        }
    }

    /// Check that every parameter vector matches `n_features_in`
    pub fn validate(&self) -> Result<()> {
        let n = self.n_features_in();
        let params: Vec<(&str, Option<&Vec<f64>>)> = match self {
            Self::Standard { mean, scale, .. } => {
                vec![("mean", mean.as_ref()), ("scale", scale.as_ref())]
            }
            Self::MinMax { min, scale, .. } => vec![("min", Some(min)), ("scale", Some(scale))],
        };

        for (name, values) in params {
            if let Some(values) = values {
                if values.len() != n {
                    return Err(qdiff_core::Error::shape_mismatch(
                        format!("scaler {name}"),
                        n,
                        values.len(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Scale one feature row
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        let n = self.n_features_in();
        if row.len() != n {
            return Err(qdiff_core::Error::shape_mismatch(self.name(), n, row.len()));
        }

        let scaled = match self {
            Self::Standard { mean, scale, .. } => row
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    let centered = mean.as_ref().map_or(x, |m| x - m[i]);
                    scale.as_ref().map_or(centered, |s| centered / s[i])
                })
                .collect(),
            Self::MinMax { min, scale, .. } => row
                .iter()
                .enumerate()
                .map(|(i, &x)| x * scale[i] + min[i])
                .collect(),
        };

        Ok(scaled)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Standard { .. } => "StandardScaler",
            Self::MinMax { .. } => "MinMaxScaler",
        }
    }
}
