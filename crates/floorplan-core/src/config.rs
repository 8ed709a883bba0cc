//! Editor configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable constants of an editing session.
///
/// Missing fields fall back to their defaults, so a partial JSON object is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Eraser reach around the click, in pixels (strictly less than).
    pub eraser_radius: f64,
    /// Initial radius of a newly placed circle.
    pub circle_radius: f64,
    /// Initial size of a newly placed triangle.
    pub triangle_size: f64,
    /// Maximum number of history entries kept (0 = unbounded).
    pub max_history: usize,
    /// File stem used for exports when the plan has no name.
    pub default_export_name: String,
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            eraser_radius: 20.0,
            circle_radius: 20.0,
            triangle_size: 40.0,
            max_history: 0,
            default_export_name: "floor-plan".to_string(),
            jpeg_quality: 90,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("eraser_radius", self.eraser_radius),
            ("circle_radius", self.circle_radius),
            ("triangle_size", self.triangle_size),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid {
                field: "jpeg_quality",
                reason: format!("expected 1-100, got {}", self.jpeg_quality),
            });
        }
        if self.default_export_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_export_name",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
