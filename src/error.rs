use thiserror::Error;

/// Rejected histogram options.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{name} must be a finite number {requirement}, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error(
        "left and right margins ({left} + {right}) leave no room in a width of {width}"
    )]
    HorizontalMarginsTooWide { left: f64, right: f64, width: f64 },

    #[error(
        "top and bottom margins ({top} + {bottom}) leave no room in a height of {height}"
    )]
    VerticalMarginsTooTall { top: f64, bottom: f64, height: f64 },

    #[error("at least one bin threshold is required")]
    ZeroThresholds,

    #[error("failed to parse histogram options: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
