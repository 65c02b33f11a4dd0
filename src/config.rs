//! Histogram options.
//!
//! Every field has a default, so callers only spell out what they change,
//! either through the builder methods or as a JSON object using the
//! camel-cased option names:
//!
//! ```
//! use stolpe::{HistogramConfig, Orientation};
//!
//! let config = HistogramConfig::from_json(
//!     r#"{ "valueLabel": "Weight (kg)", "width": 800, "vertical": true }"#,
//! )?;
//!
//! assert_eq!(config.value_label, "Weight (kg)");
//! assert_eq!(config.width, 800.0);
//! assert_eq!(config.height, 300.0);
//! assert_eq!(config.orientation, Orientation::Vertical);
//! # Ok::<(), stolpe::ConfigurationError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::bin::DEFAULT_THRESHOLDS;
use crate::error::{ConfigurationError, Result};
use crate::layout::{Frame, Margin, Orientation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HistogramConfig {
    /// Label of the value axis.
    pub value_label: String,
    /// Label of the frequency axis.
    pub frequency_label: String,
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    #[serde(rename = "vertical")]
    pub orientation: Orientation,
    /// Approximate number of bins.
    pub thresholds: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        let margin = Margin::default();
        Self {
            value_label: String::new(),
            frequency_label: "Frequency".to_owned(),
            width: 600.0,
            height: 300.0,
            margin_top: margin.top,
            margin_right: margin.right,
            margin_bottom: margin.bottom,
            margin_left: margin.left,
            orientation: Orientation::Horizontal,
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

impl HistogramConfig {
    /// Parses options from a JSON object, filling in defaults, and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = label.into();
        self
    }

    pub fn frequency_label(mut self, label: impl Into<String>) -> Self {
        self.frequency_label = label.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin_top = margin.top;
        self.margin_right = margin.right;
        self.margin_bottom = margin.bottom;
        self.margin_left = margin.left;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for `orientation(Orientation::Vertical)`.
    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    pub fn thresholds(mut self, thresholds: usize) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn margins(&self) -> Margin {
        Margin {
            top: self.margin_top,
            right: self.margin_right,
            bottom: self.margin_bottom,
            left: self.margin_left,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            margin: self.margins(),
        }
    }

    /// Checks that the plot area left inside the margins is non-empty.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("marginTop", self.margin_top)?;
        non_negative("marginRight", self.margin_right)?;
        non_negative("marginBottom", self.margin_bottom)?;
        non_negative("marginLeft", self.margin_left)?;

        if self.margin_left + self.margin_right >= self.width {
            return Err(ConfigurationError::HorizontalMarginsTooWide {
                left: self.margin_left,
                right: self.margin_right,
                width: self.width,
            });
        }
        if self.margin_top + self.margin_bottom >= self.height {
            return Err(ConfigurationError::VerticalMarginsTooTall {
                top: self.margin_top,
                bottom: self.margin_bottom,
                height: self.height,
            });
        }
        if self.thresholds == 0 {
            return Err(ConfigurationError::ZeroThresholds);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidDimension {
            name,
            value,
            requirement: "greater than zero",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidDimension {
            name,
            value,
            requirement: "of zero or more",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HistogramConfig::default();

        assert_eq!(config.value_label, "");
        assert_eq!(config.frequency_label, "Frequency");
        assert_eq!((config.width, config.height), (600.0, 300.0));
        assert_eq!(config.margins(), Margin::default());
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.thresholds, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_json_is_default() {
        let config = HistogramConfig::from_json("{}").unwrap();

        assert_eq!(config, HistogramConfig::default());
    }

    #[test]
    fn json_overrides_margins() {
        let config =
            HistogramConfig::from_json(r#"{ "marginLeft": 60, "marginBottom": 30 }"#).unwrap();

        assert_eq!(config.margin_left, 60.0);
        assert_eq!(config.margin_bottom, 30.0);
        assert_eq!(config.margin_top, 20.0);
    }

    #[test]
    fn json_rejects_unknown_and_malformed_options() {
        assert!(matches!(
            HistogramConfig::from_json(r#"{ "colour": "red" }"#),
            Err(ConfigurationError::Parse(_))
        ));
        assert!(matches!(
            HistogramConfig::from_json(r#"{ "width": "wide" }"#),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn json_validates_after_parsing() {
        assert!(matches!(
            HistogramConfig::from_json(r#"{ "width": 50 }"#),
            Err(ConfigurationError::HorizontalMarginsTooWide { .. })
        ));
    }

    #[test]
    fn builder_sets_fields() {
        let config = HistogramConfig::default()
            .value_label("x")
            .frequency_label("n")
            .size(300.0, 600.0)
            .vertical()
            .thresholds(10);

        assert_eq!(config.value_label, "x");
        assert_eq!(config.frequency_label, "n");
        assert_eq!(config.frame().width, 300.0);
        assert_eq!(config.frame().height, 600.0);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.thresholds, 10);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = HistogramConfig::default()
            .size(f64::NAN, 300.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidDimension { name: "width", .. }
        ));

        let negative_margin = HistogramConfig {
            margin_top: -1.0,
            ..HistogramConfig::default()
        };
        assert!(matches!(
            negative_margin.validate(),
            Err(ConfigurationError::InvalidDimension {
                name: "marginTop",
                ..
            })
        ));
    }

    #[test]
    fn rejects_margins_filling_the_canvas() {
        let config = HistogramConfig::default().size(600.0, 40.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::VerticalMarginsTooTall { .. })
        ));
    }

    #[test]
    fn rejects_zero_thresholds() {
        assert!(matches!(
            HistogramConfig::default().thresholds(0).validate(),
            Err(ConfigurationError::ZeroThresholds)
        ));
    }

    #[test]
    fn error_messages() {
        let err = HistogramConfig::default()
            .size(50.0, 300.0)
            .validate()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "left and right margins (40 + 20) leave no room in a width of 50"
        );
    }

    #[test]
    fn serializes_under_option_names() {
        let config = HistogramConfig::default().vertical().value_label("Weight");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["vertical"], true);
        assert_eq!(value["valueLabel"], "Weight");
        assert_eq!(value["marginLeft"], 40.0);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(HistogramConfig::from_json(&json).unwrap(), config);
    }
}
