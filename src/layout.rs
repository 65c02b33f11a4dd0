//! Histogram geometry: scales and one rectangle per bin.
//!
//! The value scale spans the bins' domain and the frequency scale spans
//! `[0, max count]`. [`Orientation`] decides which of them runs along x:
//!
//! | orientation  | value scale range        | frequency scale range    |
//! |--------------|--------------------------|--------------------------|
//! | `Horizontal` | `[left, width - right]`  | `[height - bottom, top]` |
//! | `Vertical`   | `[height - bottom, top]` | `[left, width - right]`  |
//!
//! Adjacent bars are separated by a one pixel gap on the value axis.

use serde::{Deserialize, Serialize};

use crate::bin::Bin;
use crate::scale::Linear;
use crate::transform::{PixelScale, ScreenRect};

/// Direction the bars run in.
///
/// Serialized as the boolean `vertical` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Orientation {
    /// Values along x, bars grow upwards.
    #[default]
    Horizontal,
    /// Values along y (larger values higher), bars grow rightwards.
    Vertical,
}

impl From<bool> for Orientation {
    fn from(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

impl From<Orientation> for bool {
    fn from(orientation: Orientation) -> Self {
        orientation == Orientation::Vertical
    }
}

/// Space between the canvas edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 40.0,
        }
    }
}

/// Canvas size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    /// Left to right across the plot area.
    pub fn horizontal_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Bottom to top across the plot area, so larger values sit higher.
    pub fn vertical_range(&self) -> (f64, f64) {
        (self.height - self.margin.bottom, self.margin.top)
    }
}

/// Scales and bar rectangles for a set of bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub value_scale: PixelScale,
    pub frequency_scale: PixelScale,
    pub bars: Vec<ScreenRect>,
}

impl Layout {
    /// Lays out `bins` in `frame`.
    ///
    /// Without bins both scale domains collapse to `[0, 0]` and no bars are
    /// produced.
    pub fn new(bins: &[Bin], frame: &Frame, orientation: Orientation) -> Self {
        let (value_start, value_end) = match (bins.first(), bins.last()) {
            (Some(first), Some(last)) => (first.lower, last.upper),
            _ => (0.0, 0.0),
        };
        let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0) as f64;

        let (value_range, frequency_range) = match orientation {
            Orientation::Horizontal => (frame.horizontal_range(), frame.vertical_range()),
            Orientation::Vertical => (frame.vertical_range(), frame.horizontal_range()),
        };
        let value_scale = PixelScale::new(
            Linear::new(value_start, value_end),
            value_range.0,
            value_range.1,
        );
        let frequency_scale = PixelScale::new(
            Linear::new(0.0, max_count),
            frequency_range.0,
            frequency_range.1,
        );

        let bar = match orientation {
            Orientation::Horizontal => horizontal_bar,
            Orientation::Vertical => vertical_bar,
        };
        let bars = bins
            .iter()
            .map(|bin| bar(bin, &value_scale, &frequency_scale))
            .collect();

        Self {
            value_scale,
            frequency_scale,
            bars,
        }
    }
}

/// Bar standing on the bottom baseline, inset one pixel on its left.
fn horizontal_bar(bin: &Bin, value: &PixelScale, frequency: &PixelScale) -> ScreenRect {
    let left = value.apply(&bin.lower);
    let right = value.apply(&bin.upper);
    let top = frequency.apply(&(bin.count as f64));
    let baseline = frequency.apply(&0.0);
    ScreenRect {
        x: left + 1.0,
        y: top,
        width: (right - left - 1.0).max(0.0),
        height: (baseline - top).max(0.0),
    }
}

/// Bar extending from the left baseline, inset one pixel on its bottom.
fn vertical_bar(bin: &Bin, value: &PixelScale, frequency: &PixelScale) -> ScreenRect {
    let bottom = value.apply(&bin.lower);
    let top = value.apply(&bin.upper);
    let baseline = frequency.apply(&0.0);
    let end = frequency.apply(&(bin.count as f64));
    ScreenRect {
        x: baseline,
        y: top,
        width: (end - baseline).max(0.0),
        height: (bottom - top - 1.0).max(0.0),
    }
}
