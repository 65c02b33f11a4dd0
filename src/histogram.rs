//! Rendering a dataset as a histogram scene.

use std::fmt;
use std::ops::Range;

use tracing::debug;

use crate::axis::{Axis, Edge};
use crate::bin::{Bin, Binner};
use crate::config::HistogramConfig;
use crate::error::Result;
use crate::layout::{Layout, Margin, Orientation};
use crate::scale::util::sorted_pair;
use crate::svg::{Element, SVG_NAMESPACE, number};
use crate::transform::{PixelScale, ScreenPoint, ScreenRect};

/// Elements with a natural numeric value: the number itself, or the first
/// component of a tuple, array or vector.
///
/// Empty arrays and vectors yield NaN, which the binner skips.
pub trait Datum {
    fn value(&self) -> f64;
}

macro_rules! impl_datum_for_number {
    ($($ty:ty),*) => {
        $(
            impl Datum for $ty {
                fn value(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_datum_for_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Datum + ?Sized> Datum for &T {
    fn value(&self) -> f64 {
        (**self).value()
    }
}

impl<T: Datum> Datum for [T] {
    fn value(&self) -> f64 {
        self.first().map_or(f64::NAN, T::value)
    }
}

impl<T: Datum, const N: usize> Datum for [T; N] {
    fn value(&self) -> f64 {
        self.as_slice().value()
    }
}

impl<T: Datum> Datum for Vec<T> {
    fn value(&self) -> f64 {
        self.as_slice().value()
    }
}

macro_rules! impl_datum_for_tuple {
    ($($rest:ident),*) => {
        impl<A: Datum, $($rest),*> Datum for (A, $($rest),*) {
            fn value(&self) -> f64 {
                self.0.value()
            }
        }
    };
}

impl_datum_for_tuple!();
impl_datum_for_tuple!(B);
impl_datum_for_tuple!(B, C);
impl_datum_for_tuple!(B, C, D);

/// A rendered histogram and the geometry behind it.
///
/// The scales, bins and frame are kept so that interactions such as brushing
/// can map pixel positions back into the value domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    scene: Element,
    margin: Margin,
    width: f64,
    height: f64,
    orientation: Orientation,
    value_scale: PixelScale,
    frequency_scale: PixelScale,
    bins: Vec<Bin>,
    bars: Vec<ScreenRect>,
}

/// Bins covered by a pixel selection along the value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Smaller end of the selected value interval.
    pub lower: f64,
    /// Larger end of the selected value interval.
    pub upper: f64,
    /// Indices of the bins overlapping `[lower, upper]`.
    pub bins: Range<usize>,
}

/// Renders `data` using each element's natural value.
///
/// # Examples
///
/// ```
/// use stolpe::{HistogramConfig, render_histogram};
///
/// let histogram = render_histogram(&[0.0, 1.0, 1.0, 2.0, 2.0, 2.0], &HistogramConfig::default())?;
///
/// assert_eq!(histogram.bars().len(), histogram.bins().len());
/// assert!(histogram.to_svg().starts_with("<svg"));
/// # Ok::<(), stolpe::ConfigurationError>(())
/// ```
pub fn render_histogram<T: Datum>(data: &[T], config: &HistogramConfig) -> Result<Histogram> {
    render_histogram_by(data, T::value, config)
}

/// Renders `data` using `value_of` to extract each element's value.
///
/// # Errors
///
/// Returns a [`ConfigurationError`](crate::ConfigurationError) when the
/// configuration leaves no plot area or requests zero bins. Empty data is not
/// an error: the result has no bars.
pub fn render_histogram_by<T, F>(
    data: &[T],
    value_of: F,
    config: &HistogramConfig,
) -> Result<Histogram>
where
    F: Fn(&T) -> f64,
{
    config.validate()?;

    let bins = Binner::new(config.thresholds).bin(data, value_of);
    let frame = config.frame();
    let layout = Layout::new(&bins, &frame, config.orientation);

    debug!(
        data = data.len(),
        bins = bins.len(),
        orientation = ?config.orientation,
        "laid out histogram"
    );

    let (bottom_scale, left_scale) = match config.orientation {
        Orientation::Horizontal => (&layout.value_scale, &layout.frequency_scale),
        Orientation::Vertical => (&layout.frequency_scale, &layout.value_scale),
    };
    let value_edge = match config.orientation {
        Orientation::Horizontal => Edge::Bottom,
        Orientation::Vertical => Edge::Left,
    };

    let bottom_axis = decorate(
        Axis::bottom(bottom_scale)
            .ticks(config.width / 80.0)
            .tick_size_outer(0.0),
        value_edge,
    )
    .render()
    .attr(
        "transform",
        format!(
            "translate(0,{})",
            number(config.height - config.margin_bottom)
        ),
    )
    .child(axis_label(config, Edge::Bottom, value_edge));

    let left_axis = decorate(Axis::left(left_scale).ticks(config.height / 40.0), value_edge)
        .render()
        .attr(
            "transform",
            format!("translate({},0)", number(config.margin_left)),
        )
        .child(axis_label(config, Edge::Left, value_edge));

    let mut bar_group = Element::new("g").attr("fill", "steelblue");
    for bar in &layout.bars {
        bar_group.push(
            Element::new("rect")
                .attr("x", bar.x)
                .attr("width", bar.width)
                .attr("y", bar.y)
                .attr("height", bar.height),
        );
    }

    let scene = Element::new("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("width", config.width)
        .attr("height", config.height)
        .attr(
            "viewBox",
            format!(
                "0,0,{},{}",
                number(config.width),
                number(config.height)
            ),
        )
        .attr("style", "max-width: 100%; height: auto;")
        .child(bar_group)
        .child(bottom_axis)
        .child(left_axis);

    Ok(Histogram {
        scene,
        margin: frame.margin,
        width: config.width,
        height: config.height,
        orientation: config.orientation,
        value_scale: layout.value_scale,
        frequency_scale: layout.frequency_scale,
        bins,
        bars: layout.bars,
    })
}

/// The frequency axis is drawn without its domain line.
fn decorate(axis: Axis<'_>, value_edge: Edge) -> Axis<'_> {
    if axis.edge() == value_edge {
        axis
    } else {
        axis.without_domain_line()
    }
}

/// Arrow-decorated label for the axis on `edge`.
///
/// The arrow points along the edge. It trails the value label and leads the
/// frequency label.
fn axis_label(config: &HistogramConfig, edge: Edge, value_edge: Edge) -> Element {
    let arrow = match edge {
        Edge::Bottom => "→",
        Edge::Left => "↑",
    };
    let text = if edge == value_edge {
        match edge {
            Edge::Bottom => format!("{}{arrow}", config.value_label),
            Edge::Left => format!("{} {arrow}", config.value_label),
        }
    } else {
        format!("{arrow} {}", config.frequency_label)
    };

    let (x, y, anchor) = match edge {
        Edge::Bottom => (config.width, config.margin_bottom - 4.0, "end"),
        Edge::Left => (-config.margin_left, 10.0, "start"),
    };
    Element::new("text")
        .attr("x", x)
        .attr("y", y)
        .attr("fill", "currentColor")
        .attr("text-anchor", anchor)
        .text(text)
}

impl Histogram {
    /// The root `svg` element.
    pub fn scene(&self) -> &Element {
        &self.scene
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Maps bin values to pixels along the value axis.
    pub fn value_scale(&self) -> &PixelScale {
        &self.value_scale
    }

    /// Maps counts to pixels along the frequency axis.
    pub fn frequency_scale(&self) -> &PixelScale {
        &self.frequency_scale
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// One rectangle per bin, in bin order.
    pub fn bars(&self) -> &[ScreenRect] {
        &self.bars
    }

    /// Serializes the scene to SVG markup.
    pub fn to_svg(&self) -> String {
        self.scene.to_string()
    }

    /// Value under a pixel position, read along the value axis.
    pub fn value_at(&self, point: ScreenPoint) -> f64 {
        let pixel = match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        };
        self.value_scale.invert(pixel)
    }

    /// Index of the bar drawn under a pixel position, edges included.
    pub fn bar_at(&self, point: ScreenPoint) -> Option<usize> {
        self.bars.iter().position(|bar| bar.contains(&point))
    }

    /// Converts a selection between two pixel positions into a value interval
    /// and the bins it touches.
    ///
    /// The selection may be dragged in either direction.
    pub fn brush(&self, from: ScreenPoint, to: ScreenPoint) -> Brush {
        let (lower, upper) = sorted_pair(self.value_at(from), self.value_at(to));
        let start = self.bins.partition_point(|bin| bin.upper <= lower);
        let end = self.bins.partition_point(|bin| bin.lower <= upper);
        Brush {
            lower,
            upper,
            bins: start..end.max(start),
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_first_component() {
        assert_eq!(3.5f64.value(), 3.5);
        assert_eq!(7u8.value(), 7.0);
        assert_eq!((2.0f64, "label").value(), 2.0);
        assert_eq!([4.0f64, 9.0].value(), 4.0);
        assert_eq!(vec![1i32, 2].value(), 1.0);
        assert!(Vec::<f64>::new().value().is_nan());
        assert_eq!((&5.0f64).value(), 5.0);
    }

    #[test]
    fn test_scene_layout() {
        let histogram = render_histogram(&[1.0, 2.0, 3.0], &HistogramConfig::default()).unwrap();
        let scene = histogram.scene();

        assert_eq!(scene.name(), "svg");
        assert_eq!(scene.attribute("width"), Some("600"));
        assert_eq!(scene.attribute("viewBox"), Some("0,0,600,300"));

        let groups: Vec<_> = scene.elements().collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].attribute("fill"), Some("steelblue"));
        assert_eq!(groups[1].attribute("transform"), Some("translate(0,280)"));
        assert_eq!(groups[2].attribute("transform"), Some("translate(40,0)"));
        assert_eq!(groups[0].elements().count(), histogram.bins().len());
    }

    #[test]
    fn test_horizontal_axis_labels() {
        let config = HistogramConfig::default().value_label("Weight");
        let histogram = render_histogram(&[1.0, 2.0], &config).unwrap();
        let groups: Vec<_> = histogram.scene().elements().collect();

        let bottom_label = groups[1].elements().last().unwrap();
        assert_eq!(bottom_label.text_content(), "Weight→");
        assert_eq!(bottom_label.attribute("x"), Some("600"));
        assert_eq!(bottom_label.attribute("y"), Some("16"));
        assert_eq!(bottom_label.attribute("text-anchor"), Some("end"));

        let left_label = groups[2].elements().last().unwrap();
        assert_eq!(left_label.text_content(), "↑ Frequency");
        assert_eq!(left_label.attribute("x"), Some("-40"));
        assert_eq!(left_label.attribute("text-anchor"), Some("start"));

        assert_eq!(groups[1].find_all("domain").len(), 1);
        assert!(groups[2].find_all("domain").is_empty());
    }

    #[test]
    fn test_vertical_axis_labels() {
        let config = HistogramConfig::default().value_label("Weight").vertical();
        let histogram = render_histogram(&[1.0, 2.0], &config).unwrap();
        let groups: Vec<_> = histogram.scene().elements().collect();

        let bottom_label = groups[1].elements().last().unwrap();
        assert_eq!(bottom_label.text_content(), "→ Frequency");
        let left_label = groups[2].elements().last().unwrap();
        assert_eq!(left_label.text_content(), "Weight ↑");

        assert!(groups[1].find_all("domain").is_empty());
        assert_eq!(groups[2].find_all("domain").len(), 1);
    }

    #[test]
    fn test_bar_attributes_match_geometry() {
        let histogram = render_histogram(&[0.0, 1.0, 1.0], &HistogramConfig::default()).unwrap();
        let bar_group = histogram.scene().elements().next().unwrap();

        for (rect, bar) in bar_group.elements().zip(histogram.bars()) {
            assert_eq!(rect.number_attribute("x"), Some(bar.x));
            assert_eq!(rect.number_attribute("y"), Some(bar.y));
            assert_eq!(rect.number_attribute("width"), Some(bar.width));
            assert_eq!(rect.number_attribute("height"), Some(bar.height));
        }
    }

    #[test]
    fn test_value_at_inverts_value_axis() {
        let histogram = render_histogram(&[0.0, 2.0], &HistogramConfig::default()).unwrap();
        let (start, end) = histogram.value_scale().range();
        let (&lower, &upper) = histogram.value_scale().domain();

        assert_eq!(histogram.value_at(ScreenPoint::new(start, 0.0)), lower);
        assert!((histogram.value_at(ScreenPoint::new(end, 0.0)) - upper).abs() < 1e-9);
    }

    #[test]
    fn test_brush_selects_overlapping_bins() {
        let config = HistogramConfig::default().thresholds(4);
        let histogram = render_histogram(&[0.0, 0.4, 1.0, 1.9, 2.0], &config).unwrap();
        let scale = histogram.value_scale();

        // Bins are [0, .5) [.5, 1) [1, 1.5) [1.5, 2) [2, 2.5]
        let brush = histogram.brush(
            ScreenPoint::new(scale.apply(&1.6), 0.0),
            ScreenPoint::new(scale.apply(&0.7), 0.0),
        );

        assert!((brush.lower - 0.7).abs() < 1e-9);
        assert!((brush.upper - 1.6).abs() < 1e-9);
        assert_eq!(brush.bins, 1..4);
    }

    #[test]
    fn test_bar_at_hits_drawn_bars() {
        let histogram = render_histogram(&[0.0, 1.0, 1.0, 2.0], &HistogramConfig::default()).unwrap();
        let (index, bar) = histogram
            .bars()
            .iter()
            .enumerate()
            .find(|(_, bar)| bar.height > 0.0)
            .unwrap();

        let centre = ScreenPoint::new(bar.x + bar.width / 2.0, bar.y + bar.height / 2.0);
        assert_eq!(histogram.bar_at(centre), Some(index));
        assert_eq!(histogram.bar_at(ScreenPoint::new(bar.x, bar.y)), Some(index));
        assert_eq!(histogram.bar_at(ScreenPoint::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_brush_outside_domain_is_empty() {
        let histogram = render_histogram(&[0.0, 1.0], &HistogramConfig::default()).unwrap();

        let brush = histogram.brush(ScreenPoint::new(-500.0, 0.0), ScreenPoint::new(-400.0, 0.0));
        assert!(brush.bins.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = HistogramConfig::default().size(0.0, 300.0);

        assert!(render_histogram(&[1.0], &config).is_err());
    }
}
