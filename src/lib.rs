//! Histogram charts rendered to SVG
//!
//! `stolpe` bins a dataset, maps the bins to bars through linear scales and
//! draws the result, with two axes, as an SVG element tree. The scales, bins
//! and bar rectangles are returned with the scene so the chart can be driven
//! further, for example by mapping a brushed pixel range back to values.
//!
//! # Core Concepts
//!
//! ## Bins
//!
//! [`Binner`] splits values into contiguous bins whose boundaries fall on
//! round numbers, aiming for a requested bin count (40 by default).
//!
//! ## Scales
//!
//! A [`Scale`] maps data values (domain) to a normalized `[0, 1]` range;
//! [`scale::Linear`] is the affine one. A [`PixelScale`] stretches the
//! normalized range onto pixels and inverts pixels back to values. Scales
//! also produce "nice" tick marks for axes.
//!
//! ## Layout
//!
//! [`Layout`] turns bins into one [`ScreenRect`] per bin. [`Orientation`]
//! decides whether values run along x (bars grow upwards) or along y (bars
//! grow rightwards).
//!
//! ## Scene
//!
//! [`svg::Element`] trees are built by [`render_histogram`] and serialized
//! with `to_string()`. [`Axis`] draws tick marks and labels for a scale.
//!
//! # Examples
//!
//! ## Rendering
//!
//! ```rust
//! use stolpe::{HistogramConfig, render_histogram};
//!
//! let data = [0.0, 1.0, 1.0, 2.0, 2.0, 2.0];
//! let histogram = render_histogram(&data, &HistogramConfig::default())?;
//!
//! // The bin holding the 2s is the tallest
//! let tallest = histogram.bins().iter().max_by_key(|bin| bin.count).unwrap();
//! assert_eq!(tallest.count, 3);
//! assert!(tallest.lower <= 2.0 && 2.0 < tallest.upper);
//!
//! let svg = histogram.to_svg();
//! assert!(svg.contains(r#"viewBox="0,0,600,300""#));
//! # Ok::<(), stolpe::ConfigurationError>(())
//! ```
//!
//! ## Custom Values and Options
//!
//! ```rust
//! use stolpe::{HistogramConfig, render_histogram_by};
//!
//! struct Parcel {
//!     weight: f64,
//! }
//!
//! let parcels = vec![Parcel { weight: 1.2 }, Parcel { weight: 3.4 }, Parcel { weight: 2.2 }];
//! let config = HistogramConfig::default()
//!     .value_label("Weight (kg)")
//!     .size(300.0, 600.0)
//!     .vertical();
//!
//! let histogram = render_histogram_by(&parcels, |p| p.weight, &config)?;
//! assert_eq!(histogram.bars().len(), histogram.bins().len());
//! # Ok::<(), stolpe::ConfigurationError>(())
//! ```
//!
//! ## Inverting Pixels
//!
//! ```rust
//! use stolpe::{HistogramConfig, ScreenPoint, render_histogram};
//!
//! let histogram = render_histogram(&[10.0, 20.0, 30.0], &HistogramConfig::default())?;
//!
//! // Drag from x = 100 to x = 300 along the value axis
//! let brush = histogram.brush(ScreenPoint::new(300.0, 0.0), ScreenPoint::new(100.0, 0.0));
//! assert!(brush.lower < brush.upper);
//! # Ok::<(), stolpe::ConfigurationError>(())
//! ```

pub mod axis;
pub mod bin;
pub mod config;
pub mod error;
pub mod histogram;
pub mod layout;
pub mod scale;
pub mod svg;
pub mod transform;

pub use axis::{Axis, Edge};
pub use bin::{Bin, Binner};
pub use config::HistogramConfig;
pub use error::{ConfigurationError, Result};
pub use histogram::{Brush, Datum, Histogram, render_histogram, render_histogram_by};
pub use layout::{Frame, Layout, Margin, Orientation};
pub use num_traits::Float;
pub use scale::{Scale, Tick, TickIter};
pub use transform::{PixelScale, ScreenPoint, ScreenRect};
