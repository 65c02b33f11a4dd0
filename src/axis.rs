//! Axis rendering.
//!
//! [`Axis`] draws ticks and labels for a [`PixelScale`] along one edge of
//! the chart, producing the same element structure as d3-axis: a group with
//! an optional `path.domain` followed by one `g.tick` per tick, each holding a
//! `line` and a `text`.

use crate::svg::{Element, number};
use crate::transform::PixelScale;

/// Half-pixel shift that puts 1px strokes on pixel centres.
const OFFSET: f64 = 0.5;

/// Which side of the plot area an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

impl Edge {
    /// Direction ticks point in, away from the plot.
    fn sign(self) -> f64 {
        match self {
            Edge::Bottom => 1.0,
            Edge::Left => -1.0,
        }
    }
}

/// Renders tick marks and labels for a scale.
///
/// # Examples
///
/// ```
/// use stolpe::{Axis, PixelScale, scale::Linear};
///
/// let scale = PixelScale::new(Linear::new(0.0, 10.0), 40.0, 580.0);
/// let axis = Axis::bottom(&scale).ticks(5.0).render();
///
/// assert_eq!(axis.find_all("tick").len(), 6);
/// assert_eq!(axis.find_all("domain").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Axis<'a> {
    edge: Edge,
    scale: &'a PixelScale,
    tick_count: f64,
    tick_size_inner: f64,
    tick_size_outer: f64,
    tick_padding: f64,
    domain_line: bool,
}

impl<'a> Axis<'a> {
    pub fn new(edge: Edge, scale: &'a PixelScale) -> Self {
        Self {
            edge,
            scale,
            tick_count: 10.0,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            domain_line: true,
        }
    }

    pub fn bottom(scale: &'a PixelScale) -> Self {
        Self::new(Edge::Bottom, scale)
    }

    pub fn left(scale: &'a PixelScale) -> Self {
        Self::new(Edge::Left, scale)
    }

    /// Sets the approximate number of tick intervals.
    pub fn ticks(mut self, count: f64) -> Self {
        self.tick_count = count;
        self
    }

    /// Length of the end caps on the domain line; zero draws none.
    pub fn tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    /// Leaves out the `path.domain` line.
    pub fn without_domain_line(mut self) -> Self {
        self.domain_line = false;
        self
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn render(&self) -> Element {
        let k = self.edge.sign();
        let mut group = Element::new("g")
            .attr("fill", "none")
            .attr("font-size", 10.0)
            .attr("font-family", "sans-serif")
            .attr(
                "text-anchor",
                match self.edge {
                    Edge::Bottom => "middle",
                    Edge::Left => "end",
                },
            );

        if self.domain_line {
            group.push(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            );
        }

        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        for tick in self.scale.ticks(self.tick_count) {
            let position = self.scale.apply(&tick.value) + OFFSET;
            let label = format_tick(tick.value, tick.step);
            let (transform, line, text) = match self.edge {
                Edge::Bottom => (
                    format!("translate({},0)", number(position)),
                    Element::new("line").attr("y2", k * self.tick_size_inner),
                    Element::new("text").attr("y", k * spacing).attr("dy", "0.71em"),
                ),
                Edge::Left => (
                    format!("translate(0,{})", number(position)),
                    Element::new("line").attr("x2", k * self.tick_size_inner),
                    Element::new("text").attr("x", k * spacing).attr("dy", "0.32em"),
                ),
            };
            group.push(
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1.0)
                    .attr("transform", transform)
                    .child(line.attr("stroke", "currentColor"))
                    .child(text.attr("fill", "currentColor").text(label)),
            );
        }

        group
    }

    fn domain_path(&self) -> String {
        let (start, end) = self.scale.range();
        let range0 = number(start + OFFSET);
        let range1 = number(end + OFFSET);
        let offset = number(OFFSET);
        let outer = number(self.edge.sign() * self.tick_size_outer);

        match (self.edge, self.tick_size_outer != 0.0) {
            (Edge::Bottom, true) => format!("M{range0},{outer}V{offset}H{range1}V{outer}"),
            (Edge::Bottom, false) => format!("M{range0},{offset}H{range1}"),
            (Edge::Left, true) => format!("M{outer},{range0}H{offset}V{range1}H{outer}"),
            (Edge::Left, false) => format!("M{offset},{range0}V{range1}"),
        }
    }
}

/// Formats a tick value with as many decimals as the tick step needs.
///
/// Thousands are grouped with commas and negatives use the Unicode minus
/// sign. A zero step (a lone tick) prints the value as is.
///
/// ```
/// use stolpe::axis::format_tick;
///
/// assert_eq!(format_tick(0.4, 0.2), "0.4");
/// assert_eq!(format_tick(2.0, 0.2), "2.0");
/// assert_eq!(format_tick(-1500.0, 500.0), "−1,500");
/// ```
pub fn format_tick(value: f64, step: f64) -> String {
    let digits = match decimals_for_step(step) {
        Some(precision) => format!("{:.*}", precision, value.abs()),
        None => number(value.abs()),
    };
    let grouped = group_thousands(&digits);
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("\u{2212}{grouped}")
    } else {
        grouped
    }
}

fn decimals_for_step(step: f64) -> Option<usize> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    // Nudge so exact powers of ten are not pushed down an exponent by log10 rounding.
    let exponent = (step.log10() + 1e-9).floor();
    Some(if exponent < 0.0 { -exponent as usize } else { 0 })
}

fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Linear;

    fn scale(d0: f64, d1: f64, r0: f64, r1: f64) -> PixelScale {
        PixelScale::new(Linear::new(d0, d1), r0, r1)
    }

    #[test]
    fn test_format_precision_follows_step() {
        assert_eq!(format_tick(0.0, 0.2), "0.0");
        assert_eq!(format_tick(1.05, 0.05), "1.05");
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(0.001, 0.001), "0.001");
    }

    #[test]
    fn test_format_grouping_and_sign() {
        assert_eq!(format_tick(1234567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(-0.25, 0.05), "\u{2212}0.25");
        assert_eq!(format_tick(-0.0, 0.1), "0.0");
    }

    #[test]
    fn test_format_lone_tick() {
        assert_eq!(format_tick(5.0, 0.0), "5");
        assert_eq!(format_tick(2.5, 0.0), "2.5");
    }

    #[test]
    fn test_bottom_axis_structure() {
        let s = scale(0.0, 2.0, 40.0, 580.0);
        let axis = Axis::bottom(&s).ticks(2.0).tick_size_outer(0.0).render();

        assert_eq!(axis.attribute("text-anchor"), Some("middle"));
        let domain = axis.find_all("domain");
        assert_eq!(domain[0].attribute("d"), Some("M40.5,0.5H580.5"));

        let ticks = axis.find_all("tick");
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[1].attribute("transform"), Some("translate(310.5,0)"));

        let children: Vec<_> = ticks[1].elements().collect();
        assert_eq!(children[0].attribute("y2"), Some("6"));
        assert_eq!(children[1].attribute("y"), Some("9"));
        assert_eq!(children[1].attribute("dy"), Some("0.71em"));
        assert_eq!(children[1].text_content(), "1");
    }

    #[test]
    fn test_left_axis_structure() {
        let s = scale(0.0, 3.0, 280.0, 20.0);
        let axis = Axis::left(&s).ticks(3.0).render();

        assert_eq!(axis.attribute("text-anchor"), Some("end"));
        let domain = axis.find_all("domain");
        assert_eq!(domain[0].attribute("d"), Some("M-6,280.5H0.5V20.5H-6"));

        let ticks = axis.find_all("tick");
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0].attribute("transform"), Some("translate(0,280.5)"));

        let children: Vec<_> = ticks[0].elements().collect();
        assert_eq!(children[0].attribute("x2"), Some("-6"));
        assert_eq!(children[1].attribute("x"), Some("-9"));
        assert_eq!(children[1].attribute("dy"), Some("0.32em"));
    }

    #[test]
    fn test_without_domain_line() {
        let s = scale(0.0, 1.0, 0.0, 100.0);
        let axis = Axis::left(&s).without_domain_line().render();

        assert!(axis.find_all("domain").is_empty());
        assert_eq!(axis.find_all("tick").len(), 11);
    }
}
