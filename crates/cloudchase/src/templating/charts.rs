//! Inline SVG charts.
//!
//! Charts are plain markup: no scripts, no external library. Every SVG child element is written with an explicit
//! closing tag, as HTML parsers do not auto-close elements inside `<svg>`.
use std::fmt::Write;

use maud::{Markup, Render, html};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PADDING: f64 = 48.0;

/// Maps values from `domain` onto `range`. A degenerate domain maps everything to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return (self.range.0 + self.range.1) / 2.0;
        }

        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Smooth path through `points` (Catmull-Rom, converted to cubic Bézier segments).
pub fn spline_path(points: &[(f64, f64)]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M{:.1},{:.1}", first.0, first.1);
    for i in 0..points.len().saturating_sub(1) {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);

        let _ = write!(
            path,
            " C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        );
    }

    path
}

/// Straight segments through `points`.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { " L" }, x, y))
        .collect()
}

pub struct LineChart<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub y_label: &'a str,
    pub points: &'a [(String, f64)],
    pub y_domain: (f64, f64),
    pub smooth: bool,
}

impl Render for LineChart<'_> {
    fn render(&self) -> Markup {
        let x = LinearScale::new(
            (0.0, self.points.len().saturating_sub(1) as f64),
            (PADDING, WIDTH - PADDING),
        );
        let y = LinearScale::new(self.y_domain, (HEIGHT - PADDING, PADDING));

        let coords: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (x.map(i as f64), y.map(*value)))
            .collect();

        let path = if self.smooth {
            spline_path(&coords)
        } else {
            polyline_path(&coords)
        };

        let ticks = [self.y_domain.0, (self.y_domain.0 + self.y_domain.1) / 2.0, self.y_domain.1];

        html! {
            figure.chart id=(self.id) {
                h3 { (self.title) }
                svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img" aria-label=(self.title) {
                    @for tick in ticks {
                        line x1=(PADDING) y1=(y.map(tick)) x2=(WIDTH - PADDING) y2=(y.map(tick)) stroke="currentColor" stroke-opacity="0.15" {}
                        text x=(PADDING - 8.0) y=(y.map(tick) + 4.0) text-anchor="end" { (format!("{tick:.0}")) }
                    }
                    text x="14" y=(HEIGHT / 2.0) text-anchor="middle" transform=(format!("rotate(-90 14 {})", HEIGHT / 2.0)) { (self.y_label) }
                    path d=(path) fill="none" stroke="var(--accent)" stroke-width="2.5" stroke-linecap="round" {}
                    @for ((label, value), (cx, cy)) in self.points.iter().zip(&coords) {
                        circle cx=(format!("{cx:.1}")) cy=(format!("{cy:.1}")) r="3.5" fill="var(--accent)" {
                            title { (format!("{label}: {value:.1}")) }
                        }
                        text x=(format!("{cx:.1}")) y=(HEIGHT - PADDING + 18.0) text-anchor="middle" { (label) }
                    }
                }
            }
        }
    }
}

pub struct BarChart<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub bars: &'a [(&'a str, f64)],
}

impl Render for BarChart<'_> {
    fn render(&self) -> Markup {
        let label_width = 140.0;
        let row_height = 34.0;
        let height = PADDING + row_height * self.bars.len() as f64;
        let max = self.bars.iter().map(|(_, value)| *value).fold(0.0, f64::max);
        let x = LinearScale::new((0.0, max), (0.0, WIDTH - label_width - PADDING));

        html! {
            figure.chart id=(self.id) {
                h3 { (self.title) }
                svg viewBox=(format!("0 0 {WIDTH} {height}")) role="img" aria-label=(self.title) {
                    @for (i, (label, value)) in self.bars.iter().enumerate() {
                        @let top = PADDING / 2.0 + row_height * i as f64;
                        text x=(label_width - 10.0) y=(top + row_height / 2.0 + 4.0) text-anchor="end" { (label) }
                        rect x=(label_width) y=(top + 4.0) width=(format!("{:.1}", x.map(*value))) height=(row_height - 8.0) rx="4" fill="var(--accent)" opacity="0.8" {
                            title { (format!("{label}: {value:.2}")) }
                        }
                        text x=(format!("{:.1}", label_width + x.map(*value) + 6.0)) y=(top + row_height / 2.0 + 4.0) { (format!("{value:.2}")) }
                    }
                }
            }
        }
    }
}

/// Grid of cells with values in `[0, 1]`, darker meaning denser cloud.
pub struct Heatmap<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub cells: &'a [Vec<f64>],
}

impl Render for Heatmap<'_> {
    fn render(&self) -> Markup {
        let rows = self.cells.len().max(1) as f64;
        let columns = self.cells.iter().map(Vec::len).max().unwrap_or(1).max(1) as f64;
        let size = ((HEIGHT - PADDING) / rows).min((WIDTH - 2.0 * PADDING) / columns);
        let offset_x = (WIDTH - size * columns) / 2.0;

        html! {
            figure.chart id=(self.id) {
                h3 { (self.title) }
                svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img" aria-label=(self.title) {
                    @for (row, values) in self.cells.iter().enumerate() {
                        @for (column, value) in values.iter().enumerate() {
                            rect x=(format!("{:.1}", offset_x + size * column as f64)) y=(format!("{:.1}", PADDING / 2.0 + size * row as f64)) width=(format!("{size:.1}")) height=(format!("{size:.1}")) fill=(heat_color(*value)) {
                                title { (format!("({row}, {column}): {value:.2}")) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Blends from a pale sky tone (0.0) to deep navy (1.0).
pub fn heat_color(value: f64) -> String {
    const LOW: (f64, f64, f64) = (224.0, 247.0, 250.0);
    const HIGH: (f64, f64, f64) = (13.0, 71.0, 161.0);

    let t = value.clamp(0.0, 1.0);
    let channel = |low: f64, high: f64| (low + (high - low) * t).round() as u8;

    format!(
        "rgb({},{},{})",
        channel(LOW.0, HIGH.0),
        channel(LOW.1, HIGH.1),
        channel(LOW.2, HIGH.2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_endpoints() {
        let scale = LinearScale::new((30.0, 70.0), (272.0, 48.0));

        assert_eq!(scale.map(30.0), 272.0);
        assert_eq!(scale.map(70.0), 48.0);
        assert_eq!(scale.map(50.0), 160.0);
    }

    #[test]
    fn test_degenerate_scale_uses_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
    }

    #[test]
    fn test_spline_has_one_segment_per_gap() {
        let points = [(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0)];
        let path = spline_path(&points);

        assert!(path.starts_with("M0.0,0.0"));
        assert_eq!(path.matches(" C").count(), 3);
        assert!(path.ends_with("30.0,5.0"));
    }

    #[test]
    fn test_empty_paths() {
        assert_eq!(spline_path(&[]), "");
        assert_eq!(polyline_path(&[]), "");
        assert_eq!(spline_path(&[(1.0, 2.0)]), "M1.0,2.0");
    }

    #[test]
    fn test_heat_color_is_clamped() {
        assert_eq!(heat_color(-1.0), "rgb(224,247,250)");
        assert_eq!(heat_color(2.0), "rgb(13,71,161)");
    }

    #[test]
    fn test_svg_children_are_closed() {
        let points = vec![("00:00".to_string(), 40.0), ("01:00".to_string(), 60.0)];
        let html = LineChart {
            id: "chart",
            title: "Coverage",
            y_label: "%",
            points: &points,
            y_domain: (0.0, 100.0),
            smooth: true,
        }
        .render()
        .into_string();

        assert!(html.contains("</path>"));
        assert_eq!(html.matches("<circle").count(), 2);
        assert_eq!(html.matches("</circle>").count(), 2);
    }
}
