use maud::{Markup, Render, html};

use crate::errors::DashboardError;
use crate::page::{PageContext, View};

/// A displayed evaluation metric. Values are literals, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: Option<&'static str>,
    pub description: &'static str,
}

pub const SSIM: Metric = Metric {
    label: "SSIM",
    value: "0.84",
    unit: None,
    description: "Structural similarity between predicted and observed frames.",
};

pub const PSNR: Metric = Metric {
    label: "PSNR",
    value: "28.5",
    unit: Some("dB"),
    description: "Peak signal-to-noise ratio of the predicted frames.",
};

pub const MAE: Metric = Metric {
    label: "MAE",
    value: "0.045",
    unit: None,
    description: "Mean absolute error of normalised pixel intensities.",
};

pub const METRICS: [Metric; 3] = [SSIM, PSNR, MAE];

impl Render for Metric {
    fn render(&self) -> Markup {
        html! {
            div.metric {
                div.label { (self.label) }
                div.value {
                    span data-metric=(self.label) { (self.value) }
                    @if let Some(unit) = self.unit {
                        " " small { (unit) }
                    }
                }
                p { (self.description) }
            }
        }
    }
}

pub fn render(_ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let mut view = View::new();

    view.push(html! {
        h1 { "Metrics" }
        p { "Evaluation of the prototype on held-out INSAT-3DR sequences." }
        div.metrics {
            @for metric in METRICS {
                (metric)
            }
        }
    });

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashboardOptions;
    use crate::upload::Upload;

    #[test]
    fn test_metric_values_are_literal() {
        let options = DashboardOptions::default();
        let html = render(&mut PageContext::with_seed(&options, Upload::Missing, 0))
            .unwrap()
            .into_string();

        assert!(html.contains("<span data-metric=\"SSIM\">0.84</span>"));
        assert!(html.contains("<span data-metric=\"PSNR\">28.5</span> <small>dB</small>"));
        assert!(html.contains("<span data-metric=\"MAE\">0.045</span>"));
    }
}
