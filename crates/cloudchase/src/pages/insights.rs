use maud::html;

use crate::errors::DashboardError;
use crate::page::{PageContext, View};
use crate::templating::charts::{BarChart, LineChart};

/// Relative influence of each input on the prediction.
pub const PARAMETER_IMPORTANCE: [(&str, f64); 5] = [
    ("IR channel", 0.35),
    ("Water vapour", 0.25),
    ("Visible channel", 0.20),
    ("Sun angle", 0.12),
    ("Time of day", 0.08),
];

/// Structural similarity against lead time.
pub const SKILL_TREND: [(&str, f64); 6] = [
    ("30 min", 0.91),
    ("60 min", 0.87),
    ("90 min", 0.84),
    ("120 min", 0.80),
    ("150 min", 0.77),
    ("180 min", 0.73),
];

pub fn render(_ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let trend: Vec<(String, f64)> = SKILL_TREND
        .iter()
        .map(|(label, value)| (label.to_string(), *value))
        .collect();

    let mut view = View::new();
    view.push(html! {
        h1 { "Model Insights" }
        p {
            "Which inputs the model leans on, and how its skill decays as the forecast horizon grows "
            "over the 0 to 3 hour nowcasting window."
        }
        (BarChart {
            id: "parameter-importance",
            title: "Parameter Importance",
            bars: &PARAMETER_IMPORTANCE,
        })
        (LineChart {
            id: "skill-trend",
            title: "Forecast Skill by Lead Time",
            y_label: "SSIM",
            points: &trend,
            y_domain: (0.6, 1.0),
            smooth: false,
        })
    });

    Ok(view)
}
