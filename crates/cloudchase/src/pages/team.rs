use maud::html;

use crate::errors::DashboardError;
use crate::page::{PageContext, View};

const ROLES: [(&str, &str); 4] = [
    (
        "Model research",
        "Diffusion model design, spectral conditioning and training experiments.",
    ),
    (
        "Data engineering",
        "INSAT-3DR/3DS imagery ingestion, channel alignment and sequence preparation.",
    ),
    (
        "Visualization",
        "Forecast rendering, dashboards and the visual evaluation of predicted frames.",
    ),
    (
        "Evaluation",
        "Metric selection, baselines against optical flow, and error analysis.",
    ),
];

pub fn render(ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let options = ctx.options;
    let mut view = View::new();

    view.push(html! {
        h1 { "About " (options.team_name) }
        p {
            (options.product_name) " is built by " strong { (options.team_name) }
            ", a team working on AI-assisted nowcasting for severe weather early warning."
        }
        h2 { "What we do" }
        dl {
            @for (role, description) in ROLES {
                dt { strong { (role) } }
                dd { (description) }
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
    fn test_team_name_comes_from_options() {
        let options = DashboardOptions {
            team_name: "Team Nimbus".to_string(),
            ..Default::default()
        };
        let html = render(&mut PageContext::with_seed(&options, Upload::Missing, 0))
            .unwrap()
            .into_string();

        assert!(html.contains("<h1>About Team Nimbus</h1>"));
        assert_eq!(html.matches("<dt>").count(), ROLES.len());
    }
}
