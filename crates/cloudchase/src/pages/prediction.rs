//! The "model run": an upload gate, a progress count, and a synthetic forecast.
use maud::{Markup, html};

use crate::assets::{CONTRAST_IMAGE, IR_IMAGE, MOTION_VIDEO};
use crate::errors::DashboardError;
use crate::forecast::ForecastSample;
use crate::page::{PageContext, PageKey, View};
use crate::progress::{PROGRESS_MAX, ProgressCounter};
use crate::templating::charts::LineChart;
use crate::templating::layout::{AlertKind, alert};
use crate::upload::{ACCEPTED_EXTENSIONS, UPLOAD_FIELD, Upload};

pub const MISSING_UPLOAD_WARNING: &str = "Please upload a cloud image to start prediction.";

pub fn render(ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let options = ctx.options;
    let mut view = View::new();

    view.push(html! {
        h1 { "Cloud Prediction" }
        (upload_form())
    });

    let file_name = match &ctx.upload {
        Upload::Missing => {
            view.push(alert(AlertKind::Warning, MISSING_UPLOAD_WARNING));
            return Ok(view);
        }
        Upload::Rejected { file_name } => {
            view.push(alert(
                AlertKind::Warning,
                &format!(
                    "`{file_name}` is not a supported image. Accepted types: {}.",
                    ACCEPTED_EXTENSIONS.join(", ")
                ),
            ));
            return Ok(view);
        }
        Upload::Accepted { file_name } => file_name.clone(),
    };

    // Assets are checked before the first frame: once frames are streamed the page can no longer fail as a whole.
    let ir_image = IR_IMAGE.load(&options.assets)?;
    let contrast_image = CONTRAST_IMAGE.load(&options.assets)?;
    let motion_video = MOTION_VIDEO.load(&options.assets)?;

    view.push(html! {
        h3 { "Running Cloud Motion Model..." }
        p { "Input: " code { (file_name) } }
    });

    for step in ProgressCounter::new() {
        view.push_progress(progress_frame(step));
    }

    let forecast = ForecastSample::generate(ctx.rng());
    let series = forecast.series();

    view.push(html! {
        (alert(AlertKind::Success, "Prediction Completed!"))
        div.columns {
            div {
                h3 { "Infrared (IR) Satellite Image" }
                (ir_image)
            }
            div {
                h3 { "Contrast-enhanced Cloud Image" }
                (contrast_image)
            }
        }
        hr;
        (motion_video)
        (LineChart {
            id: "forecast-chart",
            title: "Predicted Cloud Coverage Over Time",
            y_label: "Predicted Cloud Coverage (%)",
            points: &series,
            y_domain: (0.0, 100.0),
            smooth: true,
        })
        (forecast_table(&forecast))
    });

    Ok(view)
}

fn upload_form() -> Markup {
    html! {
        form method="post" action=(PageKey::ModelPrediction.path()) enctype="multipart/form-data" {
            label for=(UPLOAD_FIELD) { "Upload Cloud Image" }
            br;
            input type="file" id=(UPLOAD_FIELD) name=(UPLOAD_FIELD) accept=(Upload::accept_attribute());
            button type="submit" { "Run prediction" }
        }
    }
}

fn progress_frame(step: u8) -> Markup {
    html! {
        progress value=(step) max=(PROGRESS_MAX) { (step) "%" }
        output { (step) "% Completed" }
    }
}

fn forecast_table(forecast: &ForecastSample) -> Markup {
    html! {
        table #forecast-table {
            thead {
                tr {
                    th { "Time" }
                    th { "Predicted Cloud Coverage (%)" }
                }
            }
            tbody {
                @for point in forecast.points() {
                    tr {
                        td { (point.time.format("%Y-%m-%d %H:%M").to_string()) }
                        td { (format!("{:.1}", point.coverage)) }
                    }
                }
            }
            @if let Some(mean) = forecast.mean_coverage() {
                tfoot {
                    tr {
                        td { "Mean" }
                        td { (format!("{mean:.1}")) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashboardOptions;
    use crate::assets::BUNDLED_ASSETS;
    use crate::page::Fragment;
    use std::fs;
    use tempfile::tempdir;

    fn accepted() -> Upload {
        Upload::Accepted {
            file_name: "insat.png".to_string(),
        }
    }

    #[test]
    fn test_missing_upload_only_warns() {
        let options = DashboardOptions::default();
        let view = render(&mut PageContext::with_seed(&options, Upload::Missing, 0)).unwrap();

        assert!(!view.has_progress());
        let html = view.into_string();
        assert!(html.contains(MISSING_UPLOAD_WARNING));
        assert!(html.contains("<form"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<video"));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("Prediction Completed!"));
    }

    #[test]
    fn test_rejected_upload_names_file() {
        let options = DashboardOptions::default();
        let upload = Upload::Rejected {
            file_name: "clouds.gif".to_string(),
        };
        let view = render(&mut PageContext::with_seed(&options, upload, 0)).unwrap();

        assert!(!view.has_progress());
        let html = view.into_string();
        assert!(html.contains("`clouds.gif` is not a supported image. Accepted types: png, jpg, jpeg."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_progress_reaches_hundred_before_forecast() {
        let dir = tempdir().unwrap();
        for asset in BUNDLED_ASSETS {
            fs::write(dir.path().join(asset.file_name), b"asset").unwrap();
        }
        let mut options = DashboardOptions::default();
        options.assets.assets_dir = dir.path().to_path_buf();

        let view = render(&mut PageContext::with_seed(&options, accepted(), 5)).unwrap();
        let fragments = view.fragments();

        let frames: Vec<&Fragment> = fragments.iter().filter(|f| f.is_progress()).collect();
        assert_eq!(frames.len(), 101);
        for (step, frame) in frames.iter().enumerate() {
            assert!(frame.as_str().contains(&format!("<output>{step}% Completed</output>")));
        }

        let last_frame = fragments.iter().rposition(Fragment::is_progress).unwrap();
        let first_forecast = fragments
            .iter()
            .position(|f| f.as_str().contains("forecast-chart"))
            .unwrap();
        assert!(last_frame < first_forecast);
        assert!(fragments[..last_frame].iter().all(|f| !f.as_str().contains("<img")));

        let html = view.into_string();
        assert!(html.contains("<img src=\"/assets/IR.jpeg\""));
        assert!(html.contains("<img src=\"/assets/contrast.jpeg\""));
        assert!(html.contains("<source src=\"/assets/gif.mp4\" type=\"video/mp4\">"));
        assert_eq!(html.matches("<td>2023-01-05 ").count(), 10);
    }

    #[test]
    fn test_missing_asset_fails_before_any_frame() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("IR.jpeg"), b"asset").unwrap();
        let mut options = DashboardOptions::default();
        options.assets.assets_dir = dir.path().to_path_buf();

        let err = render(&mut PageContext::with_seed(&options, accepted(), 0)).unwrap_err();

        assert!(err.to_string().contains("contrast.jpeg"));
    }
}
