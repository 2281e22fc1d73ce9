use std::path::PathBuf;
use std::time::Duration;

use crate::theme::Theme;

/// Dashboard options, shared by every render pass.
///
/// ## Example
/// ```rust
/// use cloudchase::{AssetsOptions, DashboardOptions, Theme};
///
/// let options = DashboardOptions {
///     theme: Theme::Slate,
///     assets: AssetsOptions {
///         assets_dir: "static/cloud".into(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(options.assets.url_prefix, "/assets");
/// ```
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Shown in the browser tab.
    pub page_title: String,
    /// Shown as the heading of the home page.
    pub product_name: String,
    pub team_name: String,

    pub theme: Theme,
    pub assets: AssetsOptions,

    /// Delay between two frames of the progress indicator when frames are streamed.
    pub progress_step: Duration,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            page_title: "Cloud Pattern Prediction".to_string(),
            product_name: "Chase the Cloud".to_string(),
            team_name: "Team SpaceWalkers".to_string(),
            theme: Theme::default(),
            assets: AssetsOptions::default(),
            progress_step: Duration::from_millis(20),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetsOptions {
    /// Directory holding the bundled images and video.
    pub assets_dir: PathBuf,
    /// URL prefix under which `assets_dir` is served.
    pub url_prefix: String,
}

impl Default for AssetsOptions {
    fn default() -> Self {
        Self {
            assets_dir: "assets".into(),
            url_prefix: "/assets".to_string(),
        }
    }
}
