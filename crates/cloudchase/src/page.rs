//! Navigation keys, the router table and the render pass.
//!
//! A render pass is a pure function of a [`PageKey`] and a fresh [`PageContext`]: nothing survives from one pass to
//! the next, so switching pages discards whatever the previous page produced.
use std::fmt;
use std::str::FromStr;

use log::debug;
use maud::{Markup, Render};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::{DashboardError, UnknownPage};
use crate::pages;
use crate::templating::layout::{self, AlertKind, alert};
use crate::upload::Upload;
use crate::DashboardOptions;

/// The page selected in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    ModelPrediction,
    Visualization,
    Metrics,
    ModelInsights,
    AboutTeam,
}

impl PageKey {
    /// Every page, in sidebar order.
    pub const ALL: [PageKey; 6] = [
        PageKey::Home,
        PageKey::ModelPrediction,
        PageKey::Visualization,
        PageKey::Metrics,
        PageKey::ModelInsights,
        PageKey::AboutTeam,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Home => "Home",
            PageKey::ModelPrediction => "Model Prediction",
            PageKey::Visualization => "Visualization",
            PageKey::Metrics => "Metrics",
            PageKey::ModelInsights => "Model Insights",
            PageKey::AboutTeam => "About Team",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::ModelPrediction => "prediction",
            PageKey::Visualization => "visualization",
            PageKey::Metrics => "metrics",
            PageKey::ModelInsights => "insights",
            PageKey::AboutTeam => "team",
        }
    }

    pub fn path(&self) -> String {
        match self {
            PageKey::Home => "/".to_string(),
            key => format!("/{}", key.slug()),
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageKey> {
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Some(PageKey::Home);
        }

        PageKey::ALL.into_iter().find(|key| key.slug() == slug)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PageKey {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::from_slug(s).ok_or_else(|| UnknownPage::Slug(s.to_string()))
    }
}

/// A piece of rendered output.
#[derive(Debug, Clone)]
pub enum Fragment {
    Content(Markup),
    /// One frame of a progress indicator. Consumers may pace these, e.g. while streaming a response.
    Progress(Markup),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Content(markup) | Fragment::Progress(markup) => markup.0.as_str(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Fragment::Content(markup) | Fragment::Progress(markup) => markup.into_string(),
        }
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, Fragment::Progress(_))
    }
}

/// Ordered output of a render pass.
#[derive(Debug, Clone, Default)]
pub struct View {
    fragments: Vec<Fragment>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, content: impl Render) {
        self.fragments.push(Fragment::Content(content.render()));
    }

    pub fn push_progress(&mut self, frame: Markup) {
        self.fragments.push(Fragment::Progress(frame));
    }

    pub fn extend(&mut self, other: View) {
        self.fragments.extend(other.fragments);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    pub fn has_progress(&self) -> bool {
        self.fragments.iter().any(Fragment::is_progress)
    }

    pub fn into_string(self) -> String {
        self.fragments
            .into_iter()
            .map(Fragment::into_string)
            .collect()
    }
}

/// Everything a page may look at during one render pass.
pub struct PageContext<'a> {
    pub options: &'a DashboardOptions,
    pub upload: Upload,
    rng: StdRng,
}

impl<'a> PageContext<'a> {
    pub fn new(options: &'a DashboardOptions, upload: Upload) -> Self {
        Self {
            options,
            upload,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same as [`PageContext::new`], with reproducible synthetic values.
    pub fn with_seed(options: &'a DashboardOptions, upload: Upload, seed: u64) -> Self {
        Self {
            options,
            upload,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

pub type RenderFn = fn(&mut PageContext<'_>) -> Result<View, DashboardError>;

pub struct RouteEntry {
    pub key: PageKey,
    pub render: RenderFn,
}

/// One render routine per page, in [`PageKey::ALL`] order.
pub const ROUTER: [RouteEntry; 6] = [
    RouteEntry {
        key: PageKey::Home,
        render: pages::home::render,
    },
    RouteEntry {
        key: PageKey::ModelPrediction,
        render: pages::prediction::render,
    },
    RouteEntry {
        key: PageKey::Visualization,
        render: pages::visualization::render,
    },
    RouteEntry {
        key: PageKey::Metrics,
        render: pages::metrics::render,
    },
    RouteEntry {
        key: PageKey::ModelInsights,
        render: pages::insights::render,
    },
    RouteEntry {
        key: PageKey::AboutTeam,
        render: pages::team::render,
    },
];

/// Runs the render routine of `key`, and only that one. Returns the page body without the surrounding document.
pub fn dispatch(key: PageKey, ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let entry = &ROUTER[key.index()];
    debug!(target: "render", "rendering {}", entry.key);
    (entry.render)(ctx)
}

/// Renders `key` as a complete HTML document.
pub fn render(key: PageKey, ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let body = dispatch(key, ctx)?;
    Ok(layout::document(Some(key), ctx.options, body))
}

/// Document shown in place of a page that could not be rendered. Other pages are unaffected.
pub fn render_error(key: PageKey, options: &DashboardOptions, error: &impl fmt::Display) -> View {
    let mut body = View::new();
    body.push(maud::html! {
        h1 { (key.title()) }
        (alert(AlertKind::Error, &format!("This page could not be rendered: {error}")))
    });

    layout::document(Some(key), options, body)
}

pub fn render_not_found(options: &DashboardOptions, slug: &str) -> View {
    let mut body = View::new();
    body.push(maud::html! {
        h1 { "Page not found" }
        (alert(AlertKind::Warning, &UnknownPage::Slug(slug.to_string()).to_string()))
        p { "Pick a page from the navigation." }
    });

    layout::document(None, options, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BUNDLED_ASSETS;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn options_with_assets() -> (TempDir, DashboardOptions) {
        let dir = tempdir().unwrap();
        for asset in BUNDLED_ASSETS {
            fs::write(dir.path().join(asset.file_name), b"asset").unwrap();
        }

        let mut options = DashboardOptions::default();
        options.assets.assets_dir = dir.path().to_path_buf();
        (dir, options)
    }

    #[test]
    fn test_router_covers_every_page_once() {
        for (entry, key) in ROUTER.iter().zip(PageKey::ALL) {
            assert_eq!(entry.key, key);
        }
        assert_eq!(ROUTER.len(), PageKey::ALL.len());
    }

    #[test]
    fn test_every_page_renders() {
        let (_dir, options) = options_with_assets();

        for key in PageKey::ALL {
            let upload = Upload::Accepted {
                file_name: "cloud.png".to_string(),
            };
            let mut ctx = PageContext::with_seed(&options, upload, 11);
            let html = render(key, &mut ctx)
                .unwrap_or_else(|e| panic!("{key} failed: {e}"))
                .into_string();

            assert!(html.contains(&format!("aria-current=\"page\">{}</a>", key.title())));
        }
    }

    #[test]
    fn test_slugs() {
        assert_eq!(PageKey::from_slug("/"), Some(PageKey::Home));
        assert_eq!(PageKey::from_slug("/prediction/"), Some(PageKey::ModelPrediction));
        assert_eq!(PageKey::from_slug("team"), Some(PageKey::AboutTeam));
        assert_eq!(PageKey::from_slug("admin"), None);
        assert!("admin".parse::<PageKey>().is_err());
        assert_eq!(PageKey::Home.path(), "/");
        assert_eq!(PageKey::ModelInsights.path(), "/insights");
    }

    #[test]
    fn test_every_slug_parses_back() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::from_slug(key.slug()), Some(key));
            assert_eq!(key.slug().parse::<PageKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_missing_asset_only_breaks_prediction() {
        let dir = tempdir().unwrap();
        let mut options = DashboardOptions::default();
        options.assets.assets_dir = dir.path().to_path_buf();

        for key in PageKey::ALL {
            let upload = Upload::Accepted {
                file_name: "cloud.png".to_string(),
            };
            let result = render(key, &mut PageContext::with_seed(&options, upload, 0));
            assert_eq!(result.is_err(), key == PageKey::ModelPrediction, "{key}");
        }
    }

    #[test]
    fn test_error_document_names_asset() {
        let dir = tempdir().unwrap();
        let mut options = DashboardOptions::default();
        options.assets.assets_dir = dir.path().to_path_buf();
        let upload = Upload::Accepted {
            file_name: "a.png".to_string(),
        };

        let error = dispatch(PageKey::ModelPrediction, &mut PageContext::with_seed(&options, upload, 0))
            .unwrap_err();
        let html = render_error(PageKey::ModelPrediction, &options, &error).into_string();

        assert!(html.contains("IR.jpeg"));
        assert!(html.contains("class=\"alert error\""));
    }

    #[test]
    fn test_not_found_has_no_active_page() {
        let html = render_not_found(&DashboardOptions::default(), "admin").into_string();

        assert!(html.contains("`admin` is not a dashboard page"));
        assert!(!html.contains("aria-current=\"page\">"));
        for key in PageKey::ALL {
            assert!(html.contains(&format!("<a href=\"{}\">{}</a>", key.path(), key.title())));
        }
    }
}
