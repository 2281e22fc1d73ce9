//! Page router and renderer for the Chase the Cloud dashboard.
//!
//! The dashboard presents a placeholder cloud-motion forecasting product: predictions are synthetic, images and video
//! are bundled files, metrics are literals. What this crate provides is the routing and rendering around it:
//! a closed set of [`PageKey`]s, a router table mapping each key to exactly one render routine, and a pure
//! [`render()`] that turns a key and a fresh [`PageContext`] into a [`View`].
//!
//! ## Example
//! ```rust
//! use cloudchase::{DashboardOptions, PageContext, PageKey, Upload, render};
//!
//! let options = DashboardOptions::default();
//! let mut ctx = PageContext::new(&options, Upload::Missing);
//! let html = render(PageKey::Metrics, &mut ctx).unwrap().into_string();
//!
//! assert!(html.contains("0.84"));
//! ```

// Modules the server interacts with directly
pub mod assets;
pub mod errors;
pub mod forecast;
pub mod page;
pub mod pages;
pub mod progress;
pub mod theme;
pub mod upload;

pub mod templating;

mod options;

pub use errors::{AssetError, DashboardError};
pub use options::{AssetsOptions, DashboardOptions};
pub use page::{
    Fragment, PageContext, PageKey, View, dispatch, render, render_error, render_not_found,
};
pub use theme::Theme;
pub use upload::Upload;

/// The version of the dashboard being used.
///
/// Rendered as a `generator` meta tag in every page.
pub const GENERATOR: &str = concat!("cloudchase v", env!("CARGO_PKG_VERSION"));
