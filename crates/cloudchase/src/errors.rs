//! Error types for the dashboard.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown through Debug, thiserror only derives Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum AssetError {
    #[error("Bundled asset is missing: {path}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Bundled asset is not a regular file: {path}")]
    NotAFile { path: PathBuf },
}

#[derive(Error)]
pub enum UnknownPage {
    #[error("`{0}` is not a dashboard page")]
    Slug(String),
}

#[derive(Error)]
pub enum UnknownTheme {
    #[error("`{0}` is not a known theme (expected one of: azure, slate, paper)")]
    Name(String),
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl_debug_for_error!(AssetError, UnknownPage, UnknownTheme);
