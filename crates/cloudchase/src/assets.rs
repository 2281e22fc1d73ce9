//! Bundled static assets: two satellite frames and a motion clip.
use std::fs;
use std::path::PathBuf;

use log::debug;
use maud::{Markup, Render, html};

use crate::AssetsOptions;
use crate::errors::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video { mime: &'static str },
}

/// Immutable reference to a bundled file, relative to [`AssetsOptions::assets_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAsset {
    pub file_name: &'static str,
    pub kind: AssetKind,
    pub caption: &'static str,
}

pub const IR_IMAGE: StaticAsset = StaticAsset {
    file_name: "IR.jpeg",
    kind: AssetKind::Image,
    caption: "IR Channel - Current Frame",
};

pub const CONTRAST_IMAGE: StaticAsset = StaticAsset {
    file_name: "contrast.jpeg",
    kind: AssetKind::Image,
    caption: "Contrast Enhancement",
};

pub const MOTION_VIDEO: StaticAsset = StaticAsset {
    file_name: "gif.mp4",
    kind: AssetKind::Video { mime: "video/mp4" },
    caption: "Cloud motion sequence",
};

pub const BUNDLED_ASSETS: [StaticAsset; 3] = [IR_IMAGE, CONTRAST_IMAGE, MOTION_VIDEO];

impl StaticAsset {
    pub fn path(&self, options: &AssetsOptions) -> PathBuf {
        options.assets_dir.join(self.file_name)
    }

    pub fn url(&self, options: &AssetsOptions) -> String {
        format!(
            "{}/{}",
            options.url_prefix.trim_end_matches('/'),
            self.file_name
        )
    }

    /// Checks that the file is present and returns a handle that renders it.
    ///
    /// Called on every render that shows the asset, so a file removed while the server runs surfaces on the next request.
    pub fn load(&self, options: &AssetsOptions) -> Result<LoadedAsset, AssetError> {
        let path = self.path(options);
        let metadata = fs::metadata(&path).map_err(|source| AssetError::Missing {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(AssetError::NotAFile { path });
        }

        debug!(target: "assets", "loaded {} ({} bytes)", path.display(), metadata.len());

        Ok(LoadedAsset {
            asset: *self,
            url: self.url(options),
            size: metadata.len(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub asset: StaticAsset,
    pub url: String,
    pub size: u64,
}

impl Render for LoadedAsset {
    fn render(&self) -> Markup {
        html! {
            figure {
                @match self.asset.kind {
                    AssetKind::Image => {
                        img src=(self.url) alt=(self.asset.caption) loading="lazy";
                    }
                    AssetKind::Video { mime } => {
                        video controls preload="metadata" {
                            source src=(self.url) type=(mime);
                        }
                    }
                }
                figcaption { (self.asset.caption) }
            }
        }
    }
}
