// SPDX-License-Identifier: MPL-2.0
//! The asset under edit and its stored edit list.

use super::{AssetId, EditAction};
use serde::{Deserialize, Serialize};

/// Snapshot of the asset an edit session works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    #[serde(default)]
    pub original_file_name: String,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
}

impl Asset {
    #[must_use]
    pub fn new(id: impl Into<AssetId>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            original_file_name: String::new(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.original_file_name = name.into();
        self
    }
}

/// Edits the server currently stores for an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEdits {
    pub asset_id: Option<AssetId>,
    #[serde(default)]
    pub edits: Vec<EditAction>,
}

impl AssetEdits {
    #[must_use]
    pub fn new(asset_id: AssetId, edits: Vec<EditAction>) -> Self {
        Self {
            asset_id: Some(asset_id),
            edits,
        }
    }

    /// An empty edit list, as returned for never-edited assets.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}
