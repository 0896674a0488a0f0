// SPDX-License-Identifier: MPL-2.0
//! Server-defined edit operations.
//!
//! An [`EditAction`] serializes adjacently tagged, the shape the server's
//! edit endpoint accepts:
//!
//! ```json
//! { "action": "crop", "parameters": { "x": 0, "y": 0, "width": 800, "height": 600 } }
//! ```
//!
//! The edit coordinator treats actions as opaque and only concatenates
//! lists of them; tool managers are the only code that looks inside.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "parameters", rename_all = "camelCase")]
pub enum EditAction {
    Crop(CropParameters),
    Rotate(RotateParameters),
    Mirror(MirrorParameters),
    Filter(FilterParameters),
}

impl EditAction {
    /// Returns the wire name of this action kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            EditAction::Crop(_) => "crop",
            EditAction::Rotate(_) => "rotate",
            EditAction::Mirror(_) => "mirror",
            EditAction::Filter(_) => "filter",
        }
    }
}

/// Crop rectangle in original image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParameters {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateParameters {
    /// Clockwise rotation in degrees.
    pub angle: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorParameters {
    pub axis: MirrorAxis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParameters {
    pub name: String,
}
