// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for an edit session:
//! - [`Asset`] / [`AssetId`]: the asset under edit
//! - [`EditAction`]: a server-defined edit operation
//! - [`AssetEdits`]: the edit list currently stored for an asset
//! - [`EditToolType`]: which editing tool a panel shows
//! - [`RotationAngle`]: rotation in 90° steps

pub mod action;
pub mod asset;
pub mod newtypes;
pub mod tool;

pub use action::{
    CropParameters, EditAction, FilterParameters, MirrorAxis, MirrorParameters,
    RotateParameters,
};
pub use asset::{Asset, AssetEdits};
pub use newtypes::{AssetId, RotationAngle};
pub use tool::EditToolType;
