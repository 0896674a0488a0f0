// SPDX-License-Identifier: MPL-2.0
//! Transform tool: crop, rotation and mirroring.

use super::lock;
use crate::application::port::{ToolError, ToolManager};
use crate::domain::editing::{
    Asset, CropParameters, EditAction, MirrorAxis, MirrorParameters, RotateParameters,
    RotationAngle,
};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::Mutex;

/// Geometric edits of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformState {
    /// `None` means the full image.
    pub crop: Option<CropParameters>,
    pub rotation: RotationAngle,
    pub mirror_horizontal: bool,
    pub mirror_vertical: bool,
}

impl TransformState {
    /// Folds the transform actions of `edits` in order, ignoring other kinds.
    #[must_use]
    pub fn from_edits(edits: &[EditAction]) -> Self {
        edits.iter().fold(Self::default(), |mut state, action| {
            match action {
                EditAction::Crop(crop) => state.crop = Some(*crop),
                EditAction::Rotate(rotate) => {
                    // Stored angles are arbitrary; reduce before adding.
                    state.rotation = RotationAngle::from_degrees(
                        i32::from(state.rotation.degrees()) + rotate.angle.rem_euclid(360),
                    );
                }
                EditAction::Mirror(mirror) => match mirror.axis {
                    MirrorAxis::Horizontal => state.mirror_horizontal = !state.mirror_horizontal,
                    MirrorAxis::Vertical => state.mirror_vertical = !state.mirror_vertical,
                },
                EditAction::Filter(_) => {}
            }
            state
        })
    }

    /// Emits crop, rotate, then mirror actions; identity parts are left out.
    #[must_use]
    pub fn to_edits(&self) -> Vec<EditAction> {
        let mut edits = Vec::new();
        if let Some(crop) = self.crop {
            edits.push(EditAction::Crop(crop));
        }
        if self.rotation.is_rotated() {
            edits.push(EditAction::Rotate(RotateParameters {
                angle: i32::from(self.rotation.degrees()),
            }));
        }
        if self.mirror_horizontal {
            edits.push(EditAction::Mirror(MirrorParameters {
                axis: MirrorAxis::Horizontal,
            }));
        }
        if self.mirror_vertical {
            edits.push(EditAction::Mirror(MirrorParameters {
                axis: MirrorAxis::Vertical,
            }));
        }
        edits
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default)]
struct Session {
    /// Original (width, height) of the asset; `None` outside a session.
    bounds: Option<(u32, u32)>,
    baseline: TransformState,
    current: TransformState,
}

/// Edit buffer for the transform tool.
#[derive(Debug, Default)]
pub struct TransformManager {
    session: Mutex<Session>,
}

impl TransformManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current transform, or `None` outside a session.
    #[must_use]
    pub fn state(&self) -> Option<TransformState> {
        let session = lock(&self.session);
        session.bounds.map(|_| session.current)
    }

    /// Sets the crop rectangle, clamped to the asset bounds.
    ///
    /// A rectangle covering the whole asset clears the crop.
    pub fn set_crop(&self, crop: CropParameters) -> Result<(), ToolError> {
        self.with_session(|session, (width, height)| {
            let x = crop.x.min(width);
            let y = crop.y.min(height);
            let clamped = CropParameters {
                x,
                y,
                width: crop.width.min(width - x),
                height: crop.height.min(height - y),
            };
            if clamped.width == 0 || clamped.height == 0 {
                return Err(ToolError::EmptyCrop);
            }
            let full = clamped.x == 0
                && clamped.y == 0
                && clamped.width == width
                && clamped.height == height;
            session.current.crop = if full { None } else { Some(clamped) };
            Ok(())
        })
    }

    pub fn clear_crop(&self) -> Result<(), ToolError> {
        self.with_session(|session, _| {
            session.current.crop = None;
            Ok(())
        })
    }

    pub fn rotate_clockwise(&self) -> Result<(), ToolError> {
        self.with_session(|session, _| {
            session.current.rotation = session.current.rotation.rotate_clockwise();
            Ok(())
        })
    }

    pub fn rotate_counterclockwise(&self) -> Result<(), ToolError> {
        self.with_session(|session, _| {
            session.current.rotation = session.current.rotation.rotate_counterclockwise();
            Ok(())
        })
    }

    pub fn toggle_mirror(&self, axis: MirrorAxis) -> Result<(), ToolError> {
        self.with_session(|session, _| {
            let flag = match axis {
                MirrorAxis::Horizontal => &mut session.current.mirror_horizontal,
                MirrorAxis::Vertical => &mut session.current.mirror_vertical,
            };
            *flag = !*flag;
            Ok(())
        })
    }

    fn with_session<R>(
        &self,
        f: impl FnOnce(&mut Session, (u32, u32)) -> Result<R, ToolError>,
    ) -> Result<R, ToolError> {
        let mut session = lock(&self.session);
        let bounds = session.bounds.ok_or(ToolError::NotActive)?;
        f(&mut *session, bounds)
    }
}

impl ToolManager for TransformManager {
    fn on_activate<'a>(
        &'a self,
        asset: &'a Asset,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, Result<(), ToolError>> {
        let state = TransformState::from_edits(edits);
        *lock(&self.session) = Session {
            bounds: Some((asset.width, asset.height)),
            baseline: state,
            current: state,
        };
        future::ready(Ok(())).boxed()
    }

    fn on_deactivate(&self) -> BoxFuture<'_, Result<(), ToolError>> {
        *lock(&self.session) = Session::default();
        future::ready(Ok(())).boxed()
    }

    fn reset_all_changes(&self) -> BoxFuture<'_, Result<(), ToolError>> {
        let mut session = lock(&self.session);
        if session.bounds.is_some() {
            session.current = TransformState::default();
        }
        future::ready(Ok(())).boxed()
    }

    fn has_changes(&self) -> bool {
        let session = lock(&self.session);
        session.current != session.baseline
    }

    fn edits(&self) -> Vec<EditAction> {
        let session = lock(&self.session);
        match session.bounds {
            Some(_) => session.current.to_edits(),
            None => Vec::new(),
        }
    }
}
