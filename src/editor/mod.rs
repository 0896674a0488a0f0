// SPDX-License-Identifier: MPL-2.0
//! Edit session coordination.
//!
//! - [`manager`] - [`EditManager`], the coordinator the editor panel talks to
//! - [`tools`] - The transform and filter tool managers it drives
//!
//! # Example
//!
//! ```ignore
//! let transform = Arc::new(TransformManager::new());
//! let filter = Arc::new(FilterManager::new());
//! let editor = EditManager::new(transform.clone(), filter.clone(), ports).with_config(&config);
//!
//! editor.init(asset, stored_edits).await?;
//! transform.rotate_clockwise()?;
//! if editor.apply_edits().await {
//!     editor.cleanup().await?;
//! }
//! ```

pub mod manager;
pub mod tools;

pub use manager::{
    EditManager, EditTool, EditorSnapshot, Ports, APPLY_FAILURE_KEY, APPLY_SUCCESS_KEY,
};
pub use tools::{FilterManager, TransformManager};
