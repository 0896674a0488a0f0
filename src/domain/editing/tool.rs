// SPDX-License-Identifier: MPL-2.0
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editing mode shown in the editor panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditToolType {
    Transform,
    Filter,
}

impl EditToolType {
    /// All tool types, in the order the editor declares them.
    pub const ALL: [EditToolType; 2] = [EditToolType::Transform, EditToolType::Filter];

    /// Icon name rendered on the tool's tab.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            EditToolType::Transform => "crop-rotate",
            EditToolType::Filter => "palette",
        }
    }

    /// Identifier of the view component that renders the tool's panel.
    #[must_use]
    pub fn component(self) -> &'static str {
        match self {
            EditToolType::Transform => "transform-panel",
            EditToolType::Filter => "filter-panel",
        }
    }

    /// i18n key of the tool's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            EditToolType::Transform => "edit-tool-transform",
            EditToolType::Filter => "edit-tool-filter",
        }
    }
}

impl fmt::Display for EditToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditToolType::Transform => write!(f, "transform"),
            EditToolType::Filter => write!(f, "filter"),
        }
    }
}
