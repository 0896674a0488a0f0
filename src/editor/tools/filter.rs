// SPDX-License-Identifier: MPL-2.0
//! Filter tool: one colour preset per asset.

use super::lock;
use crate::application::port::{ToolError, ToolManager};
use crate::domain::editing::{Asset, EditAction, FilterParameters};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::Mutex;

/// Preset that leaves colours untouched.
pub const NO_FILTER: &str = "none";

/// Presets the server knows how to render.
pub const FILTER_PRESETS: &[&str] = &[NO_FILTER, "vivid", "warm", "cool", "mono", "sepia", "fade"];

fn preset(name: &str) -> Option<&'static str> {
    FILTER_PRESETS.iter().copied().find(|preset| *preset == name)
}

#[derive(Debug)]
struct Session {
    active: bool,
    /// Name stored on the server; may be outside [`FILTER_PRESETS`].
    baseline: String,
    current: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            active: false,
            baseline: NO_FILTER.to_string(),
            current: NO_FILTER.to_string(),
        }
    }
}

/// Edit buffer for the filter tool.
///
/// A stored filter this build does not know is kept verbatim and re-emitted
/// until the user picks a preset, so resubmitting other edits never drops it.
#[derive(Debug, Default)]
pub struct FilterManager {
    session: Mutex<Session>,
}

impl FilterManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected filter name, or `None` outside a session.
    #[must_use]
    pub fn selected(&self) -> Option<String> {
        let session = lock(&self.session);
        session.active.then(|| session.current.clone())
    }

    /// Selects a preset by name.
    pub fn select(&self, name: &str) -> Result<(), ToolError> {
        let mut session = lock(&self.session);
        if !session.active {
            return Err(ToolError::NotActive);
        }
        let preset = preset(name).ok_or_else(|| ToolError::UnknownFilter(name.to_string()))?;
        session.current = preset.to_string();
        Ok(())
    }
}

impl ToolManager for FilterManager {
    fn on_activate<'a>(
        &'a self,
        asset: &'a Asset,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, Result<(), ToolError>> {
        let stored = edits
            .iter()
            .filter_map(|action| match action {
                EditAction::Filter(FilterParameters { name }) => Some(name.as_str()),
                _ => None,
            })
            .last()
            .unwrap_or(NO_FILTER);
        if preset(stored).is_none() {
            log::warn!("asset {} has unknown filter preset {stored:?}, keeping it", asset.id);
        }

        *lock(&self.session) = Session {
            active: true,
            baseline: stored.to_string(),
            current: stored.to_string(),
        };
        future::ready(Ok(())).boxed()
    }

    fn on_deactivate(&self) -> BoxFuture<'_, Result<(), ToolError>> {
        *lock(&self.session) = Session::default();
        future::ready(Ok(())).boxed()
    }

    fn reset_all_changes(&self) -> BoxFuture<'_, Result<(), ToolError>> {
        let mut session = lock(&self.session);
        if session.active {
            session.current = NO_FILTER.to_string();
        }
        future::ready(Ok(())).boxed()
    }

    fn has_changes(&self) -> bool {
        let session = lock(&self.session);
        session.current != session.baseline
    }

    fn edits(&self) -> Vec<EditAction> {
        let session = lock(&self.session);
        if !session.active || session.current == NO_FILTER {
            return Vec::new();
        }
        vec![EditAction::Filter(FilterParameters {
            name: session.current.clone(),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editing::RotateParameters;

    fn filter(name: &str) -> EditAction {
        EditAction::Filter(FilterParameters { name: name.into() })
    }

    #[tokio::test]
    async fn activation_picks_last_stored_filter() {
        let manager = FilterManager::new();
        let edits = vec![
            filter("warm"),
            EditAction::Rotate(RotateParameters { angle: 90 }),
            filter("sepia"),
        ];
        manager.on_activate(&Asset::new("A1", 10, 10), &edits).await.unwrap();

        assert_eq!(manager.selected().as_deref(), Some("sepia"));
        assert_eq!(manager.edits(), vec![filter("sepia")]);
        assert!(!manager.has_changes());
    }

    #[tokio::test]
    async fn unknown_stored_filter_is_kept_for_resubmission() {
        let manager = FilterManager::new();
        let stored = vec![EditAction::Rotate(RotateParameters { angle: 90 }), filter("lomo")];
        manager
            .on_activate(&Asset::new("A1", 10, 10), &stored)
            .await
            .unwrap();

        assert_eq!(manager.selected().as_deref(), Some("lomo"));
        assert!(!manager.has_changes());
        assert_eq!(manager.edits(), vec![filter("lomo")]);

        manager.select("warm").unwrap();
        assert!(manager.has_changes());
        assert_eq!(manager.edits(), vec![filter("warm")]);
    }

    #[tokio::test]
    async fn select_tracks_changes() {
        let manager = FilterManager::new();
        manager.on_activate(&Asset::new("A1", 10, 10), &[]).await.unwrap();

        manager.select("mono").unwrap();
        assert!(manager.has_changes());
        assert_eq!(manager.edits(), vec![filter("mono")]);

        manager.select(NO_FILTER).unwrap();
        assert!(!manager.has_changes());
        assert!(manager.edits().is_empty());
    }

    #[tokio::test]
    async fn select_rejects_unknown_preset() {
        let manager = FilterManager::new();
        manager.on_activate(&Asset::new("A1", 10, 10), &[]).await.unwrap();

        assert_eq!(
            manager.select("lomo"),
            Err(ToolError::UnknownFilter("lomo".into()))
        );
        assert_eq!(manager.selected().as_deref(), Some(NO_FILTER));
    }

    #[tokio::test]
    async fn tool_is_inert_outside_a_session() {
        let manager = FilterManager::new();
        assert_eq!(manager.select("mono"), Err(ToolError::NotActive));
        assert_eq!(manager.selected(), None);
        assert!(manager.reset_all_changes().await.is_ok());
        assert!(manager.edits().is_empty());
    }

    #[tokio::test]
    async fn reset_removes_stored_filter() {
        let manager = FilterManager::new();
        manager
            .on_activate(&Asset::new("A1", 10, 10), &[filter("fade")])
            .await
            .unwrap();

        manager.reset_all_changes().await.unwrap();
        assert!(manager.edits().is_empty());
        assert!(manager.has_changes());

        manager.on_deactivate().await.unwrap();
        assert!(!manager.has_changes());
    }
}
