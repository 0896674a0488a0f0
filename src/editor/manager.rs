// SPDX-License-Identifier: MPL-2.0
//! The edit coordinator.
//!
//! [`EditManager`] owns an edit session for one asset: it tracks the
//! selected tool, aggregates the tools' pending edits, guards the discard
//! confirmation dialog and submits the combined edit list to the server.
//!
//! # Submission
//!
//! Applying edits is asynchronous on the server. The manager arms a wait
//! for the "asset edit ready" event *before* sending the request, so a
//! fast server cannot complete before anyone listens, then sends exactly
//! one request (apply, or remove-all when the combined list is empty) and
//! waits for the event with a deadline. Every failure along that path
//! collapses into a single "failed to apply" outcome.

use crate::application::port::{
    ConfirmDialog, ConfirmRequest, EditTransport, EventKind, Notifier, ServerEvent, ServerEvents,
    ToolManager,
};
use crate::config::{clamp_edit_ready_timeout, defaults::DEFAULT_EDIT_READY_TIMEOUT, Config};
use crate::domain::editing::{Asset, AssetEdits, EditAction, EditToolType};
use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// i18n key of the toast shown after edits were applied.
pub const APPLY_SUCCESS_KEY: &str = "edit-apply-success";

/// i18n key of the toast shown when applying edits failed.
pub const APPLY_FAILURE_KEY: &str = "edit-apply-failure";

// =============================================================================
// EditTool
// =============================================================================

/// One editing tool as declared by the editor.
#[derive(Clone)]
pub struct EditTool {
    tool_type: EditToolType,
    component: &'static str,
    manager: Arc<dyn ToolManager>,
}

impl EditTool {
    #[must_use]
    pub fn tool_type(&self) -> EditToolType {
        self.tool_type
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.tool_type.icon()
    }

    /// View component the UI mounts while this tool is selected.
    #[must_use]
    pub fn component(&self) -> &'static str {
        self.component
    }

    #[must_use]
    pub fn manager(&self) -> &Arc<dyn ToolManager> {
        &self.manager
    }
}

impl std::fmt::Debug for EditTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditTool")
            .field("tool_type", &self.tool_type)
            .field("component", &self.component)
            .field("has_changes", &self.manager.has_changes())
            .finish()
    }
}

// =============================================================================
// Ports
// =============================================================================

/// External collaborators of the edit manager.
#[derive(Clone)]
pub struct Ports {
    pub transport: Arc<dyn EditTransport>,
    pub events: Arc<dyn ServerEvents>,
    pub dialog: Arc<dyn ConfirmDialog>,
    pub notifier: Arc<dyn Notifier>,
}

// =============================================================================
// Session state
// =============================================================================

#[derive(Debug, Default)]
struct SessionState {
    current_asset: Option<Asset>,
    /// Index into the declared tool list.
    selected_tool: Option<usize>,
    is_showing_confirm_dialog: bool,
    is_applying_edits: bool,
    has_applied_edits: bool,
}

/// Read-only view of the manager's state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub current_asset: Option<Asset>,
    pub selected_tool: Option<EditToolType>,
    pub has_changes: bool,
    pub is_showing_confirm_dialog: bool,
    pub is_applying_edits: bool,
    pub has_applied_edits: bool,
}

#[derive(Debug, Clone, Copy)]
enum Flag {
    ConfirmDialog,
    ApplyingEdits,
}

impl Flag {
    fn slot(self, state: &mut SessionState) -> &mut bool {
        match self {
            Flag::ConfirmDialog => &mut state.is_showing_confirm_dialog,
            Flag::ApplyingEdits => &mut state.is_applying_edits,
        }
    }
}

/// Clears a busy flag when dropped, including when the owning future is cancelled.
struct FlagGuard<'a> {
    state: &'a Mutex<SessionState>,
    flag: Flag,
}

impl<'a> FlagGuard<'a> {
    /// Raises `flag` unless it is already raised.
    fn try_raise(state: &'a Mutex<SessionState>, flag: Flag) -> Option<Self> {
        let mut locked = lock(state);
        let slot = flag.slot(&mut locked);
        if *slot {
            return None;
        }
        *slot = true;
        Some(FlagGuard { state, flag })
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        *self.flag.slot(&mut lock(self.state)) = false;
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// EditManager
// =============================================================================

/// Coordinates the transform and filter tools for one edit session at a time.
pub struct EditManager {
    tools: Vec<EditTool>,
    ports: Ports,
    edit_ready_timeout: Duration,
    state: Mutex<SessionState>,
}

impl EditManager {
    /// Creates a manager with the declared tools `[Transform, Filter]`.
    #[must_use]
    pub fn new(
        transform: Arc<dyn ToolManager>,
        filter: Arc<dyn ToolManager>,
        ports: Ports,
    ) -> Self {
        let tools = [(EditToolType::Transform, transform), (EditToolType::Filter, filter)]
            .into_iter()
            .map(|(tool_type, manager)| EditTool {
                tool_type,
                component: tool_type.component(),
                manager,
            })
            .collect();
        Self {
            tools,
            ports,
            edit_ready_timeout: DEFAULT_EDIT_READY_TIMEOUT,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Takes the completion-event timeout from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.edit_ready_timeout = config.edit_ready_timeout();
        self
    }

    /// Overrides the completion-event timeout, clamped like the config value.
    #[must_use]
    pub fn with_edit_ready_timeout(mut self, timeout: Duration) -> Self {
        self.edit_ready_timeout = clamp_edit_ready_timeout(timeout);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The declared tools, in order.
    #[must_use]
    pub fn tools(&self) -> &[EditTool] {
        &self.tools
    }

    #[must_use]
    pub fn current_asset(&self) -> Option<Asset> {
        self.lock().current_asset.clone()
    }

    #[must_use]
    pub fn selected_tool(&self) -> Option<&EditTool> {
        let index = self.lock().selected_tool?;
        self.tools.get(index)
    }

    /// `true` when any tool holds unsaved changes.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.tools.iter().any(|tool| tool.manager.has_changes())
    }

    #[must_use]
    pub fn is_showing_confirm_dialog(&self) -> bool {
        self.lock().is_showing_confirm_dialog
    }

    #[must_use]
    pub fn is_applying_edits(&self) -> bool {
        self.lock().is_applying_edits
    }

    #[must_use]
    pub fn has_applied_edits(&self) -> bool {
        self.lock().has_applied_edits
    }

    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        let has_changes = self.has_changes();
        let state = self.lock();
        EditorSnapshot {
            current_asset: state.current_asset.clone(),
            selected_tool: state
                .selected_tool
                .and_then(|index| self.tools.get(index))
                .map(EditTool::tool_type),
            has_changes,
            is_showing_confirm_dialog: state.is_showing_confirm_dialog,
            is_applying_edits: state.is_applying_edits,
            has_applied_edits: state.has_applied_edits,
        }
    }

    // -------------------------------------------------------------------------
    // Session lifecycle
    // -------------------------------------------------------------------------

    /// Starts an edit session for `asset`, seeding every tool from `edits`.
    ///
    /// Tools are activated one at a time in declared order. A failing tool
    /// aborts the loop; tools activated before it stay active.
    pub async fn init(&self, asset: Asset, edits: AssetEdits) -> Result<()> {
        log::info!(
            "starting edit session for asset {} with {} stored edits",
            asset.id,
            edits.edits.len()
        );
        {
            let mut state = self.lock();
            state.current_asset = Some(asset.clone());
            state.has_applied_edits = false;
        }
        for tool in &self.tools {
            tool.manager.on_activate(&asset, &edits.edits).await?;
        }
        self.lock().selected_tool = Some(0);
        Ok(())
    }

    /// Deactivates every tool and ends the session.
    ///
    /// Safe to call without a prior [`init`](Self::init).
    pub async fn cleanup(&self) -> Result<()> {
        self.deactivate_tools().await?;
        let mut state = self.lock();
        if let Some(asset) = state.current_asset.take() {
            log::info!("ended edit session for asset {}", asset.id);
        }
        state.selected_tool = None;
        Ok(())
    }

    /// Deactivates every tool and reselects the first one, keeping the asset.
    pub async fn reset(&self) -> Result<()> {
        self.deactivate_tools().await?;
        self.lock().selected_tool = Some(0);
        Ok(())
    }

    async fn deactivate_tools(&self) -> Result<()> {
        for tool in &self.tools {
            tool.manager.on_deactivate().await?;
        }
        Ok(())
    }

    /// Selects the tool of type `tool_type`; unknown types are ignored.
    pub fn activate_tool(&self, tool_type: EditToolType) {
        if let Some(index) = self.tools.iter().position(|t| t.tool_type == tool_type) {
            log::debug!("selected {tool_type} tool");
            self.lock().selected_tool = Some(index);
        }
    }

    /// Returns every tool to its unedited state, in declared order.
    pub async fn reset_all_changes(&self) -> Result<()> {
        for tool in &self.tools {
            tool.manager.reset_all_changes().await?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Discard confirmation
    // -------------------------------------------------------------------------

    /// Asks whether the editor may close.
    ///
    /// Returns `false` without asking while a confirmation dialog is already
    /// open, `true` without asking when there is nothing to lose, and the
    /// user's answer otherwise.
    pub async fn close_confirm(&self) -> bool {
        let has_changes = self.has_changes();
        let guard = {
            let state = self.lock();
            if state.is_showing_confirm_dialog {
                return false;
            }
            if !has_changes || state.has_applied_edits {
                return true;
            }
            drop(state);
            match FlagGuard::try_raise(&self.state, Flag::ConfirmDialog) {
                Some(guard) => guard,
                None => return false,
            }
        };

        let confirmed = self
            .ports
            .dialog
            .confirm(ConfirmRequest::discard_edits())
            .await;
        drop(guard);
        log::debug!("discard confirmation answered: {confirmed}");
        confirmed
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submits the combined edits of all tools and waits until the server
    /// reports them applied.
    ///
    /// Returns `true` on success. A call made while another submission is in
    /// flight returns `false` immediately without contacting the server.
    pub async fn apply_edits(&self) -> bool {
        let Some(_applying) = FlagGuard::try_raise(&self.state, Flag::ApplyingEdits) else {
            log::warn!("ignoring apply request: a submission is already in flight");
            return false;
        };

        let edits: Vec<EditAction> = self
            .tools
            .iter()
            .flat_map(|tool| tool.manager.edits())
            .collect();

        match self.submit(&edits).await {
            Ok(()) => {
                self.ports.notifier.success(APPLY_SUCCESS_KEY);
                self.lock().has_applied_edits = true;
                true
            }
            Err(err) => {
                log::warn!("failed to apply edits: {err}");
                self.ports.notifier.failure(APPLY_FAILURE_KEY);
                false
            }
        }
    }

    async fn submit(&self, edits: &[EditAction]) -> Result<()> {
        let asset_id = self
            .lock()
            .current_asset
            .as_ref()
            .map(|asset| asset.id.clone())
            .ok_or(Error::NoActiveSession)?;

        let expected = asset_id.clone();
        let edit_completed = self.ports.events.wait_for(
            EventKind::AssetEditReady,
            Box::new(move |event: &ServerEvent| *event.asset_id() == expected),
            self.edit_ready_timeout,
        );

        if edits.is_empty() {
            log::info!("removing all edits from asset {asset_id}");
            self.ports.transport.remove_edits(&asset_id).await?;
        } else {
            log::info!("applying {} edits to asset {asset_id}", edits.len());
            self.ports.transport.apply_edits(&asset_id, edits).await?;
        }

        edit_completed.await?;
        log::info!("server finished applying edits to asset {asset_id}");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        lock(&self.state)
    }
}

impl std::fmt::Debug for EditManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditManager")
            .field("tools", &self.tools)
            .field("edit_ready_timeout", &self.edit_ready_timeout)
            .field("state", &*self.lock())
            .finish()
    }
}
