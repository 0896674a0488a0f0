// SPDX-License-Identifier: MPL-2.0
use edit_session::application::port::{EditTransport, ServerEvent, TransportError};
use edit_session::config::{self, Config};
use edit_session::domain::editing::{
    Asset, AssetEdits, AssetId, CropParameters, EditAction, EditToolType, FilterParameters,
    MirrorAxis, RotateParameters,
};
use edit_session::editor::{FilterManager, TransformManager};
use edit_session::i18n::fluent::I18n;
use edit_session::infrastructure::EventBus;
use edit_session::ui::confirm::ConfirmChannel;
use edit_session::ui::notifications::Manager as Toasts;
use edit_session::{EditManager, Ports};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Accepts every request and announces completion on the bus, like a fast server.
struct InstantServer {
    bus: EventBus,
    received: Mutex<Vec<(AssetId, Vec<EditAction>)>>,
}

impl InstantServer {
    fn finish(&self, asset_id: &AssetId, edits: Vec<EditAction>) {
        self.received.lock().unwrap().push((asset_id.clone(), edits));
        self.bus
            .publish(ServerEvent::asset_edit_ready(asset_id.clone()));
    }
}

impl EditTransport for InstantServer {
    fn apply_edits<'a>(
        &'a self,
        asset_id: &'a AssetId,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, Result<(), TransportError>> {
        self.finish(asset_id, edits.to_vec());
        async { Ok(()) }.boxed()
    }

    fn remove_edits<'a>(
        &'a self,
        asset_id: &'a AssetId,
    ) -> BoxFuture<'a, Result<(), TransportError>> {
        self.finish(asset_id, Vec::new());
        async { Ok(()) }.boxed()
    }
}

struct Editor {
    editor: EditManager,
    transform: Arc<TransformManager>,
    filter: Arc<FilterManager>,
    server: Arc<InstantServer>,
    toasts: Arc<Mutex<Toasts>>,
}

fn editor() -> Editor {
    let bus = EventBus::default();
    let server = Arc::new(InstantServer {
        bus: bus.clone(),
        received: Mutex::new(Vec::new()),
    });
    let transform = Arc::new(TransformManager::new());
    let filter = Arc::new(FilterManager::new());
    let toasts = Arc::new(Mutex::new(Toasts::new()));
    let (dialog, _requests) = ConfirmChannel::new();

    let editor = EditManager::new(
        transform.clone(),
        filter.clone(),
        Ports {
            transport: server.clone(),
            events: Arc::new(bus),
            dialog: Arc::new(dialog),
            notifier: toasts.clone(),
        },
    )
    .with_config(&Config::default());

    Editor {
        editor,
        transform,
        filter,
        server,
        toasts,
    }
}

#[tokio::test]
async fn edit_session_round_trip_submits_tool_edits() {
    let e = editor();
    let asset = Asset::new("A1", 4000, 3000).with_file_name("IMG_0001.jpg");
    let stored = AssetEdits::new(
        asset.id.clone(),
        vec![EditAction::Rotate(RotateParameters { angle: 90 })],
    );

    e.editor.init(asset, stored).await.unwrap();
    assert!(!e.editor.has_changes());

    e.transform
        .set_crop(CropParameters {
            x: 100,
            y: 100,
            width: 2000,
            height: 1500,
        })
        .unwrap();
    e.transform.toggle_mirror(MirrorAxis::Horizontal).unwrap();
    e.editor.activate_tool(EditToolType::Filter);
    e.filter.select("sepia").unwrap();
    assert!(e.editor.has_changes());

    assert!(e.editor.apply_edits().await);

    let received = e.server.received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    let kinds: Vec<_> = received[0].1.iter().map(EditAction::kind).collect();
    assert_eq!(kinds, ["crop", "rotate", "mirror", "filter"]);

    // Applied edits make closing safe without asking.
    assert!(e.editor.close_confirm().await);
    assert_eq!(e.toasts.lock().unwrap().len(), 1);

    e.editor.cleanup().await.unwrap();
    assert!(e.transform.state().is_none());
    assert!(e.filter.selected().is_none());
}

#[tokio::test]
async fn resetting_all_changes_removes_stored_edits() {
    let e = editor();
    let asset = Asset::new("A7", 800, 600);
    let stored = AssetEdits::new(
        asset.id.clone(),
        vec![EditAction::Rotate(RotateParameters { angle: 180 })],
    );
    e.editor.init(asset, stored).await.unwrap();

    e.editor.reset_all_changes().await.unwrap();
    assert!(e.editor.has_changes());
    assert!(e.editor.apply_edits().await);

    let received = e.server.received.lock().unwrap().clone();
    assert_eq!(received, vec![(AssetId::new("A7"), Vec::new())]);
}

#[tokio::test]
async fn unrecognised_stored_filter_survives_transform_only_apply() {
    let e = editor();
    let asset = Asset::new("A3", 800, 600);
    let stored = AssetEdits::new(
        asset.id.clone(),
        vec![
            EditAction::Rotate(RotateParameters { angle: 90 }),
            EditAction::Filter(FilterParameters {
                name: "lomo".into(),
            }),
        ],
    );
    e.editor.init(asset, stored).await.unwrap();

    e.transform.toggle_mirror(MirrorAxis::Vertical).unwrap();
    assert!(e.editor.apply_edits().await);

    let received = e.server.received.lock().unwrap().clone();
    let filters: Vec<_> = received[0]
        .1
        .iter()
        .filter_map(|action| match action {
            EditAction::Filter(FilterParameters { name }) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(filters, ["lomo"]);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("load en-US config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("edit-discard-title"), "Discard Edits?");

    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("load fr config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("edit-apply-success"), "Modifications appliquées avec succès");

    dir.close().expect("Failed to close temporary directory");
}
