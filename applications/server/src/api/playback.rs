/// Playback API routes
///
/// Transport commands come from the UI; the adapter routes (`progress`,
/// `duration`, `ended`, `error`) come from the client-side media player.
/// Every route answers with the resulting snapshot.
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use encore_core::ItemId;
use encore_playback::{AdapterEvent, PlaybackSnapshot};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SelectCommand {
    pub item_id: ItemId,
    /// Candidate queue (catalog ids, in order)
    #[serde(default)]
    pub queue: Option<Vec<ItemId>>,
}

#[derive(Debug, Deserialize)]
pub struct SecondsCommand {
    pub seconds: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorReport {
    #[serde(default)]
    pub message: Option<String>,
}

/// GET /api/playback - Current now-playing snapshot
pub async fn get_playback(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    Json(app_state.host.snapshot())
}

/// POST /api/playback/select - Play an item, optionally from a new queue
pub async fn select(
    State(app_state): State<AppState>,
    Json(command): Json<SelectCommand>,
) -> Result<Json<PlaybackSnapshot>> {
    let item = app_state.catalog.require(&command.item_id)?.clone();
    let queue = match command.queue {
        Some(ids) => Some(app_state.catalog.resolve(&ids)?),
        None => None,
    };

    tracing::debug!(
        "Select {} (new queue: {})",
        item.id,
        queue.as_ref().map_or(0, Vec::len)
    );
    app_state.host.select_and_play(item, queue).await;

    Ok(Json(app_state.host.snapshot()))
}

/// POST /api/playback/toggle - Flip play/pause
pub async fn toggle(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    app_state.host.toggle_play().await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/next - Advance (wrapping or shuffled)
pub async fn next(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    app_state.host.advance().await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/previous - Restart or step back
pub async fn previous(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    app_state.host.retreat().await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/shuffle - Flip shuffle mode
pub async fn shuffle(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    app_state.host.toggle_shuffle().await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/seek - Publish a seek pulse
pub async fn seek(
    State(app_state): State<AppState>,
    Json(command): Json<SecondsCommand>,
) -> Json<PlaybackSnapshot> {
    app_state.host.seek(command.seconds).await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/progress - Adapter position report
pub async fn progress(
    State(app_state): State<AppState>,
    Json(command): Json<SecondsCommand>,
) -> Json<PlaybackSnapshot> {
    app_state
        .host
        .handle_adapter_event(AdapterEvent::Progress {
            seconds: command.seconds,
        })
        .await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/duration - Adapter duration report
pub async fn duration(
    State(app_state): State<AppState>,
    Json(command): Json<SecondsCommand>,
) -> Json<PlaybackSnapshot> {
    app_state
        .host
        .handle_adapter_event(AdapterEvent::Duration {
            seconds: command.seconds,
        })
        .await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/ended - Adapter finished the current item
pub async fn ended(State(app_state): State<AppState>) -> Json<PlaybackSnapshot> {
    app_state
        .host
        .handle_adapter_event(AdapterEvent::Ended)
        .await;
    Json(app_state.host.snapshot())
}

/// POST /api/playback/error - Adapter could not play the current item
///
/// The skip happens after the configured delay, not before this returns.
pub async fn error(
    State(app_state): State<AppState>,
    report: Option<Json<ErrorReport>>,
) -> Json<PlaybackSnapshot> {
    let message = report
        .and_then(|Json(report)| report.message)
        .unwrap_or_else(|| "unspecified adapter error".to_string());

    app_state
        .host
        .handle_adapter_event(AdapterEvent::Error { message })
        .await;
    Json(app_state.host.snapshot())
}
