use axum::{body::Body, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RecognizeMoveError;
use crate::state::AppState;

pub const GREETING: &str = "Hello from Say Chess!";

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

pub async fn home() -> &'static str {
    GREETING
}

/// POST /recognize-move
/// Transcribe a raw LINEAR16 audio body with the speech service
pub async fn recognize_move(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<TranscriptionResponse>, RecognizeMoveError> {
    let audio = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(RecognizeMoveError::BodyRead)?;

    debug!("Received {} bytes of audio", audio.len());

    // Dropped at the end of this request, whatever the outcome
    let client = state
        .speech_factory
        .connect()
        .await
        .map_err(RecognizeMoveError::ClientCreation)?;

    let response = client
        .recognize(&audio)
        .await
        .map_err(RecognizeMoveError::Recognition)?;

    let transcription = response
        .top_transcript()
        .ok_or(RecognizeMoveError::EmptyResult)?
        .to_string();

    info!("Transcribed move: {}", transcription);

    Ok(Json(TranscriptionResponse { transcription }))
}
