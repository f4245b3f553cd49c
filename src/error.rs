use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::asr::SpeechError;

/// Failures of a single `/recognize-move` round-trip
#[derive(Debug, Error)]
pub enum RecognizeMoveError {
    #[error("error reading audio data: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("error creating speech client: {0}")]
    ClientCreation(#[source] SpeechError),

    #[error("error transcribing audio: {0}")]
    Recognition(#[source] SpeechError),

    #[error("no transcription result found")]
    EmptyResult,
}

impl RecognizeMoveError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::ClientCreation(_) | Self::Recognition(_) | Self::EmptyResult => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::BodyRead(_) => "Unable to read audio data",
            Self::ClientCreation(_) => "Failed to create client",
            Self::Recognition(_) => "Failed to transcribe audio",
            Self::EmptyResult => "No transcription result",
        }
    }
}

impl IntoResponse for RecognizeMoveError {
    fn into_response(self) -> Response {
        match &self {
            Self::EmptyResult => warn!("{}", self),
            _ => error!("{}", self),
        }
        (self.status(), self.public_message()).into_response()
    }
}
