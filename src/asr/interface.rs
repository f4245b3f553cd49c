use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audio encoding and recognition settings sent with every recognize call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub audio_channel_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speech_contexts: Vec<SpeechContext>,
}

/// Phrase hints biasing recognition toward expected words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechContext {
    pub phrases: Vec<String>,
    pub boost: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionAudio {
    /// Base64 encoded audio bytes
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RecognizeResponse {
    /// Transcript of the first alternative of the first result
    pub fn top_transcript(&self) -> Option<&str> {
        self.results
            .first()?
            .alternatives
            .first()
            .map(|alt| alt.transcript.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no credentials configured for the speech service")]
    MissingCredentials,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to speech service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech service returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Speech recognizer interface - one instance per request
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Run a synchronous recognize call over the whole audio payload
    async fn recognize(&self, audio: &[u8]) -> Result<RecognizeResponse, SpeechError>;
}

/// Produces a fresh recognizer for each request
#[async_trait]
pub trait SpeechClientFactory: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn SpeechRecognizer>, SpeechError>;
}
