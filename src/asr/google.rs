use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::interface::{
    RecognitionAudio, RecognitionConfig, RecognizeRequest, RecognizeResponse, SpeechError,
    SpeechRecognizer,
};

#[derive(Debug, Clone)]
pub enum Credential {
    ApiKey(String),
    AccessToken(String),
}

/// Client for the Google Cloud Speech-to-Text v1 REST API
pub struct GoogleSpeechClient {
    client: Client,
    endpoint: String,
    credential: Credential,
    config: RecognitionConfig,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GoogleSpeechClient {
    pub fn new(
        client: Client,
        endpoint: String,
        credential: Credential,
        config: RecognitionConfig,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credential,
            config,
        }
    }

    fn recognize_url(&self) -> String {
        format!("{}/v1/speech:recognize", self.endpoint)
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(&self, audio: &[u8]) -> Result<RecognizeResponse, SpeechError> {
        let request = RecognizeRequest {
            config: self.config.clone(),
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio),
            },
        };

        debug!(
            "Sending recognize request: {} bytes, encoding={}, sample_rate={}, language={}",
            audio.len(),
            self.config.encoding,
            self.config.sample_rate_hertz,
            self.config.language_code
        );

        let builder = self.client.post(self.recognize_url()).json(&request);
        let builder = match &self.credential {
            Credential::ApiKey(key) => builder.query(&[("key", key)]),
            Credential::AccessToken(token) => builder.bearer_auth(token),
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body from speech service: {}", e);
                    String::new()
                }
            };
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: RecognizeResponse = response.json().await?;
        debug!("Recognize returned {} result(s)", result.results.len());
        Ok(result)
    }
}
