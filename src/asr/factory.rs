use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SpeechConfig;
use super::google::{Credential, GoogleSpeechClient};
use super::interface::{
    RecognitionConfig, SpeechClientFactory, SpeechContext, SpeechError, SpeechRecognizer,
};

/// Factory for Google speech clients
///
/// Every call to `connect` resolves credentials and builds a new HTTP client,
/// so no connection state is shared between requests.
pub struct GoogleSpeechFactory {
    speech_config: SpeechConfig,
}

impl GoogleSpeechFactory {
    pub fn new(speech_config: SpeechConfig) -> Self {
        Self { speech_config }
    }

    fn resolve_credential(&self) -> Result<Credential, SpeechError> {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Config values win over the environment; empty strings count as unset
    fn resolve_credential_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Credential, SpeechError> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(key) = non_empty(self.speech_config.api_key.clone()) {
            return Ok(Credential::ApiKey(key));
        }
        if let Some(token) = non_empty(self.speech_config.access_token.clone()) {
            return Ok(Credential::AccessToken(token));
        }
        if let Some(key) = non_empty(env("GOOGLE_API_KEY")) {
            return Ok(Credential::ApiKey(key));
        }
        if let Some(token) = non_empty(env("GOOGLE_ACCESS_TOKEN")) {
            return Ok(Credential::AccessToken(token));
        }
        Err(SpeechError::MissingCredentials)
    }

    /// Build the recognition config from settings
    pub fn recognition_config(&self) -> RecognitionConfig {
        let cfg = &self.speech_config;
        let speech_contexts = if cfg.phrase_hints.is_empty() {
            Vec::new()
        } else {
            vec![SpeechContext {
                phrases: cfg.phrase_hints.clone(),
                boost: cfg.phrase_boost,
            }]
        };

        RecognitionConfig {
            encoding: cfg.encoding.clone(),
            sample_rate_hertz: cfg.sample_rate_hertz,
            language_code: cfg.language_code.clone(),
            audio_channel_count: cfg.audio_channel_count,
            speech_contexts,
        }
    }
}

#[async_trait]
impl SpeechClientFactory for GoogleSpeechFactory {
    async fn connect(&self) -> Result<Box<dyn SpeechRecognizer>, SpeechError> {
        let credential = self.resolve_credential()?;
        let client = Client::builder().build().map_err(SpeechError::Client)?;

        debug!("Created speech client for {}", self.speech_config.endpoint);

        Ok(Box::new(GoogleSpeechClient::new(
            client,
            self.speech_config.endpoint.clone(),
            credential,
            self.recognition_config(),
        )))
    }
}
