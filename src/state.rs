use std::sync::Arc;

use crate::asr::{GoogleSpeechFactory, SpeechClientFactory};
use crate::config::Config;

/// Read-only state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub speech_factory: Arc<dyn SpeechClientFactory>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_factory(Arc::new(GoogleSpeechFactory::new(
            config.speech_config.clone(),
        )))
    }

    pub fn with_factory(speech_factory: Arc<dyn SpeechClientFactory>) -> Self {
        Self { speech_factory }
    }
}
