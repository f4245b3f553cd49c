use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Settings for the Google Cloud Speech-to-Text recognize call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Falls back to `GOOGLE_API_KEY` when unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Falls back to `GOOGLE_ACCESS_TOKEN` when unset
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_language_code")]
    pub language_code: String,

    #[serde(default = "default_sample_rate_hertz")]
    pub sample_rate_hertz: u32,

    #[serde(default = "default_encoding")]
    pub encoding: String,

    #[serde(default = "default_audio_channel_count")]
    pub audio_channel_count: u32,

    #[serde(default)]
    pub phrase_hints: Vec<String>,

    #[serde(default = "default_phrase_boost")]
    pub phrase_boost: f32,
}

fn default_endpoint() -> String {
    "https://speech.googleapis.com".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_sample_rate_hertz() -> u32 {
    16000
}

fn default_encoding() -> String {
    "LINEAR16".to_string()
}

fn default_audio_channel_count() -> u32 {
    1
}

fn default_phrase_boost() -> f32 {
    20.0
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            access_token: None,
            language_code: default_language_code(),
            sample_rate_hertz: default_sample_rate_hertz(),
            encoding: default_encoding(),
            audio_channel_count: default_audio_channel_count(),
            phrase_hints: Vec::new(),
            phrase_boost: default_phrase_boost(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.system_config.host, self.system_config.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_fixed_recognition_settings() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.speech_config.encoding, "LINEAR16");
        assert_eq!(config.speech_config.sample_rate_hertz, 16000);
        assert_eq!(config.speech_config.language_code, "en-US");
        assert_eq!(config.speech_config.audio_channel_count, 1);
        assert!(config.speech_config.phrase_hints.is_empty());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let yaml = "\
system_config:
  port: 9090
speech_config:
  api_key: secret
  phrase_hints:
    - knight f3
    - castle short
";
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.system_config.port, 9090);
        assert_eq!(config.speech_config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.speech_config.phrase_hints, vec!["knight f3", "castle short"]);
        assert_eq!(config.speech_config.endpoint, "https://speech.googleapis.com");
    }

    #[test]
    fn json_config_is_detected_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"speech_config": {{"language_code": "en-GB"}}}}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.speech_config.language_code, "en-GB");
        assert_eq!(config.system_config.port, 8080);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/nonexistent/conf.yaml").is_err());
    }
}
