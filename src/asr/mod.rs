pub mod interface;
pub mod google;
pub mod factory;

pub use interface::{SpeechClientFactory, SpeechError};
pub use factory::GoogleSpeechFactory;
