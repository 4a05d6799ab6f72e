//! TTS Adapters - 语音合成客户端

mod fake_tts_client;
mod murf_client;

pub use fake_tts_client::FakeTtsClient;
pub use murf_client::{MurfTtsClient, MurfTtsClientConfig};
