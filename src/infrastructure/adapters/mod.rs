//! Infrastructure Adapters - 出站端口实现

pub mod llm;
pub mod storage;
pub mod tts;

pub use llm::{FakeStoryModel, GeminiClient, GeminiClientConfig};
pub use storage::FileAudioStorage;
pub use tts::{FakeTtsClient, MurfTtsClient, MurfTtsClientConfig};
