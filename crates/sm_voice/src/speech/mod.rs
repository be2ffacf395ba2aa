mod chunk;
mod google_tts;

pub use chunk::split_for_speech;
pub use google_tts::{GoogleTtsRenderer, MAX_CHUNK_CHARS};
