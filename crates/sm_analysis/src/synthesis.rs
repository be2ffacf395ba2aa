use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sm_core::text::normalize_paragraphs;
use sm_core::{Error, Language, Result, SpeechRenderer};
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

/// Renders narration to an audio file. Either a complete file ends up at the
/// requested path or nothing does.
pub struct SpeechSynthesizer {
    renderer: Arc<dyn SpeechRenderer>,
}

impl fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

impl SpeechSynthesizer {
    pub fn new(renderer: Arc<dyn SpeechRenderer>) -> Self {
        Self { renderer }
    }

    pub async fn synthesize(&self, text: &str, output: &Path, language: Language) -> Result<PathBuf> {
        let result = self.render_to(text, output, language).await;
        if let Err(e) = &result {
            error!("❌ Speech synthesis failed: {}", e);
            discard(output).await;
        }
        result
    }

    async fn render_to(&self, text: &str, output: &Path, language: Language) -> Result<PathBuf> {
        let text = normalize_paragraphs(text);
        if text.is_empty() {
            return Err(Error::SynthesisFailed("narration text is empty".to_string()));
        }

        info!("🔊 Synthesizing {} characters of {} speech...", text.chars().count(), language);
        let audio = self
            .renderer
            .render(&text, language)
            .await
            .map_err(|e| Error::SynthesisFailed(format!("{}: {}", self.renderer.name(), e)))?;
        if audio.is_empty() {
            return Err(Error::SynthesisFailed(format!("{} returned no audio", self.renderer.name())));
        }

        let path = output.to_path_buf();
        tokio::task::spawn_blocking(move || write_atomically(&path, &audio))
            .await
            .map_err(|e| Error::SynthesisFailed(format!("writer task failed: {}", e)))?
            .map_err(|e| Error::SynthesisFailed(format!("could not write {}: {}", output.display(), e)))?;

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            return Err(Error::SynthesisFailed(format!("{} missing after write", output.display())));
        }

        info!("✅ Audio saved to {}", output.display());
        Ok(output.to_path_buf())
    }
}

/// Write into a sibling temporary file, then rename it over the target.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let mut file = NamedTempFile::new_in(&parent)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

async fn discard(output: &Path) {
    if let Err(e) = tokio::fs::remove_file(output).await {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("Could not remove {}: {}", output.display(), e);
        }
    }
}
