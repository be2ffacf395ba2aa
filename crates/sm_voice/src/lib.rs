use std::sync::Arc;

use sm_core::config::{SpeechSettings, TranslationProvider, TranslationSettings};
use sm_core::{Result, SpeechRenderer, Translator};
use tracing::info;

pub mod speech;
pub mod translation;

pub use speech::GoogleTtsRenderer;
pub use translation::{GoogleTranslator, NoopTranslator};

pub fn create_translator(settings: &TranslationSettings) -> Result<Arc<dyn Translator>> {
    let translator: Arc<dyn Translator> = match settings.provider {
        TranslationProvider::Google => Arc::new(GoogleTranslator::new(settings)?),
        TranslationProvider::Noop => Arc::new(NoopTranslator::new()),
    };
    info!("🌐 Translator initialized (using {})", translator.name());
    Ok(translator)
}

pub fn create_renderer(settings: &SpeechSettings) -> Result<Arc<dyn SpeechRenderer>> {
    let renderer = Arc::new(GoogleTtsRenderer::new(settings)?);
    info!("🔊 Speech renderer initialized (using {})", renderer.name());
    Ok(renderer)
}

pub mod prelude {
    pub use super::{create_renderer, create_translator};
    pub use sm_core::{Error, Language, Result, SpeechRenderer, Translator};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_translator() {
        let mut settings = TranslationSettings::default();
        assert_eq!(create_translator(&settings).unwrap().name(), "Google Translate");

        settings.provider = TranslationProvider::Noop;
        assert_eq!(create_translator(&settings).unwrap().name(), "noop");
    }

    #[test]
    fn test_create_renderer() {
        let renderer = create_renderer(&SpeechSettings::default()).unwrap();
        assert_eq!(renderer.name(), "Google TTS");
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let settings = TranslationSettings {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(create_translator(&settings).is_err());
    }
}
