use async_trait::async_trait;
use sm_core::{Language, Result, Translator};

/// Pass-through translator that returns its input
#[derive(Debug, Clone, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_passthrough() {
        let translator = NoopTranslator::new();
        let output = translator
            .translate("Acme profits rose.", Language::English, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(output, "Acme profits rose.");
    }
}
