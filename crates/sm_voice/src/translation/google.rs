use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use sm_core::config::TranslationSettings;
use sm_core::{Error, Language, Result, Translator};
use tracing::debug;
use url::Url;

const SERVICE: &str = "Google Translate";

/// Client for the public `translate_a/single` endpoint
pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    pub fn new(settings: &TranslationSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| Error::Config(format!("Invalid translation endpoint '{}': {}", settings.endpoint, e)))?;
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, endpoint })
    }
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        SERVICE
    }

    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", from.code()),
                ("tl", to.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Error::upstream(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(SERVICE, format!("status {}", status.as_u16())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::TranslationFailed(format!("undecodable response: {}", e)))?;
        let translated = parse_translation(&body)?;
        debug!("Translated {} chars {} -> {}", text.chars().count(), from, to);
        Ok(translated)
    }
}

/// The response is `[[["<translated>", "<source>", ...], ...], ...]`;
/// a null first element means there was nothing to translate.
fn parse_translation(body: &Value) -> Result<String> {
    match body.get(0) {
        Some(Value::Array(segments)) => Ok(segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect()),
        Some(Value::Null) => Ok(String::new()),
        _ => Err(Error::TranslationFailed("unexpected response shape".to_string())),
    }
}
