//! Gemini client configuration.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::time::Duration;

/// Which Google service hosts the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// The Gemini Developer API, authenticated with an API key.
    #[default]
    GeminiApi,
    /// Vertex AI, addressed by project and location.
    VertexAi,
}

/// Transport-level overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpOptions {
    /// Replaces the backend's default base URL.
    pub base_url: Option<String>,
    /// Replaces the backend's default API version (`v1beta` or `v1`).
    pub api_version: Option<String>,
    /// Request timeout. Deserialized from `timeout_ms`.
    #[serde(rename = "timeout_ms", deserialize_with = "deserialize_millis")]
    pub timeout: Option<Duration>,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
}

/// Connection and authentication settings for the Gemini client.
///
/// The default value selects the Gemini API backend with no API key. Use
/// [`from_env`](Self::from_env) to pick up the usual Google environment
/// variables, or the `with_*` builders to set values explicitly.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key for the Gemini API (or Vertex AI express mode).
    pub api_key: Option<String>,
    /// Hosting backend.
    pub backend: Backend,
    /// Google Cloud project, required for Vertex AI.
    pub project: Option<String>,
    /// Google Cloud location, required for Vertex AI.
    pub location: Option<String>,
    /// Transport overrides.
    pub http: HttpOptions,
}

impl ClientConfig {
    /// Builds a configuration from the process environment.
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `GOOGLE_API_KEY` | API key (takes precedence) |
    /// | `GEMINI_API_KEY` | API key |
    /// | `GOOGLE_GENAI_USE_VERTEXAI` | `true` or `1` selects [`Backend::VertexAi`] |
    /// | `GOOGLE_CLOUD_PROJECT` | Vertex AI project |
    /// | `GOOGLE_CLOUD_LOCATION` | Vertex AI location |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let use_vertex = var("GOOGLE_GENAI_USE_VERTEXAI").is_some_and(|value| {
            let value = value.trim();
            value == "1" || value.eq_ignore_ascii_case("true")
        });

        Self {
            api_key: var("GOOGLE_API_KEY").or_else(|| var("GEMINI_API_KEY")),
            backend: if use_vertex {
                Backend::VertexAi
            } else {
                Backend::GeminiApi
            },
            project: var("GOOGLE_CLOUD_PROJECT"),
            location: var("GOOGLE_CLOUD_LOCATION"),
            http: HttpOptions::default(),
        }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Selects Vertex AI for the given project and location.
    #[must_use]
    pub fn with_vertex_ai(
        mut self,
        project: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.backend = Backend::VertexAi;
        self.project = Some(project.into());
        self.location = Some(location.into());
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.headers.insert(name.into(), value.into());
        self
    }
}

impl core::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("backend", &self.backend)
            .field("project", &self.project)
            .field("location", &self.location)
            .field("http", &self.http)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_targets_gemini_api_without_key() {
        let config = ClientConfig::default();
        assert_eq!(config.backend, Backend::GeminiApi);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn google_api_key_takes_precedence() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "google"),
            ("GEMINI_API_KEY", "gemini"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("google"));
    }

    #[test]
    fn gemini_api_key_is_fallback() {
        let config = ClientConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "gemini")]));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn empty_values_are_unset() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "  "),
            ("GEMINI_API_KEY", "gemini"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn vertex_flag_selects_vertex_backend() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GOOGLE_GENAI_USE_VERTEXAI", "TRUE"),
            ("GOOGLE_CLOUD_PROJECT", "proj"),
            ("GOOGLE_CLOUD_LOCATION", "us-central1"),
        ]));
        assert_eq!(config.backend, Backend::VertexAi);
        assert_eq!(config.project.as_deref(), Some("proj"));
        assert_eq!(config.location.as_deref(), Some("us-central1"));
    }

    #[test]
    fn vertex_flag_false_keeps_gemini_api() {
        let config = ClientConfig::from_lookup(lookup(&[("GOOGLE_GENAI_USE_VERTEXAI", "false")]));
        assert_eq!(config.backend, Backend::GeminiApi);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn timeout_round_trips_through_builder() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(30));
        assert_eq!(config.http.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn sub_second_timeout_keeps_precision() {
        let config = ClientConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(config.http.timeout, Some(Duration::from_millis(500)));

        let config = ClientConfig::default().with_timeout(Duration::from_millis(1_250));
        assert_eq!(config.http.timeout, Some(Duration::from_millis(1_250)));
    }
}
