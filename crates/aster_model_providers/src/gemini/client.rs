//! Gemini HTTP client.

use super::config::{Backend, ClientConfig};
use aster_models::ModelCreationError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_API_VERSION: &str = "v1beta";
const VERTEX_API_VERSION: &str = "v1";

/// HTTP client bound to one Gemini backend.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    backend: Backend,
    base_url: String,
    api_version: String,
    // Vertex AI resource prefix: `projects/{project}/locations/{location}`.
    resource_prefix: Option<String>,
}

impl GeminiClient {
    /// Validates `config` and builds the underlying HTTP client.
    pub fn new(config: &ClientConfig) -> Result<Self, ModelCreationError> {
        let invalid = ModelCreationError::InvalidClientConfig;

        let mut headers = HeaderMap::new();

        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty());

        let (default_base, api_version, resource_prefix) = match config.backend {
            Backend::GeminiApi => {
                if api_key.is_none() {
                    return Err(invalid(
                        "an API key is required for the Gemini API backend".to_string(),
                    ));
                }
                (GEMINI_API_BASE_URL.to_string(), GEMINI_API_VERSION, None)
            }
            Backend::VertexAi => {
                let project = non_empty(config.project.as_deref())
                    .ok_or_else(|| invalid("Vertex AI requires a project".to_string()))?;
                let location = non_empty(config.location.as_deref())
                    .ok_or_else(|| invalid("Vertex AI requires a location".to_string()))?;

                let base = if location == "global" {
                    "https://aiplatform.googleapis.com".to_string()
                } else {
                    format!("https://{location}-aiplatform.googleapis.com")
                };
                (
                    base,
                    VERTEX_API_VERSION,
                    Some(format!("projects/{project}/locations/{location}")),
                )
            }
        };

        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|err| invalid(format!("invalid API key header: {err}")))?;
            headers.insert("x-goog-api-key", value);
        }

        for (name, value) in &config.http.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| invalid(format!("invalid header name '{name}': {err}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|err| invalid(format!("invalid value for header '{name}': {err}")))?;
            headers.insert(header_name, header_value);
        }

        let base_url = match non_empty(config.http.base_url.as_deref()) {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(invalid(format!(
                    "base URL '{url}' must start with http:// or https://"
                )));
            }
            None => default_base,
        };

        let api_version = non_empty(config.http.api_version.as_deref())
            .unwrap_or(api_version)
            .to_string();

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.http.timeout {
            if timeout.is_zero() {
                return Err(invalid("request timeout must be non-zero".to_string()));
            }
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| invalid(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            backend: config.backend,
            base_url,
            api_version,
            resource_prefix,
        })
    }

    /// Returns the backend this client talks to.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns the underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the `generateContent` URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        match &self.resource_prefix {
            Some(prefix) => format!(
                "{}/{}/{prefix}/publishers/google/models/{model}:generateContent",
                self.base_url, self.api_version
            ),
            None => format!(
                "{}/{}/models/{model}:generateContent",
                self.base_url, self.api_version
            ),
        }
    }
}

impl core::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("backend", &self.backend)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_api_url() {
        let client = GeminiClient::new(&ClientConfig::default().with_api_key("key")).unwrap();
        assert_eq!(
            client.generate_content_url("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn vertex_regional_url() {
        let config = ClientConfig::default().with_vertex_ai("my-proj", "us-central1");
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.generate_content_url("gemini-2.5-pro"),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/my-proj/locations/us-central1/publishers/google/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn vertex_global_url() {
        let config = ClientConfig::default().with_vertex_ai("my-proj", "global");
        let client = GeminiClient::new(&config).unwrap();
        assert!(
            client
                .generate_content_url("gemini-2.5-pro")
                .starts_with("https://aiplatform.googleapis.com/v1/projects/my-proj/locations/global/")
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = ClientConfig::default()
            .with_api_key("key")
            .with_base_url("http://localhost:8080/");
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.generate_content_url("gemini-2.0-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn gemini_api_requires_key() {
        let err = GeminiClient::new(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, ModelCreationError::InvalidClientConfig(_)));
    }

    #[test]
    fn vertex_requires_project() {
        let mut config = ClientConfig::default().with_vertex_ai("p", "us-central1");
        config.project = None;

        let err = GeminiClient::new(&config).unwrap_err();
        assert_eq!(
            err,
            ModelCreationError::InvalidClientConfig("Vertex AI requires a project".to_string())
        );
    }

    #[test]
    fn accepts_sub_second_timeout() {
        let config = ClientConfig::default()
            .with_api_key("key")
            .with_timeout(core::time::Duration::from_millis(500));
        assert!(GeminiClient::new(&config).is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig::default()
            .with_api_key("key")
            .with_timeout(core::time::Duration::ZERO);
        assert_eq!(
            GeminiClient::new(&config).unwrap_err(),
            ModelCreationError::InvalidClientConfig("request timeout must be non-zero".to_string())
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = ClientConfig::default()
            .with_api_key("key")
            .with_base_url("ftp://example.com");
        assert!(GeminiClient::new(&config).is_err());
    }

    #[test]
    fn rejects_invalid_header_name() {
        let config = ClientConfig::default()
            .with_api_key("key")
            .with_header("bad header", "value");
        assert!(GeminiClient::new(&config).is_err());
    }

    #[test]
    fn debug_omits_credentials() {
        let client = GeminiClient::new(&ClientConfig::default().with_api_key("secret")).unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }
}
