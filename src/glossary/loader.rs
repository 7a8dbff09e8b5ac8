use std::path::PathBuf;

use futures_util::StreamExt;
use tokio::io::AsyncReadExt;

use super::{parse_glossary_bytes, Dimension, GlossaryData, ShotDefinition};
use crate::error::LoadError;
use crate::util::{expand_tilde, is_http_location};

/// Upper bound on a glossary document. Anything larger is not a glossary.
pub const MAX_GLOSSARY_BYTES: usize = 1024 * 1024;

const USER_AGENT: &str = concat!("shot-tagger/", env!("CARGO_PKG_VERSION"));

/// Where the glossary document lives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GlossarySource {
    /// The document compiled into the crate.
    #[default]
    Bundled,
    File(PathBuf),
    Url(String),
}

impl GlossarySource {
    /// `"bundled"`, an `http(s)://` URL, or a file path (a leading `~` is expanded).
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.eq_ignore_ascii_case("bundled") {
            Self::Bundled
        } else if is_http_location(location) {
            Self::Url(location.to_string())
        } else {
            Self::File(expand_tilde(location))
        }
    }
}

impl std::fmt::Display for GlossarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Reads the glossary from a fixed source.
///
/// There is no caching here: every call performs a fresh read. Wrap the
/// loader in a [`GlossaryCache`](super::GlossaryCache) to memoize.
#[derive(Clone, Debug)]
pub struct GlossaryLoader {
    source: GlossarySource,
    client: reqwest::Client,
}

impl Default for GlossaryLoader {
    fn default() -> Self {
        Self::new(GlossarySource::Bundled)
    }
}

impl GlossaryLoader {
    pub fn new(source: GlossarySource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, TLS roots).
    pub fn with_client(source: GlossarySource, client: reqwest::Client) -> Self {
        Self { source, client }
    }

    pub fn source(&self) -> &GlossarySource {
        &self.source
    }

    /// Fetch and decode the whole glossary.
    pub async fn load_glossary_data(&self) -> Result<GlossaryData, LoadError> {
        tracing::debug!("Loading glossary from {}", self.source);

        let result = match self.read_body().await {
            Ok(body) => parse_glossary_bytes(&body),
            Err(e) => Err(e),
        };

        match &result {
            Ok(data) => tracing::info!(
                "Loaded glossary from {} ({} shots, {} dimensions)",
                self.source,
                data.shots.len(),
                data.dimensions.len()
            ),
            Err(e) => tracing::warn!("Failed to load glossary from {}: {}", self.source, e),
        }
        result
    }

    pub async fn get_shot_types(&self) -> Result<Vec<ShotDefinition>, LoadError> {
        Ok(self.load_glossary_data().await?.shots)
    }

    pub async fn get_dimensions(&self) -> Result<Vec<Dimension>, LoadError> {
        Ok(self.load_glossary_data().await?.dimensions)
    }

    async fn read_body(&self) -> Result<Vec<u8>, LoadError> {
        match &self.source {
            GlossarySource::Bundled => Ok(crate::assets::glossary_json().as_bytes().to_vec()),
            GlossarySource::File(path) => {
                // Bounded read: pipes and devices report no useful length, and a
                // file can grow after it is opened.
                let file = tokio::fs::File::open(path).await?;
                let mut body = Vec::new();
                file.take(MAX_GLOSSARY_BYTES as u64 + 1)
                    .read_to_end(&mut body)
                    .await?;
                if body.len() > MAX_GLOSSARY_BYTES {
                    return Err(LoadError::TooLarge {
                        limit: MAX_GLOSSARY_BYTES,
                    });
                }
                Ok(body)
            }
            GlossarySource::Url(url) => self.fetch(url).await,
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_GLOSSARY_BYTES as u64)
        {
            return Err(LoadError::TooLarge {
                limit: MAX_GLOSSARY_BYTES,
            });
        }

        // Stream so a server that lies about (or omits) Content-Length can't
        // push an unbounded body.
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if body.len() + chunk.len() > MAX_GLOSSARY_BYTES {
                return Err(LoadError::TooLarge {
                    limit: MAX_GLOSSARY_BYTES,
                });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}
