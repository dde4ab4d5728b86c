use crate::core::{SourceLoader, Storage};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::is_remote_source;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the menu over HTTP(S).
pub struct HttpLoader {
    url: String,
    client: Client,
}

impl HttpLoader {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl SourceLoader for HttpLoader {
    async fn load(&self) -> Result<String> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MenuError::load_failure(&self.url, e.to_string()))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(MenuError::load_failure(
                &self.url,
                format!(
                    "HTTP {} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status")
                ),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| MenuError::load_failure(&self.url, e.to_string()))?;
        Ok(strip_bom(text))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the menu through a [`Storage`] backend.
pub struct FileLoader<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileLoader<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> SourceLoader for FileLoader<S> {
    async fn load(&self) -> Result<String> {
        let bytes = self
            .storage
            .read_file(&self.path)
            .await
            .map_err(|e| MenuError::load_failure(&self.path, e.to_string()))?;

        let text = String::from_utf8(bytes).map_err(|e| {
            MenuError::load_failure(&self.path, format!("file is not valid UTF-8: {}", e))
        })?;
        Ok(strip_bom(text))
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}

/// Drop a leading UTF-8 byte order mark; `trim` does not remove it and it
/// would otherwise stick to the first header name.
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Pick a loader for `source`: http(s) URLs are fetched, anything else is a
/// local path.
pub fn loader_for(source: &str, timeout_seconds: u64) -> Result<Box<dyn SourceLoader>> {
    if is_remote_source(source) {
        Ok(Box::new(HttpLoader::new(source, timeout_seconds)?))
    } else {
        Ok(Box::new(FileLoader::new(
            crate::config::cli::LocalStorage::new(".".to_string()),
            source,
        )))
    }
}

#[async_trait]
impl SourceLoader for Box<dyn SourceLoader> {
    async fn load(&self) -> Result<String> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
