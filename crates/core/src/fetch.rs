//! Pluggable data fetching.
//!
//! The layout is normally served over HTTPS, but anything that can produce
//! the document's bytes for a URL can stand in for [`HttpsFetcher`].

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Fetch raw bytes from a URL
pub trait DataFetcher: Send + Sync {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

#[derive(Clone, Debug, Default)]
pub struct DownloadOptions {
    /// PEM bundle of the only certificates trusted for the server. When
    /// unset, the platform's built-in roots are used.
    pub ca_file: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

/// HTTPS fetcher backed by `reqwest`
#[derive(Clone, Debug)]
pub struct HttpsFetcher {
    client: reqwest::Client,
}

impl HttpsFetcher {
    pub fn new(options: &DownloadOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(ca_file) = &options.ca_file {
            let pem = std::fs::read(ca_file).map_err(|source| Error::CaBundle {
                path: ca_file.clone(),
                source,
            })?;
            let certificates = reqwest::Certificate::from_pem_bundle(&pem)?;
            debug!(
                ca_file = %ca_file.display(),
                certificates = certificates.len(),
                "trusting CA bundle"
            );
            builder = builder.tls_certs_only(certificates);
        }

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl DataFetcher for HttpsFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let bytes = response.bytes().await?;
            debug!(url, bytes = bytes.len(), "fetched");
            Ok(bytes.to_vec())
        })
    }
}

/// Fetch `url` and write the body to `destination`
///
/// Returns the number of bytes written.
pub async fn download_file(
    fetcher: &dyn DataFetcher,
    url: &str,
    destination: &Path,
) -> Result<usize> {
    let bytes = fetcher.fetch(url).await?;
    tokio::fs::write(destination, &bytes).await?;
    info!(url, destination = %destination.display(), bytes = bytes.len(), "downloaded file");
    Ok(bytes.len())
}
