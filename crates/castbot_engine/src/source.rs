use castbot_logging::castbot_trace;

use crate::{decode_html, parse_profile, CastingProfile, FetchError, Fetcher};

/// Looks up one profile by mirror host and numeric id.
///
/// `Ok(None)` is the normal outcome for an unused id; `Err` is reserved for
/// transport trouble.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    async fn lookup(&self, host: &str, id: u64) -> Result<Option<CastingProfile>, FetchError>;
}

/// Canonical profile page address: `https://{host}/a_{id}`.
pub fn profile_url(host: &str, id: u64) -> String {
    scheme_url("https", host, id)
}

fn scheme_url(scheme: &str, host: &str, id: u64) -> String {
    format!("{scheme}://{host}/a_{id}")
}

pub struct HttpProfileSource<F> {
    fetcher: F,
    scheme: &'static str,
}

impl<F: Fetcher> HttpProfileSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            scheme: "https",
        }
    }

    /// Plain-HTTP variant for local mirrors and test servers.
    pub fn insecure(fetcher: F) -> Self {
        Self {
            fetcher,
            scheme: "http",
        }
    }

    fn url(&self, host: &str, id: u64) -> String {
        scheme_url(self.scheme, host, id)
    }
}

#[async_trait::async_trait]
impl<F: Fetcher> ProfileSource for HttpProfileSource<F> {
    async fn lookup(&self, host: &str, id: u64) -> Result<Option<CastingProfile>, FetchError> {
        let url = self.url(host, id);
        let output = match self.fetcher.fetch(&url).await {
            Ok(output) => output,
            Err(err) if err.is_not_found() => {
                castbot_trace!("No page at {}", url);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let metadata = &output.metadata;
        if metadata.final_url != metadata.original_url {
            castbot_trace!("{} redirected to {}", metadata.original_url, metadata.final_url);
        }
        let decoded = decode_html(&output.bytes, metadata.content_type.as_deref());
        castbot_trace!(
            "Fetched {} ({} bytes, {})",
            metadata.final_url,
            metadata.byte_len,
            decoded.encoding_label
        );
        Ok(parse_profile(&decoded.html, &url))
    }
}
