use std::future::Future;

use reqwest::StatusCode;
use tracing::trace;

use crate::error::Result;

/// Default GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "ghcl-cli";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// One HTTP response as seen by the resolver and the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub status: StatusCode,
    /// Raw `Link` header value, if the response carried one.
    pub link: Option<String>,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            link: None,
            body: body.into(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Fetches a single URL. Status handling is left to the caller.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Page>>;
}

/// `Transport` backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client, token })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Page> {
        trace!("GET {url}");
        let mut request = self
            .client
            .get(url)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let link = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;
        trace!("{status} from {url}");

        Ok(Page { status, link, body })
    }
}
