use crate::checker::StatusApi;
use crate::errors::FetchError;
use crate::response::McSrvStatResponse;
use minestatus_models::ServerEdition;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.mcsrvstat.us";
pub const DEFAULT_USER_AGENT: &str = "MineStatus/1.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production [`StatusApi`] backed by reqwest. One client per instance; the
/// connect and request budgets are a single configurable timeout.
pub struct HttpStatusApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatusApi {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_settings(DEFAULT_BASE_URL, DEFAULT_USER_AGENT, REQUEST_TIMEOUT)
    }

    pub fn with_settings(
        base_url: &str,
        user_agent: &str,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(request_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, edition: ServerEdition, lookup: &str) -> String {
        match edition {
            ServerEdition::Java => format!("{}/3/{}", self.base_url, lookup),
            ServerEdition::Bedrock => format!("{}/bedrock/3/{}", self.base_url, lookup),
        }
    }
}

#[async_trait::async_trait]
impl StatusApi for HttpStatusApi {
    async fn fetch(
        &self,
        edition: ServerEdition,
        lookup: &str,
    ) -> Result<McSrvStatResponse, FetchError> {
        let url = self.endpoint(edition, lookup);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)?;

        response.json::<McSrvStatResponse>().await.map_err(classify)
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if is_dns_failure(&err) {
        return FetchError::UnknownHost;
    }
    if err.is_timeout()
        || err.is_connect()
        || err.is_request()
        || err.is_status()
        || err.is_body()
        || err.is_decode()
    {
        FetchError::Transport(err.to_string())
    } else {
        FetchError::Other(err.to_string())
    }
}

/// Name-resolution failures surface deep in the reqwest/hyper error chain;
/// walk the sources looking for the resolver's wording.
fn is_dns_failure(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        source = cause.source();
    }
    false
}
