use crate::errors::FetchError;
use crate::normalize::normalize;
use crate::response::McSrvStatResponse;
use minestatus_models::{ServerEdition, ServerStatus};
use std::sync::Arc;
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// The network-fetch capability: resolves a `host:port` lookup key against
/// the status API variant for the given edition.
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch(
        &self,
        edition: ServerEdition,
        lookup: &str,
    ) -> Result<McSrvStatResponse, FetchError>;
}

/// Delay primitive for the retry loop, injected so tests run without
/// wall-clock waits.
#[async_trait::async_trait]
pub trait Sleep: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleep;

#[async_trait::async_trait]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retrying status checker. Stateless between calls and safe to share across
/// tasks; each check is an independent sequential attempt loop.
pub struct StatusChecker {
    api: Arc<dyn StatusApi>,
    sleep: Arc<dyn Sleep>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl StatusChecker {
    pub fn new(api: Arc<dyn StatusApi>, sleep: Arc<dyn Sleep>) -> Self {
        Self::with_policy(api, sleep, MAX_ATTEMPTS, RETRY_DELAY)
    }

    pub fn with_policy(
        api: Arc<dyn StatusApi>,
        sleep: Arc<dyn Sleep>,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            api,
            sleep,
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    /// Checks one server. Never fails: every failure path resolves into an
    /// offline record with a classified `error` message.
    ///
    /// A response whose payload says the server is down is a successful
    /// check and is returned immediately, without retries. A host that does
    /// not resolve aborts after the first attempt; any other failure retries
    /// with a linear backoff of `retry_delay * attempt` between attempts.
    pub async fn check(
        &self,
        address: &str,
        port: u16,
        edition: ServerEdition,
    ) -> ServerStatus {
        let lookup = format!("{address}:{port}");
        tracing::debug!("Checking server status: {lookup} ({edition})");

        let mut last_error: Option<FetchError> = None;

        for attempt in 1..=self.max_attempts {
            tracing::debug!("Attempt {attempt} of {}", self.max_attempts);

            match self.api.fetch(edition, &lookup).await {
                Ok(response) => {
                    let status = normalize(&response);
                    if status.online {
                        tracing::debug!("Server is online: {lookup}");
                    } else {
                        tracing::debug!("Server appears to be offline: {lookup}");
                    }
                    return status;
                }
                Err(FetchError::UnknownHost) => {
                    tracing::warn!("Unknown host: {address}");
                    last_error = Some(FetchError::UnknownHost);
                    break;
                }
                Err(err) => {
                    tracing::warn!("Status check attempt {attempt} failed for {lookup}: {err}");
                    last_error = Some(err);
                    if attempt < self.max_attempts {
                        let delay = self.retry_delay * attempt;
                        tracing::debug!("Retrying in {delay:?}");
                        self.sleep.sleep(delay).await;
                    }
                }
            }
        }

        tracing::warn!("All attempts to check server status failed: {lookup}");
        ServerStatus::offline(error_message(address, last_error))
    }
}

fn error_message(address: &str, last_error: Option<FetchError>) -> String {
    match last_error {
        Some(FetchError::UnknownHost) => format!("Unknown host: {address}"),
        Some(FetchError::Transport(message)) => format!("Network error: {message}"),
        Some(FetchError::Other(message)) if !message.is_empty() => message,
        _ => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    struct ScriptedApi {
        replies: Mutex<VecDeque<Result<McSrvStatResponse, FetchError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedApi {
        fn new(replies: Vec<Result<McSrvStatResponse, FetchError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> u32 {
            *self.calls.lock()
        }
    }

    #[async_trait::async_trait]
    impl StatusApi for ScriptedApi {
        async fn fetch(
            &self,
            _edition: ServerEdition,
            _lookup: &str,
        ) -> Result<McSrvStatResponse, FetchError> {
            *self.calls.lock() += 1;
            self.replies
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Other("script exhausted".to_string())))
        }
    }

    struct RecordingSleep {
        delays: Mutex<Vec<Duration>>,
    }

    impl RecordingSleep {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                delays: Mutex::new(Vec::new()),
            })
        }

        fn delays(&self) -> Vec<Duration> {
            self.delays.lock().clone()
        }
    }

    #[async_trait::async_trait]
    impl Sleep for RecordingSleep {
        async fn sleep(&self, duration: Duration) {
            self.delays.lock().push(duration);
        }
    }

    fn online_response() -> McSrvStatResponse {
        serde_json::from_value(serde_json::json!({
            "online": true,
            "version": "1.21",
            "motd": {"clean": ["Hi"], "raw": ["Hi!"]},
            "players": {"online": 2, "max": 20}
        }))
        .unwrap()
    }

    fn offline_response() -> McSrvStatResponse {
        serde_json::from_value(serde_json::json!({"online": false})).unwrap()
    }

    fn transport(message: &str) -> FetchError {
        FetchError::Transport(message.to_string())
    }

    #[tokio::test]
    async fn unknown_host_aborts_after_one_attempt() {
        let api = ScriptedApi::new(vec![Err(FetchError::UnknownHost), Ok(online_response())]);
        let sleep = RecordingSleep::new();
        let checker = StatusChecker::new(api.clone(), sleep.clone());

        let status = checker
            .check("nope.invalid", 25565, ServerEdition::Java)
            .await;

        assert!(!status.online);
        assert_eq!(status.error.as_deref(), Some("Unknown host: nope.invalid"));
        assert_eq!(api.calls(), 1);
        assert!(sleep.delays().is_empty());
    }

    #[tokio::test]
    async fn recovers_on_third_attempt_with_linear_backoff() {
        let api = ScriptedApi::new(vec![
            Err(transport("connection reset")),
            Err(transport("timed out")),
            Ok(online_response()),
        ]);
        let sleep = RecordingSleep::new();
        let checker = StatusChecker::new(api.clone(), sleep.clone());

        let status = checker
            .check("play.example.com", 25565, ServerEdition::Java)
            .await;

        assert!(status.online);
        assert_eq!(status.motd.as_deref(), Some("Hi"));
        assert_eq!(api.calls(), 3);
        assert_eq!(
            sleep.delays(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn exhaustion_reports_last_transport_error() {
        let api = ScriptedApi::new(vec![
            Err(transport("reset")),
            Err(transport("reset")),
            Err(transport("connection reset by peer")),
        ]);
        let sleep = RecordingSleep::new();
        let checker = StatusChecker::new(api.clone(), sleep.clone());

        let status = checker
            .check("play.example.com", 25565, ServerEdition::Java)
            .await;

        assert!(!status.online);
        assert_eq!(
            status.error.as_deref(),
            Some("Network error: connection reset by peer")
        );
        assert_eq!(api.calls(), 3);
        // No backoff after the final attempt
        assert_eq!(sleep.delays().len(), 2);
    }

    #[tokio::test]
    async fn offline_payload_is_a_successful_check() {
        let api = ScriptedApi::new(vec![Ok(offline_response())]);
        let sleep = RecordingSleep::new();
        let checker = StatusChecker::new(api.clone(), sleep.clone());

        let status = checker
            .check("quiet.example.com", 19132, ServerEdition::Bedrock)
            .await;

        assert!(!status.online);
        assert_eq!(status.error.as_deref(), Some("Server is offline"));
        assert_eq!(api.calls(), 1);
        assert!(sleep.delays().is_empty());
    }

    #[tokio::test]
    async fn unexpected_error_message_passes_through() {
        let api = ScriptedApi::new(vec![
            Err(FetchError::Other("boom".to_string())),
            Err(FetchError::Other("boom".to_string())),
            Err(FetchError::Other("boom".to_string())),
        ]);
        let checker = StatusChecker::new(api, RecordingSleep::new());

        let status = checker
            .check("play.example.com", 25565, ServerEdition::Java)
            .await;

        assert_eq!(status.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn blank_error_falls_back_to_unknown() {
        let api = ScriptedApi::new(vec![
            Err(FetchError::Other(String::new())),
            Err(FetchError::Other(String::new())),
            Err(FetchError::Other(String::new())),
        ]);
        let checker = StatusChecker::new(api, RecordingSleep::new());

        let status = checker
            .check("play.example.com", 25565, ServerEdition::Java)
            .await;

        assert_eq!(status.error.as_deref(), Some("Unknown error"));
    }
}
