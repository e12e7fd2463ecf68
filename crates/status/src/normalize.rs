use crate::response::McSrvStatResponse;
use chrono::Utc;
use minestatus_models::ServerStatus;

/// Shapes an upstream response into the internal status record.
///
/// Pure and total: absent upstream fields propagate as `None`, and an
/// `online: false` payload is a legitimate answer, reported as
/// "Server is offline" rather than as a transport failure.
pub fn normalize(response: &McSrvStatResponse) -> ServerStatus {
    let motd = response.motd.as_ref();

    // Best single-line summary: clean form first, raw as fallback
    let summary = motd
        .and_then(|m| m.clean.as_ref())
        .and_then(|lines| lines.first())
        .or_else(|| {
            motd.and_then(|m| m.raw.as_ref())
                .and_then(|lines| lines.first())
        })
        .cloned();

    ServerStatus {
        online: response.online,
        version: response.version.clone(),
        motd: summary,
        motd_raw: motd.and_then(|m| m.raw.clone()),
        motd_clean: motd.and_then(|m| m.clean.clone()),
        motd_html: motd.and_then(|m| m.html.clone()),
        icon: response.icon.clone(),
        current_players: response.players.as_ref().and_then(|p| p.online),
        max_players: response.players.as_ref().and_then(|p| p.max),
        // The upstream API does not report round-trip time
        ping: None,
        error: (!response.online).then(|| "Server is offline".to_string()),
        last_checked: Utc::now().timestamp_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: serde_json::Value) -> McSrvStatResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn offline_payload_reports_server_offline() {
        let status = normalize(&response(serde_json::json!({"online": false})));
        assert!(!status.online);
        assert_eq!(status.error.as_deref(), Some("Server is offline"));
        assert!(status.version.is_none());
        assert!(status.motd.is_none());
        assert!(status.current_players.is_none());
    }

    #[test]
    fn clean_motd_preferred_over_raw() {
        let status = normalize(&response(serde_json::json!({
            "online": true,
            "motd": {"clean": ["Hi"], "raw": ["Hi!"]}
        })));
        assert_eq!(status.motd.as_deref(), Some("Hi"));
        assert_eq!(status.motd_raw, Some(vec!["Hi!".to_string()]));
        assert_eq!(status.motd_clean, Some(vec!["Hi".to_string()]));
        assert!(status.error.is_none());
    }

    #[test]
    fn raw_motd_is_the_fallback() {
        let status = normalize(&response(serde_json::json!({
            "online": true,
            "motd": {"raw": ["§aHi!"]}
        })));
        assert_eq!(status.motd.as_deref(), Some("§aHi!"));
        assert!(status.motd_clean.is_none());
    }

    #[test]
    fn empty_clean_array_falls_back_to_raw() {
        let status = normalize(&response(serde_json::json!({
            "online": true,
            "motd": {"clean": [], "raw": ["raw line"]}
        })));
        assert_eq!(status.motd.as_deref(), Some("raw line"));
    }

    #[test]
    fn players_version_and_icon_copied() {
        let status = normalize(&response(serde_json::json!({
            "online": true,
            "version": "1.21",
            "icon": "data:image/png;base64,AAAA",
            "players": {"online": 7, "max": 64}
        })));
        assert!(status.online);
        assert_eq!(status.version.as_deref(), Some("1.21"));
        assert_eq!(status.icon.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(status.current_players, Some(7));
        assert_eq!(status.max_players, Some(64));
        assert!(status.ping.is_none());
    }
}
