use crate::models::{GlucoseStatus, Reading};
use crate::status;
use reqwest::StatusCode;
use serde::Serialize;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::error;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

const TEST_MESSAGE: &str = "🔔 *GlucoTrack Connection Test*\n\nIf you are reading this, your notifications are set up correctly! ✅";

#[derive(Debug)]
pub enum NotifyError {
    MissingToken,
    Request(reqwest::Error),
    Rejected(StatusCode),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "TELEGRAM_BOT_TOKEN is not configured"),
            Self::Request(err) => write!(f, "telegram request failed: {err}"),
            Self::Rejected(status) => write!(f, "telegram rejected the message: {status}"),
        }
    }
}

impl std::error::Error for NotifyError {}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    token: Option<String>,
    api_base: String,
}

impl Notifier {
    pub fn new(token: Option<String>, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token
                .map(|raw| raw.trim().to_string())
                .filter(|token| !token.is_empty()),
            api_base,
        }
    }

    pub fn from_env() -> Self {
        let token = env::var("TELEGRAM_BOT_TOKEN").ok();
        let api_base =
            env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| TELEGRAM_API_BASE.to_string());
        Self::new(token, api_base)
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    pub async fn send_reading_alert(
        &self,
        chat_id: &str,
        reading: &Reading,
    ) -> Result<(), NotifyError> {
        self.send(chat_id, &format_reading_message(reading)).await
    }

    pub async fn send_test_message(&self, chat_id: &str) -> Result<(), NotifyError> {
        self.send(chat_id, TEST_MESSAGE).await
    }

    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let token = self.token.as_deref().ok_or(NotifyError::MissingToken)?;
        let url = format!("{}/bot{token}/sendMessage", self.api_base);
        let response = self
            .client
            .post(url)
            .timeout(SEND_TIMEOUT)
            .json(&SendMessage {
                chat_id,
                text,
                parse_mode: "Markdown",
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(NotifyError::Rejected(response.status()));
        }
        Ok(())
    }
}

pub fn format_reading_message(reading: &Reading) -> String {
    let status = status::classify(reading.value, reading.reading_type);
    let emoji = match status {
        GlucoseStatus::Low => "⚠️ 📉",
        GlucoseStatus::High => "⚠️ 📈",
        GlucoseStatus::Normal => "✅",
        GlucoseStatus::Elevated => "🩸",
    };
    format!(
        "*New Glucose Reading* {emoji}\n\n*Level:* {} mg/dL\n*Status:* {}\n*Type:* {}\n*Time:* {} {}",
        reading.value,
        status.as_str(),
        reading.reading_type.as_str(),
        reading.date,
        reading.time
    )
}

/// Fire and forget; delivery failures are logged, never surfaced to the caller.
pub fn spawn_reading_alert(notifier: Notifier, chat_id: Option<String>, reading: Reading) {
    let Some(chat_id) = chat_id else {
        return;
    };
    tokio::spawn(async move {
        if let Err(err) = notifier.send_reading_alert(&chat_id, &reading).await {
            error!("failed to send telegram alert: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingType;
    use axum::extract::Path;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn reading(value: u32, reading_type: ReadingType) -> Reading {
        Reading {
            id: "r1".to_string(),
            date: "2024-05-20".to_string(),
            time: "08:00".to_string(),
            value,
            reading_type,
            timestamp: 0,
        }
    }

    #[test]
    fn alert_message_includes_level_status_and_emoji() {
        let text = format_reading_message(&reading(65, ReadingType::Fasting));
        assert!(text.starts_with("*New Glucose Reading* ⚠️ 📉"));
        assert!(text.contains("*Level:* 65 mg/dL"));
        assert!(text.contains("*Status:* Low"));
        assert!(text.contains("*Type:* Fasting"));
        assert!(text.contains("*Time:* 2024-05-20 08:00"));

        let text = format_reading_message(&reading(90, ReadingType::Fasting));
        assert!(text.contains("✅"));
        let text = format_reading_message(&reading(200, ReadingType::Bedtime));
        assert!(text.contains("⚠️ 📈"));
        let text = format_reading_message(&reading(110, ReadingType::Fasting));
        assert!(text.contains("🩸"));
    }

    #[tokio::test]
    async fn missing_token_fails_without_a_request() {
        let notifier = Notifier::new(None, "http://127.0.0.1:9".to_string());
        let err = notifier.send_test_message("42").await.unwrap_err();
        assert!(matches!(err, NotifyError::MissingToken));
        assert_eq!(err.to_string(), "TELEGRAM_BOT_TOKEN is not configured");
        assert!(!notifier.is_configured());
    }

    #[test]
    fn blank_token_counts_as_unconfigured() {
        let notifier = Notifier::new(Some("   ".to_string()), TELEGRAM_API_BASE.to_string());
        assert!(!notifier.is_configured());
    }

    async fn spawn_fake_telegram() -> (std::net::SocketAddr, Arc<Mutex<Vec<serde_json::Value>>>) {
        let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);
        let app = Router::new().route(
            "/:bot/sendMessage",
            post(
                move |Path(bot): Path<String>, Json(body): Json<serde_json::Value>| {
                    let log = Arc::clone(&log);
                    async move {
                        if bot != "bottoken-123" {
                            return (
                                StatusCode::UNAUTHORIZED,
                                Json(serde_json::json!({ "ok": false })),
                            );
                        }
                        log.lock().await.push(body);
                        (StatusCode::OK, Json(serde_json::json!({ "ok": true })))
                    }
                },
            ),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, received)
    }

    #[tokio::test]
    async fn test_message_posts_markdown_to_bot_endpoint() {
        let (addr, received) = spawn_fake_telegram().await;
        let notifier = Notifier::new(Some("token-123".to_string()), format!("http://{addr}"));

        notifier.send_test_message("42").await.unwrap();

        let bodies = received.lock().await;
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["chat_id"], "42");
        assert_eq!(bodies[0]["parse_mode"], "Markdown");
        assert!(
            bodies[0]["text"]
                .as_str()
                .unwrap()
                .contains("GlucoTrack Connection Test")
        );
    }

    #[tokio::test]
    async fn rejected_send_surfaces_the_status() {
        let (addr, _received) = spawn_fake_telegram().await;
        let notifier = Notifier::new(Some("wrong-token".to_string()), format!("http://{addr}"));

        let err = notifier.send_test_message("42").await.unwrap_err();
        assert!(matches!(err, NotifyError::Rejected(status) if status == StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn reading_alert_carries_the_formatted_message() {
        let (addr, received) = spawn_fake_telegram().await;
        let notifier = Notifier::new(Some("token-123".to_string()), format!("http://{addr}"));

        let reading = reading(185, ReadingType::Bedtime);
        notifier.send_reading_alert("42", &reading).await.unwrap();

        let bodies = received.lock().await;
        let text = bodies[0]["text"].as_str().unwrap();
        assert!(text.contains("*New Glucose Reading*"));
        assert!(text.contains("*Level:* 185 mg/dL"));
        assert!(text.contains("*Status:* High"));
    }

    #[tokio::test]
    async fn absent_chat_id_sends_nothing() {
        let (addr, received) = spawn_fake_telegram().await;
        let notifier = Notifier::new(Some("token-123".to_string()), format!("http://{addr}"));

        spawn_reading_alert(notifier, None, reading(95, ReadingType::Fasting));
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(received.lock().await.is_empty());
    }
}
