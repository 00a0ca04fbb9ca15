//! LINE account verification from the settings screen.

use std::time::Duration;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{AccountStatus, Entity, LineAccount};

/// The one message shown when verification fails.
pub const VERIFICATION_FAILED: &str =
    "Unable to verify this account. Check the channel ID and channel secret and try again.";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccountRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub basic_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_secret: String,
}

/// Simulate the verification round trip and build a connected account.
///
/// The wait cannot be cancelled and failures are not retried.
pub async fn verify_account(
    request: &VerifyAccountRequest,
    delay: Duration,
) -> Result<LineAccount, AppError> {
    tracing::info!(channel_id = %request.channel_id, "Verifying LINE account");
    tokio::time::sleep(delay).await;

    let channel_id = request.channel_id.trim();
    let channel_ok = !channel_id.is_empty() && channel_id.chars().all(|c| c.is_ascii_digit());
    if !channel_ok || request.channel_secret.trim().is_empty() {
        tracing::warn!(channel_id = %request.channel_id, "LINE account verification failed");
        return Err(AppError::Validation(VERIFICATION_FAILED.to_string()));
    }

    let mut account = LineAccount::blank();
    account.name = request.name.trim().to_string();
    account.basic_id = request.basic_id.trim().to_string();
    account.channel_id = request.channel_id.trim().to_string();
    account.status = AccountStatus::Connected;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(channel_id: &str, secret: &str) -> VerifyAccountRequest {
        VerifyAccountRequest {
            name: "Shop".into(),
            basic_id: "@shop".into(),
            channel_id: channel_id.into(),
            channel_secret: secret.into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_verification_waits_then_connects() {
        let started = tokio::time::Instant::now();
        let creds = request("1650000099", "s3cret");
        let account = verify_account(&creds, Duration::from_millis(1500))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(account.status, AccountStatus::Connected);
        assert_eq!(account.channel_id, "1650000099");
    }

    #[tokio::test]
    async fn test_verification_failure_message() {
        let err = verify_account(&request("abc", "s3cret"), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.message(), VERIFICATION_FAILED);

        let missing_secret = verify_account(&request("123", ""), Duration::ZERO).await;
        assert!(missing_secret.is_err());
    }
}
