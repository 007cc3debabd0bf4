//! Webhook secret configuration.

use crate::models::Secrets;
use serde::Deserialize;
use std::env;
use std::fmt;

/// Configuration for verifying incoming webhooks
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub secret: String,
    /// Previous secret, only set while a rotation is in progress
    pub old_secret: Option<String>,
    /// Hook URL as registered with the sender, part of every signed message
    pub hook_url: Option<String>,
}

impl WebhookConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let secret = env::var("WEBHOOK_SECRET").unwrap_or_default();

        let old_secret = env::var("WEBHOOK_OLD_SECRET")
            .ok()
            .filter(|v| !v.is_empty());

        let hook_url = env::var("WEBHOOK_HOOK_URL")
            .ok()
            .filter(|v| !v.is_empty());

        Self {
            secret,
            old_secret,
            hook_url,
        }
    }

    /// Current and previous secret, the previous one defaulting to the current
    pub fn secrets(&self) -> Secrets {
        match &self.old_secret {
            Some(old_secret) => Secrets::new(self.secret.clone(), old_secret.clone()),
            None => Secrets::single(self.secret.clone()),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &"<redacted>")
            .field("old_secret", &self.old_secret.as_ref().map(|_| "<redacted>"))
            .field("hook_url", &self.hook_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to synchronize tests that modify environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_webhook_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("WEBHOOK_SECRET");
            env::remove_var("WEBHOOK_OLD_SECRET");
            env::remove_var("WEBHOOK_HOOK_URL");
        }

        let config = WebhookConfig::from_env();
        assert_eq!(config.secret, "");
        assert!(config.old_secret.is_none());
        assert!(config.hook_url.is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_webhook_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("WEBHOOK_SECRET", "s1");
            env::set_var("WEBHOOK_OLD_SECRET", "s0");
            env::set_var("WEBHOOK_HOOK_URL", "https://example.com/hook");
        }

        let config = WebhookConfig::from_env();
        assert!(config.is_configured());
        assert_eq!(config.secrets(), Secrets::new("s1", "s0"));
        assert_eq!(config.hook_url.as_deref(), Some("https://example.com/hook"));

        unsafe {
            env::set_var("WEBHOOK_OLD_SECRET", "");
        }
        let config = WebhookConfig::from_env();
        assert_eq!(config.secrets(), Secrets::single("s1"));

        unsafe {
            env::remove_var("WEBHOOK_SECRET");
            env::remove_var("WEBHOOK_OLD_SECRET");
            env::remove_var("WEBHOOK_HOOK_URL");
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = WebhookConfig {
            secret: "top-secret".to_string(),
            old_secret: Some("older-secret".to_string()),
            hook_url: None,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("older-secret"));
    }
}
