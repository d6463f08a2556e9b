use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::QuoteConfig;

/// Runs the quote-of-the-day script once at startup.
#[derive(Debug, Clone)]
pub struct QuoteSource {
    script: PathBuf,
    timeout: Duration,
    fallback: String,
}

impl QuoteSource {
    pub fn new(script: PathBuf, timeout: Duration, fallback: String) -> Self {
        Self {
            script,
            timeout,
            fallback,
        }
    }

    pub fn from_config(config: &QuoteConfig) -> Self {
        Self::new(
            config.script.clone(),
            Duration::from_millis(config.timeout_ms),
            config.fallback.clone(),
        )
    }

    /// The script's trimmed stdout, or the fallback on any failure.
    pub async fn fetch(self) -> String {
        match self.run().await {
            Some(quote) => quote,
            None => self.fallback,
        }
    }

    async fn run(&self) -> Option<String> {
        if !self.script.exists() {
            tracing::debug!(script = %self.script.display(), "quote script missing");
            return None;
        }

        let child = Command::new("bash")
            .arg(&self.script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();
        let child = match child {
            Ok(child) => child,
            Err(err) => {
                tracing::warn!("quote script failed to start: {}", err);
                return None;
            }
        };

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                tracing::warn!("quote script failed: {}", err);
                return None;
            }
            Err(_) => {
                tracing::warn!(timeout_ms = self.timeout.as_millis() as u64, "quote script timed out");
                return None;
            }
        };

        let quote = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if quote.is_empty() {
            None
        } else {
            Some(quote)
        }
    }
}

/// Top-bar rendering of a quote.
pub fn attributed(quote: &str, attribution: &str) -> String {
    format!("\"{}\" — {}", quote, attribution)
}
