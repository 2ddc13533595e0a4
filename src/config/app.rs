// src/config/app.rs
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_LAST_TOPIC_FILE: &str = ".last_topic";

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Clone)]
pub struct AppConfig {
    pub email_sender: String,
    /// Secret for the sender account (app password for Gmail).
    pub email_password: String,
    pub email_receiver: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub last_topic_file: PathBuf,
    /// Fixed RNG seed for a reproducible pick.
    pub seed: Option<u64>,
    /// Where to dump Prometheus metrics at the end of a run.
    pub metrics_textfile: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| get(key).ok_or_else(|| anyhow!("Missing {key} env var"));

        let email_sender = required("EMAIL_SENDER")?;
        let email_password = required("EMAIL_PASSWORD")?;
        let email_receiver = required("EMAIL_RECEIVER")?;

        let smtp_port = match get("SMTP_PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid SMTP_PORT: {p}"))?,
            None => DEFAULT_SMTP_PORT,
        };
        let seed = get("DIGEST_SEED")
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("invalid DIGEST_SEED: {s}"))
            })
            .transpose()?;

        Ok(Self {
            email_sender,
            email_password,
            email_receiver,
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port,
            last_topic_file: get("LAST_TOPIC_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LAST_TOPIC_FILE)),
            seed,
            metrics_textfile: get("METRICS_TEXTFILE").map(PathBuf::from),
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("email_sender", &self.email_sender)
            .field("email_password", &"<redacted>")
            .field("email_receiver", &self.email_receiver)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("last_topic_file", &self.last_topic_file)
            .field("seed", &self.seed)
            .field("metrics_textfile", &self.metrics_textfile)
            .finish()
    }
}
