use anyhow::{Context, Result};
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::{render_html, subject_for, Notifier};
use crate::config::AppConfig;
use crate::ingest::types::Article;

/// Authenticated SMTP over implicit TLS, one fixed recipient.
pub struct EmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailSender {
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let from = cfg
            .email_sender
            .parse::<Mailbox>()
            .with_context(|| format!("invalid EMAIL_SENDER {}", cfg.email_sender))?;
        let to = cfg
            .email_receiver
            .parse::<Mailbox>()
            .with_context(|| format!("invalid EMAIL_RECEIVER {}", cfg.email_receiver))?;

        let creds = Credentials::new(cfg.email_sender.clone(), cfg.email_password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)
            .with_context(|| format!("invalid SMTP_HOST {}", cfg.smtp_host))?
            .port(cfg.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self { mailer, from, to })
    }
}

/// One multipart/alternative message with a single HTML part.
pub fn build_message(from: &Mailbox, to: &Mailbox, article: &Article) -> Result<Message> {
    Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(subject_for(article))
        .multipart(MultiPart::alternative().singlepart(SinglePart::html(render_html(article))))
        .context("build email")
}

#[async_trait::async_trait]
impl Notifier for EmailSender {
    async fn send(&self, article: &Article) -> Result<()> {
        let msg = build_message(&self.from, &self.to, article)?;
        self.mailer.send(msg).await.context("send email")?;
        tracing::info!(to = %self.to, "email sent");
        Ok(())
    }
}
