use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::contact::{ContactMessage, DEMO_DELAY_MS};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// configuration
//
// these are baked in at build time, the same way the rest of the static site is.
// all three need to be present for real delivery, anything less means demo mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let present = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Some(EmailConfig {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
        })
    }
}

// messages

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendEmailReq {
    pub service_id: String,
    pub template_id: String,
    // the public key goes by user_id on the wire
    pub user_id: String,
    pub template_params: ContactMessage,
}

// what came back from a send that did not fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    // confirmation text from the mail service
    Sent(String),
    Simulated,
}

// mailers
//
// wasm futures are not Send, hence ?Send throughout
#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<Delivery>;
}

#[derive(Clone, Debug)]
pub struct EmailJs {
    config: EmailConfig,
}

impl EmailJs {
    pub fn new(config: EmailConfig) -> Self {
        EmailJs { config }
    }

    pub fn request(&self, message: &ContactMessage) -> SendEmailReq {
        SendEmailReq {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.clone(),
            template_params: message.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJs {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<Delivery> {
        let resp = Request::post(EMAILJS_SEND_URL)
            .json(&self.request(message))?
            .send()
            .await?;

        if resp.ok() {
            Ok(Delivery::Sent(resp.text().await?))
        } else {
            Err(anyhow::Error::msg(format!(
                "email service returned {}: {}",
                resp.status(),
                resp.text().await?
            )))
        }
    }
}

// stands in for the real service when it is not configured
#[derive(Clone, Debug)]
pub struct DemoMailer {
    delay_ms: u32,
}

impl Default for DemoMailer {
    fn default() -> Self {
        DemoMailer::with_delay(DEMO_DELAY_MS)
    }
}

impl DemoMailer {
    // a zero delay resolves immediately without touching the browser timer
    pub fn with_delay(delay_ms: u32) -> Self {
        DemoMailer { delay_ms }
    }
}

#[async_trait(?Send)]
impl Mailer for DemoMailer {
    async fn send(&self, _message: &ContactMessage) -> anyhow::Result<Delivery> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        Ok(Delivery::Simulated)
    }
}

// picks the mailer for the current configuration
#[derive(Clone, Debug)]
pub enum Transport {
    Demo(DemoMailer),
    EmailJs(EmailJs),
}

impl Transport {
    pub fn from_config(config: Option<EmailConfig>) -> Self {
        match config {
            Some(config) => Transport::EmailJs(EmailJs::new(config)),
            None => Transport::Demo(DemoMailer::default()),
        }
    }

    // only affects demo mode
    pub fn with_demo_delay(self, delay_ms: u32) -> Self {
        match self {
            Transport::Demo(_) => Transport::Demo(DemoMailer::with_delay(delay_ms)),
            other => other,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, Transport::Demo(_))
    }
}

#[async_trait(?Send)]
impl Mailer for Transport {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<Delivery> {
        match self {
            Transport::Demo(mailer) => mailer.send(message).await,
            Transport::EmailJs(mailer) => mailer.send(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig::from_parts(Some("service_1"), Some("template_1"), Some("key_1"))
            .expect("complete config")
    }

    #[test]
    fn config_requires_all_three_values() {
        assert!(EmailConfig::from_parts(Some("s"), Some("t"), Some("k")).is_some());
        assert!(EmailConfig::from_parts(None, Some("t"), Some("k")).is_none());
        assert!(EmailConfig::from_parts(Some("s"), None, Some("k")).is_none());
        assert!(EmailConfig::from_parts(Some("s"), Some("t"), None).is_none());
        assert!(EmailConfig::from_parts(Some("s"), Some("  "), Some("k")).is_none());
    }

    #[test]
    fn transport_follows_config() {
        assert!(Transport::from_config(None).is_simulated());
        assert!(!Transport::from_config(Some(config())).is_simulated());
    }

    #[test]
    fn demo_send_resolves_as_simulated() {
        let transport = Transport::from_config(None).with_demo_delay(0);

        let outcome = futures::executor::block_on(transport.send(&ContactMessage::default()));

        assert_eq!(outcome.expect("demo send never fails"), Delivery::Simulated);
    }

    #[test]
    fn demo_delay_leaves_real_delivery_alone() {
        let transport = Transport::from_config(Some(config())).with_demo_delay(0);

        assert!(!transport.is_simulated());
    }

    #[test]
    fn request_body_matches_the_service() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, nice site!".into(),
        };

        let body = serde_json::to_value(EmailJs::new(config()).request(&message))
            .expect("serializable request");

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "key_1",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello there, nice site!",
                },
            })
        );
    }
}
