use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::configuration::TwilioSettings;

#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("accountSid must start with AC")]
    InvalidAccountSid,

    #[error("authToken is required")]
    MissingAuthToken,

    /// The provider answered with a non-2xx status. `message` is the
    /// provider's own explanation.
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: Option<i64>,
        message: String,
        more_info: Option<String>,
    },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageReceipt {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: String,
    more_info: Option<String>,
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<MessageReceipt, TwilioError>;
}

/// Handle to the Twilio Messages REST API.
pub struct TwilioClient {
    http: Client,
    account_sid: String,
    auth_token: String,
    messages_url: String,
}

impl TwilioClient {
    pub fn new(settings: TwilioSettings) -> Result<Self, TwilioError> {
        if !settings.account_sid.starts_with("AC") {
            return Err(TwilioError::InvalidAccountSid);
        }
        if settings.auth_token.is_empty() {
            return Err(TwilioError::MissingAuthToken);
        }

        let messages_url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            settings.api_base_url.trim_end_matches('/'),
            settings.account_sid
        );

        Ok(Self {
            http: Client::new(),
            account_sid: settings.account_sid,
            auth_token: settings.auth_token,
            messages_url,
        })
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    #[instrument(skip(self, message), fields(to = %message.to))]
    async fn send(&self, message: OutboundMessage) -> Result<MessageReceipt, TwilioError> {
        let params = [
            ("To", message.to.as_str()),
            ("From", message.from.as_str()),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .http
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let receipt = response.json::<MessageReceipt>().await?;
            debug!(sid = %receipt.sid, status = ?receipt.status, "Twilio accepted message");
            return Ok(receipt);
        }

        let body = response.text().await?;
        Err(match serde_json::from_str::<TwilioErrorBody>(&body) {
            Ok(err) => TwilioError::Api {
                status,
                code: err.code,
                message: err.message,
                more_info: err.more_info,
            },
            Err(_) => TwilioError::Api {
                status,
                code: None,
                message: format!("Twilio responded with {status}"),
                more_info: None,
            },
        })
    }
}
