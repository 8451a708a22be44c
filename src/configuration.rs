use std::env;
use thiserror::Error;

pub const REQUIRED_VARS: [&str; 4] = [
    "TWILIO_ACCOUNT_SID",
    "TWILIO_AUTH_TOKEN",
    "TWILIO_PHONE_NUMBER",
    "RECIPIENT_PHONE_NUMBER",
];

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct TwilioSettings {
    pub account_sid: String,
    pub auth_token: String,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub twilio: TwilioSettings,
    pub sender: String,
    pub recipient: String,
    pub port: u16,
    pub environment: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|&name| get(name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = get("TWILIO_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // presence of all four was checked above
        let required = |name: &str| get(name).unwrap_or_default();

        Ok(Self {
            twilio: TwilioSettings {
                account_sid: required("TWILIO_ACCOUNT_SID"),
                auth_token: required("TWILIO_AUTH_TOKEN"),
                api_base_url,
            },
            sender: required("TWILIO_PHONE_NUMBER"),
            recipient: required("RECIPIENT_PHONE_NUMBER"),
            port,
            environment: lookup("NODE_ENV"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("TWILIO_ACCOUNT_SID", "AC0123456789"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_PHONE_NUMBER", "whatsapp:+14155238886"),
            ("RECIPIENT_PHONE_NUMBER", "whatsapp:+15005550006"),
        ]
    }

    #[test]
    fn loads_complete_configuration_with_defaults() {
        let settings = Settings::from_lookup(lookup_from(&complete())).unwrap();

        assert_eq!(settings.twilio.account_sid, "AC0123456789");
        assert_eq!(settings.twilio.auth_token, "secret");
        assert_eq!(settings.twilio.api_base_url, DEFAULT_TWILIO_API_BASE_URL);
        assert_eq!(settings.sender, "whatsapp:+14155238886");
        assert_eq!(settings.recipient, "whatsapp:+15005550006");
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.environment, None);
    }

    #[test]
    fn reports_every_missing_variable_in_order() {
        let err = Settings::from_lookup(lookup_from(&[("TWILIO_AUTH_TOKEN", "secret")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingVariables(vec![
                "TWILIO_ACCOUNT_SID",
                "TWILIO_PHONE_NUMBER",
                "RECIPIENT_PHONE_NUMBER",
            ])
        );
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: TWILIO_ACCOUNT_SID, TWILIO_PHONE_NUMBER, RECIPIENT_PHONE_NUMBER"
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars = complete();
        vars[3] = ("RECIPIENT_PHONE_NUMBER", "");

        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["RECIPIENT_PHONE_NUMBER"]));
    }

    #[test]
    fn reads_optional_values() {
        let mut vars = complete();
        vars.push(("PORT", "8081"));
        vars.push(("NODE_ENV", "production"));
        vars.push(("TWILIO_API_BASE_URL", "http://127.0.0.1:9999/"));

        let settings = Settings::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(settings.port, 8081);
        assert_eq!(settings.environment.as_deref(), Some("production"));
        assert_eq!(settings.twilio.api_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn rejects_invalid_port() {
        let mut vars = complete();
        vars.push(("PORT", "http"));

        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
    }
}
