use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Liveness probe payload
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    pub timestamp: String,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

impl Health {
    pub fn ok(ip_address: String, echo: Option<String>, path_echo: Option<String>) -> Self {
        Self {
            status: 200,
            status_message: "OK".into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ip_address,
            echo,
            path_echo,
        }
    }
}
