use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct JwtInfo {
    pub secret: SecretString,
    pub issuer: String,
    pub audience: String,
    pub expiration_hours: i64,
    /// QR attendance tokens are short-lived by design.
    pub qr_ttl_seconds: i64,
}

impl JwtInfo {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            secret: SecretString::new(Box::from(
                env::var("JWT_SECRET").map_err(|_| eyre::eyre!("JWT_SECRET must be set"))?,
            )),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "hostelry".into()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "hostelry-clients".into()),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "12".into())
                .parse()?,
            qr_ttl_seconds: env::var("QR_TOKEN_TTL_SECONDS")
                .unwrap_or_else(|_| "120".into())
                .parse()?,
        })
    }
}

/// External payment gateway (order creation + signature verification).
#[derive(Debug, Clone)]
pub struct GatewayInfo {
    pub api_url: String,
    pub key_id: String,
    pub key_secret: SecretString,
}

impl GatewayInfo {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            api_url: env::var("GATEWAY_API_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com/v1".into()),
            key_id: env::var("GATEWAY_KEY_ID")
                .map_err(|_| eyre::eyre!("GATEWAY_KEY_ID must be set"))?,
            key_secret: SecretString::new(Box::from(
                env::var("GATEWAY_KEY_SECRET")
                    .map_err(|_| eyre::eyre!("GATEWAY_KEY_SECRET must be set"))?,
            )),
        })
    }
}

/// Push delivery endpoint consumed by the background dispatcher.
#[derive(Debug, Clone)]
pub struct PushInfo {
    pub endpoint_url: Option<String>,
}

impl PushInfo {
    pub fn from_env() -> Self {
        Self {
            endpoint_url: env::var("PUSH_ENDPOINT_URL").ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt: JwtInfo,
    pub gateway: GatewayInfo,
    pub push: PushInfo,
    pub app_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt: JwtInfo::from_env()?,
            gateway: GatewayInfo::from_env()?,
            push: PushInfo::from_env(),
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),
        })
    }
}
