use qrcode::EcLevel;
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, AppResult};

/// QR error-correction strength, from weakest (L, ~7% recovery) to
/// strongest (H, ~30% recovery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EccLevel {
    L,
    M,
    Q,
    H,
}

impl EccLevel {
    pub fn to_ec_level(self) -> EcLevel {
        match self {
            EccLevel::L => EcLevel::L,
            EccLevel::M => EcLevel::M,
            EccLevel::Q => EcLevel::Q,
            EccLevel::H => EcLevel::H,
        }
    }
}

/// Parameters for rasterizing a payload as a QR symbol.
///
/// The defaults (level H, 500 px, 2-module quiet zone) are the ones the
/// compositor relies on: level H tolerates the ~30% module occlusion the
/// center logo causes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub payload: String,
    pub level: EccLevel,
    pub module_dimension: u32,
    pub margin_modules: u32,
}

impl EncodeRequest {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Callers must validate before handing the request to the encoder;
    /// the encoder is never invoked with an empty payload.
    pub fn validate(&self) -> AppResult<()> {
        if self.payload.is_empty() {
            return Err(AppError::Validation("payload must not be empty".to_string()));
        }
        if self.module_dimension == 0 {
            return Err(AppError::Validation(
                "module dimension must be at least 1 pixel".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            payload: String::new(),
            level: EccLevel::H,
            module_dimension: 500,
            margin_modules: 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub ip: String,
    pub port: u16,
}

impl ServerInfo {
    pub fn new(port: u16) -> Self {
        let name = hostname::get()
            .unwrap_or_else(|_| "unknown".into())
            .to_string_lossy()
            .to_string();

        let ip = local_ip_address::local_ip()
            .unwrap_or_else(|_| "127.0.0.1".parse().unwrap())
            .to_string();

        Self { name, ip, port }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}
