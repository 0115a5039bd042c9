use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub terminal_qr: bool,
    #[serde(default = "default_false")]
    pub open_browser: bool,
}

// Default value functions
fn default_port() -> u16 { 8080 }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_max_upload_size() -> u64 { 32 * 1024 * 1024 } // 32MB
fn default_true() -> bool { true }
fn default_false() -> bool { false }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
                host: default_host(),
                max_upload_size: default_max_upload_size(),
            },
            ui: UiConfig {
                terminal_qr: default_true(),
                open_browser: default_false(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("qrlogo.toml").required(false))
            .add_source(config::Environment::with_prefix("QRLOGO"));

        // Override with individual environment variables
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(size) = std::env::var("MAX_UPLOAD_SIZE") {
            builder = builder.set_override("server.max_upload_size", size)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write("qrlogo.example.toml", toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}
