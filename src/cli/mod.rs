use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::app::App;
use crate::core::config::AppConfig;
use crate::core::models::EncodeRequest;
use crate::render::{generate_composite, OUTPUT_FILENAME};
use crate::utils::network::get_available_port_or_default;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to encode; together with --logo, generates once and exits
    #[arg(short, long)]
    url: Option<String>,

    /// Logo image to composite into the center of the QR code
    #[arg(short, long)]
    logo: Option<PathBuf>,

    /// Output file for one-shot generation
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Port to listen on (will find next available port if this one is in use)
    #[arg(short, long)]
    port: Option<u16>,

    /// Disable the terminal QR code pointing at the web UI
    #[arg(long)]
    no_qr: bool,

    /// Open web browser automatically
    #[arg(long)]
    open: bool,

    /// Generate example configuration file
    #[arg(long)]
    generate_config: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        // Generate config file if requested
        if self.generate_config {
            AppConfig::save_example()?;
            println!("Generated example configuration file: qrlogo.example.toml");
            return Ok(());
        }

        // One-shot mode: encode, composite, write, exit
        if let (Some(url), Some(logo)) = (&self.url, &self.logo) {
            return self.generate_once(url, logo);
        }
        if self.url.is_some() || self.logo.is_some() {
            anyhow::bail!("--url and --logo must be provided together");
        }

        // Load configuration
        let mut config = AppConfig::load().unwrap_or_else(|e| {
            info!("Using default configuration ({})", e);
            AppConfig::default()
        });

        // Override config with CLI arguments
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.no_qr {
            config.ui.terminal_qr = false;
        }
        if self.open {
            config.ui.open_browser = true;
        }

        // Find an available port
        let available_port = get_available_port_or_default(config.server.port);

        // Create and run the application
        let app = App::new(
            available_port,
            config.ui.terminal_qr,
            config.ui.open_browser,
            config.server.max_upload_size,
        );

        app.run().await
    }

    fn generate_once(&self, url: &str, logo_path: &Path) -> Result<()> {
        let logo_bytes = std::fs::read(logo_path)?;
        let request = EncodeRequest::new(url);
        let png = generate_composite(&request, &logo_bytes)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME));
        std::fs::write(&output, &png)?;

        println!("Generated {} ({} bytes)", output.display(), png.len());
        Ok(())
    }
}
