use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use crate::core::models::ServerInfo;
use crate::utils::qrcode::terminal_qr_code;
use crate::web::server::WebServer;

pub struct App {
    port: u16,
    terminal_qr: bool,
    open_browser: bool,
    max_upload_size: u64,
    server_info: ServerInfo,
}

impl App {
    pub fn new(port: u16, terminal_qr: bool, open_browser: bool, max_upload_size: u64) -> Self {
        let server_info = ServerInfo::new(port);

        Self {
            port,
            terminal_qr,
            open_browser,
            max_upload_size,
            server_info,
        }
    }

    pub async fn run(&self) -> Result<()> {
        info!("QR code generator available at: {}", self.server_info.url());

        // Display a QR code for the generator itself if enabled
        if self.terminal_qr {
            match terminal_qr_code(&self.server_info.url()) {
                Ok(qr_code) => println!("{}", qr_code),
                Err(e) => error!("Failed to render terminal QR code: {}", e),
            }
        }

        // Open browser if requested
        if self.open_browser {
            if let Err(e) = open::that(self.server_info.url()) {
                error!("Failed to open browser: {}", e);
            }
        }

        // Start the web server
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let server = WebServer::new(addr, self.server_info.clone(), self.max_upload_size);

        // Setup graceful shutdown
        let shutdown_signal = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        // Run the server with graceful shutdown
        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    error!("Server error: {}", e);
                }
            }
            _ = shutdown_signal => {
                info!("Shutdown signal received");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
