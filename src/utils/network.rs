use std::net::{SocketAddr, TcpListener};
use tracing::warn;

/// Find an available port in the given inclusive range
pub fn find_available_port(start_port: u16, end_port: u16) -> Option<u16> {
    for port in start_port..=end_port {
        if is_port_available(port) {
            return Some(port);
        }
    }
    None
}

/// Check if a specific port is available
pub fn is_port_available(port: u16) -> bool {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpListener::bind(addr).is_ok()
}

/// Get the preferred port, or the next available one if it is taken
pub fn get_available_port_or_default(preferred_port: u16) -> u16 {
    if is_port_available(preferred_port) {
        return preferred_port;
    }

    warn!("Port {} is not available, searching for alternative...", preferred_port);

    if let Some(port) = find_available_port(8000, 8999) {
        warn!("Using alternative port: {}", port);
        return port;
    }

    if let Some(port) = find_available_port(9000, 9999) {
        warn!("Using fallback port: {}", port);
        return port;
    }

    // Last resort: return preferred port anyway (will fail at bind time)
    warn!("No available ports found, returning preferred port {}", preferred_port);
    preferred_port
}
