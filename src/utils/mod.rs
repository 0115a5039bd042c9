pub mod network;
pub mod qrcode;
