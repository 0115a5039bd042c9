use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("QR encoding error: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

pub type AppResult<T> = Result<T, AppError>;
