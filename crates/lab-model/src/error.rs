use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("invalid threshold {name}: {message}")]
    InvalidThreshold { name: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, LabError>;
