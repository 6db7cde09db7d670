#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("value left the finite range: {0}")]
    NonFinite(&'static str),
    #[error("io error: {0}")]
    Io(String),
}

pub type AppResult<T> = Result<T, AppErrors>;
