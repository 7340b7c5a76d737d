pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}
