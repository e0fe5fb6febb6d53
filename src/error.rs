use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The option combination leaves nothing to draw.
    #[error("{title}: {message}")]
    Configuration { title: String, message: String },
}

impl CardError {
    pub fn configuration(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Short headline, suitable for an error card title.
    pub fn title(&self) -> &str {
        match self {
            Self::Configuration { title, .. } => title,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
