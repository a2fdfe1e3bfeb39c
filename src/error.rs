use derive_more::{Display, Error, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, From)]
pub enum Error {
    #[display("{message}")]
    #[from(ignore)]
    Custom { message: String },

    #[display("{_0}")]
    Io(std::io::Error),

    #[display("{_0}")]
    Json(serde_json::Error),

    #[display("{_0}")]
    OpenAi(async_openai::error::OpenAIError),

    #[display("{_0}")]
    Http(reqwest::Error),

    #[display("{_0}")]
    Addr(std::net::AddrParseError),
}

impl Error {
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom {
            message: message.into(),
        }
    }
}
