use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Transport failure while delivering a reply.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    /// A reply referenced a link the transport cannot render.
    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
