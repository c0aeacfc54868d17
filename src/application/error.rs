use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid expense pair '{0}', expected CATEGORY=AMOUNT")]
    MalformedPair(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
