/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidModifier(String),
    InvalidDieType(String),
    InvalidDieCount(String),
    InvalidRollType,
    UnknownCommand(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModifier(token) => write!(f, "invalid modifier: {token}"),
            Self::InvalidDieType(token) => write!(f, "invalid die type: {token}"),
            Self::InvalidDieCount(token) => write!(f, "invalid die count: {token}"),
            Self::InvalidRollType => write!(f, "That is not a valid roll type"),
            Self::UnknownCommand(token) => write!(f, "unrecognized command: {token}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
