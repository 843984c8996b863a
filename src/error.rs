use crate::{parse, report::Unavailable};
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Request(reqwest::Error),
    Json(serde_json::Error),
    Config(String),
    Unavailable(Unavailable),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<Unavailable> for Error {
    fn from(e: Unavailable) -> Self {
        Error::Unavailable(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Json(e) => write!(f, "Json error: {}", e),
            Error::Config(msg) => write!(f, "Config error: {msg}"),
            Error::Unavailable(e) => write!(f, "Menu unavailable: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
