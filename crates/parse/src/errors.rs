use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("illegal token: {0:?}")]
    IllegalToken(String),
}
