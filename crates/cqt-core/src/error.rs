use thiserror::Error;

pub type CqtResult<T> = Result<T, CqtError>;

#[derive(Error, Debug)]
pub enum CqtError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
