use mongodb::error::Error as DbError;
use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json,
    Request,
};
use thiserror::Error;

use crate::logging::RequestId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("{0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// A validation failure for a document of the given kind, naming the
    /// offending path.
    pub fn validation(kind: &str, path: impl AsRef<str>, reason: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "{kind} validation failed: {}: {}",
            path.as_ref(),
            reason.as_ref()
        ))
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// Malformed, mistyped or incomplete request bodies are validation failures.
impl From<json::Error<'_>> for Error {
    fn from(err: json::Error<'_>) -> Self {
        match err {
            json::Error::Io(e) => Self::Validation(format!("Could not read request body: {e}")),
            json::Error::Parse(_, e) => Self::Validation(format!("Invalid request body: {e}")),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        match self {
            Self::Validation(_) => (Status::BadRequest, self.to_string()).respond_to(req),
            Self::NotFound(_) => (Status::NotFound, self.to_string()).respond_to(req),
            Self::Db(err) => {
                error!("req{} database error: {err}", RequestId::of(req));
                Err(Status::InternalServerError)
            }
        }
    }
}
