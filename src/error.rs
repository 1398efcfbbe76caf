//! Crate-level error type

use crate::core::{FeedbackError, WordError};
use crate::knowledge::ConflictError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("word {0:?} is not in the word list")]
    NotInWordList(String),

    #[error("the word list is empty")]
    EmptyWordList,

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
