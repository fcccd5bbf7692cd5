use crate::NgramSize;
use ::std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Can't compare models of different ngram sizes: {left} and {right}")]
    ShapeMismatch { left: NgramSize, right: NgramSize },
    #[error("Similarity is undefined for a model with zero magnitude")]
    UndefinedSimilarity,
    #[error("No reference profiles to classify against")]
    EmptyProfileSet,
    #[error("Ngram size must be at least 1, got {0}")]
    InvalidNgramSize(usize),
    #[error("Text source read error")]
    InputAcquisition(#[from] io::Error),
}

pub type Result<T, E = Error> = ::core::result::Result<T, E>;
