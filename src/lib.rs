//! # Character n-gram language identification
//!
//! Builds character n-gram frequency vectors from raw text, compares them with cosine similarity
//! and picks the nearest of a fixed set of reference [`Profile`](struct.Profile.html)s.
//! The same frequency structure drives a Markov-chain [`generate`](fn.generate.html)
//! of pseudo-words.
//!
//! # Example
//! ```rust
//! use lingram::{Classifier, NgramSize, ProfileSetBuilder};
//!
//! let profiles = ProfileSetBuilder::new(NgramSize::TRI)
//!     .profile("English", "the quick brown fox jumps over the lazy dog\n")
//!     .profile("German", "der schnelle braune fuchs springt ueber den faulen hund\n")
//!     .build();
//! let classifier = Classifier::new(profiles);
//!
//! let result = classifier.detect_text("the lazy fox").unwrap();
//! assert_eq!(result.language, "English");
//!
//! // or multithreaded (rayon for example), the profiles are read-only
//! use rayon::iter::IntoParallelRefIterator;
//! use rayon::iter::ParallelIterator;
//!
//! let texts = &["the dog", "der hund"];
//! let results: Vec<_> = texts
//!     .par_iter()
//!     .map(|text| classifier.detect_text(text))
//!     .collect();
//! ```
//!
//! # Pseudo-words
//! ```rust
//! use lingram::{generate, ContextTable};
//!
//! let table = ContextTable::build(["abc abd abe"], 2);
//! let words = generate(&table, 5);
//! assert!(words.chars().filter(|c| *c == ' ').count() >= 5);
//! ```

#[allow(unused_macros)]
macro_rules! ahashmap {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(ahashmap!(@single $rest)),*]));

    ($($key:expr => $value:expr,)+) => { ahashmap!($($key => $value),+) };
    ($($key:expr => $value:expr),*) => {
        {
            let _cap = ahashmap!(@count $($key),*);
            let mut _map = ::ahash::AHashMap::with_capacity(_cap);
            $(
                let _ = _map.insert($key, $value);
            )*
            _map.into()
        }
    };
}

mod classifier;
mod error;
mod generator;
mod model;
mod ngram_size;
mod ngrams;
mod similarity;

pub use classifier::{
    classify, Classification, Classifier, ClassifierConfig, Profile, ProfileSet,
    ProfileSetBuilder, Ranked, Verdict, DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use error::{Error, Result};
pub use generator::{generate, generate_with_rng, ContextTable, Transitions};
pub use model::FrequencyModel;
pub use ngram_size::NgramSize;
pub use ngrams::{is_boundary, normalize_line, NgramWindow, BOUNDARY_CHARS};
pub use similarity::{distance, similarity};
