use crate::{Error, FrequencyModel, Result};
use ::std::io::BufRead;
use compact_str::CompactString;
use strum_macros::Display;

mod builder;
mod config;
mod profile;

pub use builder::ProfileSetBuilder;
pub use config::{ClassifierConfig, DEFAULT_CONFIDENCE_THRESHOLD};
pub use profile::{Profile, ProfileSet, Ranked};

/// Nearest profile to an unknown text
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub language: CompactString,
    pub distance: f64,
    /// `1 - distance`
    pub confidence: f64,
}

impl Classification {
    #[inline]
    fn new(language: CompactString, distance: f64) -> Self {
        Self {
            language,
            distance,
            confidence: 1.0 - distance,
        }
    }

    /// Wording for the result, the language stays the same whatever the threshold
    #[inline]
    pub fn verdict(&self, confidence_threshold: f64) -> Verdict {
        if self.distance < confidence_threshold {
            Verdict::Confident
        } else {
            Verdict::Likely
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Verdict {
    #[strum(to_string = "is")]
    Confident,
    #[strum(to_string = "most likely to be")]
    Likely,
}

/// Picks the profile with the minimum distance to `unknown`.
///
/// The first one wins between equal distances.
/// Any profile which can't be compared fails the whole classification.
pub fn classify(unknown: &FrequencyModel, profiles: &ProfileSet) -> Result<Classification> {
    if profiles.is_empty() {
        return Err(Error::EmptyProfileSet);
    }

    let distances = profiles.distances(unknown)?;
    // `min_by` keeps the first of equal elements
    let Some((profile, distance)) = profiles
        .iter()
        .zip(distances)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
    else {
        return Err(Error::EmptyProfileSet);
    };

    let classification = Classification::new(profile.name.clone(), distance);
    tracing::trace!(?classification, "classified");

    Ok(classification)
}

/// Owns the reference profiles and the result wording
#[derive(Clone, Debug)]
pub struct Classifier {
    profiles: ProfileSet,
    config: ClassifierConfig,
}

impl Classifier {
    #[inline]
    pub fn new(profiles: ProfileSet) -> Self {
        Self::with_config(profiles, ClassifierConfig::default())
    }

    #[inline]
    pub fn with_config(profiles: ProfileSet, config: ClassifierConfig) -> Self {
        Self { profiles, config }
    }

    #[inline(always)]
    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    #[inline(always)]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[inline]
    pub fn classify(&self, unknown: &FrequencyModel) -> Result<Classification> {
        classify(unknown, &self.profiles)
    }

    #[inline]
    pub fn rank(&self, unknown: &FrequencyModel) -> Result<Vec<Ranked<'_>>> {
        self.profiles.rank(unknown)
    }

    /// Counts `text` with the profiles ngram size and classifies it
    #[inline]
    pub fn detect_text(&self, text: &str) -> Result<Classification> {
        let unknown = FrequencyModel::from_text(text, self.profiles.ngram_size());
        self.classify(&unknown)
    }

    #[inline]
    pub fn detect_lines<L: AsRef<str>>(
        &self,
        lines: impl IntoIterator<Item = L>,
    ) -> Result<Classification> {
        let unknown = FrequencyModel::build(lines, self.profiles.ngram_size());
        self.classify(&unknown)
    }

    #[inline]
    pub fn detect_reader(&self, reader: impl BufRead) -> Result<Classification> {
        let unknown = FrequencyModel::from_reader(reader, self.profiles.ngram_size())?;
        self.classify(&unknown)
    }

    /// Wording of `classification` with the configured threshold
    #[inline]
    pub fn verdict(&self, classification: &Classification) -> Verdict {
        classification.verdict(self.config.confidence_threshold)
    }
}
