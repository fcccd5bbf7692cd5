use super::{Profile, ProfileSet};
use crate::{FrequencyModel, NgramSize};
use compact_str::CompactString;

#[derive(Clone, Debug)]
enum Corpus {
    Text(String),
    Lines(Vec<String>),
    Model(FrequencyModel),
}

impl Corpus {
    fn into_model(self, ngram_size: NgramSize) -> FrequencyModel {
        match self {
            Corpus::Text(text) => FrequencyModel::from_text(&text, ngram_size),
            Corpus::Lines(lines) => FrequencyModel::build(lines, ngram_size),
            Corpus::Model(model) => model,
        }
    }
}

/// Collects `(language, corpus)` pairs, then counts every corpus once in [`build`](#method.build).
///
/// Profiles keep the order they were added in.
#[derive(Clone, Debug)]
pub struct ProfileSetBuilder {
    ngram_size: NgramSize,
    corpora: Vec<(CompactString, Corpus)>,
}

impl ProfileSetBuilder {
    #[inline]
    pub fn new(ngram_size: NgramSize) -> Self {
        Self {
            ngram_size,
            corpora: Vec::new(),
        }
    }

    /// Corpus text, split by `'\n'`
    #[inline]
    pub fn profile(mut self, name: impl Into<CompactString>, text: impl Into<String>) -> Self {
        self.corpora.push((name.into(), Corpus::Text(text.into())));
        self
    }

    /// Corpus already split into lines, e.g. read from a file
    #[inline]
    pub fn profile_lines<L: Into<String>>(
        mut self,
        name: impl Into<CompactString>,
        lines: impl IntoIterator<Item = L>,
    ) -> Self {
        let lines = lines.into_iter().map(Into::into).collect();
        self.corpora.push((name.into(), Corpus::Lines(lines)));
        self
    }

    /// Prebuilt model, its size is not checked until classification
    #[inline]
    pub fn profile_model(mut self, name: impl Into<CompactString>, model: FrequencyModel) -> Self {
        self.corpora.push((name.into(), Corpus::Model(model)));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    #[inline]
    fn build_profile(name: CompactString, corpus: Corpus, ngram_size: NgramSize) -> Profile {
        let model = corpus.into_model(ngram_size);
        tracing::debug!(
            language = %name,
            ngrams = model.len(),
            magnitude = model.magnitude(),
            "profile built"
        );
        Profile { name, model }
    }

    /// Counts all corpora, in parallel where threads are available
    pub fn build(self) -> ProfileSet {
        let ngram_size = self.ngram_size;

        #[cfg(not(target_family = "wasm"))]
        let profiles: Vec<Profile> = {
            use rayon::iter::{IntoParallelIterator, ParallelIterator};
            self.corpora
                .into_par_iter()
                .map(|(name, corpus)| Self::build_profile(name, corpus, ngram_size))
                .collect()
        };
        #[cfg(target_family = "wasm")]
        let profiles: Vec<Profile> = self
            .corpora
            .into_iter()
            .map(|(name, corpus)| Self::build_profile(name, corpus, ngram_size))
            .collect();

        tracing::debug!(profiles = profiles.len(), %ngram_size, "profile set built");

        ProfileSet::new(ngram_size, profiles)
    }
}
