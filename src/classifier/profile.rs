use crate::{FrequencyModel, NgramSize, Result};
use compact_str::CompactString;
use itertools::Itertools;

/// Reference model of one language
#[derive(Clone, Debug)]
pub struct Profile {
    pub name: CompactString,
    pub model: FrequencyModel,
}

impl Profile {
    #[inline]
    pub fn new(name: impl Into<CompactString>, model: FrequencyModel) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }
}

/// Distance of the unknown text to one profile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranked<'p> {
    pub language: &'p str,
    pub distance: f64,
}

impl Ranked<'_> {
    #[inline]
    pub fn confidence(&self) -> f64 {
        1.0 - self.distance
    }
}

/// Ordered reference profiles, immutable once built.
///
/// Order matters: it breaks ties between equal distances.
#[derive(Clone, Debug)]
pub struct ProfileSet {
    ngram_size: NgramSize,
    profiles: Vec<Profile>,
}

impl ProfileSet {
    #[inline]
    pub(super) fn new(ngram_size: NgramSize, profiles: Vec<Profile>) -> Self {
        Self {
            ngram_size,
            profiles,
        }
    }

    /// Size used for the corpora, unknown texts must be counted with it
    #[inline(always)]
    pub fn ngram_size(&self) -> NgramSize {
        self.ngram_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> ::core::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// First profile with this name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Distances in profiles order, fails on the first profile that can't be compared
    pub(super) fn distances(&self, unknown: &FrequencyModel) -> Result<Vec<f64>> {
        self.profiles
            .iter()
            .map(|profile| profile.model.distance(unknown))
            .collect()
    }

    /// All profiles sorted by ascending distance to `unknown`.
    ///
    /// Sorting is stable, equal distances keep profiles order.
    pub fn rank(&self, unknown: &FrequencyModel) -> Result<Vec<Ranked<'_>>> {
        let distances = self.distances(unknown)?;
        let ranked: Vec<_> = self
            .profiles
            .iter()
            .zip(distances)
            .map(|(profile, distance)| Ranked {
                language: profile.name.as_str(),
                distance,
            })
            .sorted_by(|a, b| a.distance.total_cmp(&b.distance))
            .collect();

        tracing::trace!(?ranked, "profiles ranked");

        Ok(ranked)
    }
}

impl<'p> IntoIterator for &'p ProfileSet {
    type Item = &'p Profile;
    type IntoIter = ::core::slice::Iter<'p, Profile>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
