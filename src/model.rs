use crate::{
    generator::ContextTable,
    ngrams::{NgramString, NgramWindow},
    NgramSize, Result,
};
use ::std::io::BufRead;
use rustc_hash::FxHashMap;

pub(crate) type ModelNgrams = FxHashMap<NgramString, usize>;

/// Occurrence counts of every `n`-char window of a text.
///
/// Built in one pass and read-only afterwards, so it can be shared between threads.
#[derive(Clone, Debug)]
pub struct FrequencyModel {
    ngram_size: NgramSize,
    ngrams: ModelNgrams,
    magnitude: f64,
}

impl FrequencyModel {
    /// Counts ngrams of the `lines`, each line normalized by [`normalize_line`](fn.normalize_line.html).
    ///
    /// The window is not reset between lines.
    pub fn build<L: AsRef<str>>(lines: impl IntoIterator<Item = L>, ngram_size: NgramSize) -> Self {
        let mut ngrams = ModelNgrams::default();
        let mut window = NgramWindow::new(ngram_size);
        for line in lines {
            window.feed_line(line.as_ref(), |ngram| {
                *ngrams.entry(ngram).or_default() += 1;
            });
        }

        Self::from_ngrams(ngrams, ngram_size)
    }

    /// Text is split only by `'\n'`, so a trailing newline adds an empty line
    #[inline]
    pub fn from_text(text: &str, ngram_size: NgramSize) -> Self {
        Self::build(text.split('\n'), ngram_size)
    }

    /// Fails before building anything if the reader fails
    pub fn from_reader(reader: impl BufRead, ngram_size: NgramSize) -> Result<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(lines, ngram_size))
    }

    #[inline]
    pub(crate) fn from_ngrams(ngrams: ModelNgrams, ngram_size: NgramSize) -> Self {
        let magnitude = Self::compute_magnitude(&ngrams);
        Self {
            ngram_size,
            ngrams,
            magnitude,
        }
    }

    /// L2 norm of the counts vector
    fn compute_magnitude(ngrams: &ModelNgrams) -> f64 {
        let sum_squares: u128 = ngrams
            .values()
            .map(|&cnt| (cnt as u128) * (cnt as u128))
            .sum();
        (sum_squares as f64).sqrt()
    }

    #[inline(always)]
    pub fn ngram_size(&self) -> NgramSize {
        self.ngram_size
    }

    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn count(&self, ngram: &str) -> usize {
        self.ngrams.get(ngram).copied().unwrap_or_default()
    }

    /// Number of distinct ngrams
    #[inline]
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// Number of windows counted
    #[inline]
    pub fn total(&self) -> usize {
        self.ngrams.values().sum()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ngrams.iter().map(|(ngram, &cnt)| (ngram.as_str(), cnt))
    }

    /// Nested view for generation, see [`ContextTable::from_model`](struct.ContextTable.html#method.from_model)
    #[inline]
    pub fn context_table(&self) -> ContextTable {
        ContextTable::from_model(self)
    }

    #[inline]
    pub(crate) fn ngrams(&self) -> &ModelNgrams {
        &self.ngrams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ::std::io::{self, BufReader, Cursor, Read};
    use float_cmp::approx_eq;
    use rstest::*;

    #[test]
    fn test_build_unigrams() {
        let model = FrequencyModel::build(["aa", "ab"], NgramSize::UNI);

        // windows: "a", "a", " ", "a", "b", " "
        assert_eq!(model.count("a"), 3);
        assert_eq!(model.count("b"), 1);
        assert_eq!(model.count(" "), 2);
        assert_eq!(model.len(), 3);
        assert_eq!(model.total(), 6);
        assert!(approx_eq!(f64, model.magnitude(), 14_f64.sqrt(), ulps = 1));
    }

    #[test]
    fn test_build_crosses_lines() {
        let model = FrequencyModel::build(["aa", "ab"], NgramSize::BI);

        assert_eq!(model.count(" a"), 2);
        assert_eq!(model.count("aa"), 1);
        assert_eq!(model.count("a "), 1);
        assert_eq!(model.count("ab"), 1);
        assert_eq!(model.count("b "), 1);
        assert_eq!(model.total(), 6);
    }

    #[rstest(ngram_size, case(NgramSize::UNI), case(NgramSize::BI), case(NgramSize::TRI))]
    fn test_keys_have_ngram_size(ngram_size: NgramSize) {
        let model = FrequencyModel::from_text("Über die  Brücke\ngehen wir\n", ngram_size);
        assert!(!model.is_empty());
        assert!(model
            .iter()
            .all(|(ngram, cnt)| ngram.chars().count() == ngram_size.get() && cnt > 0));
    }

    #[test]
    fn test_magnitude_matches_counts() {
        let model = FrequencyModel::from_text("the quick brown fox\njumps over", NgramSize::TRI);
        let expected = model
            .iter()
            .map(|(_, cnt)| (cnt * cnt) as f64)
            .sum::<f64>()
            .sqrt();
        assert!(approx_eq!(f64, model.magnitude(), expected, ulps = 2));
        assert_eq!(
            FrequencyModel::compute_magnitude(model.ngrams()),
            model.magnitude()
        );
    }

    #[test]
    fn test_empty_source() {
        let model = FrequencyModel::build(Vec::<String>::new(), NgramSize::TRI);
        assert!(model.is_empty());
        assert_eq!(model.magnitude(), 0.0);
        assert_eq!(model.total(), 0);
    }

    #[test]
    fn test_from_text_trailing_newline() {
        let with_newline = FrequencyModel::from_text("ab\n", NgramSize::UNI);
        let without_newline = FrequencyModel::from_text("ab", NgramSize::UNI);
        assert_eq!(with_newline.count(" "), 2);
        assert_eq!(without_newline.count(" "), 1);
    }

    #[test]
    fn test_from_reader() {
        let reader = Cursor::new("aa\nab\n");
        let model = FrequencyModel::from_reader(reader, NgramSize::UNI).unwrap();
        assert_eq!(model.count("a"), 3);
        assert_eq!(model.count(" "), 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("connection reset"))
        }
    }

    #[test]
    fn test_from_reader_error() {
        let result = FrequencyModel::from_reader(BufReader::new(FailingReader), NgramSize::TRI);
        assert!(matches!(result, Err(Error::InputAcquisition(_))));
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let reader = Cursor::new(vec![b'a', 0xFF, b'\n']);
        let result = FrequencyModel::from_reader(reader, NgramSize::TRI);
        assert!(matches!(result, Err(Error::InputAcquisition(_))));
    }
}
