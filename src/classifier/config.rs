/// Below this distance the language "is", otherwise it is "most likely to be"
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Distance below which a result is labeled [`Verdict::Confident`](enum.Verdict.html).
    /// Labeling only, never changes the selected language.
    pub confidence_threshold: f64,
}

impl Default for ClassifierConfig {
    #[inline]
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn confidence_threshold(mut self, threshold: f64) -> Self {
        debug_assert!(
            (0.0..=2.0).contains(&threshold),
            "Confidence threshold {threshold} is not a distance"
        );
        self.confidence_threshold = threshold;
        self
    }
}
