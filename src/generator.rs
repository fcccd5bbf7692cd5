use crate::{
    ngrams::{is_boundary, NgramString},
    FrequencyModel, NgramSize,
};
use ::std::collections::VecDeque;
use ahash::AHashMap;
use rand::Rng;

/// Observed successors of one context, sorted by char.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transitions {
    chars: Vec<char>,
    // running sums of counts, strictly increasing
    cumulative: Vec<usize>,
}

impl Transitions {
    fn new(mut successors: Vec<(char, usize)>) -> Self {
        successors.sort_unstable_by_key(|&(ch, _)| ch);

        let mut chars = Vec::with_capacity(successors.len());
        let mut cumulative = Vec::with_capacity(successors.len());
        let mut sum = 0;
        for (ch, cnt) in successors {
            sum += cnt;
            chars.push(ch);
            cumulative.push(sum);
        }

        Self { chars, cumulative }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.cumulative.last().copied().unwrap_or_default()
    }

    /// `(char, count)` pairs sorted by char
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        let mut prev = 0;
        self.chars
            .iter()
            .zip(self.cumulative.iter())
            .map(move |(&ch, &sum)| {
                let cnt = sum - prev;
                prev = sum;
                (ch, cnt)
            })
    }

    /// Char owning the `draw` slot, `draw` must be below [`total`](#method.total)
    #[inline]
    fn pick(&self, draw: usize) -> Option<char> {
        let idx = self.cumulative.partition_point(|&sum| sum <= draw);
        self.chars.get(idx).copied()
    }

    /// Random successor, each with a probability proportional to its count
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.pick(rng.random_range(0..total))
    }
}

/// Maps a context of `context_len` chars to the chars that followed it.
///
/// Same counts as a [`FrequencyModel`](struct.FrequencyModel.html) of size `context_len + 1`,
/// with each ngram split into its prefix and its last char.
#[derive(Clone, Debug)]
pub struct ContextTable {
    context_len: usize,
    contexts: AHashMap<NgramString, Transitions>,
}

impl ContextTable {
    pub fn from_model(model: &FrequencyModel) -> Self {
        let context_len = model.ngram_size().context();

        let mut grouped: AHashMap<NgramString, Vec<(char, usize)>> = AHashMap::new();
        for (ngram, cnt) in model.iter() {
            let mut chars = ngram.chars();
            let Some(last) = chars.next_back() else {
                continue;
            };
            grouped
                .entry(chars.as_str().into())
                .or_default()
                .push((last, cnt));
        }

        let contexts = grouped
            .into_iter()
            .map(|(context, successors)| (context, Transitions::new(successors)))
            .collect();

        Self {
            context_len,
            contexts,
        }
    }

    /// Builds the table directly from text, `context_len` is 2 for classic trigrams
    #[inline]
    pub fn build<L: AsRef<str>>(lines: impl IntoIterator<Item = L>, context_len: usize) -> Self {
        let model = FrequencyModel::build(lines, NgramSize::with_context(context_len));
        Self::from_model(&model)
    }

    #[inline(always)]
    pub fn context_len(&self) -> usize {
        self.context_len
    }

    #[inline]
    pub fn get(&self, context: &str) -> Option<&Transitions> {
        self.contexts.get(context)
    }

    /// Number of distinct contexts
    #[inline]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Next char after `context`, a space if the context was never seen
    #[inline]
    fn next_char<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> char {
        self.contexts
            .get(context)
            .and_then(|transitions| transitions.sample(rng))
            .unwrap_or(' ')
    }
}

/// Makes up text with `words` boundary chars, using the thread rng
#[inline]
pub fn generate(table: &ContextTable, words: usize) -> String {
    generate_with_rng(table, words, &mut rand::rng())
}

/// Random walk over `table` starting from a context of spaces.
///
/// Stops after `words` boundary chars (space or tab) have been emitted.
/// Unknown contexts emit a space, so every walk terminates.
pub fn generate_with_rng<R: Rng + ?Sized>(
    table: &ContextTable,
    words: usize,
    rng: &mut R,
) -> String {
    let mut text = String::new();
    let mut context: VecDeque<char> = VecDeque::from(vec![' '; table.context_len()]);
    let mut key = NgramString::default();
    let mut remaining = words;

    while remaining > 0 {
        key.clear();
        key.extend(context.iter());

        let ch = table.next_char(&key, rng);
        text.push(ch);
        if table.context_len() > 0 {
            context.pop_front();
            context.push_back(ch);
        }
        if is_boundary(ch) {
            remaining -= 1;
        }
    }

    tracing::trace!(words, chars = text.chars().count(), "generated text");

    text
}
