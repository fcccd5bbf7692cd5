use crate::{Error, FrequencyModel, Result};

/// Cosine of the angle between the count vectors of two models.
///
/// 1.0 means the same proportions of ngrams, 0.0 means no ngrams in common.
pub fn similarity(a: &FrequencyModel, b: &FrequencyModel) -> Result<f64> {
    if a.ngram_size() != b.ngram_size() {
        return Err(Error::ShapeMismatch {
            left: a.ngram_size(),
            right: b.ngram_size(),
        });
    }
    if a.magnitude() == 0.0 || b.magnitude() == 0.0 {
        return Err(Error::UndefinedSimilarity);
    }

    let (smaller, larger) = if a.len() <= b.len() {
        (a.ngrams(), b.ngrams())
    } else {
        (b.ngrams(), a.ngrams())
    };

    // integer sum keeps the result independent of the operands order
    let dot: u128 = smaller
        .iter()
        .filter_map(|(ngram, &cnt)| larger.get(ngram).map(|&other| cnt as u128 * other as u128))
        .sum();

    Ok(dot as f64 / (a.magnitude() * b.magnitude()))
}

/// `1 - similarity`, 0.0 means identical proportions
#[inline]
pub fn distance(a: &FrequencyModel, b: &FrequencyModel) -> Result<f64> {
    similarity(a, b).map(|cosine| 1.0 - cosine)
}

impl FrequencyModel {
    #[inline]
    pub fn distance(&self, other: &Self) -> Result<f64> {
        distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NgramSize;
    use float_cmp::approx_eq;
    use rstest::*;

    const TEXTS: [&str; 3] = [
        "the quick brown fox jumps over the lazy dog",
        "der schnelle braune Fuchs springt über den faulen Hund",
        "aeiou aeiou\nuoiea",
    ];

    #[rstest(
        text,
        ngram_size,
        case(TEXTS[0], NgramSize::UNI),
        case(TEXTS[0], NgramSize::TRI),
        case(TEXTS[1], NgramSize::BI),
        case(TEXTS[2], NgramSize::new(5).unwrap()),
    )]
    fn test_self_distance(text: &str, ngram_size: NgramSize) {
        let a = FrequencyModel::from_text(text, ngram_size);
        let b = FrequencyModel::from_text(text, ngram_size);
        let d = distance(&a, &b).unwrap();
        assert!(approx_eq!(f64, d, 0.0, epsilon = 1e-12), "self distance {d}");
        assert!(approx_eq!(f64, a.distance(&a).unwrap(), 0.0, epsilon = 1e-12));
    }

    #[rstest(ngram_size, case(NgramSize::UNI), case(NgramSize::BI), case(NgramSize::TRI))]
    fn test_commutativity(ngram_size: NgramSize) {
        for first in TEXTS {
            for second in TEXTS {
                let a = FrequencyModel::from_text(first, ngram_size);
                let b = FrequencyModel::from_text(second, ngram_size);
                assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
            }
        }
    }

    #[test]
    fn test_disjoint_alphabets() {
        let a = FrequencyModel::build(["aaa"], NgramSize::UNI);
        let b = FrequencyModel::build(["bbb"], NgramSize::UNI);
        // only the line boundary is shared
        let expected = 1.0 - 1.0 / (10_f64.sqrt() * 10_f64.sqrt());
        assert!(approx_eq!(
            f64,
            distance(&a, &b).unwrap(),
            expected,
            epsilon = 1e-12
        ));

        let a = FrequencyModel::build(["aaa"], NgramSize::BI);
        let b = FrequencyModel::build(["bbb"], NgramSize::BI);
        assert_eq!(similarity(&a, &b).unwrap(), 0.0);
        assert_eq!(distance(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_known_cosine() {
        // unigrams: a=2 ' '=1 against a=1 b=1 ' '=1
        let a = FrequencyModel::build(["aa"], NgramSize::UNI);
        let b = FrequencyModel::build(["ab"], NgramSize::UNI);
        let expected = 3.0 / (5_f64.sqrt() * 3_f64.sqrt());
        assert!(approx_eq!(
            f64,
            similarity(&a, &b).unwrap(),
            expected,
            ulps = 2
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = FrequencyModel::from_text(TEXTS[0], NgramSize::BI);
        let b = FrequencyModel::from_text(TEXTS[0], NgramSize::TRI);
        assert!(matches!(
            distance(&a, &b),
            Err(Error::ShapeMismatch { left, right })
                if left == NgramSize::BI && right == NgramSize::TRI
        ));
    }

    #[test]
    fn test_undefined_similarity() {
        let empty = FrequencyModel::build(Vec::<&str>::new(), NgramSize::TRI);
        let full = FrequencyModel::from_text(TEXTS[0], NgramSize::TRI);
        assert!(matches!(
            distance(&empty, &full),
            Err(Error::UndefinedSimilarity)
        ));
        assert!(matches!(
            distance(&full, &empty),
            Err(Error::UndefinedSimilarity)
        ));
        assert!(matches!(
            distance(&empty, &empty),
            Err(Error::UndefinedSimilarity)
        ));
    }
}
