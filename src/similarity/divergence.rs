//! Divergences between unigram distributions

use rustc_hash::FxHashMap;

/// A unigram distribution: term -> probability
pub type Distribution = FxHashMap<String, f64>;

/// Turn term counts into a probability distribution
///
/// An empty or all-zero table yields an empty distribution.
pub fn to_distribution<'a, I>(counts: I) -> Distribution
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let counts: Vec<(&str, f64)> = counts.into_iter().filter(|(_, c)| *c > 0.0).collect();
    let total: f64 = counts.iter().map(|(_, c)| c).sum();
    if total <= 0.0 {
        return Distribution::default();
    }

    let mut dist = Distribution::default();
    for (term, count) in counts {
        *dist.entry(term.to_string()).or_insert(0.0) += count / total;
    }
    dist
}

/// Kullback-Leibler divergence `KL(p ‖ q)`
///
/// Sums over the terms of `p` with positive probability. Terms missing from
/// `q` are skipped, so the result is finite whenever both inputs are.
pub fn kl_divergence(p: &Distribution, q: &Distribution) -> f64 {
    let mut divergence = 0.0;
    for (term, &pw) in p {
        if pw <= 0.0 {
            continue;
        }
        match q.get(term) {
            Some(&qw) if qw > 0.0 => divergence += pw * (pw / qw).ln(),
            _ => {}
        }
    }
    divergence
}

/// Jensen-Shannon divergence (natural log, bounded by `ln 2`)
pub fn js_divergence(p: &Distribution, q: &Distribution) -> f64 {
    let mut mixture = Distribution::default();
    for (term, &w) in p.iter().chain(q.iter()) {
        *mixture.entry(term.clone()).or_insert(0.0) += w / 2.0;
    }
    let divergence = (kl_divergence(p, &mixture) + kl_divergence(q, &mixture)) / 2.0;
    divergence.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, f64)]) -> Distribution {
        to_distribution(pairs.iter().copied())
    }

    #[test]
    fn test_to_distribution_sums_to_one() {
        let d = dist(&[("a", 2.0), ("b", 1.0), ("c", 1.0), ("z", 0.0)]);
        assert_eq!(d.len(), 3);
        assert!((d["a"] - 0.5).abs() < 1e-12);
        assert!((d.values().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(dist(&[]).is_empty());
    }

    #[test]
    fn test_kl_identical_is_zero() {
        let p = dist(&[("a", 1.0), ("b", 3.0)]);
        assert!(kl_divergence(&p, &p).abs() < 1e-12);
    }

    #[test]
    fn test_kl_is_positive_for_subset_support() {
        // Summary covers part of the document vocabulary
        let summary = dist(&[("a", 1.0)]);
        let doc = dist(&[("a", 1.0), ("b", 1.0)]);
        let kl = kl_divergence(&summary, &doc);
        assert!((kl - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_kl_skips_missing_terms() {
        let p = dist(&[("x", 1.0)]);
        let q = dist(&[("y", 1.0)]);
        assert_eq!(kl_divergence(&p, &q), 0.0);
    }

    #[test]
    fn test_js_symmetric_and_bounded() {
        let p = dist(&[("a", 1.0)]);
        let q = dist(&[("b", 1.0)]);

        let pq = js_divergence(&p, &q);
        let qp = js_divergence(&q, &p);
        assert!((pq - qp).abs() < 1e-12);
        assert!((pq - 2.0_f64.ln()).abs() < 1e-12);
        assert!(js_divergence(&p, &p).abs() < 1e-12);
    }
}
