//! Entropy and information gain.

/// Shannon entropy (base 2) of a class distribution given as raw counts.
///
/// Classes with a count of zero don't contribute. An empty distribution has
/// an entropy of 0.
pub fn entropy_from_counts(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for &count in counts {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}

/// Entropy of `parent` minus the size-weighted entropies of `left` and `right`.
///
/// `left` and `right` are expected to partition `parent`.
pub fn information_gain(parent: &[usize], left: &[usize], right: &[usize]) -> f64 {
    let num_samples: usize = parent.iter().sum();
    if num_samples == 0 {
        return 0.0;
    }
    let num_samples = num_samples as f64;
    let weight_left = left.iter().sum::<usize>() as f64 / num_samples;
    let weight_right = right.iter().sum::<usize>() as f64 / num_samples;

    entropy_from_counts(parent)
        - weight_left * entropy_from_counts(left)
        - weight_right * entropy_from_counts(right)
}
