//! Set similarity.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Jaccard similarity `|a ∩ b| / |a ∪ b|` of the distinct elements of two
/// sequences; `0.0` when both are empty.
pub fn jaccard<T, A, B>(a: A, b: B) -> f64
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let a: FxHashSet<T> = a.into_iter().collect();
    let b: FxHashSet<T> = b.into_iter().collect();

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests;
