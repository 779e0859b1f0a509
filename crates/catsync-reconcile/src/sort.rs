//! Stable top-down merge sort keyed by a rank function.

/// Returns a new vector with `items` ordered by ascending `rank`.
///
/// Splits at the midpoint, sorts each half recursively and merges, taking
/// from the left half whenever `rank(left) <= rank(right)`. Elements of equal
/// rank therefore keep their input order. Incomparable ranks (e.g. `NaN`) are
/// treated as "right first", which still keeps the output deterministic.
#[must_use]
pub fn stable_merge_sort<T, K, F>(items: &[T], rank: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    sort_slice(items, &rank)
}

fn sort_slice<T, K, F>(items: &[T], rank: &F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_slice(&items[..mid], rank);
    let right = sort_slice(&items[mid..], rank);
    merge(left, right, rank)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, rank: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => rank(l) <= rank(r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}
