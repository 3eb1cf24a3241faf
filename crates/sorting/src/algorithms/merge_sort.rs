use super::merge;

/// Top-down merge sort returning a freshly allocated vector.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    if data.len() < 2 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = sort(&data[..mid]);
    let right = sort(&data[mid..]);
    merge::merge(&left, &right)
}
