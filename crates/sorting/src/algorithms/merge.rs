/// Merges two ascending slices into a new ascending vector.
///
/// Ties favor `left`: an element of `left` equal to one of `right` is
/// emitted first.
///
/// ```
/// assert_eq!(sorting::merge(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, |a, b| a < b)
}

pub fn merge_by<T, F>(left: &[T], right: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    merge_into_by(left, right, &mut out, &mut is_less);
    out
}

/// Same as [`merge_by`], writing into `out` after clearing it.
pub fn merge_into_by<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    out.clear();
    if left.is_empty() {
        out.extend_from_slice(right);
        return;
    }
    if right.is_empty() {
        out.extend_from_slice(left);
        return;
    }
    out.reserve(left.len() + right.len());

    let mut i = 0usize;
    let mut j = 0usize;
    while i < left.len() && j < right.len() {
        if is_less(&right[j], &left[i]) {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }

    // At most one side has a tail left.
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
