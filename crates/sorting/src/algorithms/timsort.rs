//! Run-based hybrid sort.
//!
//! The slice is cut into runs of `min_run` elements which are insertion
//! sorted, then adjacent runs are merged bottom-up with a window that doubles
//! every pass until it covers the whole slice.

use crate::HybridConfig;

use super::common;
use super::merge;

pub fn sort_by<'a, T, F>(
    data: &'a mut [T],
    config: HybridConfig,
    scratch: &mut Vec<T>,
    mut is_less: F,
) -> &'a mut [T]
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    let min_run = config.min_run();

    let mut start = 0usize;
    while start < n {
        let end = start.saturating_add(min_run - 1).min(n - 1);
        common::insertion_sort_range_by(data, start, end, &mut is_less);
        start = start.saturating_add(min_run);
    }

    let mut size = min_run;
    let mut passes = 0usize;
    while size < n {
        let mut start = 0usize;
        while start < n {
            let mid = start + size - 1;
            if mid + 1 >= n {
                // The right half is empty; this window was already sorted by an
                // earlier pass, and every later window starts further right.
                break;
            }
            let end = (start + 2 * size - 1).min(n - 1);

            let (left, right) = data[start..=end].split_at(size);
            merge::merge_into_by(left, right, scratch, &mut is_less);
            debug_assert_eq!(scratch.len(), end - start + 1);
            data[start..start + scratch.len()].clone_from_slice(scratch);

            start += 2 * size;
        }

        passes += 1;
        log::trace!("merge pass {passes} done: window={size} len={n}");
        size *= 2;
    }

    data
}
