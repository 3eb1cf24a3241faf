/// Sorts the inclusive range `data[left..=right]` by insertion.
///
/// Only elements strictly greater than the key are shifted, so equal
/// elements keep their relative order. Ranges with fewer than two elements
/// are left untouched.
pub fn insertion_sort_range_by<T, F>(data: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if right <= left {
        return;
    }
    debug_assert!(right < data.len());

    for i in (left + 1)..=right {
        let key = data[i].clone();
        let mut j = i;
        while j > left && is_less(&key, &data[j - 1]) {
            data[j] = data[j - 1].clone();
            j -= 1;
        }
        data[j] = key;
    }
}

#[inline]
pub fn is_sorted_by<T, F>(data: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

#[inline]
pub fn median3<T: Ord>(a: T, b: T, c: T) -> T {
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if a < c {
        a
    } else if b < c {
        c
    } else {
        b
    }
}
