/// Bubble sort without the early exit: always runs `n` passes.
pub fn sort_basic<T: Ord>(data: &mut [T]) -> &mut [T] {
    let n = data.len();
    for i in 0..n {
        for j in 0..(n - i).saturating_sub(1) {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
    data
}

/// Bubble sort that stops after the first pass without a swap.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    let n = data.len();
    for i in 0..n {
        let mut already_sorted = true;
        for j in 0..(n - i).saturating_sub(1) {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                already_sorted = false;
            }
        }
        if already_sorted {
            break;
        }
    }
    data
}
