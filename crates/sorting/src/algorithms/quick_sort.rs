use rand::Rng;

use super::common;

/// Quicksort with a uniformly random pivot, returning a new vector.
///
/// Elements are split three ways around the pivot, so runs of equal keys
/// never recurse.
pub fn sort<T, R>(data: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if data.len() < 2 {
        return data.to_vec();
    }

    let pivot = data[rng.random_range(0..data.len())].clone();
    let (low, same, high) = partition_3way(data, &pivot);

    let mut out = sort(&low, rng);
    out.extend(same);
    out.extend(sort(&high, rng));
    out
}

/// Median-of-three pivot for the top-level split; both sides then continue
/// with the random-pivot [`sort`].
pub fn sort_median3<T, R>(data: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if data.len() < 2 {
        return data.to_vec();
    }

    let pivot = common::median3(
        data[0].clone(),
        data[data.len() / 2].clone(),
        data[data.len() - 1].clone(),
    );
    let (low, same, high) = partition_3way(data, &pivot);

    let mut out = sort(&low, rng);
    out.extend(same);
    out.extend(sort(&high, rng));
    out
}

fn partition_3way<T: Ord + Clone>(data: &[T], pivot: &T) -> (Vec<T>, Vec<T>, Vec<T>) {
    let mut low = Vec::new();
    let mut same = Vec::new();
    let mut high = Vec::new();
    for item in data {
        match item.cmp(pivot) {
            std::cmp::Ordering::Less => low.push(item.clone()),
            std::cmp::Ordering::Equal => same.push(item.clone()),
            std::cmp::Ordering::Greater => high.push(item.clone()),
        }
    }
    (low, same, high)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn partition_splits_three_ways() {
        let (low, same, high) = partition_3way(&[5, 1, 5, 9, 3, 5, 7], &5);
        assert_eq!(low, vec![1, 3]);
        assert_eq!(same, vec![5, 5, 5]);
        assert_eq!(high, vec![9, 7]);
    }

    #[test]
    fn same_seed_same_result() {
        let data: Vec<i32> = (0..500).map(|x| (x * 7919) % 263).collect();
        let mut expected = data.clone();
        expected.sort();

        let a = sort(&data, &mut StdRng::seed_from_u64(7));
        let b = sort(&data, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, expected);
        assert_eq!(a, b);

        let c = sort_median3(&data, &mut StdRng::seed_from_u64(7));
        assert_eq!(c, expected);
    }

    #[test]
    fn sorted_and_constant_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let sorted: Vec<u32> = (0..2000).collect();
        assert_eq!(sort(&sorted, &mut rng), sorted);
        assert_eq!(sort_median3(&sorted, &mut rng), sorted);

        let constant = vec![4_u32; 1000];
        assert_eq!(sort(&constant, &mut rng), constant);
        assert_eq!(sort_median3(&constant, &mut rng), constant);
    }
}
