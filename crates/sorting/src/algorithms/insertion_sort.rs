use super::common;

pub fn sort<T: Ord + Clone>(data: &mut [T]) -> &mut [T] {
    if data.len() > 1 {
        let right = data.len() - 1;
        common::insertion_sort_range_by(data, 0, right, &mut |a: &T, b: &T| a < b);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_whole_slice() {
        let mut data = vec![5, -1, 3, 3, 0, 9, -7];
        assert_eq!(sort(&mut data), &[-7, -1, 0, 3, 3, 5, 9]);

        let mut empty: Vec<i32> = vec![];
        assert!(sort(&mut empty).is_empty());
    }
}
