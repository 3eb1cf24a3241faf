pub mod bubble_sort;
pub mod common;
pub mod insertion_sort;
pub mod merge;
pub mod merge_sort;
pub mod quick_sort;
pub mod timsort;
