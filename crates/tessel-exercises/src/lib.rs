//! Classic small algorithm exercises.
//!
//! - [`roman_to_int`] / [`int_to_roman`] Roman numeral conversion
//! - [`median_sorted_arrays`] median of two sorted arrays in logarithmic time
//! - [`longest_run`] / [`RunTracker`] longest block of a repeated character
//! - [`min_split_time`] best prefix/suffix split of tasks over two processors

pub mod median;
pub mod roman;
pub mod runs;
pub mod split;

pub use median::{MedianError, median_sorted_arrays};
pub use roman::{MAX_ROMAN, RomanError, int_to_roman, roman_to_int};
pub use runs::{RunTracker, longest_run};
pub use split::{best_split, min_split_time};
