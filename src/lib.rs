//! Two-sum variant: find two elements that add up to a target and return
//! their sum (which is always the target itself), or `0` when there is none.
//!
//! ```
//! use pair_sum::Solution;
//!
//! assert_eq!(Solution::find_pair_sum(&[2, 7, 11, 15], 9), 9);
//! assert_eq!(Solution::find_pair_sum(&[1, 2, 3], 100), 0);
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod solution;

pub use config::DemoConfig;
pub use error::InputError;
pub use input::{find_pair_sum_value, PairSumInput};
pub use solution::Solution;
