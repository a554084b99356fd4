// Problem: Two Sum (sum-returning variant)
// Difficulty: Easy
// URL: https://leetcode.com/problems/two-sum/

// Time Complexity: O(n)
// Space Complexity: O(n)

use std::collections::HashMap;

use tracing::trace;

pub struct Solution;

impl Solution {
    /// Given an array of integers nums and an integer target, find two
    /// numbers that add up to target and return their sum.
    ///
    /// Returns `0` when no such pair exists. A pair that genuinely sums to
    /// `0` is indistinguishable from "not found".
    pub fn find_pair_sum(nums: &[i32], target: i32) -> i32 {
        match Self::find_pair(nums, target) {
            Some((first, second)) => nums[first] + nums[second],
            None => 0,
        }
    }

    /// Single forward scan. The seen-map keeps the earliest index of each
    /// value; later duplicates never overwrite it.
    pub(crate) fn find_pair(nums: &[i32], target: i32) -> Option<(usize, usize)> {
        let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

        for (i, &num) in nums.iter().enumerate() {
            // An unrepresentable complement cannot have been seen.
            if let Some(complement) = target.checked_sub(num) {
                if let Some(&index) = seen.get(&complement) {
                    trace!(first = index, second = i, target, "pair found");
                    return Some((index, i));
                }
            }
            seen.entry(num).or_insert(i);
        }

        None
    }
}
