/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Ordering helpers for process lists.
//!
//! The scheduler only *verifies* arrival order and rejects unsorted input;
//! callers that hold an unsorted list sort it here first.  The sort is
//! stable, so processes that arrive together keep their relative input order.

use crate::process::Process;

/// `true` if arrival times are non-decreasing.
pub fn is_sorted_by_arrival(processes: &[Process]) -> bool {
    first_out_of_order(processes).is_none()
}

/// Index of the first process that arrives before its predecessor.
pub(crate) fn first_out_of_order(processes: &[Process]) -> Option<usize> {
    processes
        .windows(2)
        .position(|w| w[1].arrival_time() < w[0].arrival_time())
        .map(|i| i + 1)
}

pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(Process::arrival_time);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(ps: &[Process]) -> Vec<u32> {
        ps.iter().map(Process::pid).collect()
    }

    #[test]
    fn empty_and_single_are_sorted() {
        assert!(is_sorted_by_arrival(&[]));
        assert!(is_sorted_by_arrival(&[Process::with_arrival(1, 3, 9)]));
    }

    #[test]
    fn equal_arrivals_are_sorted() {
        let ps = [Process::with_arrival(2, 1, 3), Process::with_arrival(1, 1, 3)];
        assert!(is_sorted_by_arrival(&ps));
    }

    #[test]
    fn reports_first_offending_index() {
        let ps = [
            Process::with_arrival(1, 1, 0),
            Process::with_arrival(2, 1, 4),
            Process::with_arrival(3, 1, 2),
            Process::with_arrival(4, 1, 1),
        ];
        assert!(!is_sorted_by_arrival(&ps));
        assert_eq!(first_out_of_order(&ps), Some(2));
    }

    #[test]
    fn sort_by_arrival_is_stable() {
        let mut ps = [
            Process::with_arrival(1, 5, 3),
            Process::with_arrival(2, 5, 0),
            Process::with_arrival(3, 5, 3),
            Process::with_arrival(4, 5, 0),
        ];
        sort_by_arrival(&mut ps);
        assert_eq!(pids(&ps), vec![2, 4, 1, 3]);
        assert!(is_sorted_by_arrival(&ps));
    }
}
