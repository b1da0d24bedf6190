/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Aggregate metrics over a completed simulation.
//!
//! # Rounding
//! Averages are reported to two decimal places using **round-half-to-even**,
//! evaluated exactly on the rational mean `sum / n` with integer arithmetic.
//! Rounding the binary `f64` mean instead would make the tie cases depend on
//! representation error (e.g. `0.025` is stored slightly above the tie).
//!
//! | mean (exact) | reported |
//! |---|---|
//! | 1/8 = 0.125 | 0.12 |
//! | 3/8 = 0.375 | 0.38 |
//! | 1/40 = 0.025 | 0.02 |
//! | 2/3 | 0.67 |
//!
//! The module also carries the closed-form FCFS helpers
//! ([`calculate_waiting_time`], [`calculate_turnaround_time`],
//! [`sequential_fcfs`]) used to cross-check the tick engine.

use serde::Serialize;

use crate::process::{Process, ProcessResult};
use crate::scheduler::SchedulerError;

// ── Averages ──────────────────────────────────────────────────────────────────

/// Mean waiting / turnaround / response time, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
}

impl Averages {
    /// Reduce `results` to their averages.
    ///
    /// # Errors
    /// [`SchedulerError::NoProcesses`] if `results` is empty.
    pub fn from_results(results: &[ProcessResult]) -> Result<Self, SchedulerError> {
        if results.is_empty() {
            return Err(SchedulerError::NoProcesses);
        }
        let n = results.len() as u64;
        let sum = |f: fn(&ProcessResult) -> u64| results.iter().map(f).sum::<u64>();

        Ok(Self {
            avg_waiting_time: rounded_mean(sum(ProcessResult::waiting_time), n),
            avg_turnaround_time: rounded_mean(sum(ProcessResult::turnaround_time), n),
            avg_response_time: rounded_mean(sum(ProcessResult::response_time), n),
        })
    }
}

/// `sum / n` rounded half-to-even to 2 decimals.  `n` must be non-zero.
pub fn rounded_mean(sum: u64, n: u64) -> f64 {
    debug_assert!(n > 0);
    let scaled = u128::from(sum) * 100;
    let n = u128::from(n);
    let (mut hundredths, rem) = (scaled / n, scaled % n);
    match (2 * rem).cmp(&n) {
        std::cmp::Ordering::Greater => hundredths += 1,
        std::cmp::Ordering::Equal if hundredths % 2 == 1 => hundredths += 1,
        _ => {}
    }
    hundredths as f64 / 100.0
}

// ── Closed-form FCFS ──────────────────────────────────────────────────────────

/// Waiting time of a process that arrives at `arrival_time` and may start once
/// the previous process completes at `prev_completion_time`.
pub fn calculate_waiting_time(arrival_time: u64, prev_completion_time: u64) -> u64 {
    prev_completion_time.saturating_sub(arrival_time)
}

pub fn calculate_turnaround_time(burst_time: u64, waiting_time: u64) -> u64 {
    burst_time + waiting_time
}

/// FCFS computed without simulating ticks: each process starts when both it
/// has arrived and its predecessor has completed.
///
/// `processes` must already be sorted by arrival.  Zero-burst processes
/// complete at their arrival tick and do not hold up their successors, the
/// same as in the tick engine.  Results are in input order.
pub fn sequential_fcfs(processes: &[Process]) -> Vec<ProcessResult> {
    let mut prev_completion = 0;
    processes
        .iter()
        .map(|p| {
            if p.burst_time() == 0 {
                return ProcessResult::finalize(*p, p.arrival_time(), p.arrival_time());
            }
            let waiting = calculate_waiting_time(p.arrival_time(), prev_completion);
            let turnaround = calculate_turnaround_time(p.burst_time(), waiting);
            let completion = p.arrival_time() + turnaround;
            prev_completion = completion;
            ProcessResult::finalize(*p, completion, p.arrival_time() + waiting)
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
