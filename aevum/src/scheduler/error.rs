/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the simulator.
//!
//! Every variant is a precondition violation detected **before** the first
//! tick is simulated, so a caller never receives a partial report.  The
//! simulation itself is total: once the preconditions hold it always
//! terminates and cannot fail.
//!
//! **Do not** replace this with `anyhow::Error` in library paths; callers
//! match on the variants.

use thiserror::Error;

use crate::process::Pid;

/// Top-level error type returned by
/// [`simulate()`](super::simulate) and the aggregator.
///
/// | Variant | Raised by |
/// |---|---|
/// | `NoProcesses` | `simulate()`, `Averages::from_results()` |
/// | `InvalidQuantum` | `simulate()` with `Discipline::RoundRobin` |
/// | `NotSortedByArrival` | `simulate()` |
/// | `DuplicatePid` | `simulate()` |
/// | `MissingQuantum` / `UnknownDiscipline` | `Discipline::from_name()` |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The process list (or result list) is empty.
    #[error("process list is empty")]
    NoProcesses,

    /// Round-Robin was requested with a zero time quantum.
    #[error("time quantum must be greater than 0 (got {0})")]
    InvalidQuantum(u64),

    /// The input is not sorted non-decreasing by arrival time.
    ///
    /// `index` is the position of the first offending process; the core only
    /// verifies the order, sorting is left to the caller (see
    /// [`ordering::sort_by_arrival`](crate::ordering::sort_by_arrival)).
    #[error(
        "processes must be sorted by arrival time: process at index {index} arrives at {current}, \
         before its predecessor at {previous}"
    )]
    NotSortedByArrival {
        index: usize,
        previous: u64,
        current: u64,
    },

    /// Two input processes share the same pid.
    #[error("pid {pid} appears more than once in the process list")]
    DuplicatePid { pid: Pid },

    /// `rr` was named without a time quantum.
    #[error("round-robin requires a time quantum")]
    MissingQuantum,

    /// The discipline name is not recognised.
    #[error("unknown scheduling discipline: '{0}' (valid: fcfs, sjf, stcf, rr)")]
    UnknownDiscipline(String),
}
