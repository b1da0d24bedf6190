/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core process data structures for the simulator.
//!
//! Two distinct types model the two sides of a simulation run:
//!
//! ```text
//! caller  ──(Vec<Process>)──►  simulate()  ──►  ProcessResult  ──►  ProcessOutcome (report row)
//!                                ↑ borrowed, read-only              ↑ owned, never mutated
//! ```
//!
//! # Ownership model
//! `Process` values are **borrowed** by the scheduler for the duration of a
//! run and are never mutated.  Remaining-time counters live in a side table
//! owned by the run (keyed by [`Pid`]), not on the record itself.

use serde::Serialize;

/// Caller-assigned process identifier.
///
/// Must be unique within one simulation run.  The numeric value carries no
/// scheduling meaning except as the last STCF tie-break.
pub type Pid = u32;

// ── Process (input) ───────────────────────────────────────────────────────────

/// One schedulable unit of work.
///
/// Times are unsigned, so a negative burst or arrival cannot be constructed.
/// Fields are private: once built, a `Process` is an immutable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Process {
    pid: Pid,
    burst_time: u64,
    arrival_time: u64,
}

impl Process {
    /// A process that is eligible to run from tick 0.
    pub fn new(pid: Pid, burst_time: u64) -> Self {
        Self::with_arrival(pid, burst_time, 0)
    }

    /// A process that becomes eligible to run at `arrival_time`.
    pub fn with_arrival(pid: Pid, burst_time: u64, arrival_time: u64) -> Self {
        Self {
            pid,
            burst_time,
            arrival_time,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Total CPU ticks required to run to completion.
    pub fn burst_time(&self) -> u64 {
        self.burst_time
    }

    /// Tick at which the process becomes eligible to be scheduled.
    pub fn arrival_time(&self) -> u64 {
        self.arrival_time
    }
}

// ── ProcessResult (output) ────────────────────────────────────────────────────

/// Outcome of one completed process.
///
/// Produced exactly once per process by the simulation loop via
/// [`ProcessResult::finalize`], which derives turnaround and waiting time from
/// the completion tick.  For every value built that way:
///
/// * `turnaround_time == waiting_time + burst_time`
/// * `completion_time == arrival_time + turnaround_time`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    process: Process,
    waiting_time: u64,
    turnaround_time: u64,
    completion_time: u64,
    response_time: u64,
}

impl ProcessResult {
    /// Build the result for `process` finishing at `completion_time`, first
    /// dispatched at `first_dispatch`.
    ///
    /// The caller guarantees `completion_time >= arrival + burst` and
    /// `first_dispatch >= arrival`; both hold for anything the tick loop
    /// produces.
    pub(crate) fn finalize(process: Process, completion_time: u64, first_dispatch: u64) -> Self {
        debug_assert!(
            completion_time >= process.arrival_time + process.burst_time,
            "pid {} completed at {} before it could have run its burst",
            process.pid,
            completion_time
        );
        debug_assert!(first_dispatch >= process.arrival_time);

        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            completion_time,
            response_time: first_dispatch - process.arrival_time,
        }
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Ticks spent ready but not running.
    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }

    /// Ticks from arrival to completion.
    pub fn turnaround_time(&self) -> u64 {
        self.turnaround_time
    }

    /// Tick immediately after the last executed tick.
    pub fn completion_time(&self) -> u64 {
        self.completion_time
    }

    /// Ticks from arrival to first dispatch.
    pub fn response_time(&self) -> u64 {
        self.response_time
    }
}

// ── ProcessOutcome (report row) ───────────────────────────────────────────────

/// Flat, serialisable per-process row of a
/// [`SimulationReport`](crate::scheduler::SimulationReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub pid: Pid,
    pub burst_time: u64,
    pub arrival_time: u64,
    pub waiting_time: u64,
    pub turnaround_time: u64,
    pub completion_time: u64,
    pub response_time: u64,
}

impl From<&ProcessResult> for ProcessOutcome {
    fn from(r: &ProcessResult) -> Self {
        Self {
            pid: r.process.pid,
            burst_time: r.process.burst_time,
            arrival_time: r.process.arrival_time,
            waiting_time: r.waiting_time,
            turnaround_time: r.turnaround_time,
            completion_time: r.completion_time,
            response_time: r.response_time,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
