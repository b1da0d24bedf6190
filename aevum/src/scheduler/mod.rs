/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Tick-driven single-CPU scheduling simulator.
//!
//! [`simulate`] runs a caller-supplied process list under one
//! [`Discipline`] and returns a [`SimulationReport`]: per-process outcomes in
//! completion order, their averages and the execution timeline.
//!
//! # Tick loop
//! All four disciplines share one loop.  Each iteration is exactly one tick:
//!
//! 1. **Admit** every pending process with `arrival_time <= now`, in input
//!    order.  Zero-burst processes complete on the spot.
//! 2. **Preempt on arrival** (STCF): if anything was admitted, the running
//!    process goes back into the heap at its current remaining time.
//! 3. **Dispatch** from the ready set if the CPU is idle.
//! 4. **Execute** one unit of the running process.
//! 5. **Complete** it if no work is left, otherwise **expire** its slice
//!    (RR): processes arriving at `now + 1` are queued first, then the
//!    incumbent goes to the tail.
//! 6. **Advance** the clock.
//!
//! The cost is O(total ticks) rather than O(events); every preemption and
//! tie-break is visible at unit granularity.
//!
//! | Discipline | Ready set | Preemption | Tie-break |
//! |---|---|---|---|
//! | FCFS | [`FifoQueue`] | never | admission order |
//! | SJF | [`ShortestBurstQueue`] | never | admission order |
//! | STCF | [`ShortestRemainingQueue`] | on every tick with an admission | `(remaining, arrival, pid)` |
//! | RR | [`FifoQueue`] | after `quantum` ticks | FIFO, newcomers ahead of the expired incumbent |
//!
//! # State
//! `simulate()` is stateless.  The clock, ready set, remaining-time table and
//! timeline are locals of one run, so repeated or concurrent calls never
//! observe each other.
//!
//! # Example
//! ```rust
//! use aevum::process::Process;
//! use aevum::scheduler::{simulate, Discipline};
//!
//! let procs = vec![Process::new(1, 5), Process::new(2, 3)];
//! let report = simulate(&procs, Discipline::RoundRobin { quantum: 2 })?;
//! assert_eq!(report.total_completion_time, 8);
//! # Ok::<(), aevum::scheduler::SchedulerError>(())
//! ```

pub mod error;
pub mod policy;

pub use error::SchedulerError;

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::metrics::Averages;
use crate::ordering::first_out_of_order;
use crate::process::{Pid, Process, ProcessOutcome, ProcessResult};

use policy::{FifoQueue, ReadyQueue, ShortestBurstQueue, ShortestRemainingQueue};

// ── Discipline ────────────────────────────────────────────────────────────────

/// Scheduling discipline for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Time-to-Completion-First, preemptive.
    Stcf,
    /// Round-Robin with a fixed time slice.
    #[serde(rename = "rr")]
    RoundRobin { quantum: u64 },
}

impl Discipline {
    /// Parse a discipline name (`fcfs`, `sjf`, `stcf`, `rr`, case-insensitive).
    ///
    /// `quantum` is required for `rr` and ignored otherwise.  A zero quantum
    /// is accepted here and rejected by [`simulate`].
    pub fn from_name(name: &str, quantum: Option<u64>) -> Result<Self, SchedulerError> {
        match name.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Discipline::Fcfs),
            "sjf" => Ok(Discipline::Sjf),
            "stcf" => Ok(Discipline::Stcf),
            "rr" => quantum
                .map(|quantum| Discipline::RoundRobin { quantum })
                .ok_or(SchedulerError::MissingQuantum),
            _ => Err(SchedulerError::UnknownDiscipline(name.to_string())),
        }
    }

    fn preemption(self) -> Preemption {
        match self {
            Discipline::Fcfs | Discipline::Sjf => Preemption::Never,
            Discipline::Stcf => Preemption::OnArrival,
            Discipline::RoundRobin { quantum } => Preemption::Quantum(quantum),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Fcfs => write!(f, "FCFS"),
            Discipline::Sjf => write!(f, "SJF"),
            Discipline::Stcf => write!(f, "STCF"),
            Discipline::RoundRobin { quantum } => write!(f, "RR (quantum {quantum})"),
        }
    }
}

/// When the running process must give up the CPU before it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preemption {
    Never,
    /// Re-select from the ready set on every tick that admitted a process.
    OnArrival,
    /// Yield after this many ticks of continuous execution.
    Quantum(u64),
}

// ── Report ────────────────────────────────────────────────────────────────────

/// A maximal stretch of consecutive ticks with the same occupant.
///
/// `pid` is `None` for ticks on which the CPU was idle.  Adjacent segments of
/// one timeline always differ in `pid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start: u64,
    pub len: u64,
    pub pid: Option<Pid>,
}

impl Segment {
    /// First tick after this segment.
    pub fn end(&self) -> u64 {
        self.start + self.len
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pid {
            Some(pid) => write!(f, "{}..{}:{}", self.start, self.end(), pid),
            None => write!(f, "{}..{}:-", self.start, self.end()),
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub discipline: Discipline,

    /// One row per input process, in completion order.
    pub outcomes: Vec<ProcessOutcome>,

    pub averages: Averages,

    /// Completion tick of the last process to finish.
    pub total_completion_time: u64,

    /// Ticks on which the CPU had nothing to run.
    pub idle_ticks: u64,

    /// Run-length encoded execution history, one entry per context switch or
    /// idle gap.
    pub timeline: Vec<Segment>,
}

impl SimulationReport {
    /// Outcome row for `pid`, if it was part of the run.
    pub fn outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.pid == pid)
    }

    /// Pids in the order they completed.
    pub fn completion_order(&self) -> Vec<Pid> {
        self.outcomes.iter().map(|o| o.pid).collect()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.discipline)?;
        writeln!(
            f,
            "{:>6} {:>8} {:>6} {:>8} {:>11} {:>11} {:>9}",
            "PID", "Arrival", "Burst", "Waiting", "Turnaround", "Completion", "Response"
        )?;
        for o in &self.outcomes {
            writeln!(
                f,
                "{:>6} {:>8} {:>6} {:>8} {:>11} {:>11} {:>9}",
                o.pid,
                o.arrival_time,
                o.burst_time,
                o.waiting_time,
                o.turnaround_time,
                o.completion_time,
                o.response_time
            )?;
        }
        writeln!(f, "Average waiting time:    {:.2}", self.averages.avg_waiting_time)?;
        writeln!(f, "Average turnaround time: {:.2}", self.averages.avg_turnaround_time)?;
        writeln!(f, "Average response time:   {:.2}", self.averages.avg_response_time)?;
        writeln!(f, "Total completion time:   {}", self.total_completion_time)?;
        writeln!(f, "Idle ticks:              {}", self.idle_ticks)?;
        let segments: Vec<String> = self.timeline.iter().map(ToString::to_string).collect();
        write!(f, "Timeline: {}", segments.join(" "))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Simulate `processes` under `discipline`.
///
/// `processes` must be non-empty, sorted non-decreasing by arrival time and
/// carry unique pids; the list is verified, never reordered.
///
/// # Errors
/// Returns a [`SchedulerError`] for any violated precondition.  No tick is
/// simulated in that case.
pub fn simulate(
    processes: &[Process],
    discipline: Discipline,
) -> Result<SimulationReport, SchedulerError> {
    check_preconditions(processes, discipline)?;

    info!(
        discipline = %discipline,
        process_count = processes.len(),
        total_burst = processes.iter().map(Process::burst_time).sum::<u64>(),
        "=== simulate() ==="
    );

    let preemption = discipline.preemption();
    let run = match discipline {
        Discipline::Fcfs | Discipline::RoundRobin { .. } => {
            TickLoop::new(processes, FifoQueue::new(), preemption).run()
        }
        Discipline::Sjf => TickLoop::new(processes, ShortestBurstQueue::new(), preemption).run(),
        Discipline::Stcf => {
            TickLoop::new(processes, ShortestRemainingQueue::new(), preemption).run()
        }
    };

    let averages = Averages::from_results(&run.results)?;
    let report = SimulationReport {
        discipline,
        outcomes: run.results.iter().map(ProcessOutcome::from).collect(),
        averages,
        total_completion_time: run
            .results
            .iter()
            .map(ProcessResult::completion_time)
            .max()
            .unwrap_or(0),
        idle_ticks: run
            .timeline
            .iter()
            .filter(|s| s.pid.is_none())
            .map(|s| s.len)
            .sum(),
        timeline: run.timeline,
    };

    info!(
        avg_waiting_time = report.averages.avg_waiting_time,
        avg_turnaround_time = report.averages.avg_turnaround_time,
        total_completion_time = report.total_completion_time,
        idle_ticks = report.idle_ticks,
        "=== Simulation complete ==="
    );

    Ok(report)
}

pub fn run_fcfs(processes: &[Process]) -> Result<SimulationReport, SchedulerError> {
    simulate(processes, Discipline::Fcfs)
}

pub fn run_sjf(processes: &[Process]) -> Result<SimulationReport, SchedulerError> {
    simulate(processes, Discipline::Sjf)
}

pub fn run_stcf(processes: &[Process]) -> Result<SimulationReport, SchedulerError> {
    simulate(processes, Discipline::Stcf)
}

pub fn run_rr(processes: &[Process], quantum: u64) -> Result<SimulationReport, SchedulerError> {
    simulate(processes, Discipline::RoundRobin { quantum })
}

fn check_preconditions(processes: &[Process], discipline: Discipline) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::NoProcesses);
    }
    if let Discipline::RoundRobin { quantum: 0 } = discipline {
        return Err(SchedulerError::InvalidQuantum(0));
    }
    if let Some(index) = first_out_of_order(processes) {
        return Err(SchedulerError::NotSortedByArrival {
            index,
            previous: processes[index - 1].arrival_time(),
            current: processes[index].arrival_time(),
        });
    }
    let mut seen = HashSet::with_capacity(processes.len());
    if let Some(dup) = processes.iter().find(|p| !seen.insert(p.pid())) {
        return Err(SchedulerError::DuplicatePid { pid: dup.pid() });
    }
    Ok(())
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

/// The process currently holding the CPU.
#[derive(Debug, Clone, Copy)]
struct Running<'a> {
    process: &'a Process,
    /// Ticks executed since this dispatch.
    slice: u64,
}

/// Raw output of one run, before aggregation.
struct RunOutput {
    results: Vec<ProcessResult>,
    timeline: Vec<Segment>,
}

/// Per-run simulation state.  Built, run once, dropped.
struct TickLoop<'a, Q: ReadyQueue<'a>> {
    clock: Clock,
    preemption: Preemption,

    /// Input list; `pending[next..]` has not been admitted yet.
    pending: &'a [Process],
    next: usize,

    ready: Q,
    running: Option<Running<'a>>,

    /// pid → remaining ticks, for processes that have executed at least once.
    remaining: HashMap<Pid, u64>,
    /// pid → tick of first dispatch.
    first_dispatch: HashMap<Pid, u64>,

    results: Vec<ProcessResult>,
    timeline: Vec<Segment>,
}

impl<'a, Q: ReadyQueue<'a>> TickLoop<'a, Q> {
    fn new(processes: &'a [Process], ready: Q, preemption: Preemption) -> Self {
        Self {
            clock: Clock::new(),
            preemption,
            pending: processes,
            next: 0,
            ready,
            running: None,
            remaining: HashMap::with_capacity(processes.len()),
            first_dispatch: HashMap::with_capacity(processes.len()),
            results: Vec::with_capacity(processes.len()),
            timeline: Vec::new(),
        }
    }

    fn run(mut self) -> RunOutput {
        while !self.is_finished() {
            let now = self.clock.time();

            let admitted = self.admit_through(now);
            if self.is_finished() {
                // only zero-burst arrivals were left
                break;
            }

            if admitted > 0 && self.preemption == Preemption::OnArrival {
                self.requeue_incumbent(now);
            }

            if self.running.is_none() {
                self.dispatch(now);
            }

            self.execute(now);
            self.clock.advance();
        }

        debug_assert_eq!(self.results.len(), self.pending.len());
        RunOutput {
            results: self.results,
            timeline: self.timeline,
        }
    }

    fn is_finished(&self) -> bool {
        self.next == self.pending.len() && self.ready.is_empty() && self.running.is_none()
    }

    fn remaining_of(&self, process: &Process) -> u64 {
        self.remaining
            .get(&process.pid())
            .copied()
            .unwrap_or(process.burst_time())
    }

    /// Move every pending process with `arrival_time <= t` into the ready set,
    /// in input order.  Returns how many entered the ready set.
    fn admit_through(&mut self, t: u64) -> usize {
        let pending = self.pending;
        let mut admitted = 0;

        while let Some(p) = pending.get(self.next).filter(|p| p.arrival_time() <= t) {
            self.next += 1;

            if p.burst_time() == 0 {
                warn!(pid = p.pid(), tick = p.arrival_time(), "zero-burst process completes on arrival");
                self.results.push(ProcessResult::finalize(
                    *p,
                    p.arrival_time(),
                    p.arrival_time(),
                ));
                continue;
            }

            debug!(pid = p.pid(), tick = t, burst = p.burst_time(), "admitted");
            self.ready.push(p, p.burst_time());
            admitted += 1;
        }

        admitted
    }

    /// Return the running process to the ready set so the next dispatch
    /// re-selects among it and the newcomers.
    fn requeue_incumbent(&mut self, now: u64) {
        if let Some(Running { process, .. }) = self.running.take() {
            let remaining = self.remaining_of(process);
            debug!(pid = process.pid(), tick = now, remaining, "arrival, re-evaluating incumbent");
            self.ready.push(process, remaining);
        }
    }

    fn dispatch(&mut self, now: u64) {
        if let Some(process) = self.ready.pop() {
            self.first_dispatch.entry(process.pid()).or_insert(now);
            debug!(
                pid = process.pid(),
                tick = now,
                remaining = self.remaining_of(process),
                "dispatched"
            );
            self.running = Some(Running { process, slice: 0 });
        }
    }

    /// Extend the open segment if `pid` still occupies the CPU, otherwise
    /// start a new one at `tick`.
    fn record(&mut self, tick: u64, pid: Option<Pid>) {
        match self.timeline.last_mut() {
            Some(last) if last.pid == pid && last.end() == tick => last.len += 1,
            _ => self.timeline.push(Segment { start: tick, len: 1, pid }),
        }
    }

    fn execute(&mut self, now: u64) {
        let Some(Running { process, slice }) = self.running.as_mut().map(|r| {
            r.slice += 1;
            *r
        }) else {
            self.record(now, None);
            return;
        };

        let pid = process.pid();
        self.record(now, Some(pid));

        let left = self.remaining_of(process) - 1;
        self.remaining.insert(pid, left);

        if left == 0 {
            let first = self.first_dispatch.get(&pid).copied().unwrap_or(now);
            let result = ProcessResult::finalize(*process, now + 1, first);
            debug!(
                pid,
                completion = result.completion_time(),
                waiting = result.waiting_time(),
                turnaround = result.turnaround_time(),
                "✓ completed"
            );
            self.results.push(result);
            self.running = None;
            return;
        }

        if let Preemption::Quantum(quantum) = self.preemption {
            if slice == quantum {
                // Processes arriving at the expiry boundary queue ahead of the
                // incumbent.
                self.admit_through(now + 1);
                debug!(pid, tick = now + 1, remaining = left, "quantum expired");
                self.ready.push(process, left);
                self.running = None;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
