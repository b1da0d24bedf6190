/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! aevum – tick-driven CPU scheduling simulator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process     – Process input record, ProcessResult / ProcessOutcome output
//! ├── clock       – per-run simulated clock
//! ├── ordering    – arrival / burst sorting helpers
//! ├── config/     – YAML workload files
//! ├── scheduler/  – FCFS, SJF, STCF and RR over one shared tick loop
//! └── metrics/    – averages and closed-form FCFS
//! ```

pub mod clock;
pub mod config;
pub mod metrics;
pub mod ordering;
pub mod process;
pub mod scheduler;
