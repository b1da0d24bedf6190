/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Workload file loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! discipline: rr          # optional: fcfs | sjf | stcf | rr
//! time_quantum: 2         # optional, required by rr
//! processes:
//!   - pid: 1
//!     burst_time: 5
//!     arrival_time: 0
//!   - pid: 2
//!     burst_time: 3       # arrival_time defaults to 0
//! ```
//!
//! Times are unsigned: a negative `burst_time` or `arrival_time` is rejected
//! while parsing, so an invalid [`Process`] never reaches the scheduler.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::process::{Pid, Process};
use crate::scheduler::Discipline;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkloadFile {
    discipline: Option<String>,
    time_quantum: Option<u64>,
    #[serde(default)]
    processes: Vec<ProcessEntry>,
}

/// Per-process fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessEntry {
    pid: Pid,
    burst_time: u64,
    #[serde(default)]
    arrival_time: u64,
}

// ── WorkloadConfig ────────────────────────────────────────────────────────────

/// A parsed workload: the process list plus an optional discipline choice.
///
/// The process list is kept in file order; sorting by arrival is left to the
/// caller.
#[derive(Debug, Clone, Default)]
pub struct WorkloadConfig {
    pub processes: Vec<Process>,

    /// Discipline named in the file, if any.
    pub discipline: Option<String>,

    /// Time quantum named in the file, if any.
    pub time_quantum: Option<u64>,
}

impl WorkloadConfig {
    /// Parses the workload file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid (including negative times and unknown keys).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading workload from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open workload file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
    }

    /// Parses a workload from an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: WorkloadFile = serde_yaml::from_str(content)?;

        let processes: Vec<Process> = file
            .processes
            .into_iter()
            .map(|e| Process::with_arrival(e.pid, e.burst_time, e.arrival_time))
            .collect();

        for p in &processes {
            debug!(
                "  Process: {} | Burst: {} | Arrival: {}",
                p.pid(),
                p.burst_time(),
                p.arrival_time()
            );
        }
        info!(
            process_count = processes.len(),
            discipline = ?file.discipline,
            time_quantum = ?file.time_quantum,
            "Workload loaded"
        );

        Ok(Self {
            processes,
            discipline: file.discipline,
            time_quantum: file.time_quantum,
        })
    }

    /// Resolves the discipline named in the file.
    ///
    /// Returns `Ok(None)` if the file names none.
    pub fn discipline(&self) -> Result<Option<Discipline>> {
        self.discipline
            .as_deref()
            .map(|name| Discipline::from_name(name, self.time_quantum))
            .transpose()
            .context("Invalid discipline in workload file")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
