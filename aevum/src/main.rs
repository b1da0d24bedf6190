/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use aevum::config::WorkloadConfig;
use aevum::ordering::{is_sorted_by_arrival, sort_by_arrival};
use aevum::process::{Pid, Process};
use aevum::scheduler::{simulate, Discipline, SimulationReport};

// ── CLI argument definition ───────────────────────────────────────────────────

/// CPU scheduling simulator.
///
/// Example:
///   aevum -p 1:5:0 -p 2:3:0 -a rr -q 2
///   aevum --workload workload.yaml --compare -q 4 --format yaml
#[derive(Debug, Parser)]
#[command(
    name = "aevum",
    about = "Tick-driven CPU scheduling simulator (FCFS, SJF, STCF, RR)",
    long_about = None,
)]
struct Cli {
    /// Path to a YAML workload file.
    #[arg(short = 'w', long = "workload")]
    workload: Option<PathBuf>,

    /// Inline process as PID:BURST[:ARRIVAL]; may be repeated.  Appended after
    /// the workload file's processes.
    #[arg(short = 'p', long = "process", value_parser = parse_process)]
    processes: Vec<Process>,

    /// Scheduling discipline (fcfs, sjf, stcf, rr).  Overrides the workload
    /// file; defaults to fcfs.
    #[arg(short = 'a', long = "discipline")]
    discipline: Option<String>,

    /// Round-Robin time quantum.  Overrides the workload file.
    #[arg(short = 'q', long = "quantum")]
    quantum: Option<u64>,

    /// Stable-sort processes by arrival time before simulating.
    #[arg(short = 's', long = "sort", default_value_t = false)]
    sort: bool,

    /// Run every discipline (RR only when a quantum is known).
    #[arg(short = 'c', long = "compare", default_value_t = false)]
    compare: bool,

    /// Report format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Yaml,
}

fn parse_process(s: &str) -> Result<Process, String> {
    let fields: Vec<&str> = s.split(':').collect();
    let num = |f: &str, what: &str| {
        f.trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid {what} '{f}' in '{s}': {e}"))
    };
    match fields.as_slice() {
        [pid, burst] => {
            let pid = pid.trim().parse::<Pid>().map_err(|e| format!("invalid pid '{pid}': {e}"))?;
            Ok(Process::new(pid, num(*burst, "burst")?))
        }
        [pid, burst, arrival] => {
            let pid = pid.trim().parse::<Pid>().map_err(|e| format!("invalid pid '{pid}': {e}"))?;
            Ok(Process::with_arrival(pid, num(*burst, "burst")?, num(*arrival, "arrival")?))
        }
        _ => Err(format!("expected PID:BURST[:ARRIVAL], got '{s}'")),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        workload   = ?cli.workload,
        inline     = cli.processes.len(),
        discipline = ?cli.discipline,
        quantum    = ?cli.quantum,
        sort       = cli.sort,
        compare    = cli.compare,
        "Configuration"
    );

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let reports = simulate_all(&cli)?;
    print!("{}", render(&reports, cli.format)?);
    Ok(())
}

/// Builds the workload from `cli` and simulates every requested discipline.
fn simulate_all(cli: &Cli) -> Result<Vec<SimulationReport>> {
    // ── Assemble the workload ─────────────────────────────────────────────────
    let mut workload = match &cli.workload {
        Some(path) => WorkloadConfig::load_from_file(path)?,
        None => WorkloadConfig::default(),
    };
    workload.processes.extend(cli.processes.iter().copied());
    if cli.discipline.is_some() {
        workload.discipline = cli.discipline.clone();
    }
    if cli.quantum.is_some() {
        workload.time_quantum = cli.quantum;
    }

    if workload.processes.is_empty() {
        bail!("no processes given (use --workload or --process)");
    }

    if cli.sort {
        sort_by_arrival(&mut workload.processes);
    } else if !is_sorted_by_arrival(&workload.processes) {
        warn!("processes are not sorted by arrival time; pass --sort to sort them");
    }

    // ── Pick disciplines ──────────────────────────────────────────────────────
    let disciplines = if cli.compare {
        let mut all = vec![Discipline::Fcfs, Discipline::Sjf, Discipline::Stcf];
        match workload.time_quantum {
            Some(quantum) => all.push(Discipline::RoundRobin { quantum }),
            None => warn!("no time quantum given, skipping RR in --compare"),
        }
        all
    } else {
        vec![workload.discipline()?.unwrap_or(Discipline::Fcfs)]
    };

    // ── Simulate ──────────────────────────────────────────────────────────────
    disciplines
        .into_iter()
        .map(|d| simulate(&workload.processes, d).with_context(|| format!("{d} simulation failed")))
        .collect()
}

fn render(reports: &[SimulationReport], format: Format) -> Result<String> {
    match format {
        Format::Table => {
            let blocks: Vec<String> = reports.iter().map(ToString::to_string).collect();
            Ok(format!("{}\n", blocks.join("\n\n")))
        }
        Format::Yaml => Ok(serde_yaml::to_string(reports)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_process_with_and_without_arrival() {
        assert_eq!(parse_process("1:5"), Ok(Process::new(1, 5)));
        assert_eq!(parse_process("2:3:4"), Ok(Process::with_arrival(2, 3, 4)));
        assert_eq!(parse_process(" 3 : 1 : 2 "), Ok(Process::with_arrival(3, 1, 2)));
    }

    #[test]
    fn parse_process_rejects_bad_input() {
        assert!(parse_process("1").is_err());
        assert!(parse_process("1:-5").is_err());
        assert!(parse_process("x:5").is_err());
        assert!(parse_process("1:2:3:4").is_err());
        assert!(parse_process("1:5:").is_err());
        assert!(parse_process(":5").is_err());
    }

    #[test]
    fn cli_parses_repeated_processes() {
        let cli = Cli::try_parse_from(["aevum", "-p", "1:5", "-p", "2:3:1", "-a", "rr", "-q", "2"])
            .unwrap();
        assert_eq!(cli.processes.len(), 2);
        assert_eq!(cli.discipline.as_deref(), Some("rr"));
        assert_eq!(cli.quantum, Some(2));
        assert_eq!(cli.format, Format::Table);
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aevum").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn compare_skips_rr_without_quantum() {
        let cli = cli(&["-p", "1:5", "-p", "2:3:1", "--compare"]);
        let names: Vec<String> = simulate_all(&cli)
            .unwrap()
            .iter()
            .map(|r| r.discipline.to_string())
            .collect();
        assert_eq!(names, vec!["FCFS", "SJF", "STCF"]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn compare_includes_rr_with_quantum() {
        let reports = simulate_all(&cli(&["-p", "1:5", "-p", "2:3", "-c", "-q", "2"])).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[3].discipline, Discipline::RoundRobin { quantum: 2 });
        assert_eq!(reports[3].total_completion_time, 8);
    }

    #[test]
    fn yaml_format_lists_every_report() {
        let cli = cli(&["-p", "1:5", "-p", "2:3", "-c", "-q", "2", "--format", "yaml"]);
        assert_eq!(cli.format, Format::Yaml);

        let text = render(&simulate_all(&cli).unwrap(), cli.format).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        let reports = doc.as_sequence().unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0]["discipline"]["name"].as_str(), Some("fcfs"));
        assert_eq!(reports[3]["discipline"]["name"].as_str(), Some("rr"));
        assert_eq!(reports[3]["discipline"]["quantum"].as_u64(), Some(2));
        assert_eq!(reports[3]["timeline"].as_sequence().unwrap().len(), 5);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn table_format_separates_reports() {
        let cli = cli(&["-p", "1:2", "--compare"]);
        let text = render(&simulate_all(&cli).unwrap(), cli.format).unwrap();
        assert_eq!(text.matches("Average waiting time:").count(), 3);
        assert!(text.contains("\n\nSJF\n"));
    }

    #[test]
    fn run_without_processes_fails() {
        assert!(run(cli(&["-a", "fcfs"])).is_err());
    }

    #[test]
    fn unknown_discipline_fails() {
        let err = simulate_all(&cli(&["-p", "1:2", "-a", "lottery"])).unwrap_err();
        assert!(format!("{err:#}").contains("lottery"));
    }
}
