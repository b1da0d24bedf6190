/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Ready-set strategies, one per discipline.
//!
//! The tick loop in [`super`] is identical for every discipline; it only
//! talks to the ready set through [`ReadyQueue`].  What differs is how a
//! ready process is stored and which one comes out next:
//!
//! | Queue | Storage | `pop` returns |
//! |---|---|---|
//! | [`FifoQueue`] (FCFS, RR) | `VecDeque` | head |
//! | [`ShortestBurstQueue`] (SJF) | `Vec` in admission order | first minimum `burst_time` |
//! | [`ShortestRemainingQueue`] (STCF) | `BinaryHeap` | minimum `(remaining, arrival, pid)` |
//!
//! Preemption rules live in the loop, keyed off
//! [`Preemption`](super::Preemption); the queues never look at the clock.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::process::Process;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A per-run ready set.
///
/// `remaining` is the process's remaining work at the moment it is pushed.
/// Queues that do not order by remaining time ignore it.
pub trait ReadyQueue<'a> {
    fn push(&mut self, process: &'a Process, remaining: u64);

    fn pop(&mut self) -> Option<&'a Process>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── FCFS / RR ─────────────────────────────────────────────────────────────────

/// Strict FIFO in admission order.
#[derive(Debug, Default)]
pub struct FifoQueue<'a> {
    queue: VecDeque<&'a Process>,
}

impl<'a> FifoQueue<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ReadyQueue<'a> for FifoQueue<'a> {
    fn push(&mut self, process: &'a Process, _remaining: u64) {
        self.queue.push_back(process);
    }

    fn pop(&mut self) -> Option<&'a Process> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

// ── SJF ───────────────────────────────────────────────────────────────────────

/// Unordered ready set searched for the shortest total burst.
///
/// Kept in admission order so the linear scan's first minimum is also the
/// earliest-admitted one among equal bursts.
#[derive(Debug, Default)]
pub struct ShortestBurstQueue<'a> {
    ready: Vec<&'a Process>,
}

impl<'a> ShortestBurstQueue<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ReadyQueue<'a> for ShortestBurstQueue<'a> {
    fn push(&mut self, process: &'a Process, _remaining: u64) {
        self.ready.push(process);
    }

    fn pop(&mut self) -> Option<&'a Process> {
        // `min_by_key` returns the first of several equal minima.
        let (idx, _) = self
            .ready
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.burst_time())?;
        // `remove`, not `swap_remove`: admission order must survive.
        Some(self.ready.remove(idx))
    }

    fn len(&self) -> usize {
        self.ready.len()
    }
}

// ── STCF ──────────────────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) yields the smallest
/// `(remaining, arrival_time, pid)` first.
#[derive(Debug)]
struct RemainingEntry<'a> {
    remaining: u64,
    process: &'a Process,
}

impl RemainingEntry<'_> {
    fn key(&self) -> (u64, u64, u32) {
        (
            self.remaining,
            self.process.arrival_time(),
            self.process.pid(),
        )
    }
}

impl PartialEq for RemainingEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RemainingEntry<'_> {}

impl PartialOrd for RemainingEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RemainingEntry<'_> {
    // Reversed: smallest key is the heap's greatest element.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Min-priority ready set keyed by remaining time.
///
/// A preempted incumbent is pushed back with its current remaining time; no
/// entry is ever updated in place.
#[derive(Debug, Default)]
pub struct ShortestRemainingQueue<'a> {
    heap: BinaryHeap<RemainingEntry<'a>>,
}

impl<'a> ShortestRemainingQueue<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ReadyQueue<'a> for ShortestRemainingQueue<'a> {
    fn push(&mut self, process: &'a Process, remaining: u64) {
        self.heap.push(RemainingEntry { remaining, process });
    }

    fn pop(&mut self) -> Option<&'a Process> {
        self.heap.pop().map(|e| e.process)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<'a>(q: &mut dyn ReadyQueue<'a>) -> Vec<u32> {
        std::iter::from_fn(|| q.pop()).map(|p| p.pid()).collect()
    }

    #[test]
    fn fifo_pops_in_push_order() {
        let ps = [Process::new(3, 9), Process::new(1, 1), Process::new(2, 5)];
        let mut q = FifoQueue::new();
        for p in &ps {
            q.push(p, p.burst_time());
        }
        assert_eq!(q.len(), 3);
        assert_eq!(drain(&mut q), vec![3, 1, 2]);
        assert!(q.is_empty());
    }

    #[test]
    fn shortest_burst_picks_minimum() {
        let ps = [Process::new(1, 10), Process::new(2, 2), Process::new(3, 6)];
        let mut q = ShortestBurstQueue::new();
        for p in &ps {
            q.push(p, p.burst_time());
        }
        assert_eq!(drain(&mut q), vec![2, 3, 1]);
    }

    #[test]
    fn shortest_burst_ties_keep_admission_order() {
        // pids deliberately out of numeric order
        let ps = [
            Process::new(9, 4),
            Process::new(4, 4),
            Process::new(1, 7),
            Process::new(5, 4),
        ];
        let mut q = ShortestBurstQueue::new();
        for p in &ps {
            q.push(p, p.burst_time());
        }
        assert_eq!(drain(&mut q), vec![9, 4, 5, 1]);
    }

    #[test]
    fn shortest_remaining_orders_by_remaining_then_arrival_then_pid() {
        let ps = [
            Process::with_arrival(4, 8, 0),
            Process::with_arrival(2, 3, 1),
            Process::with_arrival(1, 3, 1),
            Process::with_arrival(3, 3, 0),
        ];
        let mut q = ShortestRemainingQueue::new();
        // pid 4 has been running: only 2 ticks left
        q.push(&ps[0], 2);
        for p in &ps[1..] {
            q.push(p, p.burst_time());
        }
        assert_eq!(drain(&mut q), vec![4, 3, 1, 2]);
    }

    #[test]
    fn shortest_remaining_reinserted_entry_uses_new_remaining() {
        let ps = [Process::new(1, 8), Process::new(2, 4)];
        let mut q = ShortestRemainingQueue::new();
        q.push(&ps[0], 8);
        q.push(&ps[1], 4);
        let first = q.pop().unwrap();
        assert_eq!(first.pid(), 2);
        // re-insert the incumbent with less work left than pid 1
        q.push(first, 1);
        assert_eq!(drain(&mut q), vec![2, 1]);
    }
}
