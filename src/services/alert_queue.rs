use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::Alert;

/// Heap entry. `seq` is the enqueue counter; among equal priorities the
/// lower `seq` ranks higher, so ties drain first-in first-out.
#[derive(Debug, Clone)]
struct Queued {
    seq: u64,
    alert: Alert,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alert
            .priority
            .total_cmp(&other.alert.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Max-priority queue of pending alerts.
#[derive(Debug, Default)]
pub struct AlertQueue {
    heap: BinaryHeap<Queued>,
    next_seq: u64,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, alert: Alert) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued { seq, alert });
    }

    /// Removes every alert, highest priority first.
    pub fn drain_all(&mut self) -> Vec<Alert> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(q) = self.heap.pop() {
            out.push(q.alert);
        }
        out
    }

    /// Pending alerts in drain order. The queue is left untouched.
    pub fn snapshot(&self) -> Vec<Alert> {
        let mut view: Vec<&Queued> = self.heap.iter().collect();
        view.sort_unstable_by(|a, b| b.cmp(a));
        view.into_iter().map(|q| q.alert.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
