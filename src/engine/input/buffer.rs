// Per-tick intent queue

use super::action::{Intent, IntentKind};

/// Intent tagged with the order it arrived in during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedIntent {
    pub intent: Intent,
    pub sequence: u64,
}

/// Collects intents between ticks and hands them over all at once
///
/// Only the last intent of each kind survives a drain, so two run intents in
/// the same tick resolve to whichever direction arrived last.
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: Vec<QueuedIntent>,
    next_sequence: u64,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intent for the next tick
    pub fn push(&mut self, intent: Intent) {
        self.pending.push(QueuedIntent {
            intent,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    /// Take everything queued, in arrival order, last writer wins per kind
    pub fn drain(&mut self) -> Vec<Intent> {
        let mut pending = std::mem::take(&mut self.pending);
        let mut seen: Vec<IntentKind> = Vec::with_capacity(4);
        let mut kept = Vec::with_capacity(pending.len().min(4));

        // Walk newest first so the latest of each kind is the one kept
        pending.sort_by(|a, b| b.sequence.cmp(&a.sequence));
        for queued in pending {
            let kind = queued.intent.kind();
            if !seen.contains(&kind) {
                seen.push(kind);
                kept.push(queued);
            }
        }

        kept.sort_by_key(|queued| queued.sequence);
        kept.into_iter().map(|queued| queued.intent).collect()
    }
}
