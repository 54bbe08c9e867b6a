//! FIFO action queue with a single in-flight slot.
//!
//! The queue is a small state machine:
//!
//! ```text
//! Idle ──begin_next──▶ Resolving{seq} ──complete(seq)──▶ Settling
//!   ▲                                                     │
//!   └────────── release(None) / poll after cooldown ◀─────┘
//! ```
//!
//! `complete` only succeeds for the sequence number currently resolving, so
//! completing the same action twice is a no-op. While the queue is not
//! `Idle`, `action_in_progress()` is true and nothing is dequeued.

use std::collections::VecDeque;

use crate::state::BattlerId;

use super::Action;

/// Monotonic identifier of an enqueued action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSeq(pub u64);

/// An action waiting in (or popped from) the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueuedAction {
    pub seq: ActionSeq,
    pub action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum InFlight {
    Idle,
    Resolving { seq: ActionSeq, actor: BattlerId },
    /// Completed; waiting for the engine to release (or hold, if the battle ended).
    Settling,
    /// Released with a display delay; becomes idle at `until` (battle clock seconds).
    Cooling { until: f64 },
}

/// Ordered pending actions plus the single in-flight lock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionQueue {
    pending: VecDeque<QueuedAction>,
    in_flight: InFlight,
    next_seq: u64,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            in_flight: InFlight::Idle,
            next_seq: 0,
        }
    }

    /// Appends an action unconditionally.
    pub fn enqueue(&mut self, action: Action) -> ActionSeq {
        let seq = ActionSeq(self.next_seq);
        self.next_seq += 1;
        self.pending.push_back(QueuedAction { seq, action });
        seq
    }

    /// True from the moment an action is popped until the queue is released.
    pub fn action_in_progress(&self) -> bool {
        !matches!(self.in_flight, InFlight::Idle)
    }

    /// Actor of the action currently resolving.
    pub fn resolving_actor(&self) -> Option<BattlerId> {
        match self.in_flight {
            InFlight::Resolving { actor, .. } => Some(actor),
            _ => None,
        }
    }

    /// Sequence number of the action currently resolving.
    pub fn resolving_seq(&self) -> Option<ActionSeq> {
        match self.in_flight {
            InFlight::Resolving { seq, .. } => Some(seq),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &QueuedAction> {
        self.pending.iter()
    }

    /// Pops the front action if idle, locking the queue.
    pub(crate) fn begin_next(&mut self) -> Option<QueuedAction> {
        if self.action_in_progress() {
            return None;
        }
        let next = self.pending.pop_front()?;
        self.in_flight = InFlight::Resolving {
            seq: next.seq,
            actor: next.action.actor(),
        };
        Some(next)
    }

    /// Marks the resolving action as completed.
    ///
    /// Returns its actor the first time; `None` for any other sequence
    /// number or a repeated call.
    pub(crate) fn complete(&mut self, seq: ActionSeq) -> Option<BattlerId> {
        match self.in_flight {
            InFlight::Resolving {
                seq: current,
                actor,
            } if current == seq => {
                self.in_flight = InFlight::Settling;
                Some(actor)
            }
            _ => None,
        }
    }

    /// Releases a settled queue, immediately or once the clock reaches `until`.
    pub(crate) fn release(&mut self, until: Option<f64>) {
        if self.in_flight != InFlight::Settling {
            return;
        }
        self.in_flight = match until {
            Some(until) => InFlight::Cooling { until },
            None => InFlight::Idle,
        };
    }

    /// Finishes a cooldown whose deadline has passed.
    pub(crate) fn poll(&mut self, now: f64) {
        if let InFlight::Cooling { until } = self.in_flight
            && now >= until
        {
            self.in_flight = InFlight::Idle;
        }
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(actor: u32) -> Action {
        Action::attack(BattlerId(actor), BattlerId(9))
    }

    #[test]
    fn pops_in_fifo_order_one_at_a_time() {
        let mut queue = ActionQueue::new();
        let first = queue.enqueue(attack(1));
        queue.enqueue(attack(2));

        let popped = queue.begin_next().expect("front action");
        assert_eq!(popped.seq, first);
        assert!(queue.action_in_progress());

        // Locked while resolving.
        assert!(queue.begin_next().is_none());
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.complete(first), Some(BattlerId(1)));
        queue.release(None);

        let second = queue.begin_next().expect("second action");
        assert_eq!(second.action.actor(), BattlerId(2));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut queue = ActionQueue::new();
        let seq = queue.enqueue(attack(1));
        queue.begin_next();

        assert_eq!(queue.complete(seq), Some(BattlerId(1)));
        assert_eq!(queue.complete(seq), None);
    }

    #[test]
    fn complete_rejects_foreign_sequence() {
        let mut queue = ActionQueue::new();
        let seq = queue.enqueue(attack(1));
        let other = queue.enqueue(attack(2));
        queue.begin_next();

        assert_eq!(queue.complete(other), None);
        assert_eq!(queue.resolving_seq(), Some(seq));
    }

    #[test]
    fn cooldown_holds_lock_until_deadline() {
        let mut queue = ActionQueue::new();
        let seq = queue.enqueue(attack(1));
        queue.enqueue(attack(2));
        queue.begin_next();
        queue.complete(seq);
        queue.release(Some(2.0));

        queue.poll(1.5);
        assert!(queue.action_in_progress());
        assert!(queue.begin_next().is_none());

        queue.poll(2.0);
        assert!(!queue.action_in_progress());
        assert!(queue.begin_next().is_some());
    }

    #[test]
    fn settled_queue_stays_locked_without_release() {
        let mut queue = ActionQueue::new();
        let seq = queue.enqueue(attack(1));
        queue.enqueue(attack(2));
        queue.begin_next();
        queue.complete(seq);

        queue.poll(100.0);
        assert!(queue.action_in_progress());
        assert!(queue.begin_next().is_none());
    }
}
