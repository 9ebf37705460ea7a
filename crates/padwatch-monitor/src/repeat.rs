use std::time::{Duration, Instant};

use padwatch_gamepad::RepeatKind;
use smallvec::SmallVec;

/// Upper bound on re-deliveries per kind in a single drain.
pub const MAX_CATCH_UP: u32 = 64;

#[derive(Debug, Clone, Copy)]
struct RepeatSlot {
    next_due: Instant,
}

/// One recurring timer per [`RepeatKind`].
///
/// Timers are deadlines checked by the poll loop. A due timer yields its kind
/// once per interval until it is disarmed. Arming an armed kind is a no-op.
#[derive(Debug, Clone, Default)]
pub struct RepeatTimers {
    interval: Duration,
    slots: [Option<RepeatSlot>; 3],
}

impl RepeatTimers {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            slots: [None; 3],
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether arming has any effect.
    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Arms the timer for `kind`, first due one interval after `now`.
    /// Returns true when a new timer was started.
    pub fn arm(&mut self, kind: RepeatKind, now: Instant) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let slot = &mut self.slots[kind.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(RepeatSlot {
            next_due: now + self.interval,
        });
        true
    }

    /// Cancels the timer for `kind`. Returns true when it was armed.
    pub fn disarm(&mut self, kind: RepeatKind) -> bool {
        self.slots[kind.index()].take().is_some()
    }

    pub fn is_armed(&self, kind: RepeatKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn any_armed(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Earliest deadline among armed timers.
    pub fn next_due(&self) -> Option<Instant> {
        self.slots.iter().flatten().map(|s| s.next_due).min()
    }

    /// Emits a kind once for every period elapsed since its deadline,
    /// earliest first, and schedules its next firing. At most
    /// [`MAX_CATCH_UP`] periods are replayed per kind; beyond that the timer
    /// restarts one interval after `now`.
    pub fn drain_due(&mut self, now: Instant, mut sink: impl FnMut(RepeatKind)) {
        let mut due: SmallVec<[(Instant, RepeatKind); 8]> = SmallVec::new();
        for kind in RepeatKind::ALL {
            if let Some(slot) = self.slots[kind.index()].as_mut() {
                if slot.next_due > now {
                    continue;
                }
                let behind = now.duration_since(slot.next_due).as_nanos();
                let periods = behind / self.interval.as_nanos() + 1;
                let count = u32::try_from(periods)
                    .unwrap_or(u32::MAX)
                    .min(MAX_CATCH_UP);
                for i in 0..count {
                    due.push((slot.next_due + self.interval * i, kind));
                }
                slot.next_due += self.interval * count;
                if slot.next_due <= now {
                    slot.next_due = now + self.interval;
                }
            }
        }
        due.sort_by_key(|(at, _)| *at);
        for (_, kind) in due {
            sink(kind);
        }
    }
}
