//! Delayed brick reveals
//!
//! A struck brick is hidden immediately and reappears a fixed number of
//! simulation ticks later. Instead of a fire-and-forget timer, the reveal
//! tick is recorded per brick and checked as the tick counter advances, so
//! the whole thing stays deterministic and serializable-in-principle.

use super::contact::BodyId;

/// Tick counter plus the bricks waiting to reappear
#[derive(Debug, Default)]
pub struct RevealSchedule {
    now: u64,
    pending: Vec<PendingReveal>,
}

#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    body: BodyId,
    reveal_at: u64,
}

impl RevealSchedule {
    /// Current simulation tick
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of bricks waiting to reappear
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Record that a brick reappears `delay_ticks` from now.
    ///
    /// Entries are independent: hitting a brick again while it is hidden
    /// queues a second reveal, which is a no-op once the first has fired.
    pub fn schedule(&mut self, body: BodyId, delay_ticks: u32) {
        self.pending.push(PendingReveal {
            body,
            reveal_at: self.now + u64::from(delay_ticks),
        });
    }

    /// Advance one simulation tick and drain the bricks now due, ordered by
    /// (due tick, body id) so downstream iteration is deterministic.
    pub fn tick(&mut self) -> Vec<BodyId> {
        self.now += 1;
        let now = self.now;

        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.reveal_at <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });

        due.sort_by_key(|p| (p.reveal_at, p.body));
        due.into_iter().map(|p| p.body).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_exactly_on_delay() {
        let mut schedule = RevealSchedule::default();
        schedule.schedule(BodyId(5), 3);

        assert!(schedule.tick().is_empty());
        assert!(schedule.tick().is_empty());
        assert_eq!(schedule.tick(), vec![BodyId(5)]);
        assert_eq!(schedule.pending(), 0);
        assert!(schedule.tick().is_empty());
    }

    #[test]
    fn test_due_bricks_ordered_by_id() {
        let mut schedule = RevealSchedule::default();
        schedule.schedule(BodyId(9), 1);
        schedule.schedule(BodyId(2), 1);
        assert_eq!(schedule.tick(), vec![BodyId(2), BodyId(9)]);
    }

    #[test]
    fn test_staggered_reveals() {
        let mut schedule = RevealSchedule::default();
        schedule.schedule(BodyId(1), 1);
        schedule.tick(); // reveals 1, now = 1
        schedule.schedule(BodyId(2), 2); // due at 3

        assert!(schedule.tick().is_empty());
        assert_eq!(schedule.tick(), vec![BodyId(2)]);
    }

    #[test]
    fn test_duplicate_entries_both_fire() {
        let mut schedule = RevealSchedule::default();
        schedule.schedule(BodyId(4), 1);
        schedule.schedule(BodyId(4), 2);

        assert_eq!(schedule.tick(), vec![BodyId(4)]);
        assert_eq!(schedule.tick(), vec![BodyId(4)]);
    }
}
