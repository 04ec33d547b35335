//! Deadline-ordered timer queue driven by an external clock.
//!
//! # Responsibility
//! - Arm one-shot and repeating timers against wall-clock deadlines.
//! - Hand out cancellation tokens at arm time.
//! - Pop due timers in deadline order when the host pumps.
//!
//! # Invariants
//! - A cancelled token never fires.
//! - A one-shot timer fires at most once.
//! - A repeating timer fires at most once per pop; periods missed while the
//!   host was not pumping are skipped, not replayed.

use chrono::{DateTime, Duration, FixedOffset};

/// Cancellation token returned when a timer is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// What a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Periodic wall-clock refresh.
    ClockTick,
    /// End of the refresh transition window.
    TransitionSwap,
}

/// One fired timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub token: TimerToken,
    pub kind: TimerKind,
    /// Deadline the timer was due at.
    pub deadline: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
struct ArmedTimer {
    token: TimerToken,
    kind: TimerKind,
    deadline: DateTime<FixedOffset>,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    next_token: u64,
    armed: Vec<ArmedTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer firing once at `now + delay`.
    pub fn arm_once(
        &mut self,
        kind: TimerKind,
        now: DateTime<FixedOffset>,
        delay: Duration,
    ) -> TimerToken {
        self.arm(kind, now + delay, None)
    }

    /// Arms a timer firing every `period`, first at `now + period`.
    ///
    /// Periods shorter than one millisecond are raised to one millisecond.
    pub fn arm_repeating(
        &mut self,
        kind: TimerKind,
        now: DateTime<FixedOffset>,
        period: Duration,
    ) -> TimerToken {
        let period = period.max(Duration::milliseconds(1));
        self.arm(kind, now + period, Some(period))
    }

    /// Disarms `token`. Returns whether it was still armed.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.armed.len();
        self.armed.retain(|timer| timer.token != token);
        self.armed.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Earliest armed deadline.
    pub fn next_deadline(&self) -> Option<DateTime<FixedOffset>> {
        self.armed.iter().map(|timer| timer.deadline).min()
    }

    /// Pops the earliest timer due at `now`.
    ///
    /// Ties resolve in arm order. Repeating timers are re-armed at the first
    /// period boundary strictly after `now`.
    pub fn pop_due(&mut self, now: DateTime<FixedOffset>) -> Option<TimerEvent> {
        let position = self
            .armed
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.token))
            .map(|(position, _)| position)?;

        let timer = self.armed[position].clone();
        match timer.period {
            Some(period) => {
                self.armed[position].deadline = next_period_boundary(timer.deadline, period, now);
            }
            None => {
                self.armed.remove(position);
            }
        }
        let event = TimerEvent {
            token: timer.token,
            kind: timer.kind,
            deadline: timer.deadline,
        };
        Some(event)
    }

    fn arm(
        &mut self,
        kind: TimerKind,
        deadline: DateTime<FixedOffset>,
        period: Option<Duration>,
    ) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.armed.push(ArmedTimer {
            token,
            kind,
            deadline,
            period,
        });
        token
    }
}

// First `deadline + k * period` (k >= 1) strictly after `now`, in i64 millis.
fn next_period_boundary(
    deadline: DateTime<FixedOffset>,
    period: Duration,
    now: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    let period_ms = period.num_milliseconds().max(1);
    let behind_ms = (now - deadline).num_milliseconds().max(0);
    let steps = behind_ms / period_ms + 1;
    steps
        .checked_mul(period_ms)
        .and_then(Duration::try_milliseconds)
        .and_then(|offset| deadline.checked_add_signed(offset))
        .unwrap_or(now + Duration::milliseconds(period_ms))
}

#[cfg(test)]
mod tests {
    use super::{TimerKind, TimerQueue};
    use chrono::{DateTime, Duration, FixedOffset};

    fn t0() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-05-04T12:00:00+00:00").expect("rfc3339")
    }

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let mut queue = TimerQueue::new();
        queue.arm_once(TimerKind::TransitionSwap, t0(), Duration::milliseconds(300));

        assert!(queue.pop_due(t0() + Duration::milliseconds(299)).is_none());
        let event = queue
            .pop_due(t0() + Duration::milliseconds(300))
            .expect("due at deadline");
        assert_eq!(event.kind, TimerKind::TransitionSwap);
        assert!(queue.pop_due(t0() + Duration::seconds(10)).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut queue = TimerQueue::new();
        let token = queue.arm_repeating(TimerKind::ClockTick, t0(), Duration::seconds(60));
        assert!(queue.cancel(token));
        assert!(!queue.cancel(token));
        assert!(queue.pop_due(t0() + Duration::hours(1)).is_none());
    }

    #[test]
    fn repeating_timer_skips_missed_periods() {
        let mut queue = TimerQueue::new();
        queue.arm_repeating(TimerKind::ClockTick, t0(), Duration::seconds(60));

        let late = t0() + Duration::seconds(200);
        assert!(queue.pop_due(late).is_some());
        assert!(queue.pop_due(late).is_none());
        assert_eq!(queue.next_deadline(), Some(t0() + Duration::seconds(240)));
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.arm_repeating(TimerKind::ClockTick, t0(), Duration::seconds(1));
        queue.arm_once(TimerKind::TransitionSwap, t0(), Duration::milliseconds(300));

        let now = t0() + Duration::seconds(2);
        assert_eq!(queue.pop_due(now).map(|e| e.kind), Some(TimerKind::TransitionSwap));
        assert_eq!(queue.pop_due(now).map(|e| e.kind), Some(TimerKind::ClockTick));
        assert!(queue.pop_due(now).is_none());
    }

    #[test]
    fn millisecond_period_catches_up_after_a_month_gap() {
        let mut queue = TimerQueue::new();
        queue.arm_repeating(TimerKind::ClockTick, t0(), Duration::milliseconds(1));

        let late = t0() + Duration::days(30);
        assert!(queue.pop_due(late).is_some());
        assert!(queue.pop_due(late).is_none());
        assert_eq!(queue.next_deadline(), Some(late + Duration::milliseconds(1)));
    }

    #[test]
    fn catch_up_lands_on_the_period_grid() {
        let mut queue = TimerQueue::new();
        queue.arm_repeating(TimerKind::ClockTick, t0(), Duration::milliseconds(10));

        let late = t0() + Duration::days(300) + Duration::milliseconds(3);
        assert!(queue.pop_due(late).is_some());
        let next = queue.next_deadline().expect("still armed");
        assert!(next > late);
        assert_eq!((next - t0()).num_milliseconds() % 10, 0);
        assert!(next - late <= Duration::milliseconds(10));
    }
}
