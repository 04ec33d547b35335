//! Display controller: current message, clock and the refresh transition.
//!
//! # Responsibility
//! - Pick the initial message from the local calendar day.
//! - Run the `Idle -> Animating -> Idle` refresh state machine.
//! - Keep the displayed wall-clock time fresh via a repeating timer.
//! - Route share requests to the native sheet or the clipboard fallback.
//!
//! # Invariants
//! - `current_message` is always a record of the controller's catalog.
//! - At most one transition is pending; each completed transition swaps the
//!   message exactly once.
//! - No timer fires after `teardown`.
//! - Sharing never mutates display state.

use crate::catalog::Catalog;
use crate::config::{ConfigError, DisplayConfig};
use crate::display::presentation::{MessagePresentation, COPIED_NOTICE, COPY_FAILED_NOTICE};
use crate::display::timer::{TimerEvent, TimerKind, TimerQueue, TimerToken};
use crate::model::message::AffirmationMessage;
use crate::platform::{
    ClipboardError, Clock, RandomSource, ShareCapability, ShareError, ShareRequest, ShareServices,
};
use crate::selection::{daily_index, day_of_year, random_index};
use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};

/// Process-local display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub current_message: &'static AffirmationMessage,
    pub is_animating: bool,
    pub current_time: DateTime<FixedOffset>,
}

/// Refresh state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Animating,
}

/// Result of `request_new_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Transition armed; the swap happens at `swap_at`.
    Scheduled { swap_at: DateTime<FixedOffset> },
    /// A transition was already pending; nothing changed.
    Suppressed,
}

/// Result of `share_current_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    SharedNatively,
    /// Native sheet failed or was dismissed. Logged only; no fallback.
    NativeShareFailed(ShareError),
    CopiedToClipboard,
    ClipboardWriteFailed(ClipboardError),
}

/// Share plan for hosts that own the platform capabilities themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareDispatch {
    Native(ShareRequest),
    ClipboardFallback { text: String, notice: &'static str },
}

/// Owns display state and its timers.
///
/// Generic over the clock and random source so hosts and tests inject their
/// own; see `crate::platform`.
pub struct DisplayController<C: Clock, R: RandomSource> {
    catalog: &'static Catalog,
    config: DisplayConfig,
    clock: C,
    random: R,
    state: DisplayState,
    day_of_year: u32,
    timers: TimerQueue,
    clock_timer: Option<TimerToken>,
    pending_swap: Option<TimerToken>,
    torn_down: bool,
}

impl<C: Clock, R: RandomSource> DisplayController<C, R> {
    /// Builds the initial state and arms the clock tick.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config` fails validation.
    pub fn initialize(
        catalog: &'static Catalog,
        config: DisplayConfig,
        clock: C,
        random: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock_period = config.clock_period();

        let now = clock.now();
        let day = day_of_year(now.date_naive());
        let current_message = catalog.get_wrapped(daily_index(now.date_naive(), catalog.len()));

        let mut timers = TimerQueue::new();
        let clock_timer = timers.arm_repeating(TimerKind::ClockTick, now, clock_period);

        info!(
            "event=display_init module=display status=ok day_of_year={} message_id={} catalog_len={}",
            day,
            current_message.id,
            catalog.len()
        );

        Ok(Self {
            catalog,
            config,
            clock,
            random,
            state: DisplayState {
                current_message,
                is_animating: false,
                current_time: now,
            },
            day_of_year: day,
            timers,
            clock_timer: Some(clock_timer),
            pending_swap: None,
            torn_down: false,
        })
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn current_message(&self) -> &'static AffirmationMessage {
        self.state.current_message
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn current_time(&self) -> DateTime<FixedOffset> {
        self.state.current_time
    }

    /// Day-of-year observed at initialization.
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.state.is_animating {
            TransitionPhase::Animating
        } else {
            TransitionPhase::Idle
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Injected clock, for hosts that schedule their own polling.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Refreshes `current_time` from the clock. Nothing else changes.
    pub fn on_clock_tick(&mut self) {
        self.state.current_time = self.clock.now();
        debug!(
            "event=clock_tick module=display status=ok time={}",
            self.state.current_time.to_rfc3339()
        );
    }

    /// Starts a refresh transition unless one is already pending.
    pub fn request_new_message(&mut self) -> RefreshOutcome {
        if self.state.is_animating || self.torn_down {
            debug!("event=transition_suppressed module=display status=ok");
            return RefreshOutcome::Suppressed;
        }

        let now = self.clock.now();
        let delay = self.config.transition_delay();
        self.state.is_animating = true;
        self.pending_swap = Some(self.timers.arm_once(TimerKind::TransitionSwap, now, delay));
        info!(
            "event=transition_scheduled module=display status=ok delay_ms={}",
            self.config.transition_delay_ms
        );
        RefreshOutcome::Scheduled {
            swap_at: now + delay,
        }
    }

    /// Fires every timer due at the clock's current instant.
    ///
    /// Hosts call this from their event loop; the returned events are in
    /// firing order.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        if self.torn_down {
            return Vec::new();
        }
        let now = self.clock.now();
        let mut fired = Vec::new();
        while let Some(event) = self.timers.pop_due(now) {
            match event.kind {
                TimerKind::ClockTick => self.on_clock_tick(),
                TimerKind::TransitionSwap => self.complete_transition(event.token),
            }
            fired.push(event);
        }
        fired
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<DateTime<FixedOffset>> {
        self.timers.next_deadline()
    }

    /// Render-ready projection of the current state.
    pub fn presentation(&self) -> MessagePresentation {
        MessagePresentation::new(
            self.state.current_message,
            self.state.is_animating,
            self.state.current_time,
        )
    }

    /// Payload for the native share sheet.
    pub fn share_request(&self) -> ShareRequest {
        ShareRequest {
            title: self.config.share_title.clone(),
            text: self.state.current_message.text.to_string(),
            url: self.config.share_url.clone(),
        }
    }

    /// Shares the current message.
    ///
    /// The path is picked from capability presence alone: with a native
    /// sheet the clipboard is never touched, whatever the sheet returns.
    pub fn share_current_message(&self, services: &ShareServices<'_>) -> ShareOutcome {
        match services.share {
            ShareCapability::Native(sheet) => match sheet.share(&self.share_request()) {
                Ok(()) => {
                    info!(
                        "event=share_native module=display status=ok message_id={}",
                        self.state.current_message.id
                    );
                    ShareOutcome::SharedNatively
                }
                Err(err) => {
                    warn!(
                        "event=share_native module=display status=error message_id={} error={}",
                        self.state.current_message.id, err
                    );
                    ShareOutcome::NativeShareFailed(err)
                }
            },
            ShareCapability::Unavailable => {
                match services.clipboard.write_text(self.state.current_message.text) {
                    Ok(()) => {
                        services.notifier.notify(COPIED_NOTICE);
                        info!(
                            "event=share_clipboard module=display status=ok message_id={}",
                            self.state.current_message.id
                        );
                        ShareOutcome::CopiedToClipboard
                    }
                    Err(err) => {
                        services.notifier.notify(COPY_FAILED_NOTICE);
                        warn!(
                            "event=share_clipboard module=display status=error message_id={} error={}",
                            self.state.current_message.id, err
                        );
                        ShareOutcome::ClipboardWriteFailed(err)
                    }
                }
            }
        }
    }

    /// Share plan for a host that runs the capabilities itself.
    pub fn share_dispatch(&self, native_available: bool) -> ShareDispatch {
        if native_available {
            ShareDispatch::Native(self.share_request())
        } else {
            ShareDispatch::ClipboardFallback {
                text: self.state.current_message.text.to_string(),
                notice: COPIED_NOTICE,
            }
        }
    }

    /// Cancels the clock tick and any pending transition.
    ///
    /// Idempotent. A transition cut short leaves the current message as is
    /// and clears `is_animating`.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(token) = self.clock_timer.take() {
            self.timers.cancel(token);
        }
        if let Some(token) = self.pending_swap.take() {
            self.timers.cancel(token);
        }
        self.state.is_animating = false;
        self.torn_down = true;
        info!("event=display_teardown module=display status=ok");
    }

    fn complete_transition(&mut self, token: TimerToken) {
        if self.pending_swap != Some(token) {
            return;
        }
        self.pending_swap = None;
        let index = random_index(self.random.next_unit(), self.catalog.len());
        self.state.current_message = self.catalog.get_wrapped(index);
        self.state.is_animating = false;
        info!(
            "event=transition_complete module=display status=ok message_id={}",
            self.state.current_message.id
        );
    }
}

impl<C: Clock, R: RandomSource> Drop for DisplayController<C, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayController, RefreshOutcome, TransitionPhase};
    use crate::catalog::builtin_catalog;
    use crate::config::DisplayConfig;
    use crate::platform::{ManualClock, RandomSource};
    use chrono::{DateTime, Duration};

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn controller(at: &str, sample: f64) -> (ManualClock, DisplayController<ManualClock, Fixed>) {
        let clock = ManualClock::new(DateTime::parse_from_rfc3339(at).expect("rfc3339"));
        let controller = DisplayController::initialize(
            builtin_catalog(),
            DisplayConfig::default(),
            clock.clone(),
            Fixed(sample),
        )
        .expect("default config is valid");
        (clock, controller)
    }

    #[test]
    fn transition_swaps_only_after_delay() {
        let (clock, mut display) = controller("2026-02-01T10:00:00+00:00", 0.5);
        let before = display.current_message();

        assert!(matches!(
            display.request_new_message(),
            RefreshOutcome::Scheduled { .. }
        ));
        assert_eq!(display.phase(), TransitionPhase::Animating);

        clock.advance(Duration::milliseconds(299));
        display.pump();
        assert!(display.is_animating());
        assert_eq!(display.current_message(), before);

        clock.advance(Duration::milliseconds(1));
        display.pump();
        assert_eq!(display.phase(), TransitionPhase::Idle);
        assert_eq!(display.current_message().id, 8);
    }

    #[test]
    fn teardown_cancels_every_timer() {
        let (clock, mut display) = controller("2026-02-01T10:00:00+00:00", 0.0);
        display.request_new_message();
        display.teardown();

        clock.advance(Duration::minutes(5));
        assert!(display.pump().is_empty());
        assert!(display.next_deadline().is_none());
        assert!(!display.is_animating());
        assert_eq!(display.request_new_message(), RefreshOutcome::Suppressed);
    }

    #[test]
    fn rejects_invalid_config() {
        let clock = ManualClock::new(
            DateTime::parse_from_rfc3339("2026-02-01T10:00:00+00:00").expect("rfc3339"),
        );
        let config = DisplayConfig {
            clock_period_ms: 0,
            ..DisplayConfig::default()
        };
        assert!(
            DisplayController::initialize(builtin_catalog(), config, clock, Fixed(0.0)).is_err()
        );
    }
}
