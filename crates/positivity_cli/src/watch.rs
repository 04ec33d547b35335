//! Live terminal view driven by a cooperative event loop.
//!
//! # Invariants
//! - The loop never blocks past the controller's next timer deadline.
//! - A running share helper is polled, never waited on.
//! - The terminal is restored even when the loop fails.

use crate::platform::{CommandShare, PendingShare, StatusLine, SystemClipboard};
use crate::render;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{info, warn};
use positivity_core::{
    Clock, DisplayController, RandomSource, RefreshOutcome, ShareCapability, ShareServices,
};
use std::io::{self, Write};
use std::time::Duration;

const MAX_POLL: Duration = Duration::from_millis(250);
const KEY_HINTS: &str = "[n] new message   [s] share   [q] quit";

enum Action {
    Refresh,
    Share,
    Quit,
    Ignore,
}

pub fn run<C: Clock, R: RandomSource>(
    controller: &mut DisplayController<C, R>,
    share: Option<CommandShare>,
) -> Result<()> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(err).context("Failed to setup terminal");
    }

    let result = event_loop(&mut stdout, LiveView::new(controller, share.as_ref()));

    let restored = execute!(stdout, LeaveAlternateScreen, cursor::Show);
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    restored.context("Failed to restore terminal")?;
    result
}

/// Controller plus the live view's share and status bookkeeping.
struct LiveView<'a, C: Clock, R: RandomSource> {
    controller: &'a mut DisplayController<C, R>,
    share: Option<&'a CommandShare>,
    clipboard: SystemClipboard,
    status: StatusLine,
    pending_share: Option<PendingShare>,
}

impl<'a, C: Clock, R: RandomSource> LiveView<'a, C, R> {
    fn new(controller: &'a mut DisplayController<C, R>, share: Option<&'a CommandShare>) -> Self {
        Self {
            controller,
            share,
            clipboard: SystemClipboard,
            status: StatusLine::default(),
            pending_share: None,
        }
    }

    /// Returns whether a transition started.
    fn refresh(&mut self) -> bool {
        matches!(
            self.controller.request_new_message(),
            RefreshOutcome::Scheduled { .. }
        )
    }

    /// Copies to the clipboard, or starts the share helper in the background.
    fn share(&mut self) {
        let Some(command) = self.share else {
            let services = ShareServices {
                share: ShareCapability::Unavailable,
                clipboard: &self.clipboard,
                notifier: &self.status,
            };
            self.controller.share_current_message(&services);
            return;
        };
        if self.pending_share.is_some() {
            self.status.set("Share already in progress.");
            return;
        }

        let message_id = self.controller.current_message().id;
        match command.spawn(&self.controller.share_request()) {
            Ok(pending) => {
                self.pending_share = Some(pending);
                self.status.set("Sharing...");
            }
            Err(err) => {
                warn!(
                    "event=share_native module=cli status=error message_id={} error={}",
                    message_id, err
                );
                self.status.set(format!("Share did not complete: {err}"));
            }
        }
    }

    /// Fires due timers and collects a finished share helper.
    ///
    /// Returns whether any timer fired.
    fn tick(&mut self) -> bool {
        let fired = !self.controller.pump().is_empty();
        let finished = self
            .pending_share
            .as_mut()
            .and_then(PendingShare::try_finish);
        if let Some(outcome) = finished {
            self.pending_share = None;
            match outcome {
                Ok(()) => {
                    info!("event=share_native module=cli status=ok");
                    self.status.set("Shared.");
                }
                Err(err) => {
                    warn!("event=share_native module=cli status=error error={err}");
                    self.status.set(format!("Share did not complete: {err}"));
                }
            }
        }
        fired
    }

    fn share_in_flight(&self) -> bool {
        self.pending_share.is_some()
    }

    fn poll_timeout(&self) -> Duration {
        let Some(deadline) = self.controller.next_deadline() else {
            return MAX_POLL;
        };
        let remaining = (deadline - self.controller.clock().now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        remaining.min(MAX_POLL)
    }
}

fn event_loop<C: Clock, R: RandomSource>(
    out: &mut impl Write,
    mut view: LiveView<'_, C, R>,
) -> Result<()> {
    let mut status_text = String::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            draw(out, &*view.controller, &status_text)?;
            needs_redraw = false;
        }

        if event::poll(view.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                match action_for(&key) {
                    Action::Quit => break,
                    Action::Refresh => needs_redraw |= view.refresh(),
                    Action::Share => {
                        view.share();
                        needs_redraw = true;
                    }
                    Action::Ignore => {}
                }
            } else {
                needs_redraw = true;
            }
        }

        needs_redraw |= view.tick();
        if let Some(notice) = view.status.take() {
            status_text = notice;
            needs_redraw = true;
        }
    }

    view.controller.teardown();
    Ok(())
}

fn draw<C: Clock, R: RandomSource>(
    out: &mut impl Write,
    controller: &DisplayController<C, R>,
    status: &str,
) -> Result<()> {
    let view = controller.presentation();
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    render::write_header(out, &view.date_label, "\r\n")?;
    render::write_card(out, &view, "\r\n")?;
    write!(out, "\r\n{KEY_HINTS}\r\n")?;
    if !status.is_empty() {
        write!(out, "{status}\r\n")?;
    }
    out.flush()?;
    Ok(())
}

fn action_for(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => Action::Refresh,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Share,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::{action_for, Action, LiveView};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn maps_keys_to_actions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(matches!(action_for(&press(KeyCode::Char('n'))), Action::Refresh));
        assert!(matches!(action_for(&press(KeyCode::Char('s'))), Action::Share));
        assert!(matches!(action_for(&press(KeyCode::Esc)), Action::Quit));
        assert!(matches!(action_for(&press(KeyCode::Char('x'))), Action::Ignore));
        assert!(matches!(
            action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        ));
    }

    #[test]
    fn ignores_key_releases() {
        let mut release = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(matches!(action_for(&release), Action::Ignore));
    }

    #[cfg(unix)]
    #[test]
    fn timers_keep_firing_while_a_share_helper_runs() {
        use crate::platform::CommandShare;
        use chrono::{DateTime, Duration};
        use positivity_core::{
            builtin_catalog, DisplayConfig, DisplayController, ManualClock, SeededRandom,
        };
        use std::time::Instant;

        let clock = ManualClock::new(
            DateTime::parse_from_rfc3339("2026-02-01T10:00:00+00:00").expect("rfc3339"),
        );
        let mut controller = DisplayController::initialize(
            builtin_catalog(),
            DisplayConfig::default(),
            clock.clone(),
            SeededRandom::new(7),
        )
        .expect("default config is valid");
        let helper = CommandShare::parse("sleep 1").expect("command");
        let mut view = LiveView::new(&mut controller, Some(&helper));

        let started = Instant::now();
        view.share();
        assert!(view.share_in_flight());
        assert!(view.refresh());

        clock.advance(Duration::milliseconds(300));
        assert!(view.tick());
        assert!(!view.controller.is_animating());
        clock.advance(Duration::seconds(60));
        assert!(view.tick());
        assert!(view.share_in_flight());
        assert!(started.elapsed() < std::time::Duration::from_millis(500));

        view.share();
        assert_eq!(view.status.take().as_deref(), Some("Share already in progress."));

        let deadline = Instant::now() + std::time::Duration::from_secs(10);
        while view.share_in_flight() {
            assert!(Instant::now() < deadline, "helper never exited");
            std::thread::sleep(std::time::Duration::from_millis(20));
            view.tick();
        }
        assert_eq!(view.status.take().as_deref(), Some("Shared."));
    }
}
