//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the single display session the Flutter view mounts.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dart owns the timers and the platform capabilities: it pushes the host
//!   clock in through `display_open`/`display_pump` and executes the share
//!   plan returned by `display_share`.
//! - At most one display session exists per process.

use chrono::{DateTime, FixedOffset};
use positivity_core::{
    builtin_catalog, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_platform_capabilities, ping as ping_inner, DisplayConfig, DisplayController,
    ManualClock, MessagePresentation, PlatformCapability, RefreshOutcome, ShareDispatch,
    ThreadRandom,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

static SESSION: Mutex<Option<DisplaySession>> = Mutex::new(None);

struct DisplaySession {
    clock: ManualClock,
    controller: DisplayController<ManualClock, ThreadRandom>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Render-ready card state for the Flutter view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub message_id: u32,
    pub text: String,
    /// Wire category name (`self-love`, ...).
    pub category: String,
    /// Display label (`Self Love`, ...).
    pub category_label: String,
    /// Gradient utility classes for the card accent.
    pub gradient: String,
    /// Gradient stops as `#rrggbb`.
    pub gradient_from: String,
    pub gradient_to: String,
    /// Icon name (`star|heart|sparkles|sun|calendar`).
    pub icon: String,
    /// While set the refresh button must be disabled.
    pub is_animating: bool,
    pub date_label: String,
    /// Next moment Dart should call `display_pump`, if any timer is armed.
    pub next_pump_epoch_ms: Option<i64>,
}

/// Response envelope for display session calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResponse {
    pub ok: bool,
    pub snapshot: Option<DisplaySnapshot>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl DisplayResponse {
    fn success(message: impl Into<String>, snapshot: DisplaySnapshot) -> Self {
        Self {
            ok: true,
            snapshot: Some(snapshot),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("event=ffi_call module=ffi status=error detail={message:?}");
        Self {
            ok: false,
            snapshot: None,
            message,
        }
    }
}

/// Share plan Dart executes on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDispatchResponse {
    pub ok: bool,
    /// `native`, `clipboard`, or empty on failure.
    pub mode: String,
    pub title: Option<String>,
    pub text: String,
    pub url: Option<String>,
    /// Notice to show after a clipboard copy; set only when the host
    /// declared `notification`.
    pub notice: Option<String>,
    pub message: String,
}

impl ShareDispatchResponse {
    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("event=ffi_call module=ffi status=error detail={message:?}");
        Self {
            ok: false,
            mode: String::new(),
            title: None,
            text: String::new(),
            url: None,
            notice: None,
            message,
        }
    }
}

/// One catalog record for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub text: String,
    pub author: Option<String>,
    pub category: String,
}

/// Mounts the display view.
///
/// Replaces (and tears down) any previous session. Config is read from
/// `POSITIVITY_*` environment variables over defaults.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; invalid clock input or config yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn display_open(now_epoch_ms: i64, utc_offset_seconds: i32) -> DisplayResponse {
    let now = match host_instant(now_epoch_ms, utc_offset_seconds) {
        Ok(now) => now,
        Err(err) => return DisplayResponse::failure(format!("display_open failed: {err}")),
    };
    let config = match DisplayConfig::from_env() {
        Ok(config) => config,
        Err(err) => return DisplayResponse::failure(format!("display_open failed: {err}")),
    };

    let clock = ManualClock::new(now);
    let controller = match DisplayController::initialize(
        builtin_catalog(),
        config,
        clock.clone(),
        ThreadRandom,
    ) {
        Ok(controller) => controller,
        Err(err) => return DisplayResponse::failure(format!("display_open failed: {err}")),
    };

    let snapshot = snapshot_of(&controller);
    let replaced = lock_session()
        .replace(DisplaySession { clock, controller })
        .is_some();
    info!(
        "event=display_open module=ffi status=ok message_id={} replaced_session={}",
        snapshot.message_id, replaced
    );
    DisplayResponse::success("Display opened.", snapshot)
}

/// Starts a refresh transition.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - A request while animating is acknowledged with `ok=true` and changes
///   nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn display_request_new_message() -> DisplayResponse {
    with_session("display_request_new_message", |session| {
        match session.controller.request_new_message() {
            RefreshOutcome::Scheduled { .. } => "Transition scheduled.",
            RefreshOutcome::Suppressed => "Transition already in progress.",
        }
    })
}

/// Advances the host clock and fires every due timer.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Dart calls this on its periodic timer and at `next_pump_epoch_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn display_pump(now_epoch_ms: i64, utc_offset_seconds: i32) -> DisplayResponse {
    let now = match host_instant(now_epoch_ms, utc_offset_seconds) {
        Ok(now) => now,
        Err(err) => return DisplayResponse::failure(format!("display_pump failed: {err}")),
    };
    with_session("display_pump", |session| {
        session.clock.set(now);
        let fired = session.controller.pump();
        if fired.is_empty() {
            "No timers due."
        } else {
            "Timers fired."
        }
    })
}

/// Returns the share plan for the current message.
///
/// `host_capabilities` lists what the platform offers (`share`, `clipboard`,
/// `notification`). The native path is chosen iff `share` is declared; Dart
/// must not fall back to the clipboard when the native sheet fails. The
/// clipboard plan carries a notice only when `notification` is declared.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown capability strings yield `ok=false`.
/// - Declaring neither `share` nor `clipboard` yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn display_share(host_capabilities: Vec<String>) -> ShareDispatchResponse {
    let capabilities = match parse_platform_capabilities(host_capabilities.as_slice()) {
        Ok(capabilities) => capabilities,
        Err(err) => return ShareDispatchResponse::failure(format!("display_share failed: {err}")),
    };

    let guard = lock_session();
    let Some(session) = guard.as_ref() else {
        return ShareDispatchResponse::failure("display_share failed: display is not open");
    };

    let native = capabilities.contains(&PlatformCapability::NativeShare);
    if !native && !capabilities.contains(&PlatformCapability::Clipboard) {
        return ShareDispatchResponse::failure(
            "display_share failed: host declares neither share nor clipboard",
        );
    }
    let notify = capabilities.contains(&PlatformCapability::Notification);

    match session.controller.share_dispatch(native) {
        ShareDispatch::Native(request) => ShareDispatchResponse {
            ok: true,
            mode: "native".to_string(),
            title: Some(request.title),
            text: request.text,
            url: Some(request.url),
            notice: None,
            message: "Share via native sheet.".to_string(),
        },
        ShareDispatch::ClipboardFallback { text, notice } => ShareDispatchResponse {
            ok: true,
            mode: "clipboard".to_string(),
            title: None,
            text,
            url: None,
            notice: notify.then(|| notice.to_string()),
            message: "Copy to clipboard.".to_string(),
        },
    }
}

/// Unmounts the display view, cancelling its timers.
///
/// Returns whether a session was open.
#[flutter_rust_bridge::frb(sync)]
pub fn display_close() -> bool {
    // Dropping the controller tears down its timers.
    let closed = lock_session().take().is_some();
    info!("event=display_close module=ffi status=ok was_open={closed}");
    closed
}

/// Lists the built-in catalog in order.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_entries() -> Vec<CatalogEntry> {
    builtin_catalog()
        .messages()
        .iter()
        .map(|message| CatalogEntry {
            id: message.id,
            text: message.text.to_string(),
            author: message.author.map(str::to_string),
            category: message.category.as_str().to_string(),
        })
        .collect()
}

fn with_session(
    operation: &str,
    f: impl FnOnce(&mut DisplaySession) -> &'static str,
) -> DisplayResponse {
    let mut guard = lock_session();
    match guard.as_mut() {
        Some(session) => {
            let message = f(session);
            DisplayResponse::success(message, snapshot_of(&session.controller))
        }
        None => DisplayResponse::failure(format!("{operation} failed: display is not open")),
    }
}

fn lock_session() -> MutexGuard<'static, Option<DisplaySession>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn host_instant(
    now_epoch_ms: i64,
    utc_offset_seconds: i32,
) -> Result<DateTime<FixedOffset>, String> {
    let offset = FixedOffset::east_opt(utc_offset_seconds)
        .ok_or_else(|| format!("utc offset out of range: {utc_offset_seconds}s"))?;
    let utc = DateTime::from_timestamp_millis(now_epoch_ms)
        .ok_or_else(|| format!("timestamp out of range: {now_epoch_ms}ms"))?;
    Ok(utc.with_timezone(&offset))
}

fn snapshot_of(controller: &DisplayController<ManualClock, ThreadRandom>) -> DisplaySnapshot {
    let MessagePresentation {
        message_id,
        text,
        category,
        category_label,
        accent,
        icon,
        is_animating,
        date_label,
        ..
    } = controller.presentation();
    DisplaySnapshot {
        message_id,
        text: text.to_string(),
        category: category.as_str().to_string(),
        category_label,
        gradient: accent.gradient.to_string(),
        gradient_from: accent.from.hex(),
        gradient_to: accent.to.hex(),
        icon: icon.name().to_string(),
        is_animating,
        date_label,
        next_pump_epoch_ms: controller
            .next_deadline()
            .map(|deadline| deadline.timestamp_millis()),
    }
}
