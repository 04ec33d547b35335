//! Core domain logic for Daily Positivity.
//! This crate is the single source of truth for selection and display rules.

pub mod catalog;
pub mod config;
pub mod display;
pub mod logging;
pub mod model;
pub mod platform;
pub mod selection;

pub use catalog::style::{accent_for, icon_for, CategoryAccent, CategoryIcon, Rgb};
pub use catalog::{builtin_catalog, Catalog, CatalogError};
pub use config::{ConfigError, DisplayConfig};
pub use display::controller::{
    DisplayController, DisplayState, RefreshOutcome, ShareDispatch, ShareOutcome, TransitionPhase,
};
pub use display::presentation::{format_long_date, MessagePresentation};
pub use display::timer::{TimerEvent, TimerKind, TimerQueue, TimerToken};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::message::{AffirmationMessage, Category, MessageId, UnknownCategory};
pub use platform::capability::{
    parse_platform_capabilities, parse_platform_capability, PlatformCapability,
    PlatformCapabilityError,
};
pub use platform::{
    Clipboard, ClipboardError, Clock, ManualClock, NativeShare, Notifier, RandomSource,
    SeededRandom, ShareCapability, ShareError, ShareRequest, ShareServices, SystemClock,
    ThreadRandom,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
