//! Terminal implementations of the platform collaborators.

use log::debug;
use positivity_core::{Clipboard, ClipboardError, NativeShare, Notifier, ShareError, ShareRequest};
use std::cell::RefCell;
use std::io::{ErrorKind, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Exit status a share command uses to report user cancellation.
const CANCELLED_EXIT_CODE: i32 = 130;

/// Native share backed by an external command.
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    /// Splits `command_line` on whitespace; `None` when it is blank.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Starts the helper and hands it the payload without waiting for it.
    pub fn spawn(&self, request: &ShareRequest) -> Result<PendingShare, ShareError> {
        let payload =
            serde_json::to_vec(request).map_err(|err| ShareError::Failed(err.to_string()))?;
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ShareError::Failed(format!("cannot start `{}`: {err}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // Helpers may exit without reading the payload.
            if let Err(err) = stdin.write_all(&payload) {
                if err.kind() != ErrorKind::BrokenPipe {
                    return Err(ShareError::Failed(err.to_string()));
                }
            }
        }
        Ok(PendingShare {
            program: self.program.clone(),
            child,
        })
    }
}

impl NativeShare for CommandShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        self.spawn(request)?.wait()
    }
}

/// A share helper that has been started and not yet collected.
pub struct PendingShare {
    program: String,
    child: Child,
}

impl PendingShare {
    /// Outcome of the helper if it has exited. Never blocks.
    pub fn try_finish(&mut self) -> Option<Result<(), ShareError>> {
        match self.child.try_wait() {
            Ok(Some(status)) => Some(self.outcome(status)),
            Ok(None) => None,
            Err(err) => Some(Err(ShareError::Failed(err.to_string()))),
        }
    }

    /// Blocks until the helper exits.
    pub fn wait(mut self) -> Result<(), ShareError> {
        let status = self
            .child
            .wait()
            .map_err(|err| ShareError::Failed(err.to_string()))?;
        self.outcome(status)
    }

    fn outcome(&self, status: ExitStatus) -> Result<(), ShareError> {
        debug!(
            "event=share_command module=cli status=done program={} exit={:?}",
            self.program,
            status.code()
        );
        match status.code() {
            Some(0) => Ok(()),
            Some(CANCELLED_EXIT_CODE) => Err(ShareError::Cancelled),
            Some(code) => Err(ShareError::Failed(format!("exited with status {code}"))),
            None => Err(ShareError::Failed("terminated by signal".to_string())),
        }
    }
}

/// System clipboard via `arboard`.
#[derive(Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))
    }
}

/// Prints notices on their own line.
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notice: &str) {
        println!("{notice}");
    }
}

/// Keeps the latest notice for the live view's status line.
#[derive(Default)]
pub struct StatusLine {
    latest: RefCell<Option<String>>,
}

impl StatusLine {
    pub fn take(&self) -> Option<String> {
        self.latest.borrow_mut().take()
    }

    pub fn set(&self, notice: impl Into<String>) {
        *self.latest.borrow_mut() = Some(notice.into());
    }
}

impl Notifier for StatusLine {
    fn notify(&self, notice: &str) {
        self.set(notice);
    }
}
