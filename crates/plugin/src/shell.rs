//! Opening result URLs in the desktop's default handler.

use std::io;
use std::process::{Command, Stdio};

/// Errors from launching the external opener.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Opens URLs outside the launcher.
pub trait Shell: Send + Sync {
    fn open_external(&self, url: &str) -> Result<(), ShellError>;
}

/// Shell backed by the platform opener (`open`, `xdg-open`, or the Windows URL handler).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn open_external(&self, url: &str) -> Result<(), ShellError> {
        let (program, mut command) = opener_command(url);

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShellError::Launch { program, source })?;

        tracing::debug!(program, url, pid = child.id(), "opened external URL");

        // reap the opener so it does not linger as a zombie
        std::thread::spawn(move || child.wait());

        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> (&'static str, Command) {
    let mut command = Command::new("open");
    command.arg(url);
    ("open", command)
}

#[cfg(windows)]
fn opener_command(url: &str) -> (&'static str, Command) {
    url_protocol_command(url)
}

/// Hands the URL to the shell's protocol handler directly. Going through
/// `cmd /C start` would let `&` in a query string split the command line.
#[cfg(any(windows, test))]
fn url_protocol_command(url: &str) -> (&'static str, Command) {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(url);
    ("rundll32", command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(url: &str) -> (&'static str, Command) {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    ("xdg-open", command)
}

/// Shell that records URLs instead of launching anything.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingShell {
    pub opened: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Shell for RecordingShell {
    fn open_external(&self, url: &str) -> Result<(), ShellError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
