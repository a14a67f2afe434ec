use camino::{Utf8Path, Utf8PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use imagegate_domain::model::DegradedInput;

/// Default bound on how long a report read may take.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a read produced no usable text. Recovered locally by the caller;
/// never propagated as a pipeline fault.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("scan report not found: {0}")]
    Missing(Utf8PathBuf),
    #[error("scan report is empty: {0}")]
    Empty(Utf8PathBuf),
    #[error("scan report unreadable: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("scan report read timed out after {0:?}")]
    TimedOut(Duration),
}

impl ReadError {
    pub fn degraded_reason(&self) -> DegradedInput {
        match self {
            ReadError::Missing(_) => DegradedInput::Missing,
            ReadError::Empty(_) => DegradedInput::Empty,
            ReadError::Unreadable(_) => DegradedInput::Unreadable,
            ReadError::TimedOut(_) => DegradedInput::TimedOut,
        }
    }
}

/// Read a file with a bounded timeout.
///
/// The read runs on a detached thread; on timeout the thread is abandoned
/// and its late result dropped. A timed-out read is indistinguishable
/// from a missing report to the rest of the pipeline.
pub fn read_with_timeout(path: &Utf8Path, timeout: Duration) -> Result<String, ReadError> {
    if !path.exists() {
        return Err(ReadError::Missing(path.to_owned()));
    }

    let (tx, rx) = mpsc::channel();
    let read_path = path.to_owned();
    thread::spawn(move || {
        let _ = tx.send(std::fs::read_to_string(read_path.as_std_path()));
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(text)) if text.trim().is_empty() => Err(ReadError::Empty(path.to_owned())),
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(ReadError::Unreadable(err)),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(ReadError::TimedOut(timeout)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(ReadError::Unreadable(
            std::io::Error::other("reader thread dropped its result"),
        )),
    }
}
