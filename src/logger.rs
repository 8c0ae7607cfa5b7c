use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use parking_lot::Mutex;

use crate::model::error::SalesError;

/// Append-only log of batch runs. Each line is prefixed with a local
/// timestamp. Write failures are dropped and never abort a batch.
pub struct RunLog {
    writer: Mutex<BufWriter<File>>,
}

impl RunLog {
    pub fn open(log_path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_path)?;

        Ok(RunLog {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn record(&self, message: &str) {
        let mut writer = self.writer.lock();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(writer, "[{}] {}", timestamp, message);
        let _ = writer.flush();
    }

    pub fn batch_started(&self, directory: &Path) {
        self.record(&format!("Starting batch in {}", directory.display()));
    }

    /// The abort line carries the user-facing message, the error kind and,
    /// for I/O and CSV faults, the hidden cause.
    pub fn batch_finished(&self, result: &Result<(), SalesError>) {
        let Err(err) = result else {
            self.record("Batch completed");
            return;
        };
        match err.detail() {
            Some(detail) => {
                self.record(&format!("Batch aborted: {} [{:?}: {}]", err, err.kind(), detail))
            }
            None => self.record(&format!("Batch aborted: {} [{:?}]", err, err.kind())),
        }
    }
}
