//! Persistence gateway: Writes the message buffer to a plain text file.
//!
//! One line per message, oldest first:
//!
//! ```text
//! 000: Build finished 3000 msecs FG:#ffffff BG:- BOLD:true @ 2026-10-17 09:12:44
//! ```
//!
//! The index is zero-padded to one digit more than the entry count needs.
//! Missing colors are written as `-` and a missing timeout as `0`.
//! Backslashes and line breaks in the text are escaped (`\\`, `\n`, `\r`)
//! so a message never spans more than one line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::buffer::{BufferEntry, BufferStore};
use crate::error::BarError;
use crate::message::Rgb;

/// Extension used for saved message buffers.
pub const SAVE_FILE_EXTENSION: &str = "msgs";

/// Writes buffer snapshots to files.
#[derive(Debug, Clone, Default)]
pub struct PersistenceGateway {
    /// Directory for default-named saves. `None` disables them.
    save_dir: Option<PathBuf>,
}

impl PersistenceGateway {
    /// Create a gateway that saves into `save_dir` by default.
    pub const fn new(save_dir: Option<PathBuf>) -> Self {
        Self { save_dir }
    }

    /// The configured save directory.
    pub fn save_dir(&self) -> Option<&Path> {
        self.save_dir.as_deref()
    }

    /// Check if default-directory saves are possible.
    pub const fn is_enabled(&self) -> bool {
        self.save_dir.is_some()
    }

    /// Timestamped path inside the save directory, e.g.
    /// `2026-10-17-09h12m44s026490.msgs`.
    pub fn suggested_path(&self) -> Option<PathBuf> {
        self.save_dir
            .as_ref()
            .map(|dir| dir.join(default_file_name(Local::now())))
    }

    /// Write every buffered message to `path`, returning the line count.
    ///
    /// The store is only read. An existing file at `path` is replaced.
    pub fn save_all(&self, store: &BufferStore, path: &Path) -> Result<usize, BarError> {
        tracing::info!(path = %path.display(), count = store.len(), "writing message buffer");

        let io_err = |source| BarError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        let width = index_width(store.len());
        let mut lines = 0;
        for (idx, entry) in store.entries().enumerate() {
            writeln!(writer, "{}", format_line(idx, width, entry)).map_err(io_err)?;
            lines += 1;
        }
        writer.flush().map_err(io_err)?;

        Ok(lines)
    }

    /// Save to a fresh timestamped file in the save directory.
    pub fn save_to_default_dir(&self, store: &BufferStore) -> Result<(PathBuf, usize), BarError> {
        let path = self.suggested_path().ok_or(BarError::SaveDisabled)?;
        let lines = self.save_all(store, &path)?;
        Ok((path, lines))
    }
}

/// File name for a default-directory save made at `now`.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("{}.{SAVE_FILE_EXTENSION}", now.format("%Y-%m-%d-%Hh%Mm%Ss%6f"))
}

fn index_width(count: usize) -> usize {
    count.to_string().len() + 1
}

fn color_field(color: Option<Rgb>) -> String {
    color.map_or_else(|| "-".to_string(), |c| c.to_string())
}

/// Escape the text field so it stays on one line.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// Render one saved line (without the trailing newline).
pub fn format_line(idx: usize, width: usize, entry: &BufferEntry) -> String {
    let msg = &entry.message;
    let timeout_ms = msg.timeout().map_or(0, |t| t.as_millis());
    format!(
        "{idx:0width$}: {} {timeout_ms} msecs FG:{} BG:{} BOLD:{} @ {}",
        escape_text(msg.text()),
        color_field(msg.fg()),
        color_field(msg.bg()),
        msg.is_bold(),
        entry.buffered_at.format("%Y-%m-%d %H:%M:%S"),
    )
}
