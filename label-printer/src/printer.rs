//! Printer adapters for finished label jobs
//!
//! Supports:
//! - Spool directory printers (one file per job, picked up by a print agent)

use crate::error::{PrintError, PrintResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, info, instrument, warn};

/// Kind of content a print job carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// JSON print payload for a label printer driver
    Payload,
    /// Rendered label sheet for on-screen preview
    Preview,
}

impl JobKind {
    /// File extension used when spooling
    pub const fn extension(&self) -> &'static str {
        match self {
            JobKind::Payload => "json",
            JobKind::Preview => "html",
        }
    }
}

/// One unit of work for a printer
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub kind: JobKind,
    pub name: String,
    pub data: Vec<u8>,
}

impl PrintJob {
    pub fn new(kind: JobKind, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Trait for printer adapters
pub trait Printer {
    /// Send a finished job to the printer
    fn print(&self, job: &PrintJob) -> PrintResult<()>;

    /// Check if the printer can accept jobs
    fn is_online(&self) -> bool;
}

/// Spool directory printer
///
/// Writes each job as `NNNN-name.ext` into a directory. Numbering
/// continues after the highest job number present in the directory, and
/// an existing job file is never overwritten.
#[derive(Debug)]
pub struct SpoolPrinter {
    dir: PathBuf,
    next_seq: AtomicU32,
}

impl SpoolPrinter {
    /// Open (creating if needed) a spool directory
    pub fn open(dir: impl AsRef<Path>) -> PrintResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if dir.exists() && !dir.is_dir() {
            return Err(PrintError::InvalidConfig(format!(
                "Spool path is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(&dir)?;
        let last = last_job_number(&dir)?;

        Ok(Self {
            dir,
            next_seq: AtomicU32::new(last.saturating_add(1)),
        })
    }

    /// Get the spool directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a job and return the path of the spooled file
    #[instrument(skip(self, job), fields(dir = %self.dir.display(), kind = ?job.kind, bytes = job.data.len()))]
    pub fn spool(&self, job: &PrintJob) -> PrintResult<PathBuf> {
        if !self.is_online() {
            warn!("Spool directory missing");
            return Err(PrintError::Offline(self.dir.display().to_string()));
        }

        let name: String = job
            .name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();

        loop {
            let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
            let path = self
                .dir
                .join(format!("{:04}-{}.{}", seq, name, job.kind.extension()));

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(&job.data)?;
                    info!(path = %path.display(), "Print job spooled");
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(seq, "Spool slot taken, trying next number");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Highest `NNNN-` job number among the files in `dir` (0 when none)
fn last_job_number(dir: &Path) -> io::Result<u32> {
    let mut last = 0;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let seq = name
            .to_str()
            .and_then(|n| n.split_once('-'))
            .and_then(|(prefix, _)| prefix.parse::<u32>().ok());
        if let Some(seq) = seq {
            last = last.max(seq);
        }
    }
    Ok(last)
}

impl Printer for SpoolPrinter {
    fn print(&self, job: &PrintJob) -> PrintResult<()> {
        self.spool(job).map(|_| ())
    }

    fn is_online(&self) -> bool {
        self.dir.is_dir()
    }
}
