// src/report.rs

//! Report sinks for the ground-truth and inferred graph reports.
//!
//! The core never touches the filesystem directly; it hands rendered graph
//! text to whatever [`ReportSink`] the caller provides.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::Result;

/// Abstract destination for the textual graph reports.
pub trait ReportSink {
    fn write_report(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Writes each report as `<name>.gv` under a base directory.
#[derive(Debug)]
pub struct DirSink {
    base: PathBuf,
}

impl DirSink {
    /// Creates the directory (and parents) if it does not exist yet.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }
}

impl ReportSink for DirSink {
    fn write_report(&mut self, name: &str, contents: &str) -> Result<()> {
        let path = self.base.join(format!("{name}.gv"));
        debug!(path = %path.display(), "writing graph report");
        fs::write(&path, contents)?;
        Ok(())
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<(String, String)>,
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, name: &str, contents: &str) -> Result<()> {
        self.reports.push((name.to_string(), contents.to_string()));
        Ok(())
    }
}
