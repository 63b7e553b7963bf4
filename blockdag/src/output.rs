//! Writes analysis results as text or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use consensus::{CycleCheck, DagSets};
use serde_json::json;

use crate::config::OutputFormat;
use crate::error::Result;

pub const VALID_TOKEN: &str = "correct";
pub const INVALID_TOKEN: &str = "impossible";

/// Opens `path` for writing, or stdout for `-`.
pub fn open(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

pub struct OutputWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_check(&mut self, check: CycleCheck) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let token = if check.is_valid_dag() { VALID_TOKEN } else { INVALID_TOKEN };
                writeln!(self.out, "{}", token)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &json!({ "valid": check.is_valid_dag() }))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn write_sets(&mut self, sets: &DagSets) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "past({}) : {}", sets.vertex, sets.past)?;
                writeln!(self.out, "future({}) : {}", sets.vertex, sets.future)?;
                writeln!(self.out, "anticone({}) : {}", sets.vertex, sets.anticone)?;
                writeln!(self.out, "tips(G) : {}", sets.tips)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, sets)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
