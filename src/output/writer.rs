//! Title sinks
//!
//! Line-oriented writers for property titles.

use crate::error::Result;
use std::io::{self, Stdout, Write};

/// Receives titles in the order they are produced
pub trait TitleSink {
    /// Emit one title
    fn emit(&mut self, title: &str) -> Result<()>;
}

impl TitleSink for Vec<String> {
    fn emit(&mut self, title: &str) -> Result<()> {
        self.push(title.to_string());
        Ok(())
    }
}

impl<S: TitleSink + ?Sized> TitleSink for &mut S {
    fn emit(&mut self, title: &str) -> Result<()> {
        (**self).emit(title)
    }
}

/// Writes one title per line, flushing after each line
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
    lines: u64,
}

impl LineSink<Stdout> {
    /// Sink for process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TitleSink for LineSink<W> {
    fn emit(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{title}")?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }
}
