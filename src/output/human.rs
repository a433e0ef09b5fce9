#![forbid(unsafe_code)]

//! Human-readable diagnostics
//!
//! The text of every line is fixed; color only wraps it, so output with
//! `--color never` is byte-for-byte the plain format.

use crate::types::Defect;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Blank line, then the header for a root as it was configured
    pub fn write_root_header<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        root: &Path,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Checking for missing comments in {}...", root.display())
    }

    pub fn write_defect<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        defect: &Defect,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{}", defect)?;
        out.reset()?;
        writeln!(out)
    }

    /// Final summary line
    pub fn write_summary<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        defect_count: usize,
    ) -> io::Result<()> {
        if defect_count > 0 {
            writeln!(out)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "🚨 {} missing comments found!", defect_count)?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "✅ No missing comments found!")?;
        }
        out.reset()?;
        writeln!(out)
    }

    /// Fatal message for a root directory that does not exist
    pub fn write_missing_root<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        root: &Path,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(out, "ERROR: Directory {} not found!", root.display())?;
        out.reset()?;
        writeln!(out)
    }

    /// Non-fatal problem, e.g. an unreadable file
    pub fn write_warning<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        message: &str,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "Warning:")?;
        out.reset()?;
        writeln!(out, " {}", message)
    }
}
