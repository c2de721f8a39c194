//! Formatted catalog listings
//!
//! These return `String`s; callers decide where to print them. Layout
//! follows the classic table formats: a one-line-per-entry summary and a
//! verbose listing with source text and alternate names.

use std::fmt::Write;

use almanac_core::rewrap;

use crate::catalog::ConstantCatalog;
use crate::entry::ConstantEntry;

impl ConstantCatalog {
    /// One line per entry: canonical name, value, unit, and quoted aliases,
    /// truncated with "..." past 75 columns.
    pub fn list_summary(&self) -> String {
        let mut out = String::new();
        for entry in self.iter() {
            let mut line = format!("{} {} {} ", entry.name(), entry.value, entry.unit);
            for alias in entry.names.iter().skip(1) {
                let _ = write!(line, "'{}' ", alias);
            }
            let wrapped = rewrap(&line, 75);
            match wrapped.first() {
                Some(first) if wrapped.len() > 1 => {
                    out.push_str(first);
                    out.push_str("...\n");
                }
                Some(first) => {
                    out.push_str(first);
                    out.push('\n');
                }
                None => out.push('\n'),
            }
        }
        out
    }

    /// Verbose table: every field of every entry, with the source text
    /// wrapped and indented and the alternate names quoted.
    pub fn list_full(&self) -> String {
        let mut out = String::new();
        out.push_str("name unit flag value units (m,kg,s,K,A,mol,cd)\n");
        out.push_str("  source\n");
        out.push_str("  alternate names\n");
        out.push_str(&"-".repeat(78));
        out.push('\n');
        for entry in self.iter() {
            let unit = if entry.unit.is_empty() { "\"\"" } else { &entry.unit };
            let d = &entry.dimension.exponents;
            let _ = writeln!(
                out,
                "{} {} {} {:e} ({},{},{},{},{},{},{})",
                entry.name(),
                unit,
                entry.unit_system.label(),
                entry.value,
                d[0], d[1], d[2], d[3], d[4], d[5], d[6],
            );
            for line in rewrap(&entry.source, 77) {
                let _ = writeln!(out, "  {}", line);
            }
            out.push_str(&alternate_names(entry));
        }
        out
    }

    /// One entry in the verbose per-field layout
    pub fn print_entry(&self, entry: &ConstantEntry) -> String {
        let mut out = String::new();
        let unit = if entry.unit.is_empty() { "\"\"" } else { &entry.unit };
        let _ = writeln!(
            out,
            "Name: {} unit: {} flag: {} value: {:e}",
            entry.name(),
            unit,
            entry.unit_system.label(),
            entry.value,
        );
        let d = &entry.dimension.exponents;
        let _ = writeln!(
            out,
            "  (m:{},kg:{},s:{},K:{},A:{},mol:{},cd:{})",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6],
        );
        for (i, line) in rewrap(&entry.source, 71).iter().enumerate() {
            if i == 0 {
                let _ = writeln!(out, "  Source: {}", line);
            } else {
                let _ = writeln!(out, "  {}", line);
            }
        }
        if entry.names.len() > 1 {
            out.push_str("  Other names: ");
            for alias in entry.names.iter().skip(1) {
                let _ = write!(out, "\"{}\" ", alias);
            }
            out.push('\n');
        } else {
            out.push_str("  (no alternate names)\n");
        }
        out
    }
}

fn alternate_names(entry: &ConstantEntry) -> String {
    if entry.names.len() > 1 {
        let mut line = String::from("  ");
        for alias in entry.names.iter().skip(1) {
            let _ = write!(line, "\"{}\" ", alias);
        }
        line.push('\n');
        line
    } else {
        String::from("  (no alternate names)\n")
    }
}
