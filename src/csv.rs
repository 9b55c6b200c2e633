// src/csv.rs
//
// Std-only CSV/TSV layer: a quote- and CRLF-tolerant reader plus the
// row/table writers behind Copy and Export. Stat sheets copied out of web
// pages are messy enough that tolerance beats strictness here.

use std::io::{self, Write};
use std::mem::take;

/// Field separator for parse/export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn char(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

/* ---------------- Parsing ---------------- */

#[derive(Default)]
struct RowAccum {
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowAccum {
    fn end_field(&mut self) {
        self.row.push(take(&mut self.field));
    }

    fn end_row(&mut self) {
        self.end_field();
        // Blank lines parse as a single empty field; drop them.
        if self.row.len() == 1 && self.row[0].is_empty() {
            self.row.clear();
        } else {
            self.rows.push(take(&mut self.row));
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.field.is_empty() || !self.row.is_empty() {
            self.end_field();
            self.rows.push(self.row);
        }
        self.rows
    }
}

/// Parse delimited text into rows of fields. Handles quoted fields with
/// doubled-quote escapes and both LF and CRLF line endings. An unterminated
/// quote at end of input flushes whatever was read.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.char();
    let mut acc = RowAccum::default();
    let mut quoted = false;
    let mut it = text.chars().peekable();

    while let Some(c) = it.next() {
        if quoted {
            match c {
                '"' if it.peek() == Some(&'"') => {
                    it.next();
                    acc.field.push('"');
                }
                '"' => quoted = false,
                _ => acc.field.push(c),
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            _ if c == sep => acc.end_field(),
            '\r' => {
                if it.peek() == Some(&'\n') {
                    it.next();
                }
                acc.end_row();
            }
            '\n' => acc.end_row(),
            _ => acc.field.push(c),
        }
    }

    acc.finish()
}

/* ---------------- Writing ---------------- */

fn quote_if_needed(cell: &str, sep: char) -> String {
    let unsafe_chars = [sep, '"', '\n', '\r'];
    if cell.contains(|c| unsafe_chars.contains(&c)) {
        join!("\"", cell.replace('"', "\"\""), "\"")
    } else {
        s!(cell)
    }
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    let line: Vec<String> = row.iter().map(|c| quote_if_needed(c, sep)).collect();
    writeln!(w, "{}", line.join(&sep.to_string()))
}

/// Assemble a full export string (Copy/Export) from a table.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, delim);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    String::from_utf8(buf).unwrap_or_default()
}
