//! Rendering a [`Database`] back to text, in any of four output modes:
//! NORMAL, SEXP, Values, and ValuesRow.
//!
//! Mirrors `rec-writer.c`'s mode switch (`rec_writer_set_mode`); the
//! NORMAL-mode field formatting is factored into [`format_field_normal`] so
//! [`crate::record::Field::to_comment`] can reuse it directly.

use std::fmt::Write as _;

use crate::buf::Buffer;
use crate::comment::Comment;
use crate::database::Database;
use crate::record::{Field, Record, RecordElem};
use crate::rset::{RecordSet, RsetElem};

/// Which textual rendering to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// One `name: value` line per field, multi-line values spliced or
    /// continued as `+` lines.
    #[default]
    Normal,
    /// S-expression form: `(field  "name" "value")` per field, one record
    /// per top-level `(record ...)` form.
    Sexp,
    /// One record per line, fields rendered as `name value`-pairs.
    Values,
    /// Like `Values`, but one row of tab-separated bare values per record.
    ValuesRow,
}

/// Render an entire database.
pub fn write_database(db: &Database, mode: WriteMode) -> String {
    let mut out = String::new();
    let mut first = true;
    for rset in db.rsets() {
        if !first {
            out.push('\n');
        }
        first = false;
        write_rset(&mut out, rset, mode);
    }
    out
}

/// A writer that accumulates rendered text into a [`Buffer`] rather than
/// returning a `String` directly from a single call.
///
/// Grounded on `rec-writer.c`'s two construction modes (`rec_writer_new`
/// for a stream, `rec_writer_new_buf` for an in-memory buffer): this is
/// the buffer-backed side, with the buffer's contents transferred to the
/// caller on [`close`](Writer::close).
pub struct Writer {
    buf: Buffer,
    mode: WriteMode,
}

impl Writer {
    pub fn new(mode: WriteMode) -> Self {
        Self { buf: Buffer::new(), mode }
    }

    /// Render `db` and append it to the writer's buffer.
    pub fn write_database(&mut self, db: &Database) {
        self.buf.push_str(&write_database(db, self.mode));
    }

    /// Render one record set and append it to the writer's buffer.
    pub fn write_rset(&mut self, rset: &RecordSet) {
        let mut out = String::new();
        write_rset(&mut out, rset, self.mode);
        self.buf.push_str(&out);
    }

    /// Render one record and append it to the writer's buffer.
    pub fn write_record(&mut self, record: &Record) {
        let mut out = String::new();
        write_record(&mut out, record, self.mode);
        self.buf.push_str(&out);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer, transferring the accumulated bytes to the caller.
    pub fn close(self) -> Vec<u8> {
        self.buf.close()
    }

    /// Consume the writer, transferring the accumulated text to the caller.
    pub fn close_to_string(self) -> String {
        self.buf.close_to_string()
    }
}

fn write_rset(out: &mut String, rset: &RecordSet, mode: WriteMode) {
    let mut first = true;
    if let Some(descriptor) = rset.descriptor() {
        write_record(out, descriptor.record(), mode);
        first = false;
    }
    for elem in rset.elems() {
        if !first {
            out.push('\n');
        }
        first = false;
        match elem {
            RsetElem::Record(r) => write_record(out, r, mode),
            RsetElem::Comment(c) => write_comment(out, c),
        }
    }
}

fn write_record(out: &mut String, record: &Record, mode: WriteMode) {
    match mode {
        WriteMode::Normal => {
            for elem in record.elems() {
                match elem {
                    RecordElem::Field(f) => {
                        out.push_str(&format_field_normal(f.name(), f.value()));
                        out.push('\n');
                    }
                    RecordElem::Comment(c) => write_comment(out, c),
                }
            }
        }
        WriteMode::Sexp => {
            out.push_str("(record \n");
            for field in record.fields() {
                let _ = writeln!(out, "  (field  \"{}\" \"{}\")", field.name(), escape_sexp(field.value()));
            }
            out.push_str(")\n");
        }
        WriteMode::Values => {
            for field in record.fields() {
                let _ = writeln!(out, "{} {}", field.name(), field.value());
            }
        }
        WriteMode::ValuesRow => {
            let values: Vec<&str> = record.fields().map(Field::value).collect();
            out.push_str(&values.join("\t"));
            out.push('\n');
        }
    }
}

fn write_comment(out: &mut String, comment: &Comment) {
    for line in comment.text().split('\n') {
        out.push('#');
        out.push_str(line);
        out.push('\n');
    }
}

fn escape_sexp(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render a bare field name (no value) as a SEXP token: just the quoted
/// name, with none of `(field ...)`'s surrounding structure.
pub fn sexp_name_alone(name: &str) -> String {
    format!("\"{name}\"")
}

/// Render one field the way NORMAL mode does: `name:` with no space if the
/// value is empty, `name: value` for a single-line value, and a spliced
/// `+`-continuation block for multi-line values.
pub(crate) fn format_field_normal(name: &str, value: &str) -> String {
    if value.is_empty() {
        return format!("{name}:");
    }

    let mut lines = value.split('\n');
    let first = lines.next().unwrap();
    let mut out = format!("{name}: {first}");
    for line in lines {
        out.push_str("\n+ ");
        out.push_str(line);
    }
    out
}
