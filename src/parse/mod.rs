//! The record-format parser: tokenizes and parses fields, records,
//! record-sets, and databases from byte input.
//!
//! Reader construction is split into dedicated functions (see [`read`]);
//! the `in-error`/`at-eof` sticky-error model mirrors `rec-parser.c`.

mod read;

use memchr::memchr;

use crate::comment::Comment;
use crate::database::Database;
use crate::error::{Error, Position, Result};
use crate::field_name;
use crate::naming;
use crate::record::{Field, Record};
use crate::rset::{Descriptor, RecordSet};

/// A cursor-based parser over an in-memory document.
pub struct Parser {
    input: String,
    pos: usize,
    line: usize,
    source: String,
    errored: bool,
    eof: bool,
}

impl Parser {
    /// Parse from a `&str` already known to be valid UTF-8.
    pub fn from_str(input: &str, source: impl Into<String>) -> Self {
        Self::new(read::from_str_source(input), source)
    }

    /// Parse from a sized memory buffer.
    pub fn from_slice(bytes: &[u8], source: impl Into<String>) -> Result<Self> {
        Ok(Self::new(read::from_slice_source(bytes)?, source))
    }

    /// Parse from a NUL-terminated byte string.
    pub fn from_c_str(bytes: &[u8], source: impl Into<String>) -> Result<Self> {
        Ok(Self::new(read::from_c_str_source(bytes)?, source))
    }

    /// Parse from a blocking streaming byte source.
    pub fn from_reader<R: std::io::Read>(reader: R, source: impl Into<String>) -> Result<Self> {
        Ok(Self::new(read::from_reader_source(reader)?, source))
    }

    fn new(input: String, source: impl Into<String>) -> Self {
        Self { input, pos: 0, line: 1, source: source.into(), errored: false, eof: false }
    }

    /// Is the parser in its sticky-error state? Once set, all further
    /// parsing calls are no-ops returning failure.
    pub fn in_error(&self) -> bool {
        self.errored
    }

    /// Has the parser consumed all input?
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Current (line, byte offset) position, for later [`Self::seek`].
    pub fn tell(&self) -> (usize, usize) {
        (self.line, self.pos)
    }

    /// Reposition the parser to a position previously returned by
    /// [`Self::tell`]. Fails if `offset` is past the end of input.
    pub fn seek(&mut self, (line, offset): (usize, usize)) -> Result<()> {
        if offset > self.input.len() {
            return Err(Error::usage("seek past end of input"));
        }
        self.line = line;
        self.pos = offset;
        self.eof = offset >= self.input.len();
        Ok(())
    }

    /// A human-readable `(source, line, column): message` diagnostic for
    /// the most recent error, in the `perror` style.
    pub fn perror(&self, msg: &str) -> String {
        format!("{}:{}: {}", self.source, self.line, msg)
    }

    fn fail(&mut self, msg: impl Into<String>) -> Error {
        self.errored = true;
        let pos = Position { line: self.line, column: 0, offset: self.pos };
        Error::parse(self.source.clone(), pos, msg)
    }

    /// Parse the whole document as a [`Database`].
    pub fn parse_database(&mut self) -> Result<Database> {
        if self.errored {
            return Err(self.fail("parser is in an error state"));
        }

        let mut db = Database::new();
        let mut current = RecordSet::new();
        let mut current_has_content = false;

        while let Some(para) = self.parse_paragraph()? {
            match para {
                Paragraph::Record(record) => {
                    if let Some(descriptor) = Descriptor::from_record(record.clone()) {
                        if current_has_content {
                            db.push(current);
                        }
                        current = RecordSet::with_descriptor(descriptor);
                        current_has_content = true;
                    } else {
                        current.push_record(record);
                        current_has_content = true;
                    }
                }
                Paragraph::Comment(comment) => {
                    current.push_comment(comment);
                }
            }
        }

        if current_has_content {
            db.push(current);
        } else if current.elems().next().is_some() {
            return Err(self.fail("record set contains only comments"));
        }

        self.eof = true;
        Ok(db)
    }

    /// Parse one blank-line-delimited paragraph: either a record (if it
    /// contains at least one field) or a single merged standalone comment.
    fn parse_paragraph(&mut self) -> Result<Option<Paragraph>> {
        self.skip_blank_lines();
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let mut record = Record::new();
        let mut has_field = false;

        loop {
            let Some(line) = self.peek_line() else { break };
            if is_blank(line) {
                break;
            }

            if line.starts_with('#') {
                let comment = self.read_comment_run();
                record.push_comment(comment);
            } else if line.starts_with(' ') || line.starts_with('\t') {
                return Err(self.fail("line starts with whitespace outside a continuation"));
            } else {
                let field = self.read_field()?;
                has_field = true;
                record.push_field(field);
            }
        }

        if has_field {
            Ok(Some(Paragraph::Record(record)))
        } else {
            let merged = record
                .elems()
                .map(|e| match e {
                    crate::record::RecordElem::Comment(c) => c.text().to_string(),
                    crate::record::RecordElem::Field(_) => unreachable!(),
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Some(Paragraph::Comment(Comment::new(merged))))
        }
    }

    /// Consume one or more consecutive `#`-prefixed lines into a single
    /// merged [`Comment`].
    fn read_comment_run(&mut self) -> Comment {
        let mut lines = Vec::new();
        while let Some(line) = self.peek_line() {
            if !line.starts_with('#') {
                break;
            }
            let (line, _) = self.next_line().unwrap();
            lines.push(line[1..].to_string());
        }
        Comment::new(lines.join("\n"))
    }

    /// Consume one field line (and any continuation lines) into a [`Field`].
    fn read_field(&mut self) -> Result<Field> {
        let start_line = self.line;
        let start_offset = self.pos;
        let (line, _) = self.next_line().expect("caller checked a line exists");

        let Some(colon) = find_name_terminator(line) else {
            return Err(self.fail("field name not followed by ':'"));
        };
        let name = &line[..colon];

        if !field_name::is_valid(name) {
            return Err(self.fail(format!("{name:?} is not a valid field name")));
        }

        let after_colon = &line[colon + 1..];
        if looks_like_bare_second_name(after_colon) {
            return Err(self.fail("two colons in a single field-name line"));
        }

        let first_remainder = strip_one_leading_space(after_colon);
        let value = self.read_field_value(first_remainder);

        Ok(Field::with_location(name, value, Some(self.source.clone()), start_line, start_offset))
    }

    /// Read a field's full value: the (possibly backslash-spliced) first
    /// line, followed by any `+`-continuation lines.
    fn read_field_value(&mut self, first_remainder: &str) -> String {
        let mut value = self.splice_join(first_remainder);

        loop {
            let Some(line) = self.peek_line() else { break };
            if !line.starts_with('+') {
                break;
            }
            let (line, _) = self.next_line().unwrap();
            let rest = strip_one_leading_space(&line[1..]);
            let joined = self.splice_join(rest);
            value.push('\n');
            value.push_str(&joined);
        }

        value
    }

    /// Join `first` with any subsequent physical lines it splices onto via
    /// a trailing backslash-before-newline.
    fn splice_join(&mut self, first: &str) -> String {
        let mut acc = String::new();
        let mut current = first.to_string();
        loop {
            match current.strip_suffix('\\') {
                Some(stripped) => {
                    acc.push_str(stripped.trim_end());
                    acc.push(' ');
                    match self.next_line() {
                        Some((line, _)) => current = line.to_string(),
                        None => return acc,
                    }
                }
                None => {
                    acc.push_str(&current);
                    return acc;
                }
            }
        }
    }

    fn skip_blank_lines(&mut self) {
        while let Some(line) = self.peek_line() {
            if is_blank(line) {
                self.next_line();
            } else {
                break;
            }
        }
    }

    /// The next physical line's content, without consuming it.
    fn peek_line(&self) -> Option<&str> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let end = memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// Consume and return the next physical line's content (without the
    /// trailing `\n`), along with its line number.
    fn next_line(&mut self) -> Option<(&str, usize)> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let (end, advance) = match memchr(b'\n', rest.as_bytes()) {
            Some(i) => (i, i + 1),
            None => (rest.len(), rest.len()),
        };
        let line = &self.input[self.pos..self.pos + end];
        let line_no = self.line;
        self.pos += advance;
        self.line += 1;
        if self.pos >= self.input.len() {
            self.eof = true;
        }
        Some((line, line_no))
    }
}

enum Paragraph {
    Record(Record),
    Comment(Comment),
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn strip_one_leading_space(s: &str) -> &str {
    s.strip_prefix(' ').unwrap_or(s)
}

/// Locate the `:` that terminates a field name at the start of `line`,
/// scanning a simple (non-qualified) name charset.
fn find_name_terminator(line: &str) -> Option<usize> {
    let mut end = 0;
    let bytes = line.as_bytes();
    if bytes.first() == Some(&b'%') {
        end += 1;
    }
    while end < bytes.len() && is_name_char(bytes[end]) {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b':' {
        Some(end)
    } else {
        None
    }
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Recognize the `"foo:bar:"` shape: after the terminating colon, the rest
/// of the line is itself exactly a bare name token followed by a colon and
/// nothing else.
fn looks_like_bare_second_name(after_colon: &str) -> bool {
    let Some(rest) = after_colon.strip_suffix(':') else { return false };
    !rest.is_empty() && rest.bytes().all(is_name_char)
}
