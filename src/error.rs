//! Errors shared by the parser, writer, type system and SEX engine.
use std::fmt;
use std::io;
use std::result;
use std::str::Utf8Error;

/// A position in a source document: 1-based line and 0-based byte offset
/// within that line, plus the byte offset from the start of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Self { line: 1, column: 0, offset: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq)]
pub struct Error {
    code: ErrorCode,
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(source: impl Into<String>, pos: Position, msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Parse {
                source: source.into(),
                pos,
                msg: msg.into(),
            },
        }
    }

    pub(crate) fn validation(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Validation {
                kind: kind.into(),
                value: value.into(),
            },
        }
    }

    pub(crate) fn eval(msg: impl Into<String>) -> Self {
        Self { code: ErrorCode::Eval(msg.into()) }
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self { code: ErrorCode::Usage(msg.into()) }
    }

    pub(crate) fn io(err: io::Error) -> Self {
        Self { code: ErrorCode::Io(err.to_string()) }
    }

    /// True if this is a parser/descriptor syntax error.
    pub fn is_parse(&self) -> bool {
        matches!(self.code, ErrorCode::Parse { .. })
    }

    /// True if this is a type-validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self.code, ErrorCode::Validation { .. })
    }

    /// True if this is a UTF-8 decoding failure.
    pub fn is_utf8(&self) -> bool {
        matches!(self.code, ErrorCode::InvalidUtf8(_))
    }

    pub(crate) fn utf8(err: Utf8Error) -> Self {
        Self { code: ErrorCode::InvalidUtf8(err) }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::io(err)
    }
}

impl From<Utf8Error> for Error {
    fn from(err: Utf8Error) -> Self {
        Self::utf8(err)
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code.fmt(f)
    }
}

#[derive(Debug, PartialEq)]
enum ErrorCode {
    Parse { source: String, pos: Position, msg: String },
    Validation { kind: String, value: String },
    Eval(String),
    Usage(String),
    Io(String),
    InvalidUtf8(Utf8Error),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { source, pos, msg } => write!(f, "{source}:{pos}: {msg}"),
            Self::Validation { kind, value } => {
                write!(f, "value {value:?} is not a valid {kind}")
            }
            Self::Eval(msg) => write!(f, "evaluation error: {msg}"),
            Self::Usage(msg) => write!(f, "usage error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::InvalidUtf8(err) => write!(f, "invalid utf-8: {err}"),
        }
    }
}
