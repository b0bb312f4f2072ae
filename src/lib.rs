//! # recs
//!
//! A library for reading and writing the plain-text record-database format
//! (`.rec`): a human-editable alternative to small relational databases,
//! made of blank-line-delimited records grouped into record-sets, each
//! optionally carrying a descriptor that declares field types, constraints,
//! and a selection-expression filter language.
//!
//! ```
//! let input = "%rec: Person\n%key: email\n\nname: Alice\nemail: alice@example.com\n";
//! let db = recs::from_str(input, "people.rec").unwrap();
//!
//! let rset = db.rset_named("Person").unwrap();
//! let alice = rset.records().next().unwrap();
//! assert_eq!(alice.field("name").unwrap().value(), "Alice");
//!
//! assert_eq!(recs::to_string(&db), input);
//! ```
//!
//! ## Selecting records
//!
//! The [`sex`] module compiles and evaluates the selection-expression
//! filter language:
//!
//! ```
//! use recs::sex::Sex;
//!
//! let db = recs::from_str("name: Alice\nage: 30\n\nname: Bob\nage: 20\n", "-").unwrap();
//! let sex = Sex::compile("age > 25").unwrap();
//!
//! let matches: Vec<_> = db
//!     .rsets()
//!     .flat_map(|r| r.records())
//!     .filter(|r| sex.matches(r).unwrap_or(false))
//!     .collect();
//! assert_eq!(matches.len(), 1);
//! ```

pub mod buf;
pub mod comment;
pub mod database;
pub mod dates;
pub mod error;
pub mod fex;
pub mod field_name;
pub mod mset;
pub mod naming;
pub mod parse;
pub mod record;
pub mod registry;
pub mod rset;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_support;
pub mod sex;
#[cfg(feature = "syntax")]
#[cfg_attr(docsrs, doc(cfg(feature = "syntax")))]
pub mod syntax;
pub mod types;
pub mod write;

use std::io;

pub use crate::database::Database;
pub use crate::error::{Error, Result};
pub use crate::write::{WriteMode, Writer};

/// Parse a database from an already-decoded string.
pub fn from_str(input: &str, source: impl Into<String>) -> Result<Database> {
    parse::Parser::from_str(input, source).parse_database()
}

/// Parse a database from a sized, possibly non-UTF-8 memory buffer.
pub fn from_slice(bytes: &[u8], source: impl Into<String>) -> Result<Database> {
    parse::Parser::from_slice(bytes, source)?.parse_database()
}

/// Parse a database from a NUL-terminated byte string.
pub fn from_c_str(bytes: &[u8], source: impl Into<String>) -> Result<Database> {
    parse::Parser::from_c_str(bytes, source)?.parse_database()
}

/// Parse a database from a blocking streaming byte source.
pub fn from_reader<R: io::Read>(reader: R, source: impl Into<String>) -> Result<Database> {
    parse::Parser::from_reader(reader, source)?.parse_database()
}

/// Render `db` in NORMAL mode.
pub fn to_string(db: &Database) -> String {
    write::write_database(db, WriteMode::Normal)
}

/// Render `db` in the given mode.
pub fn to_string_with_mode(db: &Database, mode: WriteMode) -> String {
    write::write_database(db, mode)
}
