//! # Description of the recfile syntax
//!
//! This module gives an explicit, independent description of the grammar
//! accepted by [`crate::parse::Parser`], expressed as a [pest](https://docs.rs/pest)
//! grammar rather than the hand-written scanner the main parser uses. It
//! exists so the grammar can be read and checked on its own, separately from
//! the scanner's control flow.
//!
//! ## Structure of a database
//! 1. A database is a sequence of paragraphs separated by blank lines.
//!    ```ignore
//!    rec = { SOI ~ paragraph* ~ EOI }
//!    ```
//! 2. A paragraph is either a record (one or more comment or field lines) or
//!    a single blank line.
//!    ```ignore
//!    paragraph = _{ record | blank_line }
//!    ```
//! 3. A field line is a field name, a colon, optional leading whitespace, and
//!    the rest of the line as the value's first fragment; `+`-prefixed
//!    continuation lines extend a field's value onto following lines.
//!    ```ignore
//!    field = { field_line ~ newline ~ (continuation_line ~ newline)* }
//!    ```
//! 4. A field name is an optional `%` sigil, an ASCII letter, then any run of
//!    letters, digits, `_`, `-`, or single/double `:`-qualified name
//!    segments.
//!    ```ignore
//!    field_name = @{
//!        "%"? ~ ASCII_ALPHA ~ (ASCII_ALPHANUMERIC | "_" | "-" | (":" ~ ":"? ~ ASCII_ALPHA))*
//!    }
//!    ```
//!
//! This grammar does not encode the backslash line-splice rule, the "two
//! colons" ambiguity check, or rset-boundary detection on `%rec` fields —
//! those are semantic, not syntactic, and remain the hand-written parser's
//! responsibility. This module only validates shape.

use pest_derive::Parser;

/// A pest-derived parser over the grammar in [`Rule`], used to validate the
/// surface syntax of a document independently of [`crate::parse::Parser`].
#[derive(Parser)]
#[grammar = "syntax/rec.pest"]
pub struct RecfileParser;

/// Check that `input` is syntactically well-formed, without building a
/// [`crate::database::Database`] from it.
pub fn validate(input: &str) -> bool {
    use pest::Parser as _;
    RecfileParser::parse(Rule::rec, input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser as _;

    #[test]
    fn well_formed_document_parses() {
        let input = "%rec: Person\n%key: email\n\nname: Alice\nemail: alice@example.com\n";
        assert!(RecfileParser::parse(Rule::rec, input).is_ok());
    }

    #[test]
    fn continuation_lines_are_accepted() {
        let input = "note: first\n+ second\n+ third\n";
        assert!(validate(input));
    }

    #[test]
    fn field_without_colon_is_rejected() {
        assert!(!validate("name\n"));
    }
}
