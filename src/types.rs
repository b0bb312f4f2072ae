//! Type descriptors (`%type` values) and validation of field values against
//! them.
//!
//! A single tagged enum rather than one newtype per kind, since these
//! variants are mutually exclusive and closed.

use regex::Regex;
use unicase::UniCase;

use crate::error::{Error, Result};
use crate::field_name;

/// A compiled type descriptor, as declared by a `%type` field.
#[derive(Debug, Clone)]
pub enum Type {
    Int,
    Bool,
    Range { min: i64, max: i64 },
    Real,
    Size(usize),
    Line,
    Regexp { source: String, re: Regex },
    Date,
    Enum(Vec<String>),
    Field,
    Email,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        use Type::*;
        match (self, other) {
            (Int, Int) | (Bool, Bool) | (Real, Real) | (Line, Line) | (Date, Date)
            | (Field, Field) | (Email, Email) => true,
            (Range { min: a0, max: a1 }, Range { min: b0, max: b1 }) => a0 == b0 && a1 == b1,
            (Size(a), Size(b)) => a == b,
            (Regexp { source: a, .. }, Regexp { source: b, .. }) => a == b,
            (Enum(a), Enum(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Type {}

/// Parse a `%type` descriptor, e.g. `"range 1 10"` or `"enum A B C"`.
///
/// Whitespace-insensitive; rejects trailing garbage after the recognized
/// form.
pub fn parse_type(descr: &str) -> Result<Type> {
    let mut tokens = descr.split_whitespace();
    let kind = tokens
        .next()
        .ok_or_else(|| Error::validation("type descriptor", descr))?;

    let rest: Vec<&str> = tokens.collect();

    let ty = match kind {
        "int" => {
            require_no_extra(descr, &rest)?;
            Type::Int
        }
        "bool" => {
            require_no_extra(descr, &rest)?;
            Type::Bool
        }
        "real" => {
            require_no_extra(descr, &rest)?;
            Type::Real
        }
        "line" => {
            require_no_extra(descr, &rest)?;
            Type::Line
        }
        "date" => {
            require_no_extra(descr, &rest)?;
            Type::Date
        }
        "field" => {
            require_no_extra(descr, &rest)?;
            Type::Field
        }
        "email" => {
            require_no_extra(descr, &rest)?;
            Type::Email
        }
        "size" => match rest.as_slice() {
            [n] => {
                let n: usize = n.parse().map_err(|_| Error::validation("size descriptor", descr))?;
                Type::Size(n)
            }
            _ => return Err(Error::validation("size descriptor", descr)),
        },
        "range" => match rest.as_slice() {
            [max] => {
                let max: i64 = max.parse().map_err(|_| Error::validation("range descriptor", descr))?;
                Type::Range { min: 0, max }
            }
            [min, max] => {
                let min: i64 = min.parse().map_err(|_| Error::validation("range descriptor", descr))?;
                let max: i64 = max.parse().map_err(|_| Error::validation("range descriptor", descr))?;
                Type::Range { min, max }
            }
            _ => return Err(Error::validation("range descriptor", descr)),
        },
        "enum" => {
            if rest.is_empty() {
                return Err(Error::validation("enum descriptor", descr));
            }
            // Inline `(...)` comments after a name are ignored.
            let mut names = Vec::new();
            let mut in_comment = false;
            for raw in &rest {
                let mut tok = *raw;
                loop {
                    if in_comment {
                        if let Some(idx) = tok.find(')') {
                            tok = &tok[idx + 1..];
                            in_comment = false;
                        } else {
                            tok = "";
                            break;
                        }
                    } else if let Some(idx) = tok.find('(') {
                        let name = &tok[..idx];
                        if !name.is_empty() {
                            names.push(name.to_string());
                        }
                        tok = &tok[idx + 1..];
                        in_comment = true;
                    } else {
                        if !tok.is_empty() {
                            names.push(tok.to_string());
                        }
                        break;
                    }
                }
            }
            Type::Enum(names)
        }
        "regexp" => {
            let pattern = descr["regexp".len()..].trim();
            let (source, re) = parse_regexp_literal(pattern, descr)?;
            Type::Regexp { source, re }
        }
        _ => return Err(Error::validation("type descriptor", descr)),
    };

    Ok(ty)
}

fn require_no_extra(descr: &str, rest: &[&str]) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::validation("type descriptor", descr))
    }
}

/// Parse `/pattern/`-style regexp literal, where the delimiter is any
/// non-alphanumeric printable character and need not be `/`.
fn parse_regexp_literal(literal: &str, descr: &str) -> Result<(String, Regex)> {
    let mut chars = literal.chars();
    let delim = chars
        .next()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .ok_or_else(|| Error::validation("regexp descriptor", descr))?;

    let rest = &literal[delim.len_utf8()..];
    let end = rest
        .rfind(delim)
        .ok_or_else(|| Error::validation("regexp descriptor", descr))?;
    let pattern = &rest[..end];

    let re = Regex::new(pattern).map_err(|_| Error::validation("regexp descriptor", descr))?;
    Ok((pattern.to_string(), re))
}

impl Type {
    /// Validate `value` against this type.
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Type::Int => is_int(value),
            Type::Bool => {
                let v = UniCase::ascii(value);
                ["0", "1", "yes", "no", "true", "false"]
                    .into_iter()
                    .any(|candidate| v == UniCase::ascii(candidate))
            }
            Type::Range { min, max } => match value.trim().parse::<i64>() {
                Ok(n) => n >= *min && n <= *max,
                Err(_) => false,
            },
            Type::Real => is_real(value),
            Type::Size(n) => value.trim_end_matches('\n').len() <= *n,
            Type::Line => !value.contains('\n'),
            Type::Regexp { re, .. } => re.is_match(value),
            Type::Date => crate::dates::parse_date(value).is_some(),
            Type::Enum(names) => names.iter().any(|n| UniCase::ascii(n) == UniCase::ascii(value)),
            Type::Field => field_name::is_valid(value),
            Type::Email => is_email(value),
        }
    }
}

fn is_int(value: &str) -> bool {
    let v = value.trim();
    let v = v.strip_prefix(['+', '-']).unwrap_or(v);
    if let Some(hex) = v.strip_prefix("0x").or_else(|| v.strip_prefix("0X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else {
        !v.is_empty() && v.chars().all(|c| c.is_ascii_digit())
    }
}

fn is_real(value: &str) -> bool {
    let v = value.trim();
    let v = v.strip_prefix(['+', '-']).unwrap_or(v);
    let (int_part, frac_part) = match v.split_once('.') {
        Some((a, b)) => (a, Some(b)),
        None => (v, None),
    };
    if int_part.is_empty() && frac_part.is_none_or(|f| f.is_empty()) {
        return false;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(f) => f.chars().all(|c| c.is_ascii_digit()),
        None => true,
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(|c| c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_validates() {
        let ty = parse_type("range 1 10").unwrap();
        assert!(ty.validate("5"));
        assert!(!ty.validate("11"));
    }

    #[test]
    fn range_defaults_min_to_zero() {
        let ty = parse_type("range 10").unwrap();
        assert_eq!(ty, Type::Range { min: 0, max: 10 });
    }

    #[test]
    fn enum_case_insensitive() {
        let ty = parse_type("enum A B C").unwrap();
        assert!(ty.validate("a"));
        assert!(!ty.validate("d"));
    }

    #[test]
    fn enum_strips_inline_comments() {
        let ty = parse_type("enum A(first) B(second)").unwrap();
        assert_eq!(ty, Type::Enum(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn equality_is_structural_and_order_sensitive() {
        let a = parse_type("enum A B").unwrap();
        let b = parse_type("enum B A").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, parse_type("enum A B").unwrap());
    }

    #[test]
    fn size_checks_byte_length() {
        let ty = parse_type("size 3").unwrap();
        assert!(ty.validate("abc"));
        assert!(!ty.validate("abcd"));
    }

    #[test]
    fn regexp_delimiter_can_be_any_punctuation() {
        let ty = parse_type("regexp #^[0-9]+$#").unwrap();
        assert!(ty.validate("123"));
        assert!(!ty.validate("abc"));
    }

    #[test]
    fn trailing_garbage_rejected() {
        assert!(parse_type("int extra").is_err());
    }
}
