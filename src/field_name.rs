//! Field-name grammar: `[%][A-Za-z][A-Za-z0-9_-]*(::?[A-Za-z][A-Za-z0-9_-]*)*`.
//!
//! Grounded on `rec-field-name.c` (`rec_field_name_p`, `rec_field_name_normalise`).

/// Is `s` a legal field name under the grammar above?
///
/// The bare descriptor mark `"%"` is valid on its own (it is the prefix
/// that, attached to nothing, still names a special field in practice);
/// every other name needs at least one letter after the optional `%`.
pub fn is_valid(s: &str) -> bool {
    if s == "%" {
        return true;
    }

    let mut chars = s.chars().peekable();

    if chars.peek() == Some(&'%') {
        chars.next();
    }

    if !matches!(chars.peek(), Some(c) if c.is_ascii_alphabetic()) {
        return false;
    }
    chars.next();

    loop {
        match chars.peek() {
            None => return true,
            Some(c) if c.is_ascii_alphanumeric() || *c == '_' || *c == '-' => {
                chars.next();
            }
            Some(':') => {
                chars.next();
                if chars.peek() == Some(&':') {
                    chars.next();
                }
                match chars.peek() {
                    Some(c) if c.is_ascii_alphabetic() => {
                        chars.next();
                    }
                    _ => return false,
                }
            }
            Some(_) => return false,
        }
    }
}

/// Replace characters outside `[A-Za-z0-9_%-]` with `_`, then re-validate.
///
/// Returns `None` if the result is still not a legal field name (e.g. the
/// first character ends up a digit, or stays a bare invalid `%`).
pub fn normalize(s: &str) -> Option<String> {
    let normalized: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '%' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if is_valid(&normalized) {
        Some(normalized)
    } else {
        None
    }
}

/// Byte-wise field-name equality.
///
/// `rec-field-name.c` carries a TODO noting that `"foo"` and `"foo:"` ought
/// to compare equal; the upstream implementation never resolved it, and we
/// don't guess here either. This function preserves the historical
/// byte-wise behavior; [`equal_loose`] implements the alternative reading,
/// for callers who want it.
pub fn equal(a: &str, b: &str) -> bool {
    a == b
}

/// Field-name equality treating a single trailing `:` as insignificant.
pub fn equal_loose(a: &str, b: &str) -> bool {
    a.strip_suffix(':').unwrap_or(a) == b.strip_suffix(':').unwrap_or(b)
}
