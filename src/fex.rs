//! Field expressions (FEX): a small field-selection mini-language, distinct
//! from the SEX filter language in [`crate::sex`].

use crate::error::{Error, Result};

/// Which FEX dialect to parse or render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FexMode {
    /// Whitespace- or tab-separated field names.
    Simple,
    /// Comma-separated field names.
    Csv,
    /// CSV plus optional `[i]`/`[i-j]` subscripts and `:new_name` rewrites.
    Subscripts,
}

/// One element of a parsed field expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FexElem {
    name: String,
    /// Minimum subscript index, or `-1` if none was given.
    min: i64,
    /// Maximum subscript index, or `-1` if none was given.
    max: i64,
    rewrite_to: Option<String>,
}

impl FexElem {
    pub fn field_name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn rewrite_to(&self) -> Option<&str> {
        self.rewrite_to.as_deref()
    }
}

/// A parsed field expression: an ordered sequence of [`FexElem`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fex {
    elems: Vec<FexElem>,
}

impl Fex {
    pub fn elems(&self) -> &[FexElem] {
        &self.elems
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

/// Parse a field expression string under the given mode.
pub fn parse_fex(input: &str, mode: FexMode) -> Result<Fex> {
    let parts: Vec<&str> = match mode {
        FexMode::Simple => input.split_whitespace().collect(),
        FexMode::Csv | FexMode::Subscripts => {
            input.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()).collect()
        }
    };

    let mut elems = Vec::with_capacity(parts.len());
    for part in parts {
        elems.push(parse_elem(part, mode)?);
    }
    Ok(Fex { elems })
}

fn parse_elem(part: &str, mode: FexMode) -> Result<FexElem> {
    let (field_and_sub, rewrite_to) = if mode == FexMode::Subscripts {
        match part.split_once(':') {
            Some((a, b)) => (a, Some(b.trim().to_string())),
            None => (part, None),
        }
    } else {
        (part, None)
    };

    let (name, min, max) = if mode == FexMode::Subscripts {
        if let Some(open) = field_and_sub.find('[') {
            let close = field_and_sub
                .find(']')
                .ok_or_else(|| Error::usage("unterminated subscript in field expression"))?;
            let name = field_and_sub[..open].trim().to_string();
            let sub = &field_and_sub[open + 1..close];
            let (min, max) = match sub.split_once('-') {
                Some((a, b)) => (
                    a.trim().parse().map_err(|_| Error::usage("bad subscript"))?,
                    b.trim().parse().map_err(|_| Error::usage("bad subscript"))?,
                ),
                None => {
                    let n = sub.trim().parse().map_err(|_| Error::usage("bad subscript"))?;
                    (n, n)
                }
            };
            (name, min, max)
        } else {
            (field_and_sub.trim().to_string(), -1, -1)
        }
    } else {
        (field_and_sub.trim().to_string(), -1, -1)
    };

    Ok(FexElem { name, min, max, rewrite_to })
}

/// Render a parsed field expression back to text under the given mode.
pub fn rec_fex_str(fex: &Fex, mode: FexMode) -> String {
    let names: Vec<&str> = fex.elems.iter().map(|e| e.name.as_str()).collect();
    match mode {
        FexMode::Simple => names.join(" "),
        FexMode::Csv | FexMode::Subscripts => names.join(","),
    }
}

/// Order the elements of a field expression by field name.
pub fn sort(mut fex: Fex) -> Fex {
    fex.elems.sort_by(|a, b| a.name.cmp(&b.name));
    fex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscripts_parse_and_render() {
        let fex = parse_fex("foo[0],bar[1-2],baz", FexMode::Subscripts).unwrap();
        assert_eq!(rec_fex_str(&fex, FexMode::Simple), "foo bar baz");
        assert_eq!(rec_fex_str(&fex, FexMode::Csv), "foo,bar,baz");

        assert_eq!(fex.elems()[0].min(), 0);
        assert_eq!(fex.elems()[0].max(), 0);
        assert_eq!(fex.elems()[1].min(), 1);
        assert_eq!(fex.elems()[1].max(), 2);
        assert_eq!(fex.elems()[2].min(), -1);
    }

    #[test]
    fn sort_orders_by_field_name() {
        let fex = parse_fex("ccc[2],aaa[0],bbb[1]", FexMode::Subscripts).unwrap();
        let sorted = sort(fex);
        let names: Vec<&str> = sorted.elems().iter().map(|e| e.field_name()).collect();
        assert_eq!(names, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn rewrite_to_is_captured() {
        let fex = parse_fex("foo:bar", FexMode::Subscripts).unwrap();
        assert_eq!(fex.elems()[0].rewrite_to(), Some("bar"));
    }

    #[test]
    fn simple_mode_splits_whitespace() {
        let fex = parse_fex("foo\tbar  baz", FexMode::Simple).unwrap();
        assert_eq!(rec_fex_str(&fex, FexMode::Simple), "foo bar baz");
    }
}
