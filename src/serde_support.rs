//! Optional [`serde::Serialize`] impls (feature `serde`), kept in their own
//! module rather than scattered `#[cfg(feature = "serde")]` blocks through
//! the core types.
//!
//! A [`Record`] serializes as a sequence of `(name, value)` pairs rather
//! than a map, since field names may repeat (a record is a multiset, not a
//! map) and a `serde_json::Map` would silently drop duplicates.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::database::Database;
use crate::record::Record;
use crate::rset::RecordSet;

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.num_fields()))?;
        for field in self.fields() {
            seq.serialize_element(&(field.name(), field.value()))?;
        }
        seq.end()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.num_records()))?;
        for record in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl Serialize for Database {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for rset in self.rsets() {
            seq.serialize_element(rset)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    #[test]
    fn record_serializes_as_ordered_pairs_preserving_duplicates() {
        let mut r = Record::new();
        r.push_field(Field::new("t", "1"));
        r.push_field(Field::new("t", "2"));

        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"[["t","1"],["t","2"]]"#);
    }
}
