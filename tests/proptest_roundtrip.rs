//! Property-based round-trip test: for any database built through the
//! public API, `serialize_normal` is a fixed point of
//! `parse . serialize_normal`.

use proptest::prelude::*;

use recs::record::{Field, Record};
use recs::rset::RecordSet;
use recs::Database;

fn field_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,6}"
}

fn field_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

fn arb_database() -> impl Strategy<Value = Database> {
    proptest::collection::vec(
        proptest::collection::vec((field_name(), field_value()), 1..4),
        1..4,
    )
    .prop_map(|records| {
        let mut rset = RecordSet::new();
        for fields in records {
            let mut record = Record::new();
            for (name, value) in fields {
                record.push_field(Field::new(name, value));
            }
            rset.push_record(record);
        }
        let mut db = Database::new();
        db.push(rset);
        db
    })
}

proptest! {
    #[test]
    fn serialize_normal_is_a_fixed_point_of_parse_then_serialize(db in arb_database()) {
        let first = recs::to_string(&db);
        let reparsed = recs::from_str(&first, "-").unwrap();
        let second = recs::to_string(&reparsed);
        prop_assert_eq!(first, second);
    }
}
