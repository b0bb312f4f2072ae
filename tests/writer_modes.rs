//! Writer mode properties across all four rendering modes.

use recs::record::{Field, Record};
use recs::write::{sexp_name_alone, write_database, WriteMode};

fn db_with_fields(fields: &[(&str, &str)]) -> recs::Database {
    let mut record = Record::new();
    for (name, value) in fields {
        record.push_field(Field::new(*name, *value));
    }
    let mut rset = recs::rset::RecordSet::new();
    rset.push_record(record);
    let mut db = recs::Database::new();
    db.push(rset);
    db
}

#[test]
fn normal_comment_rendering() {
    let mut rset = recs::rset::RecordSet::new();
    rset.push_comment(recs::comment::Comment::new("foo bar"));
    let mut db = recs::Database::new();
    db.push(rset);
    assert_eq!(write_database(&db, WriteMode::Normal), "#foo bar\n");

    let mut rset = recs::rset::RecordSet::new();
    rset.push_comment(recs::comment::Comment::new(""));
    let mut db = recs::Database::new();
    db.push(rset);
    assert_eq!(write_database(&db, WriteMode::Normal), "#\n");

    let mut rset = recs::rset::RecordSet::new();
    rset.push_comment(recs::comment::Comment::new("one\ntwo\nthree"));
    let mut db = recs::Database::new();
    db.push(rset);
    assert_eq!(write_database(&db, WriteMode::Normal), "#one\n#two\n#three\n");
}

#[test]
fn sexp_field_preserves_two_spaces() {
    let db = db_with_fields(&[("foo", "value")]);
    let out = write_database(&db, WriteMode::Sexp);
    assert!(out.contains("(field  \"foo\" \"value\")"));
}

#[test]
fn normal_and_sexp_bare_name_forms() {
    let db = db_with_fields(&[("foo", "")]);
    assert_eq!(write_database(&db, WriteMode::Normal), "foo:\n");
    assert_eq!(sexp_name_alone("foo"), "\"foo\"");
}

#[test]
fn values_row_mode_tab_separates_bare_values() {
    let db = db_with_fields(&[("a", "1"), ("b", "2"), ("c", "3")]);
    assert_eq!(write_database(&db, WriteMode::ValuesRow), "1\t2\t3\n");
}
