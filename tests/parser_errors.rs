//! Parser error properties, including the sticky in-error/at-eof state.

use recs::parse::Parser;

#[test]
fn two_colons_in_a_field_name_line_is_an_error() {
    let mut p = Parser::from_str("foo:bar:\n", "-");
    assert!(p.parse_database().is_err());
    assert!(p.in_error());
}

#[test]
fn a_record_set_made_only_of_comments_is_an_error() {
    let mut p = Parser::from_str("# nothing but comments\n# here\n", "-");
    assert!(p.parse_database().is_err());
}

#[test]
fn a_line_of_bare_whitespace_outside_continuation_is_an_error() {
    let mut p = Parser::from_str("foo: bar\n baz: qux\n", "-");
    assert!(p.parse_database().is_err());
}

#[test]
fn a_field_name_without_a_colon_is_an_error() {
    let mut p = Parser::from_str("foo\n", "-");
    assert!(p.parse_database().is_err());
}

#[test]
fn empty_input_parses_to_an_empty_database() {
    let db = Parser::from_str("", "-").parse_database().unwrap();
    assert!(db.is_empty());
}

#[test]
fn rec_field_always_starts_a_new_record_set() {
    let input = "%rec: A\n\nx: 1\n\n%rec: B\n\nx: 1\n\nx: 2\n";
    let db = Parser::from_str(input, "-").parse_database().unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(db.get(0).unwrap().num_records(), 1);
    assert_eq!(db.get(1).unwrap().num_records(), 2);
}
