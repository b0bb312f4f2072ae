//! Field-name, type, and field-expression properties.

use recs::fex::{parse_fex, rec_fex_str, sort, FexMode};
use recs::field_name;
use recs::types::{parse_type, Type};

#[test]
fn field_name_validity_truth_table() {
    for name in ["%", "ax", "%rec", "a-b", "a_b", "a::b", "a:b"] {
        assert!(field_name::is_valid(name), "{name} should be valid");
    }
    for name in ["", ":", "-x", "_x", "0x"] {
        assert!(!field_name::is_valid(name), "{name} should be invalid");
    }
}

#[test]
fn field_name_normalize_truth_table() {
    assert_eq!(field_name::normalize("a#c d").as_deref(), Some("a_c_d"));
    assert_eq!(field_name::normalize("a-b%c_d"), None);
}

#[test]
fn fex_subscripts_render_simple_and_csv() {
    let fex = parse_fex("foo[0],bar[1-2],baz", FexMode::Subscripts).unwrap();
    assert_eq!(rec_fex_str(&fex, FexMode::Simple), "foo bar baz");
    assert_eq!(rec_fex_str(&fex, FexMode::Csv), "foo,bar,baz");
}

#[test]
fn fex_sort_orders_by_name() {
    let fex = parse_fex("ccc[2],aaa[0],bbb[1]", FexMode::Subscripts).unwrap();
    let sorted = sort(fex);
    let names: Vec<&str> = sorted.elems().iter().map(|e| e.field_name()).collect();
    assert_eq!(names, vec!["aaa", "bbb", "ccc"]);
}

#[test]
fn type_equality_is_structural_and_order_sensitive() {
    let a = parse_type("enum A B C").unwrap();
    assert_eq!(a, parse_type("enum A B C").unwrap());
    assert_ne!(a, parse_type("enum C B A").unwrap());
}

#[test]
fn range_type_validates_bounds() {
    let ty = parse_type("range 1 10").unwrap();
    assert!(ty.validate("5"));
    assert!(!ty.validate("11"));
}

#[test]
fn enum_type_is_case_insensitive() {
    let ty: Type = parse_type("enum A B C").unwrap();
    assert!(ty.validate("a"));
    assert!(!ty.validate("d"));
}
