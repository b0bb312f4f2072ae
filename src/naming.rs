//! Well-known special field names recognized in a descriptor record.
//!
//! Mirrors the `fnames[]` table in `rec-field-name.c`: these are the only
//! `%`-prefixed names the library gives dedicated meaning to.

pub const REC: &str = "%rec";
pub const KEY: &str = "%key";
pub const MANDATORY: &str = "%mandatory";
pub const PROHIBIT: &str = "%prohibit";
pub const UNIQUE: &str = "%unique";
pub const ALLOWED: &str = "%allowed";
pub const TYPE: &str = "%type";
pub const TYPEDEF: &str = "%typedef";
pub const SORT: &str = "%sort";
pub const SIZE: &str = "%size";
pub const CONFIDENTIAL: &str = "%confidential";
pub const CONSTRAINT: &str = "%constraint";
pub const AUTO: &str = "%auto";

/// All special field names, in the order `rec-field-name.c` enumerates them.
pub const ALL: &[&str] = &[
    AUTO, CONFIDENTIAL, KEY, MANDATORY, PROHIBIT, REC, SIZE, SORT, TYPE, TYPEDEF, UNIQUE,
    CONSTRAINT, ALLOWED,
];

/// True if `name` is one of the special descriptor field names above.
pub fn is_special(name: &str) -> bool {
    ALL.contains(&name)
}
