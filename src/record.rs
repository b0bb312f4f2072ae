//! Fields and records: the unit of data inside a record-set.

use crate::comment::Comment;
use crate::field_name;
use crate::mset::{Multiset, Tag, Tagged};

/// An immutable name/value pair plus diagnostic metadata recording where it
/// was parsed from.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    value: String,
    source: Option<String>,
    line: usize,
    offset: usize,
}

/// Fields compare equal when their names and values match; the `source`,
/// `line`, and `offset` diagnostic metadata is not part of their identity.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Field {}

impl Field {
    /// Construct a field with no location information (e.g. built
    /// programmatically rather than parsed).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source: None,
            line: 0,
            offset: 0,
        }
    }

    pub(crate) fn with_location(
        name: impl Into<String>,
        value: impl Into<String>,
        source: Option<String>,
        line: usize,
        offset: usize,
    ) -> Self {
        Self { name: name.into(), value: value.into(), source, line, offset }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_location(&mut self, source: Option<String>, line: usize, offset: usize) {
        self.source = source;
        self.line = line;
        self.offset = offset;
    }

    /// `true` if this field's name matches `name` under byte-wise equality.
    pub fn name_equals(&self, name: &str) -> bool {
        field_name::equal(&self.name, name)
    }

    /// Render this field as it would appear in NORMAL output: converts it
    /// into a [`Comment`] whose text is `name:` / `name: value` /
    /// `name: line1\n+ line2...` depending on the value's shape.
    pub fn to_comment(&self) -> Comment {
        Comment::new(crate::write::format_field_normal(&self.name, &self.value))
    }
}

/// An element of a [`Record`]: either a field or an interleaved comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordElem {
    Field(Field),
    Comment(Comment),
}

impl Tagged for RecordElem {
    fn tag(&self) -> Tag {
        match self {
            RecordElem::Field(_) => Tag::Field,
            RecordElem::Comment(_) => Tag::Comment,
        }
    }
}

impl From<Field> for RecordElem {
    fn from(f: Field) -> Self {
        RecordElem::Field(f)
    }
}

impl From<Comment> for RecordElem {
    fn from(c: Comment) -> Self {
        RecordElem::Comment(c)
    }
}

/// An ordered sequence of fields and comments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    elems: Multiset<RecordElem>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_field(&mut self, field: Field) {
        self.elems.append(RecordElem::Field(field));
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.elems.append(RecordElem::Comment(comment));
    }

    pub fn num_fields(&self) -> usize {
        self.elems.count(Tag::Field)
    }

    pub fn num_elems(&self) -> usize {
        self.elems.len()
    }

    /// All fields, in document order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.elems.iter_tag(Tag::Field).map(|e| match e {
            RecordElem::Field(f) => f,
            RecordElem::Comment(_) => unreachable!(),
        })
    }

    /// All elements (fields and comments), in document order.
    pub fn elems(&self) -> impl Iterator<Item = &RecordElem> {
        self.elems.iter()
    }

    /// The `index`-th field named `name` (0-based).
    pub fn field_at(&self, name: &str, index: usize) -> Option<&Field> {
        self.fields().filter(|f| f.name_equals(name)).nth(index)
    }

    /// The first field named `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_at(name, 0)
    }

    /// Number of fields named `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.fields().filter(|f| f.name_equals(name)).count()
    }

    /// The `index`-th field of any kind (0-based across the whole record).
    pub fn get_field_at(&self, index: usize) -> Option<&Field> {
        match self.elems.get_at(Tag::Field, index) {
            Some(RecordElem::Field(f)) => Some(f),
            _ => None,
        }
    }
}
