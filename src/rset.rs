//! Record-sets: a descriptor plus the records sharing its schema.

use crate::comment::Comment;
use crate::mset::{Multiset, Tag, Tagged};
use crate::naming;
use crate::record::Record;
use crate::registry::TypeRegistry;
use crate::types::parse_type;

/// Comparison used by a `%size` record-set constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCmp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraint {
    pub n: usize,
    pub cmp: SizeCmp,
}

impl SizeConstraint {
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        match self.cmp {
            SizeCmp::Eq => count == self.n,
            SizeCmp::Lt => count < self.n,
            SizeCmp::Le => count <= self.n,
            SizeCmp::Gt => count > self.n,
            SizeCmp::Ge => count >= self.n,
        }
    }
}

/// Attributes derived from a record-set's descriptor record.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    record: Record,
    rec_name: String,
    key: Option<String>,
    mandatory: Vec<String>,
    prohibit: Vec<String>,
    unique: Vec<String>,
    allowed: Vec<String>,
    sort: Vec<String>,
    size: Option<SizeConstraint>,
    confidential: Vec<String>,
    constraints: Vec<String>,
    auto: Vec<String>,
    typedefs: TypeRegistry,
}

impl Descriptor {
    /// Build a descriptor from its record, deriving all attributes. Returns
    /// `None` if `record` contains no `%rec` field (i.e. is not a
    /// descriptor at all).
    pub fn from_record(record: Record) -> Option<Self> {
        let rec_name = record.field(naming::REC)?.value().trim().to_string();

        let mut d = Descriptor { rec_name, ..Default::default() };

        let mut field_types: Vec<(Vec<String>, crate::types::Type)> = Vec::new();

        for field in record.fields() {
            match field.name() {
                naming::KEY => d.key = Some(field.value().trim().to_string()),
                naming::MANDATORY => d.mandatory.extend(split_names(field.value())),
                naming::PROHIBIT => d.prohibit.extend(split_names(field.value())),
                naming::UNIQUE => d.unique.extend(split_names(field.value())),
                naming::ALLOWED => d.allowed.extend(split_names(field.value())),
                naming::SORT => d.sort.extend(split_names(field.value())),
                naming::CONFIDENTIAL => d.confidential.extend(split_names(field.value())),
                naming::CONSTRAINT => d.constraints.push(field.value().trim().to_string()),
                naming::AUTO => d.auto.extend(split_names(field.value())),
                naming::SIZE => d.size = parse_size_constraint(field.value()),
                naming::TYPE => {
                    if let Some((names, descr)) = field.value().trim().split_once(' ') {
                        if let Ok(ty) = parse_type(descr.trim()) {
                            let names: Vec<String> = split_names(names);
                            for n in &names {
                                d.typedefs.insert(n.clone(), ty.clone());
                            }
                            field_types.push((names, ty));
                        }
                    }
                }
                naming::TYPEDEF => {
                    if let Some((alias, descr)) = field.value().trim().split_once(' ') {
                        if let Ok(ty) = parse_type(descr.trim()) {
                            d.typedefs.insert(alias.trim().to_string(), ty);
                        }
                    }
                }
                _ => {}
            }
        }

        d.record = record;
        Some(d)
    }

    pub fn rec_name(&self) -> &str {
        &self.rec_name
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn mandatory(&self) -> &[String] {
        &self.mandatory
    }

    pub fn prohibit(&self) -> &[String] {
        &self.prohibit
    }

    pub fn unique(&self) -> &[String] {
        &self.unique
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn sort(&self) -> &[String] {
        &self.sort
    }

    pub fn size(&self) -> Option<SizeConstraint> {
        self.size
    }

    pub fn confidential(&self) -> &[String] {
        &self.confidential
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn auto(&self) -> &[String] {
        &self.auto
    }

    /// Field-name → [`Type`](crate::types::Type) registry derived from
    /// `%type`/`%typedef` fields.
    pub fn types(&self) -> &TypeRegistry {
        &self.typedefs
    }
}

fn split_names(value: &str) -> Vec<String> {
    value.split_whitespace().map(|s| s.to_string()).collect()
}

fn parse_size_constraint(value: &str) -> Option<SizeConstraint> {
    let value = value.trim();
    let (cmp, rest) = if let Some(r) = value.strip_prefix(">=") {
        (SizeCmp::Ge, r)
    } else if let Some(r) = value.strip_prefix("<=") {
        (SizeCmp::Le, r)
    } else if let Some(r) = value.strip_prefix('>') {
        (SizeCmp::Gt, r)
    } else if let Some(r) = value.strip_prefix('<') {
        (SizeCmp::Lt, r)
    } else {
        (SizeCmp::Eq, value)
    };
    rest.trim().parse().ok().map(|n| SizeConstraint { n, cmp })
}

/// An element of a [`RecordSet`]: a record or an interleaved comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsetElem {
    Record(Record),
    Comment(Comment),
}

impl Tagged for RsetElem {
    fn tag(&self) -> Tag {
        match self {
            RsetElem::Record(_) => Tag::Record,
            RsetElem::Comment(_) => Tag::Comment,
        }
    }
}

/// An optional descriptor plus the records that share its schema.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    descriptor: Option<Descriptor>,
    elems: Multiset<RsetElem>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(descriptor: Descriptor) -> Self {
        Self { descriptor: Some(descriptor), elems: Multiset::new() }
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        self.descriptor.as_ref()
    }

    pub fn set_descriptor(&mut self, descriptor: Option<Descriptor>) {
        self.descriptor = descriptor;
    }

    pub fn push_record(&mut self, record: Record) {
        self.elems.append(RsetElem::Record(record));
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.elems.append(RsetElem::Comment(comment));
    }

    pub fn num_records(&self) -> usize {
        self.elems.count(Tag::Record)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.elems.iter_tag(Tag::Record).map(|e| match e {
            RsetElem::Record(r) => r,
            RsetElem::Comment(_) => unreachable!(),
        })
    }

    pub fn elems(&self) -> impl Iterator<Item = &RsetElem> {
        self.elems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    #[test]
    fn descriptor_recognized_by_rec_field() {
        let mut r = Record::new();
        r.push_field(Field::new(naming::REC, "Person"));
        r.push_field(Field::new(naming::KEY, "email"));
        r.push_field(Field::new(naming::MANDATORY, "name email"));

        let d = Descriptor::from_record(r).unwrap();
        assert_eq!(d.rec_name(), "Person");
        assert_eq!(d.key(), Some("email"));
        assert_eq!(d.mandatory(), &["name".to_string(), "email".to_string()]);
    }

    #[test]
    fn non_descriptor_record_is_rejected() {
        let mut r = Record::new();
        r.push_field(Field::new("name", "Alice"));
        assert!(Descriptor::from_record(r).is_none());
    }

    #[test]
    fn size_constraint_parses_comparator() {
        assert_eq!(
            parse_size_constraint(">= 3"),
            Some(SizeConstraint { n: 3, cmp: SizeCmp::Ge })
        );
        assert_eq!(
            parse_size_constraint("5"),
            Some(SizeConstraint { n: 5, cmp: SizeCmp::Eq })
        );
    }
}
