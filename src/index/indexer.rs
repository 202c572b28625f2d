//! Per-field inverted indices over one record collection

use crate::index::error::{IndexError, IndexResult};
use crate::index::field::{canonicalize, FieldType, Record};
use std::collections::HashMap;

/// Inverted index for a single field.
///
/// Buckets keep records in collection order and hold borrowed references
/// only, so an index can never outlive the collection it was built from.
#[derive(Debug)]
pub struct FieldIndex<'a, T> {
    name: &'static str,
    key: &'static str,
    field_type: FieldType,
    values: HashMap<String, Vec<&'a T>>,
}

impl<'a, T> FieldIndex<'a, T> {
    fn new(name: &'static str, key: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            key,
            field_type,
            values: HashMap::new(),
        }
    }

    /// Field name as declared, for display
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lowercase lookup key
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Records stored under an already canonical value
    pub fn get(&self, canonical: &str) -> &[&'a T] {
        self.values.get(canonical).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records whose value matches `raw`, ignoring case
    pub fn lookup(&self, raw: &str) -> &[&'a T] {
        self.get(&canonicalize(raw))
    }

    /// Number of distinct canonical values
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    fn insert(&mut self, canonical: String, record: &'a T) {
        self.values.entry(canonical).or_default().push(record);
    }
}

/// All field indices for one entity type
#[derive(Debug)]
pub struct EntityIndex<'a, T> {
    fields: Vec<FieldIndex<'a, T>>,
    positions: HashMap<&'static str, usize>,
    record_count: usize,
}

impl<'a, T: Record> EntityIndex<'a, T> {
    /// Field index for `name`, ignoring case
    pub fn field(&self, name: &str) -> Option<&FieldIndex<'a, T>> {
        self.positions
            .get(canonicalize(name.trim()).as_str())
            .map(|&position| &self.fields[position])
    }

    /// Field indices in declaration order
    pub fn fields(&self) -> &[FieldIndex<'a, T>] {
        &self.fields
    }

    /// Display names in declaration order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(FieldIndex::name).collect()
    }

    /// Number of records that were indexed
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

/// Build the field indices for a homogeneous collection.
///
/// The field set comes from the record type's descriptor table, read once.
/// Every scalar field files each record under one canonical value; list
/// fields file it under each distinct element. Fails on an empty collection
/// since there is no record to take a schema from.
pub fn build_index<'a, T: Record>(records: &'a [T]) -> IndexResult<EntityIndex<'a, T>> {
    if records.is_empty() {
        return Err(IndexError::EmptyCollection(T::ENTITY));
    }

    let descriptors = T::descriptors();
    let mut fields: Vec<FieldIndex<'a, T>> = descriptors
        .iter()
        .map(|d| FieldIndex::new(d.name, d.key, d.field_type))
        .collect();

    for record in records {
        for (descriptor, field) in descriptors.iter().zip(fields.iter_mut()) {
            for canonical in descriptor.read(record).canonical_values() {
                field.insert(canonical, record);
            }
        }
    }

    let positions = descriptors
        .iter()
        .enumerate()
        .map(|(position, d)| (d.key, position))
        .collect();

    tracing::debug!(
        entity = %T::ENTITY,
        records = records.len(),
        fields = fields.len(),
        "Built entity index"
    );

    Ok(EntityIndex {
        fields,
        positions,
        record_count: records.len(),
    })
}
