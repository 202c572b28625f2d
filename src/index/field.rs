//! Statically declared field descriptors and canonical value rendering

use crate::models::EntityType;
use strum::Display;

/// Declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldType {
    #[strum(to_string = "string")]
    Text,
    #[strum(to_string = "integer")]
    Integer,
    #[strum(to_string = "boolean")]
    Boolean,
    #[strum(to_string = "string list")]
    TextList,
}

/// Borrowed view of a single field value on a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'r> {
    Text(&'r str),
    Integer(Option<i64>),
    Boolean(bool),
    TextList(&'r [String]),
}

impl<'r> FieldValue<'r> {
    /// Type this value was declared with
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Boolean(_) => FieldType::Boolean,
            FieldValue::TextList(_) => FieldType::TextList,
        }
    }

    /// Index keys this value contributes.
    ///
    /// Scalars yield exactly one key. A list yields one key per distinct
    /// element, in first-seen order, so a record never lands twice in the
    /// same bucket.
    pub fn canonical_values(&self) -> Vec<String> {
        match self {
            FieldValue::Text(text) => vec![canonicalize(text)],
            FieldValue::Integer(Some(number)) => vec![number.to_string()],
            FieldValue::Integer(None) => vec![String::new()],
            FieldValue::Boolean(flag) => vec![flag.to_string()],
            FieldValue::TextList(items) => {
                let mut keys: Vec<String> = Vec::with_capacity(items.len());
                for item in items.iter() {
                    let key = canonicalize(item);
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
                keys
            }
        }
    }
}

/// Lowercase form used for every index key and every lookup
pub fn canonicalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// One entry of a record type's field table
pub struct FieldDescriptor<T: 'static> {
    /// Name as shown to the user
    pub name: &'static str,

    /// Lookup key, always `name` lowercased
    pub key: &'static str,

    /// Declared type
    pub field_type: FieldType,

    /// Reads the field off a record
    pub accessor: fn(&T) -> FieldValue<'_>,
}

impl<T> FieldDescriptor<T> {
    /// Read this field from `record`
    pub fn read<'r>(&self, record: &'r T) -> FieldValue<'r> {
        (self.accessor)(record)
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("field_type", &self.field_type)
            .finish()
    }
}

/// A record variant that can be indexed field by field
pub trait Record: Sync + 'static {
    /// Entity type this record belongs to
    const ENTITY: EntityType;

    /// Field table in declaration order
    fn descriptors() -> &'static [FieldDescriptor<Self>]
    where
        Self: Sized;
}
