use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::nullable;
use crate::index::{FieldDescriptor, FieldType, FieldValue, Record};

/// A customer organization from the organizations export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: i64,

    /// API URL of the organization
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    /// Identifier in the originating system
    #[serde(default, deserialize_with = "nullable")]
    pub external_id: String,

    /// Organization name
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Email domains owned by the organization
    #[serde(default, deserialize_with = "nullable")]
    pub domain_names: Vec<String>,

    /// Creation timestamp, kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,

    /// Free text details
    #[serde(default, deserialize_with = "nullable")]
    pub details: String,

    /// Whether tickets are shared among members
    #[serde(default, deserialize_with = "nullable")]
    pub shared_tickets: bool,

    /// Free-form tags
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
}

const ORGANIZATION_FIELDS: &[FieldDescriptor<Organization>] = &[
    FieldDescriptor {
        name: "ID",
        key: "id",
        field_type: FieldType::Integer,
        accessor: |o| FieldValue::Integer(Some(o.id)),
    },
    FieldDescriptor {
        name: "URL",
        key: "url",
        field_type: FieldType::Text,
        accessor: |o| FieldValue::Text(&o.url),
    },
    FieldDescriptor {
        name: "ExternalID",
        key: "externalid",
        field_type: FieldType::Text,
        accessor: |o| FieldValue::Text(&o.external_id),
    },
    FieldDescriptor {
        name: "Name",
        key: "name",
        field_type: FieldType::Text,
        accessor: |o| FieldValue::Text(&o.name),
    },
    FieldDescriptor {
        name: "DomainNames",
        key: "domainnames",
        field_type: FieldType::TextList,
        accessor: |o| FieldValue::TextList(&o.domain_names),
    },
    FieldDescriptor {
        name: "CreatedAt",
        key: "createdat",
        field_type: FieldType::Text,
        accessor: |o| FieldValue::Text(&o.created_at),
    },
    FieldDescriptor {
        name: "Details",
        key: "details",
        field_type: FieldType::Text,
        accessor: |o| FieldValue::Text(&o.details),
    },
    FieldDescriptor {
        name: "SharedTickets",
        key: "sharedtickets",
        field_type: FieldType::Boolean,
        accessor: |o| FieldValue::Boolean(o.shared_tickets),
    },
    FieldDescriptor {
        name: "Tags",
        key: "tags",
        field_type: FieldType::TextList,
        accessor: |o| FieldValue::TextList(&o.tags),
    },
];

impl Record for Organization {
    const ENTITY: EntityType = EntityType::Organization;

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        ORGANIZATION_FIELDS
    }
}
