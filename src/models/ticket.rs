use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::nullable;
use crate::index::{FieldDescriptor, FieldType, FieldValue, Record};

/// A support ticket from the tickets export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// API URL of the ticket
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    /// Identifier in the originating system
    #[serde(default, deserialize_with = "nullable")]
    pub external_id: String,

    /// Creation timestamp, kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,

    /// Ticket type (incident, problem, question, task)
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub ticket_type: String,

    /// One-line summary
    #[serde(default, deserialize_with = "nullable")]
    pub subject: String,

    /// Free text body
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,

    /// Priority (low, normal, high, urgent)
    #[serde(default, deserialize_with = "nullable")]
    pub priority: String,

    /// Workflow status (open, pending, hold, solved, closed)
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,

    /// User who raised the ticket
    #[serde(default)]
    pub submitter_id: Option<i64>,

    /// User the ticket is assigned to
    #[serde(default)]
    pub assignee_id: Option<i64>,

    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<i64>,

    /// Free-form tags
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,

    /// Whether the ticket has linked incidents
    #[serde(default, deserialize_with = "nullable")]
    pub has_incidents: bool,

    /// Due timestamp, kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub due_at: String,

    /// Channel the ticket arrived through
    #[serde(default, deserialize_with = "nullable")]
    pub via: String,
}

const TICKET_FIELDS: &[FieldDescriptor<Ticket>] = &[
    FieldDescriptor {
        name: "ID",
        key: "id",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.id),
    },
    FieldDescriptor {
        name: "URL",
        key: "url",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.url),
    },
    FieldDescriptor {
        name: "ExternalID",
        key: "externalid",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.external_id),
    },
    FieldDescriptor {
        name: "CreatedAt",
        key: "createdat",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.created_at),
    },
    FieldDescriptor {
        name: "Type",
        key: "type",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.ticket_type),
    },
    FieldDescriptor {
        name: "Subject",
        key: "subject",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.subject),
    },
    FieldDescriptor {
        name: "Description",
        key: "description",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.description),
    },
    FieldDescriptor {
        name: "Priority",
        key: "priority",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.priority),
    },
    FieldDescriptor {
        name: "Status",
        key: "status",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.status),
    },
    FieldDescriptor {
        name: "SubmitterID",
        key: "submitterid",
        field_type: FieldType::Integer,
        accessor: |t| FieldValue::Integer(t.submitter_id),
    },
    FieldDescriptor {
        name: "AssigneeID",
        key: "assigneeid",
        field_type: FieldType::Integer,
        accessor: |t| FieldValue::Integer(t.assignee_id),
    },
    FieldDescriptor {
        name: "OrganizationID",
        key: "organizationid",
        field_type: FieldType::Integer,
        accessor: |t| FieldValue::Integer(t.organization_id),
    },
    FieldDescriptor {
        name: "Tags",
        key: "tags",
        field_type: FieldType::TextList,
        accessor: |t| FieldValue::TextList(&t.tags),
    },
    FieldDescriptor {
        name: "HasIncidents",
        key: "hasincidents",
        field_type: FieldType::Boolean,
        accessor: |t| FieldValue::Boolean(t.has_incidents),
    },
    FieldDescriptor {
        name: "DueAt",
        key: "dueat",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.due_at),
    },
    FieldDescriptor {
        name: "Via",
        key: "via",
        field_type: FieldType::Text,
        accessor: |t| FieldValue::Text(&t.via),
    },
];

impl Record for Ticket {
    const ENTITY: EntityType = EntityType::Ticket;

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        TICKET_FIELDS
    }
}
