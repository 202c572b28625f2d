use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::nullable;
use crate::index::{FieldDescriptor, FieldType, FieldValue, Record};

/// An end user or agent from the users export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: i64,

    /// API URL of the user
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    /// Identifier in the originating system
    #[serde(default, deserialize_with = "nullable")]
    pub external_id: String,

    /// Full name
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Display alias
    #[serde(default, deserialize_with = "nullable")]
    pub alias: String,

    /// Creation timestamp, kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,

    /// Whether the account is active
    #[serde(default, deserialize_with = "nullable")]
    pub active: bool,

    /// Whether the identity is verified
    #[serde(default, deserialize_with = "nullable")]
    pub verified: bool,

    /// Whether the user is shared across brands
    #[serde(default, deserialize_with = "nullable")]
    pub shared: bool,

    /// Locale tag (e.g. en-AU)
    #[serde(default, deserialize_with = "nullable")]
    pub locale: String,

    /// Time zone name
    #[serde(default, deserialize_with = "nullable")]
    pub timezone: String,

    /// Last login timestamp, kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub last_login_at: String,

    /// Contact email
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,

    /// Contact phone
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,

    /// Email signature
    #[serde(default, deserialize_with = "nullable")]
    pub signature: String,

    /// Organization the user belongs to
    #[serde(default)]
    pub organization_id: Option<i64>,

    /// Free-form tags
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,

    /// Whether the account is suspended
    #[serde(default, deserialize_with = "nullable")]
    pub suspended: bool,

    /// Role (end-user, agent, admin)
    #[serde(default, deserialize_with = "nullable")]
    pub role: String,
}

const USER_FIELDS: &[FieldDescriptor<User>] = &[
    FieldDescriptor {
        name: "ID",
        key: "id",
        field_type: FieldType::Integer,
        accessor: |u| FieldValue::Integer(Some(u.id)),
    },
    FieldDescriptor {
        name: "URL",
        key: "url",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.url),
    },
    FieldDescriptor {
        name: "ExternalID",
        key: "externalid",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.external_id),
    },
    FieldDescriptor {
        name: "Name",
        key: "name",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.name),
    },
    FieldDescriptor {
        name: "Alias",
        key: "alias",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.alias),
    },
    FieldDescriptor {
        name: "CreatedAt",
        key: "createdat",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.created_at),
    },
    FieldDescriptor {
        name: "Active",
        key: "active",
        field_type: FieldType::Boolean,
        accessor: |u| FieldValue::Boolean(u.active),
    },
    FieldDescriptor {
        name: "Verified",
        key: "verified",
        field_type: FieldType::Boolean,
        accessor: |u| FieldValue::Boolean(u.verified),
    },
    FieldDescriptor {
        name: "Shared",
        key: "shared",
        field_type: FieldType::Boolean,
        accessor: |u| FieldValue::Boolean(u.shared),
    },
    FieldDescriptor {
        name: "Locale",
        key: "locale",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.locale),
    },
    FieldDescriptor {
        name: "TimeZone",
        key: "timezone",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.timezone),
    },
    FieldDescriptor {
        name: "LastLoginAt",
        key: "lastloginat",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.last_login_at),
    },
    FieldDescriptor {
        name: "Email",
        key: "email",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.email),
    },
    FieldDescriptor {
        name: "Phone",
        key: "phone",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.phone),
    },
    FieldDescriptor {
        name: "Signature",
        key: "signature",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.signature),
    },
    FieldDescriptor {
        name: "OrganizationID",
        key: "organizationid",
        field_type: FieldType::Integer,
        accessor: |u| FieldValue::Integer(u.organization_id),
    },
    FieldDescriptor {
        name: "Tags",
        key: "tags",
        field_type: FieldType::TextList,
        accessor: |u| FieldValue::TextList(&u.tags),
    },
    FieldDescriptor {
        name: "Suspended",
        key: "suspended",
        field_type: FieldType::Boolean,
        accessor: |u| FieldValue::Boolean(u.suspended),
    },
    FieldDescriptor {
        name: "Role",
        key: "role",
        field_type: FieldType::Text,
        accessor: |u| FieldValue::Text(&u.role),
    },
];

impl Record for User {
    const ENTITY: EntityType = EntityType::User;

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        USER_FIELDS
    }
}
