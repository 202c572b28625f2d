//! Shared fixtures: two tickets, two users and one organization that every
//! record points at.
//!
//! t1 is submitted by user 1 and assigned to user 2; t2 the other way round.
//! Both tickets are pending, only t1 carries `Tag1.1` and t2 has an empty
//! description.

#![allow(dead_code)]

use desk_search::models::{Dataset, Organization, Ticket, User};
use std::path::Path;

pub const TICKETS_JSON: &str = r#"[
  {
    "_id": "t1",
    "url": "http://initech.zendesk.com/api/v2/tickets/t1.json",
    "external_id": "ext-t1",
    "created_at": "2016-04-28T11:19:34 -10:00",
    "type": "incident",
    "subject": "A Catastrophe in Korea (North)",
    "description": "Nostrud ad sit velit cupidatat laboris ipsum nisi amet laboris.",
    "priority": "high",
    "status": "pending",
    "submitter_id": 1,
    "assignee_id": 2,
    "organization_id": 1,
    "tags": ["Tag1.1", "Tag1.2"],
    "has_incidents": false,
    "due_at": "2016-07-31T02:37:50 -10:00",
    "via": "web"
  },
  {
    "_id": "t2",
    "url": "http://initech.zendesk.com/api/v2/tickets/t2.json",
    "external_id": "ext-t2",
    "created_at": "2016-04-14T08:32:31 -10:00",
    "type": "question",
    "subject": "A Nuisance in Kiribati",
    "description": "",
    "priority": "low",
    "status": "Pending",
    "submitter_id": 2,
    "assignee_id": 1,
    "organization_id": 1,
    "tags": ["Tag2.1"],
    "has_incidents": true,
    "via": "chat"
  }
]"#;

pub const USERS_JSON: &str = r#"[
  {
    "_id": 1,
    "url": "http://initech.zendesk.com/api/v2/users/1.json",
    "external_id": "ext-u1",
    "name": "Test TestA",
    "alias": "Miss Coffey",
    "created_at": "2016-04-15T05:19:46 -10:00",
    "active": true,
    "verified": true,
    "shared": false,
    "locale": "en-AU",
    "timezone": "Sri Lanka",
    "last_login_at": "2013-08-04T01:03:27 -10:00",
    "email": "testa@example.com",
    "phone": "8335-422-718",
    "signature": "Don't Worry Be Happy!",
    "organization_id": 1,
    "tags": ["Springville", "Sutton"],
    "suspended": true,
    "role": "admin"
  },
  {
    "_id": 2,
    "url": "http://initech.zendesk.com/api/v2/users/2.json",
    "external_id": "ext-u2",
    "name": "Test TestB",
    "alias": "Mr Ola",
    "created_at": "2016-06-23T10:31:39 -10:00",
    "active": true,
    "verified": false,
    "shared": false,
    "locale": "zh-CN",
    "timezone": "Armenia",
    "email": "testb@example.com",
    "phone": "9575-552-585",
    "signature": "Don't Worry Be Happy!",
    "organization_id": 1,
    "tags": ["Foxworth"],
    "suspended": false,
    "role": "agent"
  }
]"#;

pub const ORGANIZATIONS_JSON: &str = r#"[
  {
    "_id": 1,
    "url": "http://initech.zendesk.com/api/v2/organizations/1.json",
    "external_id": "ext-org1",
    "name": "test org1",
    "domain_names": ["kage.com", "ecratic.com"],
    "created_at": "2016-05-21T11:10:28 -10:00",
    "details": "MegaCorp",
    "shared_tickets": false,
    "tags": ["Fulton", "West"]
  }
]"#;

pub fn tickets() -> Vec<Ticket> {
    serde_json::from_str(TICKETS_JSON).unwrap()
}

pub fn users() -> Vec<User> {
    serde_json::from_str(USERS_JSON).unwrap()
}

pub fn organizations() -> Vec<Organization> {
    serde_json::from_str(ORGANIZATIONS_JSON).unwrap()
}

pub fn dataset() -> Dataset {
    Dataset::new(tickets(), users(), organizations())
}

/// The fixture with every organization reference pointing at a missing id
pub fn dataset_with_missing_organization() -> Dataset {
    let mut tickets = tickets();
    for ticket in &mut tickets {
        ticket.organization_id = Some(99);
    }
    let mut users = users();
    for user in &mut users {
        user.organization_id = Some(99);
    }
    Dataset::new(tickets, users, organizations())
}

/// Write the fixture as export files into `dir`
pub fn write_exports(dir: &Path) {
    std::fs::write(dir.join("tickets.json"), TICKETS_JSON).unwrap();
    std::fs::write(dir.join("users.json"), USERS_JSON).unwrap();
    std::fs::write(dir.join("organizations.json"), ORGANIZATIONS_JSON).unwrap();
}
