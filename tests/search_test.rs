//! End-to-end query scenarios over the shared fixture

mod common;

use desk_search::index::{IndexError, IndexTable};
use desk_search::models::{Dataset, EntityType, RecordRef};
use desk_search::search::*;

fn ticket_ids(matches: &Matches<'_>) -> Vec<String> {
    match matches {
        Matches::Tickets(tickets) => tickets.iter().map(|t| t.id.clone()).collect(),
        other => panic!("expected tickets, got {:?}", other.entity_type()),
    }
}

#[test]
fn test_pending_status_matches_both_tickets_with_names() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let matches = QuerySession::new(&table)
        .select_entity("ticket")
        .unwrap()
        .select_field("status")
        .unwrap()
        .lookup("pending")
        .unwrap();
    assert_eq!(ticket_ids(&matches), vec!["t1", "t2"]);

    let Projection::Tickets(views) = ResultProjector::new(&table).project(&matches) else {
        panic!("expected ticket views");
    };
    assert_eq!(views[0].submitter_name, "Test TestA");
    assert_eq!(views[0].assignee_name, "Test TestB");
    assert_eq!(views[0].organization_name, "test org1");
    assert_eq!(views[1].submitter_name, "Test TestB");
    assert_eq!(views[1].assignee_name, "Test TestA");
    assert_eq!(views[1].organization_name, "test org1");
}

#[test]
fn test_tag_lookup_matches_only_tagged_ticket() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let matches = QuerySession::new(&table)
        .select_entity("ticket")
        .unwrap()
        .select_field("tags")
        .unwrap()
        .lookup("tag1.1")
        .unwrap();

    assert_eq!(ticket_ids(&matches), vec!["t1"]);
}

#[test]
fn test_broad_search_keeps_each_record_once() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let results = QuerySession::new(&table).broad_search("1").unwrap();

    assert_eq!(
        results.keys().copied().collect::<Vec<_>>(),
        vec![EntityType::Ticket, EntityType::User, EntityType::Organization]
    );
    assert_eq!(ticket_ids(&results[&EntityType::Ticket]), vec!["t1", "t2"]);

    match &results[&EntityType::User] {
        Matches::Users(users) => {
            assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
        }
        other => panic!("expected users, got {:?}", other.entity_type()),
    }

    match &results[&EntityType::Organization] {
        Matches::Organizations(orgs) => {
            assert_eq!(orgs.len(), 1);
            assert_eq!(orgs[0].name, "test org1");
        }
        other => panic!("expected organizations, got {:?}", other.entity_type()),
    }
}

#[test]
fn test_broad_search_omits_entity_types_without_hits() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let results = QuerySession::new(&table).broad_search("MegaCorp").unwrap();

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&EntityType::Organization));
}

#[test]
fn test_broad_search_without_hits_is_no_results() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let err = QuerySession::new(&table).broad_search("nothing-like-this").unwrap_err();
    assert_eq!(err, SearchError::NoResults);
}

#[test]
fn test_empty_description_is_searchable() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();

    let matches = QuerySession::new(&table)
        .select_entity("1")
        .unwrap()
        .select_field("Description")
        .unwrap()
        .lookup("")
        .unwrap();

    assert_eq!(ticket_ids(&matches), vec!["t2"]);
}

#[test]
fn test_missing_organization_leaves_name_empty() {
    let data = common::dataset_with_missing_organization();
    let table = IndexTable::build(&data).unwrap();

    let matches = QuerySession::new(&table)
        .select_entity("tickets")
        .unwrap()
        .select_field("id")
        .unwrap()
        .lookup("t1")
        .unwrap();

    let Projection::Tickets(views) = ResultProjector::new(&table).project(&matches) else {
        panic!("expected ticket views");
    };
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].organization_name, "");
    assert_eq!(views[0].submitter_name, "Test TestA");

    let resolver = JoinResolver::new(&table);
    assert!(resolver
        .resolve(RecordRef::Ticket(&data.tickets[0]), Relation::Organization)
        .unwrap()
        .is_empty());
}

#[test]
fn test_user_and_organization_projections() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();
    let projector = ResultProjector::new(&table);

    let user = projector.project_user(&data.users[0]);
    assert_eq!(user.organization_name, "test org1");
    assert_eq!(user.assigned_ticket_ids, vec!["t2"]);
    assert_eq!(user.submitted_ticket_ids, vec!["t1"]);

    let org = projector.project_organization(&data.organizations[0]);
    assert_eq!(org.ticket_ids, vec!["t1", "t2"]);
    assert_eq!(org.user_names, vec!["Test TestA", "Test TestB"]);
}

#[test]
fn test_named_relations() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();
    let resolver = JoinResolver::new(&table);
    let user = RecordRef::User(&data.users[1]);

    let assigned = resolver.resolve_named(user, "assignedTickets").unwrap();
    assert_eq!(assigned, vec![RecordRef::Ticket(&data.tickets[0])]);

    let err = resolver.resolve_named(user, "assignee").unwrap_err();
    assert!(matches!(err, SearchError::UnknownRelation { entity: EntityType::User, .. }));

    let err = resolver.resolve_named(user, "friends").unwrap_err();
    assert!(matches!(err, SearchError::UnknownRelation { .. }));
}

#[test]
fn test_selection_errors() {
    let data = common::dataset();
    let table = IndexTable::build(&data).unwrap();
    let session = QuerySession::new(&table);

    assert_eq!(
        session.select_entity("widgets").unwrap_err(),
        SearchError::UnknownEntityType("widgets".to_string())
    );

    let users = session.select_entity("Users").unwrap();
    assert!(matches!(
        users.select_field("subject").unwrap_err(),
        SearchError::UnknownField { entity: EntityType::User, .. }
    ));

    // A failed field selection leaves the entity selection usable
    let matches = users.select_field("role").unwrap().lookup("ADMIN").unwrap();
    assert_eq!(matches.len(), 1);

    assert_eq!(
        users.select_field("role").unwrap().lookup("owner").unwrap_err(),
        SearchError::NoResults
    );
}

#[test]
fn test_empty_collection_is_rejected() {
    let data = Dataset::new(common::tickets(), Vec::new(), common::organizations());
    let err = IndexTable::build(&data).unwrap_err();
    assert!(matches!(err, IndexError::EmptyCollection(EntityType::User)));
}
