//! Criterion benchmarks for index construction and lookup
//!
//! These benchmarks measure:
//! - Building the index table for datasets of increasing size
//! - Single-field lookups
//! - Broad search across every entity type

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use desk_search::index::IndexTable;
use desk_search::models::{Dataset, Organization, Ticket, User};
use desk_search::search::{broad_search, QuerySession};

const STATUSES: [&str; 5] = ["open", "pending", "hold", "solved", "closed"];

/// Synthetic dataset with `size` tickets, a quarter as many users and a
/// twentieth as many organizations
fn synthetic_dataset(size: usize) -> Dataset {
    let organizations: Vec<Organization> = (0..(size / 20).max(1))
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "_id": i as i64 + 101,
                "name": format!("Org {}", i),
                "domain_names": [format!("org{}.com", i)],
                "tags": ["Fulton", format!("Tag{}", i % 7)],
            }))
            .unwrap()
        })
        .collect();

    let users: Vec<User> = (0..(size / 4).max(1))
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "_id": i as i64 + 1,
                "name": format!("User {}", i),
                "active": i % 2 == 0,
                "organization_id": (i % organizations.len()) as i64 + 101,
                "tags": [format!("Tag{}", i % 11)],
                "role": if i % 3 == 0 { "admin" } else { "agent" },
            }))
            .unwrap()
        })
        .collect();

    let tickets: Vec<Ticket> = (0..size)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "_id": format!("ticket-{}", i),
                "subject": format!("Subject {}", i % 97),
                "status": STATUSES[i % STATUSES.len()],
                "submitter_id": (i % users.len()) as i64 + 1,
                "assignee_id": ((i * 7) % users.len()) as i64 + 1,
                "organization_id": (i % organizations.len()) as i64 + 101,
                "tags": [format!("Tag{}", i % 13), format!("Tag{}", i % 5)],
            }))
            .unwrap()
        })
        .collect();

    Dataset::new(tickets, users, organizations)
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1_000, 10_000] {
        let dataset = synthetic_dataset(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dataset, |b, dataset| {
            b.iter(|| IndexTable::build(black_box(dataset)).unwrap());
        });
    }

    group.finish();
}

fn bench_field_lookup(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let table = IndexTable::build(&dataset).unwrap();
    let status = QuerySession::new(&table)
        .select_entity("tickets")
        .unwrap()
        .select_field("status")
        .unwrap();

    c.bench_function("field_lookup_status", |b| {
        b.iter(|| status.lookup(black_box("PENDING")).unwrap());
    });
}

fn bench_broad_search(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let table = IndexTable::build(&dataset).unwrap();

    let mut group = c.benchmark_group("broad_search");
    for value in ["tag3", "101", "admin"] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, value| {
            b.iter(|| broad_search(&table, black_box(value)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_field_lookup, bench_broad_search);
criterion_main!(benches);
