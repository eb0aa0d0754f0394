//! Behavioural integration tests for the in-memory catalog repository.
//!
//! These tests exercise the repository through realistic flows, verifying
//! that it honours the repository contract and stays consistent under
//! concurrent access from independently scheduled workers.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::collections::HashSet;
use std::sync::Arc;

use libris::catalog::{
    adapters::memory::InMemoryBookRepository,
    domain::{BookId, NewBook},
    ports::{BookRepository, BookRepositoryError},
};

fn novel(title: &str, isbn: &str) -> NewBook {
    NewBook::new(title, "Ursula K. Le Guin", 1, isbn)
}

/// Walks one record through its whole lifecycle at the port level.
#[tokio::test(flavor = "multi_thread")]
async fn complete_record_lifecycle_through_the_repository() {
    let repository = InMemoryBookRepository::new();

    let created = repository
        .create(novel("The Dispossessed", "978-0061054884"))
        .await
        .expect("create");
    assert!(!created.id().as_str().is_empty());
    assert_eq!(created.created_at(), created.updated_at());

    let fetched = repository.find_by_id(created.id()).await.expect("find");
    assert_eq!(fetched, created);

    let updated = repository
        .update(created.id(), novel("The Dispossessed (anniv.)", "978-0"))
        .await
        .expect("update");
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.title(), "The Dispossessed (anniv.)");
    assert_eq!(updated.created_at(), created.created_at());

    repository.delete(created.id()).await.expect("delete");

    let missing = repository.find_by_id(created.id()).await;
    assert!(matches!(missing, Err(BookRepositoryError::NotFound(_))));

    let second_delete = repository.delete(created.id()).await;
    assert!(matches!(
        second_delete,
        Err(BookRepositoryError::NotFound(_))
    ));
}

/// Operations on identities that never existed fail symmetrically.
#[tokio::test(flavor = "multi_thread")]
async fn unknown_identity_fails_consistently_across_operations() {
    let repository = InMemoryBookRepository::new();
    let ghost = BookId::from_raw("never-created");

    assert!(matches!(
        repository.find_by_id(&ghost).await,
        Err(BookRepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repository.update(&ghost, novel("Ghost", "978-0")).await,
        Err(BookRepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repository.delete(&ghost).await,
        Err(BookRepositoryError::NotFound(_))
    ));
}

/// Concurrent creates from many workers never produce a duplicate identity.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_yield_pairwise_distinct_identities() {
    let repository = Arc::new(InMemoryBookRepository::new());

    let mut handles = Vec::new();
    for worker in 0..32 {
        let repo = Arc::clone(&repository);
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for n in 0..8 {
                let book = repo
                    .create(novel(&format!("worker-{worker}-{n}"), "978-0"))
                    .await
                    .expect("create");
                ids.push(book.id().clone());
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.await.expect("worker task") {
            all_ids.insert(id);
        }
    }

    assert_eq!(all_ids.len(), 32 * 8);
    let listed = repository.list().await.expect("list");
    assert_eq!(listed.len(), 32 * 8);
}

/// A reader never observes a half-applied update: the writer always changes
/// title and ISBN together to a matched pair, so any torn read would show a
/// mismatched pair.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_observe_a_half_applied_update() {
    let repository = Arc::new(InMemoryBookRepository::new());
    let created = repository
        .create(NewBook::new("state-0", "Le Guin", 1, "state-0"))
        .await
        .expect("create");
    let id = created.id().clone();

    let writer_repo = Arc::clone(&repository);
    let writer_id = id.clone();
    let writer = tokio::spawn(async move {
        for n in 1..=100_i32 {
            let state = format!("state-{n}");
            writer_repo
                .update(&writer_id, NewBook::new(&state, "Le Guin", n, &state))
                .await
                .expect("update");
        }
    });

    let mut readers = Vec::new();
    for _ in 0..4 {
        let reader_repo = Arc::clone(&repository);
        let reader_id = id.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..100 {
                let book = reader_repo.find_by_id(&reader_id).await.expect("find");
                assert_eq!(book.title(), book.isbn());

                let listed = reader_repo.list().await.expect("list");
                for entry in &listed {
                    assert_eq!(entry.title(), entry.isbn());
                }
            }
        }));
    }

    writer.await.expect("writer task");
    for reader in readers {
        reader.await.expect("reader task");
    }
}

/// Exactly one of many concurrent deletes of the same record wins; the rest
/// observe the not-found outcome, never a silent success.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_succeed_exactly_once() {
    let repository = Arc::new(InMemoryBookRepository::new());
    let created = repository
        .create(novel("The Lathe of Heaven", "978-1"))
        .await
        .expect("create");
    let id = created.id().clone();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repo = Arc::clone(&repository);
        let target = id.clone();
        handles.push(tokio::spawn(async move { repo.delete(&target).await }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("delete task") {
            Ok(()) => successes += 1,
            Err(BookRepositoryError::NotFound(_)) => {}
            Err(other) => panic!("unexpected delete outcome: {other}"),
        }
    }

    assert_eq!(successes, 1);
}
