//! Tests for `MemoryStore`.

use std::collections::HashSet;

use roster_core::{
  employee::{EmployeePatch, NewEmployee},
  store::EmployeeStore,
};
use uuid::Uuid;

use crate::MemoryStore;

fn bob() -> NewEmployee {
  NewEmployee {
    firstname:  "Bob".into(),
    lastname:   "Lee".into(),
    age:        40,
    is_married: true,
  }
}

// ─── Seed ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeded_store_holds_three_employees_in_order() {
  let s = MemoryStore::seeded();
  let all = s.list().await.unwrap();
  let names: Vec<_> = all
    .iter()
    .map(|e| format!("{} {}", e.firstname, e.lastname))
    .collect();
  assert_eq!(names, ["John Doe", "Jane Smith", "Alice Johnson"]);
  assert!(all[1].is_married);
  assert_eq!(all[2].age, 28);
}

#[tokio::test]
async fn new_store_is_empty() {
  let s = MemoryStore::new();
  assert!(s.list().await.unwrap().is_empty());
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_appends_and_get_returns_equal_record() {
  let s = MemoryStore::seeded();
  let created = s.create(bob()).await.unwrap();

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created.clone()));

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 4);
  assert_eq!(all.last(), Some(&created));
}

#[tokio::test]
async fn created_ids_are_unique() {
  let s = MemoryStore::seeded();
  for _ in 0..50 {
    s.create(bob()).await.unwrap();
  }
  let all = s.list().await.unwrap();
  let ids: HashSet<_> = all.iter().map(|e| e.id).collect();
  assert_eq!(ids.len(), all.len());
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = MemoryStore::seeded();
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn clones_share_the_collection() {
  let s = MemoryStore::new();
  let other = s.clone();
  let created = s.create(bob()).await.unwrap();
  assert_eq!(other.get(created.id).await.unwrap(), Some(created));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_fields() {
  let s = MemoryStore::new();
  let created = s.create(bob()).await.unwrap();

  let updated = s
    .update(created.id, EmployeePatch {
      firstname: Some(String::new()),
      age: Some(0),
      is_married: Some(false),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.firstname, "Bob");
  assert_eq!(updated.lastname, "Lee");
  assert_eq!(updated.age, 0);
  assert!(!updated.is_married);
  assert_eq!(s.get(created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = MemoryStore::seeded();
  let result = s
    .update(Uuid::new_v4(), EmployeePatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_and_preserves_order() {
  let s = MemoryStore::seeded();
  let all = s.list().await.unwrap();

  let removed = s.delete(all[1].id).await.unwrap();
  assert_eq!(removed.as_ref(), Some(&all[1]));
  assert!(s.get(all[1].id).await.unwrap().is_none());

  let rest = s.list().await.unwrap();
  assert_eq!(rest, vec![all[0].clone(), all[2].clone()]);
}

#[tokio::test]
async fn delete_missing_returns_none() {
  let s = MemoryStore::seeded();
  assert!(s.delete(Uuid::new_v4()).await.unwrap().is_none());
  assert_eq!(s.list().await.unwrap().len(), 3);
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_is_case_insensitive_substring() {
  let s = MemoryStore::seeded();
  let hits = s.search_by_firstname("jo").await.unwrap();
  let names: Vec<_> = hits.iter().map(|e| e.firstname.as_str()).collect();
  assert_eq!(names, ["John"]);

  let hits = s.search_by_firstname("A").await.unwrap();
  let names: Vec<_> = hits.iter().map(|e| e.firstname.as_str()).collect();
  assert_eq!(names, ["Jane", "Alice"]);
}

#[tokio::test]
async fn search_without_hits_is_empty() {
  let s = MemoryStore::seeded();
  assert!(s.search_by_firstname("zed").await.unwrap().is_empty());
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_and_lists_stay_consistent() {
  const WRITERS: usize = 32;
  let s = MemoryStore::seeded();

  let writers: Vec<_> = (0..WRITERS)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move {
        s.create(NewEmployee {
          firstname:  format!("Worker{i}"),
          lastname:   "Lee".into(),
          age:        i as i64,
          is_married: i % 2 == 0,
        })
        .await
        .unwrap()
      })
    })
    .collect();

  let readers: Vec<_> = (0..8)
    .map(|_| {
      let s = s.clone();
      tokio::spawn(async move {
        for _ in 0..20 {
          let snapshot = s.list().await.unwrap();
          assert!((3..=3 + WRITERS).contains(&snapshot.len()));
          for e in &snapshot {
            assert!(!e.firstname.is_empty() && !e.lastname.is_empty());
          }
          let ids: HashSet<_> = snapshot.iter().map(|e| e.id).collect();
          assert_eq!(ids.len(), snapshot.len());
          tokio::task::yield_now().await;
        }
      })
    })
    .collect();

  let mut created = Vec::with_capacity(WRITERS);
  for handle in writers {
    created.push(handle.await.unwrap());
  }
  for handle in readers {
    handle.await.unwrap();
  }

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 3 + WRITERS);
  let ids: HashSet<_> = all.iter().map(|e| e.id).collect();
  assert_eq!(ids.len(), all.len());
  for e in &created {
    assert_eq!(s.get(e.id).await.unwrap().as_ref(), Some(e));
  }
}
