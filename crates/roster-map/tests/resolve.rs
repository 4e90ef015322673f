//! Resolver behavior against an in-memory directory.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use roster_map::{
    Directory, LookupError, MAX_CONCURRENT_LOOKUPS, MappingStatus, Organization, PersonRef,
    ResolutionTracker, ResolveError, Tag, mapping_status, resolve_column,
};
use roster_model::{Column, FieldName, IdFieldKind, MappingResult, ModelError, Row, Sheet};

#[derive(Default)]
struct FakeDirectory {
    organizations: Vec<&'static str>,
    tags: Vec<&'static str>,
    internal_ids: Vec<u64>,
    external_ids: Vec<&'static str>,
    delay: Option<Duration>,
    down: bool,
    calls: Arc<AtomicUsize>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeDirectory {
    async fn enter(&self) -> Result<(), LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.down {
            return Err(LookupError::Unreachable {
                reason: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Directory for FakeDirectory {
    async fn lookup_organization(&self, name: &str) -> Result<Option<Organization>, LookupError> {
        self.enter().await?;
        Ok(self
            .organizations
            .iter()
            .position(|org| *org == name)
            .map(|index| Organization {
                id: index as u64 + 1,
                title: name.to_string(),
            }))
    }

    async fn lookup_tag(&self, label: &str) -> Result<Option<Tag>, LookupError> {
        self.enter().await?;
        Ok(self
            .tags
            .iter()
            .position(|tag| *tag == label)
            .map(|index| Tag {
                id: index as u64 + 1,
                title: label.to_string(),
            }))
    }

    async fn lookup_person_id(
        &self,
        value: &str,
        kind: IdFieldKind,
    ) -> Result<Option<PersonRef>, LookupError> {
        self.enter().await?;
        let found = match kind {
            IdFieldKind::Internal => value
                .parse::<u64>()
                .ok()
                .filter(|id| self.internal_ids.contains(id)),
            IdFieldKind::External => self
                .external_ids
                .iter()
                .position(|id| *id == value)
                .map(|index| 100 + index as u64),
            IdFieldKind::Undeclared => None,
        };
        Ok(found.map(|id| PersonRef { id }))
    }
}

fn organization_sheet() -> Sheet {
    Sheet::new("Members", true)
        .with_columns(vec![
            Column::field(FieldName::FirstName),
            Column::field(FieldName::Organization),
        ])
        .with_rows(vec![
            Row::from_iter(["NAME", "ORGANIZATION"]),
            Row::from_iter(["Angela", "Acme"]),
            Row::from_iter(["Clara", "Acme "]),
            Row::from_iter(["Rosa", "Unknown Corp"]),
            Row::from_iter(["Emma", ""]),
        ])
}

#[tokio::test]
async fn shared_organization_counts_every_row() {
    let directory = FakeDirectory {
        organizations: vec!["Acme"],
        ..FakeDirectory::default()
    };

    let result = resolve_column(&organization_sheet(), 1, &directory)
        .await
        .unwrap();

    assert_eq!(result, MappingResult::new(1, 2));
}

#[tokio::test]
async fn each_distinct_value_is_looked_up_once() {
    let directory = FakeDirectory {
        organizations: vec!["Acme"],
        ..FakeDirectory::default()
    };
    let calls = Arc::clone(&directory.calls);

    resolve_column(&organization_sheet(), 1, &directory)
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn header_row_is_never_looked_up() {
    let directory = FakeDirectory {
        organizations: vec!["ORGANIZATION"],
        ..FakeDirectory::default()
    };

    let result = resolve_column(&organization_sheet(), 1, &directory)
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn tags_and_ids_resolve_by_declared_kind() {
    let sheet = Sheet::new("Tags", false)
        .with_columns(vec![
            Column::identifier(IdFieldKind::Internal),
            Column::identifier(IdFieldKind::External),
            Column::field(FieldName::Tag),
        ])
        .with_rows(vec![
            Row::new(vec![1.into(), "a-1".into(), "volunteer".into()]),
            Row::new(vec![2.into(), "a-2".into(), "volunteer".into()]),
            Row::new(vec![3.into(), "a-1".into(), "donor".into()]),
        ]);
    let directory = FakeDirectory {
        tags: vec!["volunteer"],
        internal_ids: vec![1, 3],
        external_ids: vec!["a-1"],
        ..FakeDirectory::default()
    };

    assert_eq!(
        resolve_column(&sheet, 0, &directory).await.unwrap(),
        MappingResult::new(2, 2)
    );
    assert_eq!(
        resolve_column(&sheet, 1, &directory).await.unwrap(),
        MappingResult::new(1, 2)
    );
    assert_eq!(
        resolve_column(&sheet, 2, &directory).await.unwrap(),
        MappingResult::new(1, 2)
    );
}

#[tokio::test]
async fn outage_is_reported_once() {
    let directory = FakeDirectory {
        down: true,
        ..FakeDirectory::default()
    };

    let err = resolve_column(&organization_sheet(), 1, &directory)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::Unavailable {
            source: LookupError::Unreachable {
                reason: "connection refused".to_string()
            }
        }
    );
}

#[tokio::test]
async fn plain_fields_are_not_resolvable() {
    let directory = FakeDirectory::default();

    let err = resolve_column(&organization_sheet(), 0, &directory)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::NotResolvable {
            index: 0,
            label: "first_name".to_string()
        }
    );
}

#[tokio::test]
async fn undeclared_identifier_is_not_resolvable() {
    let sheet = Sheet::new("Ids", false)
        .with_columns(vec![Column::identifier(IdFieldKind::Undeclared)])
        .with_rows(vec![Row::from_iter(["12"])]);

    let err = resolve_column(&sheet, 0, &FakeDirectory::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::NotResolvable { index: 0, .. }));
}

#[tokio::test]
async fn malformed_sheet_is_a_structure_error() {
    let mut sheet = organization_sheet();
    sheet.rows.push(Row::from_iter(["only one cell"]));

    let err = resolve_column(&sheet, 1, &FakeDirectory::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::Structure(ModelError::ShapeMismatch {
            row: 5,
            expected: 2,
            found: 1
        })
    );
}

#[tokio::test]
async fn unknown_column_is_a_structure_error() {
    let err = resolve_column(&organization_sheet(), 7, &FakeDirectory::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::Structure(ModelError::ColumnOutOfRange { index: 7, len: 2 })
    );
}

#[tokio::test]
async fn stale_result_never_overwrites_newer_one() {
    let slow = FakeDirectory {
        organizations: vec!["Acme", "Unknown Corp"],
        delay: Some(Duration::from_millis(50)),
        ..FakeDirectory::default()
    };
    let fast = FakeDirectory {
        organizations: vec!["Acme"],
        ..FakeDirectory::default()
    };
    let sheet = organization_sheet();
    let mut tracker = ResolutionTracker::new();

    let stale = tracker.begin(1);
    let stale_run = resolve_column(&sheet, 1, &slow);
    let fresh = tracker.begin(1);
    let fresh_result = resolve_column(&sheet, 1, &fast).await.unwrap();
    assert!(tracker.complete(fresh, fresh_result));

    let stale_result = stale_run.await.unwrap();
    assert_eq!(stale_result, MappingResult::new(2, 3));
    assert!(!tracker.complete(stale, stale_result));

    let column = sheet.columns[1];
    assert_eq!(
        mapping_status(&column, tracker.result(1)),
        MappingStatus::Mapped(MappingResult::new(1, 2))
    );
}

#[tokio::test]
async fn lookups_in_flight_are_bounded() {
    let names: Vec<&'static str> = (0..200)
        .map(|n| &*format!("Org {n}").leak())
        .collect();
    let directory = FakeDirectory {
        organizations: names.iter().step_by(2).copied().collect(),
        delay: Some(Duration::from_millis(1)),
        ..FakeDirectory::default()
    };
    let sheet = Sheet::new("Many", false)
        .with_columns(vec![Column::field(FieldName::Organization)])
        .with_rows(names.iter().map(|name| Row::from_iter([*name])).collect());

    let result = resolve_column(&sheet, 0, &directory).await.unwrap();

    assert_eq!(result, MappingResult::new(100, 100));
    assert_eq!(directory.calls.load(Ordering::Relaxed), 200);
    let peak = directory.peak_in_flight.load(Ordering::SeqCst);
    assert!(peak > 1, "lookups should overlap, peak was {peak}");
    assert!(peak <= MAX_CONCURRENT_LOOKUPS, "peak was {peak}");
}
