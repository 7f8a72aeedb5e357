//! Diesel adapters against an embedded PostgreSQL database.
//!
//! Every test provisions its own database, applies the embedded migrations
//! and drives the repositories through a dedicated Tokio runtime.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use event_api::domain::ports::{
    AccountRepository, AccountRepositoryError, EventRepository, EventRepositoryError,
};
use event_api::domain::{
    AccountRole, Email, Event, EventId, EventStatus, EventSubmission, NewAccount, NewEvent,
    PasswordHash, PlainPassword,
};
use event_api::outbound::persistence::{
    DbPool, DieselAccountRepository, DieselEventRepository, PoolConfig, run_pending_migrations,
};
use pagination::{PageRequest, SortOrder};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, temporary_database};

struct DieselWorld {
    runtime: Runtime,
    events: DieselEventRepository,
    accounts: DieselAccountRepository,
    _database: TemporaryDatabase,
}

fn setup_world() -> Result<DieselWorld, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = temporary_database()?;
    let url = database.url().to_string();

    let pool = runtime.block_on(async {
        run_pending_migrations(&url)
            .await
            .map_err(|err| err.to_string())?;
        DbPool::new(PoolConfig::new(&url).with_max_size(2))
            .await
            .map_err(|err| err.to_string())
    })?;

    Ok(DieselWorld {
        runtime,
        events: DieselEventRepository::new(pool.clone()),
        accounts: DieselAccountRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn diesel_world() -> Option<DieselWorld> {
    match setup_world() {
        Ok(world) => Some(world),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, day)
        .and_then(|date| date.and_hms_opt(14, 21, 0))
        .expect("valid timestamp")
}

fn submission(name: &str) -> EventSubmission {
    EventSubmission {
        name: name.to_owned(),
        description: "REST API Development".to_owned(),
        begin_enrollment_date_time: at(1),
        close_enrollment_date_time: at(2),
        begin_event_date_time: at(3),
        end_event_date_time: at(4),
        location: Some("Gangnam station D2 startup factory".to_owned()),
        base_price: 100,
        max_price: 200,
        limit_of_enrollment: 100,
    }
}

#[rstest]
fn inserted_events_are_found_by_id(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: inserted_events_are_found_by_id skipped");
        return;
    };

    world.runtime.block_on(async {
        let first = world
            .events
            .insert(NewEvent::draft(submission("Spring")))
            .await
            .expect("first insert");
        let second = world
            .events
            .insert(NewEvent::draft(submission("Rust")))
            .await
            .expect("second insert");
        assert!(second.id().as_i32() > first.id().as_i32());
        assert_eq!(first.status(), EventStatus::Draft);

        let found = world
            .events
            .find_by_id(first.id())
            .await
            .expect("lookup succeeds");
        assert_eq!(found, Some(first));

        let missing = world
            .events
            .find_by_id(EventId::new(9_999))
            .await
            .expect("lookup succeeds");
        assert_eq!(missing, None);
    });
}

#[rstest]
fn updates_are_persisted_and_missing_rows_are_reported(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: updates_are_persisted_and_missing_rows_are_reported skipped");
        return;
    };

    world.runtime.block_on(async {
        let stored = world
            .events
            .insert(NewEvent::draft(submission("Spring")))
            .await
            .expect("insert");

        let mut revised_submission = submission("Spring, revised");
        revised_submission.base_price = 0;
        revised_submission.max_price = 0;
        revised_submission.location = None;
        let revised = stored.revise(revised_submission);
        world.events.update(&revised).await.expect("update");

        let found = world
            .events
            .find_by_id(revised.id())
            .await
            .expect("lookup succeeds")
            .expect("event exists");
        assert_eq!(found.submission().name, "Spring, revised");
        assert!(found.is_free());
        assert!(!found.is_offline());
        assert_eq!(found.status(), EventStatus::Draft);

        let ghost = Event::restore(EventId::new(9_999), submission("Ghost"), EventStatus::Draft);
        let err = world.events.update(&ghost).await.expect_err("no such row");
        assert!(
            matches!(err, EventRepositoryError::NotFound { id: 9_999 }),
            "unexpected error: {err:?}"
        );
    });
}

#[rstest]
fn listing_counts_all_rows_and_applies_sort_and_offset(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: listing_counts_all_rows_and_applies_sort_and_offset skipped");
        return;
    };

    world.runtime.block_on(async {
        for name in ["a", "b", "c", "d", "e"] {
            world
                .events
                .insert(NewEvent::draft(submission(name)))
                .await
                .expect("insert");
        }

        let request = PageRequest::new(1, 2)
            .expect("valid request")
            .with_sort(vec![SortOrder::desc("name").expect("valid sort")]);
        let page = world.events.list(&request).await.expect("list succeeds");

        assert_eq!(page.metadata().total_elements, 5);
        assert_eq!(page.metadata().total_pages, 3);
        let names: Vec<&str> = page
            .content()
            .iter()
            .map(|event| event.submission().name.as_str())
            .collect();
        assert_eq!(names, ["c", "b"]);
    });
}

#[rstest]
fn account_roles_round_trip_and_duplicates_are_rejected(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: account_roles_round_trip_and_duplicates_are_rejected skipped");
        return;
    };

    let email = Email::new("Admin@Example.com").expect("valid email");
    let password = PlainPassword::new("keesun").expect("non-empty password");
    let account = NewAccount {
        email: email.clone(),
        password: PasswordHash::hash(&password),
        roles: HashSet::from([AccountRole::User, AccountRole::Admin]),
    };

    world.runtime.block_on(async {
        let stored = world
            .accounts
            .insert(account.clone())
            .await
            .expect("insert");

        let found = world
            .accounts
            .find_by_email(&email)
            .await
            .expect("lookup succeeds")
            .expect("account exists");
        assert_eq!(found.id(), stored.id());
        assert!(found.has_role(AccountRole::Admin));
        assert!(found.has_role(AccountRole::User));
        assert!(found.password().verify(&password));

        let err = world
            .accounts
            .insert(account)
            .await
            .expect_err("email is unique");
        assert!(
            matches!(err, AccountRepositoryError::DuplicateEmail { .. }),
            "unexpected error: {err:?}"
        );
    });
}
