//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! Derived flags are stored alongside the submission so they can be
//! queried directly; on read they are recomputed from the submission.

use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Direction, Page, PageRequest};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{
    DerivedState, Event, EventId, EventSortField, EventStatus, EventSubmission, NewEvent,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EventRow, EventValues};
use super::pool::{DbPool, PoolError};
use super::schema::events;

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    map_basic_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

fn values<'a>(
    submission: &'a EventSubmission,
    derived: DerivedState,
    status: EventStatus,
) -> EventValues<'a> {
    EventValues {
        name: &submission.name,
        description: &submission.description,
        begin_enrollment_date_time: submission.begin_enrollment_date_time,
        close_enrollment_date_time: submission.close_enrollment_date_time,
        begin_event_date_time: submission.begin_event_date_time,
        end_event_date_time: submission.end_event_date_time,
        location: submission.location.as_deref(),
        base_price: submission.base_price,
        max_price: submission.max_price,
        limit_of_enrollment: submission.limit_of_enrollment,
        offline: derived.offline,
        free: derived.free,
        event_status: status.as_str(),
        updated_at: Utc::now(),
    }
}

/// Convert a database row into a domain event.
fn row_to_event(row: EventRow) -> Result<Event, EventRepositoryError> {
    let EventRow {
        id,
        name,
        description,
        begin_enrollment_date_time,
        close_enrollment_date_time,
        begin_event_date_time,
        end_event_date_time,
        location,
        base_price,
        max_price,
        limit_of_enrollment,
        event_status,
    } = row;

    let status = event_status
        .parse::<EventStatus>()
        .map_err(|err| EventRepositoryError::query(err.to_string()))?;
    let submission = EventSubmission {
        name,
        description,
        begin_enrollment_date_time,
        close_enrollment_date_time,
        begin_event_date_time,
        end_event_date_time,
        location,
        base_price,
        max_price,
        limit_of_enrollment,
    };
    Ok(Event::restore(EventId::new(id), submission, status))
}

type BoxedEventQuery<'a> = events::BoxedQuery<'a, Pg>;

fn order_by(
    query: BoxedEventQuery<'_>,
    field: EventSortField,
    direction: Direction,
) -> BoxedEventQuery<'_> {
    macro_rules! ordered {
        ($column:expr) => {
            match direction {
                Direction::Asc => query.then_order_by($column.asc()),
                Direction::Desc => query.then_order_by($column.desc()),
            }
        };
    }

    match field {
        EventSortField::Id => ordered!(events::id),
        EventSortField::Name => ordered!(events::name),
        EventSortField::BeginEnrollmentDateTime => ordered!(events::begin_enrollment_date_time),
        EventSortField::CloseEnrollmentDateTime => ordered!(events::close_enrollment_date_time),
        EventSortField::BeginEventDateTime => ordered!(events::begin_event_date_time),
        EventSortField::EndEventDateTime => ordered!(events::end_event_date_time),
        EventSortField::BasePrice => ordered!(events::base_price),
        EventSortField::MaxPrice => ordered!(events::max_price),
        EventSortField::LimitOfEnrollment => ordered!(events::limit_of_enrollment),
    }
}

fn page_query(request: &PageRequest) -> Result<BoxedEventQuery<'static>, EventRepositoryError> {
    let limit = i64::from(request.size());
    let offset = i64::try_from(request.offset())
        .map_err(|_| EventRepositoryError::query("page offset out of range"))?;

    let mut query = events::table.into_boxed();
    for order in request.sort() {
        let field = order
            .property()
            .parse::<EventSortField>()
            .map_err(|err| EventRepositoryError::query(err.to_string()))?;
        query = order_by(query, field, order.direction());
    }
    Ok(query
        .then_order_by(events::id.asc())
        .limit(limit)
        .offset(offset))
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn insert(&self, event: NewEvent) -> Result<Event, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = values(event.submission(), event.derived(), event.status());

        let id: i32 = diesel::insert_into(events::table)
            .values(&row)
            .returning(events::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(event.into_event(EventId::new(id)))
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .find(id.as_i32())
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_event).transpose()
    }

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = values(event.submission(), event.derived(), event.status());

        let affected = diesel::update(events::table.find(event.id().as_i32()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(EventRepositoryError::not_found(event.id().as_i32()));
        }
        Ok(())
    }

    async fn list(&self, request: &PageRequest) -> Result<Page<Event>, EventRepositoryError> {
        let query = page_query(request)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = events::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let rows: Vec<EventRow> = query
            .select(EventRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let content = rows
            .into_iter()
            .map(row_to_event)
            .collect::<Result<Vec<_>, _>>()?;
        let total = u64::try_from(total)
            .map_err(|_| EventRepositoryError::query("negative event count"))?;
        Ok(Page::new(content, request, total))
    }
}
