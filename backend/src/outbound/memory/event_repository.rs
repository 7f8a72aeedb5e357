//! In-memory `EventRepository`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Direction, Page, PageRequest, SortOrder};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventId, EventSortField, NewEvent};

#[derive(Default)]
struct Store {
    next_id: i32,
    events: BTreeMap<i32, Event>,
}

/// Event store held in process memory.
///
/// Identifiers are assigned sequentially from 1. Text columns sort by byte
/// value, not by database collation, so mixed-case names can page in a
/// different order than the PostgreSQL adapter returns.
#[derive(Default)]
pub struct InMemoryEventRepository {
    store: Mutex<Store>,
}

impl InMemoryEventRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, EventRepositoryError> {
        self.store
            .lock()
            .map_err(|_| EventRepositoryError::query("event store lock poisoned"))
    }
}

fn compare_by(field: EventSortField, left: &Event, right: &Event) -> Ordering {
    let (a, b) = (left.submission(), right.submission());
    match field {
        EventSortField::Id => left.id().cmp(&right.id()),
        EventSortField::Name => a.name.cmp(&b.name),
        EventSortField::BeginEnrollmentDateTime => {
            a.begin_enrollment_date_time.cmp(&b.begin_enrollment_date_time)
        }
        EventSortField::CloseEnrollmentDateTime => {
            a.close_enrollment_date_time.cmp(&b.close_enrollment_date_time)
        }
        EventSortField::BeginEventDateTime => a.begin_event_date_time.cmp(&b.begin_event_date_time),
        EventSortField::EndEventDateTime => a.end_event_date_time.cmp(&b.end_event_date_time),
        EventSortField::BasePrice => a.base_price.cmp(&b.base_price),
        EventSortField::MaxPrice => a.max_price.cmp(&b.max_price),
        EventSortField::LimitOfEnrollment => a.limit_of_enrollment.cmp(&b.limit_of_enrollment),
    }
}

fn resolve_sort(
    orders: &[SortOrder],
) -> Result<Vec<(EventSortField, Direction)>, EventRepositoryError> {
    orders
        .iter()
        .map(|order| {
            order
                .property()
                .parse::<EventSortField>()
                .map(|field| (field, order.direction()))
                .map_err(|err| EventRepositoryError::query(err.to_string()))
        })
        .collect()
}

fn compare(keys: &[(EventSortField, Direction)], left: &Event, right: &Event) -> Ordering {
    keys.iter()
        .map(|&(field, direction)| {
            let ordering = compare_by(field, left, right);
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.id().cmp(&right.id()))
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: NewEvent) -> Result<Event, EventRepositoryError> {
        let mut store = self.lock()?;
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| EventRepositoryError::query("event identifiers exhausted"))?;
        let id = store.next_id;
        let stored = event.into_event(EventId::new(id));
        store.events.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventRepositoryError> {
        let store = self.lock()?;
        Ok(store.events.get(&id.as_i32()).cloned())
    }

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut store = self.lock()?;
        let slot = store
            .events
            .get_mut(&event.id().as_i32())
            .ok_or_else(|| EventRepositoryError::not_found(event.id().as_i32()))?;
        *slot = event.clone();
        Ok(())
    }

    async fn list(&self, request: &PageRequest) -> Result<Page<Event>, EventRepositoryError> {
        let keys = resolve_sort(request.sort())?;
        let mut events: Vec<Event> = {
            let store = self.lock()?;
            store.events.values().cloned().collect()
        };
        events.sort_by(|left, right| compare(&keys, left, right));

        let total = u64::try_from(events.len())
            .map_err(|_| EventRepositoryError::query("event count overflow"))?;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = events.into_iter().skip(offset).take(size).collect();
        Ok(Page::new(content, request, total))
    }
}
