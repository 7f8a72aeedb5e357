//! Behavioural tests for the event endpoints over the in-memory stores.

use std::cell::RefCell;
use std::sync::Arc;

use actix_rt::SystemRunner;
use actix_web::http::header;
use actix_web::{App, test::{self}, web};
use event_api::Trace;
use event_api::domain::EventService;
use event_api::inbound::http::events::{create_event, get_event, list_events, update_event};
use event_api::inbound::http::json_config;
use event_api::inbound::http::state::HttpState;
use event_api::outbound::memory::InMemoryEventRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct Outcome {
    status: u16,
    location: Option<String>,
    body: Value,
}

struct EventApiWorld {
    runner: SystemRunner,
    state: RefCell<HttpState>,
    outcome: RefCell<Option<Outcome>>,
}

impl EventApiWorld {
    fn new() -> Self {
        Self {
            runner: actix_rt::System::new(),
            state: RefCell::new(fresh_state()),
            outcome: RefCell::new(None),
        }
    }

    fn send(&self, request: test::TestRequest) {
        let state = self.state.borrow().clone();
        let outcome = self.runner.block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(json_config())
                    .wrap(Trace)
                    .service(
                        web::scope("/api")
                            .service(create_event)
                            .service(list_events)
                            .service(get_event)
                            .service(update_event),
                    ),
            )
            .await;
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(response).await;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON body")
            };
            Outcome {
                status,
                location,
                body,
            }
        });
        self.outcome.replace(Some(outcome));
    }

    fn with_outcome<T>(&self, f: impl FnOnce(&Outcome) -> T) -> T {
        let outcome = self.outcome.borrow();
        f(outcome.as_ref().expect("a request was sent"))
    }
}

fn fresh_state() -> HttpState {
    let service = Arc::new(EventService::new(Arc::new(InMemoryEventRepository::new())));
    HttpState::new(service.clone(), service)
}

fn event_payload() -> Value {
    json!({
        "name": "Spring",
        "description": "REST API Development with Spring",
        "beginEnrollmentDateTime": "2018-11-23T14:21:00",
        "closeEnrollmentDateTime": "2018-11-24T14:21:00",
        "beginEventDateTime": "2018-11-25T14:21:00",
        "endEventDateTime": "2018-11-26T14:21:00",
        "basePrice": 0,
        "maxPrice": 0,
        "limitOfEnrollment": 100
    })
}

#[fixture]
fn world() -> EventApiWorld {
    EventApiWorld::new()
}

#[given("an empty event store")]
fn an_empty_event_store(world: &EventApiWorld) {
    world.state.replace(fresh_state());
}

#[given("{count} seeded events")]
fn seeded_events(world: &EventApiWorld, count: usize) {
    world.state.replace(fresh_state());
    for index in 0..count {
        let mut payload = event_payload();
        payload["name"] = json!(format!("Event {index}"));
        world.send(
            test::TestRequest::post()
                .uri("/api/events")
                .set_json(payload),
        );
        world.with_outcome(|outcome| assert_eq!(outcome.status, 201));
    }
}

#[when("a free event at {location} is submitted")]
fn a_free_event_is_submitted(world: &EventApiWorld, location: String) {
    let mut payload = event_payload();
    payload["location"] = json!(location);
    world.send(
        test::TestRequest::post()
            .uri("/api/events")
            .set_json(payload),
    );
}

#[when("an overpriced event ending before it begins is submitted")]
fn an_overpriced_event_is_submitted(world: &EventApiWorld) {
    let mut payload = event_payload();
    payload["basePrice"] = json!(10_000);
    payload["maxPrice"] = json!(200);
    payload["endEventDateTime"] = json!("2018-11-22T14:21:00");
    world.send(
        test::TestRequest::post()
            .uri("/api/events")
            .set_json(payload),
    );
}

#[when("event {id} is requested")]
fn event_is_requested(world: &EventApiWorld, id: i32) {
    world.send(test::TestRequest::get().uri(&format!("/api/events/{id}")));
}

#[when("page {page} of size {size} is listed")]
fn page_is_listed(world: &EventApiWorld, page: u32, size: u32) {
    world.send(test::TestRequest::get().uri(&format!("/api/events?page={page}&size={size}")));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &EventApiWorld, status: u16) {
    world.with_outcome(|outcome| assert_eq!(outcome.status, status, "body: {}", outcome.body));
}

#[then("the event is free")]
fn the_event_is_free(world: &EventApiWorld) {
    world.with_outcome(|outcome| assert_eq!(outcome.body["free"], json!(true)));
}

#[then("the event is offline")]
fn the_event_is_offline(world: &EventApiWorld) {
    world.with_outcome(|outcome| assert_eq!(outcome.body["offline"], json!(true)));
}

#[then("the event status is {status}")]
fn the_event_status_is(world: &EventApiWorld, status: String) {
    world.with_outcome(|outcome| assert_eq!(outcome.body["eventStatus"], json!(status)));
}

#[then("the location header points at event {id}")]
fn the_location_header_points_at(world: &EventApiWorld, id: i32) {
    world.with_outcome(|outcome| {
        let location = outcome.location.as_deref().expect("location header");
        assert!(
            location.ends_with(&format!("/api/events/{id}")),
            "unexpected location {location}"
        );
        assert_eq!(outcome.body["_links"]["self"]["href"], json!(location));
    });
}

#[then("the rejected fields are {fields}")]
fn the_rejected_fields_are(world: &EventApiWorld, fields: String) {
    let expected: Vec<&str> = fields.split(',').collect();
    world.with_outcome(|outcome| {
        let actual: Vec<&str> = outcome.body["details"]["errors"]
            .as_array()
            .expect("error list")
            .iter()
            .filter_map(|error| error["field"].as_str())
            .collect();
        assert_eq!(actual, expected);
    });
}

#[then("the page reports {total} elements over {pages} pages")]
fn the_page_reports(world: &EventApiWorld, total: u64, pages: u64) {
    world.with_outcome(|outcome| {
        let page = &outcome.body["page"];
        assert_eq!(page["totalElements"], json!(total));
        assert_eq!(page["totalPages"], json!(pages));
        assert!(page["number"].is_u64());
        assert!(page["size"].is_u64());
    });
}

#[then("{count} events are embedded")]
fn events_are_embedded(world: &EventApiWorld, count: usize) {
    world.with_outcome(|outcome| {
        let events = outcome.body["_embedded"]["eventList"]
            .as_array()
            .expect("embedded events");
        assert_eq!(events.len(), count);
    });
}

#[scenario(
    path = "tests/features/event_endpoints.feature",
    name = "A free offline event is created as a draft"
)]
fn free_offline_event_is_created_as_draft(world: EventApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/event_endpoints.feature",
    name = "Rule violations are reported together"
)]
fn rule_violations_are_reported_together(world: EventApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/event_endpoints.feature",
    name = "Unknown events are not found"
)]
fn unknown_events_are_not_found(world: EventApiWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/event_endpoints.feature",
    name = "Listing pages through seeded events"
)]
fn listing_pages_through_seeded_events(world: EventApiWorld) {
    drop(world);
}
