//! Tests for event HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockEventCommand, MockEventQuery};
use crate::domain::{Error, EventService};
use crate::inbound::http::json_config;
use crate::outbound::memory::InMemoryEventRepository;

fn in_memory_state() -> HttpState {
    let service = Arc::new(EventService::new(Arc::new(InMemoryEventRepository::new())));
    HttpState::new(service.clone(), service)
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope("/api")
                .service(create_event)
                .service(list_events)
                .service(get_event)
                .service(update_event),
        )
}

fn sample_event_payload() -> Value {
    json!({
        "name": "Spring",
        "description": "REST API Development with Spring",
        "beginEnrollmentDateTime": "2018-11-23T14:21:00",
        "closeEnrollmentDateTime": "2018-11-24T14:21:00",
        "beginEventDateTime": "2018-11-25T14:21:00",
        "endEventDateTime": "2018-11-26T14:21:00",
        "basePrice": 100,
        "maxPrice": 200,
        "limitOfEnrollment": 100,
        "location": "Gangnam station D2 startup factory"
    })
}

fn error_fields(body: &Value) -> Vec<&str> {
    body["details"]["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error["field"].as_str())
                .collect()
        })
        .unwrap_or_default()
}

#[actix_web::test]
async fn create_event_returns_created_with_location_and_links() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(sample_event_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");
    assert!(location.ends_with("/api/events/1"), "location was {location}");

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["free"], false);
    assert_eq!(body["offline"], true);
    assert_eq!(body["eventStatus"], "DRAFT");
    assert_eq!(body["_links"]["self"]["href"], location.as_str());
    for relation in ["query-events", "update-event", "profile"] {
        assert!(body["_links"][relation]["href"].is_string(), "missing {relation}");
    }
    assert!(
        body["_links"]["profile"]["href"]
            .as_str()
            .is_some_and(|href| href.ends_with("#resources-events-create"))
    );
}

#[rstest]
#[case("id", json!(100))]
#[case("free", json!(true))]
#[case("offline", json!(false))]
#[case("eventStatus", json!("PUBLISHED"))]
#[actix_web::test]
async fn create_event_rejects_server_owned_fields(#[case] field: &str, #[case] value: Value) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let mut payload = sample_event_payload();
    payload[field] = value;
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn create_event_reports_missing_fields() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        error_fields(&body),
        [
            "name",
            "description",
            "beginEnrollmentDateTime",
            "closeEnrollmentDateTime",
            "beginEventDateTime",
            "endEventDateTime"
        ]
    );
}

#[actix_web::test]
async fn create_event_reports_rule_violations_in_order() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let mut payload = sample_event_payload();
    payload["basePrice"] = json!(10_000);
    payload["endEventDateTime"] = json!("2018-11-22T14:21:00");
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        error_fields(&body),
        ["basePrice", "maxPrice", "endEventDateTime"]
    );
    let first = &body["details"]["errors"][0];
    assert_eq!(first["objectName"], "eventSubmission");
    assert_eq!(first["code"], "invalid.basePrice");
    assert_eq!(first["rejectedValue"], 10_000);
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn get_event_round_trips_through_the_store() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let create = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(sample_event_payload())
        .to_request();
    let created = actix_test::call_service(&app, create).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let request = actix_test::TestRequest::get()
        .uri("/api/events/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Spring");
    assert_eq!(body["beginEventDateTime"], "2018-11-25T14:21:00");
    assert!(
        body["_links"]["profile"]["href"]
            .as_str()
            .is_some_and(|href| href.ends_with("#resources-events-get"))
    );
}

#[actix_web::test]
async fn unknown_event_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/events/11883")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn update_event_merges_and_recomputes_flags() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let create = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(sample_event_payload())
        .to_request();
    actix_test::call_service(&app, create).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/events/1")
        .set_json(json!({"name": "Updated Event", "basePrice": 0, "maxPrice": 0}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Updated Event");
    assert_eq!(body["description"], "REST API Development with Spring");
    assert_eq!(body["free"], true);
    assert_eq!(body["eventStatus"], "DRAFT");
}

#[actix_web::test]
async fn update_event_rejects_invalid_merge() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let create = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(sample_event_payload())
        .to_request();
    actix_test::call_service(&app, create).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/events/1")
        .set_json(json!({"basePrice": 20_000, "maxPrice": 200}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(error_fields(&body), ["basePrice", "maxPrice"]);
}

#[actix_web::test]
async fn update_unknown_event_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::put()
        .uri("/api/events/42")
        .set_json(json!({"name": "Ghost"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_events_pages_with_navigation_links() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for _ in 0..30 {
        let create = actix_test::TestRequest::post()
            .uri("/api/events")
            .set_json(sample_event_payload())
            .to_request();
        actix_test::call_service(&app, create).await;
    }

    let request = actix_test::TestRequest::get()
        .uri("/api/events?page=1&size=10&sort=name,DESC")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["page"],
        json!({"size": 10, "totalElements": 30, "totalPages": 3, "number": 1})
    );
    let events = body["_embedded"]["eventList"]
        .as_array()
        .expect("event list");
    assert_eq!(events.len(), 10);
    assert!(events.iter().all(|event| event["_links"]["self"].is_object()));
    for relation in ["self", "first", "prev", "next", "last", "profile"] {
        assert!(body["_links"][relation]["href"].is_string(), "missing {relation}");
    }
    assert!(
        body["_links"]["next"]["href"]
            .as_str()
            .is_some_and(|href| href.contains("page=2") && href.contains("sort=name%2CDESC"))
    );
}

#[rstest]
#[case("/api/events?sort=colour,ASC")]
#[case("/api/events?size=500")]
#[case("/api/events?page=abc")]
#[actix_web::test]
async fn list_events_rejects_bad_queries(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unavailable_store_maps_to_service_unavailable() {
    let mut query = MockEventQuery::new();
    query
        .expect_get()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("event store unavailable")));
    let mut command = MockEventCommand::new();
    command.expect_create().never();
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/events/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[actix_web::test]
async fn presence_failures_never_reach_the_service() {
    let mut command = MockEventCommand::new();
    command.expect_create().never();
    let state = HttpState::new(Arc::new(command), Arc::new(MockEventQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let mut payload = sample_event_payload();
    payload["name"] = json!("");
    let request = actix_test::TestRequest::post()
        .uri("/api/events")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
