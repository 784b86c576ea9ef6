use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::config::AppState;
use crate::handlers::{
    block_property_dates, cancel_booking, create_booking, create_property, create_user,
    delete_booking, delete_property, delete_user, get_booking, get_property, get_user,
    health_check, list_property_blocks, rebook_booking, unblock_property_dates, update_booking,
    update_property, update_user,
};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /api)
    let health_routes = Router::new().route("/health", get(health_check));

    let user_routes = Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id", put(update_user))
        .route("/users/:id", delete(delete_user));

    let property_routes = Router::new()
        .route("/properties", post(create_property))
        .route("/properties/:id", get(get_property))
        .route("/properties/:id", put(update_property))
        .route("/properties/:id", delete(delete_property))
        .route("/properties/:id/block", post(block_property_dates))
        .route("/properties/:id/unblock", post(unblock_property_dates))
        .route("/properties/:id/blocks", get(list_property_blocks));

    let booking_routes = Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/:id", get(get_booking))
        .route("/bookings/:id", put(update_booking))
        .route("/bookings/:id", delete(delete_booking))
        .route("/bookings/:id/cancel", post(cancel_booking))
        .route("/bookings/:id/rebook", post(rebook_booking));

    // Combine routes
    Router::new()
        .merge(health_routes)
        .nest(
            "/api",
            Router::new()
                .merge(user_routes)
                .merge(property_routes)
                .merge(booking_routes),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::AppConfig;
    use crate::models::{Booking, Property, User};
    use crate::repositories::{
        MockBookingGuestRepository, MockBookingRepository, MockPropertyBlockRepository,
        MockPropertyRepository, MockUserRepository, Repositories,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Mocks {
        users: MockUserRepository,
        properties: MockPropertyRepository,
        bookings: MockBookingRepository,
        guests: MockBookingGuestRepository,
        blocks: MockPropertyBlockRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                users: MockUserRepository::new(),
                properties: MockPropertyRepository::new(),
                bookings: MockBookingRepository::new(),
                guests: MockBookingGuestRepository::new(),
                blocks: MockPropertyBlockRepository::new(),
            }
        }

        fn into_router(self) -> Router {
            let repos = Repositories {
                users: Arc::new(self.users),
                properties: Arc::new(self.properties),
                bookings: Arc::new(self.bookings),
                guests: Arc::new(self.guests),
                blocks: Arc::new(self.blocks),
            };
            let config = AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
                app_name: "staybook".to_string(),
                app_version: "0.0.0".to_string(),
            };

            create_router(AppState::new(repos, config))
        }
    }

    fn test_property(price_per_guest: i64) -> Property {
        Property {
            id: Uuid::new_v4(),
            name: "Loft".to_string(),
            owner_user_id: Uuid::new_v4(),
            address_line1: "5 Canal St".to_string(),
            address_line2: None,
            city: "Amsterdam".to_string(),
            state: "NH".to_string(),
            country: "NL".to_string(),
            postal_code: "1011".to_string(),
            price_per_guest,
            created_at: chrono::Utc::now(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let app = Mocks::new().into_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["status"], json!("ok"));
    }

    #[tokio::test]
    async fn missing_booking_maps_to_404_with_error_code() {
        let mut mocks = Mocks::new();
        mocks.bookings.expect_find_by_id().returning(|_| Ok(None));

        let app = mocks.into_router();
        let uri = format!("/api/bookings/{}", Uuid::new_v4());

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn conflicting_booking_maps_to_422_with_the_offending_dates() {
        let user = User::new(
            "Ada".to_string(),
            date(1990, 6, 1),
            "ada@example.com".to_string(),
        );
        let property = test_property(50);
        let property_id = property.id;
        let user_id = user.id;

        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        mocks
            .properties
            .expect_find_by_id()
            .returning(move |_| Ok(Some(property.clone())));
        mocks
            .blocks
            .expect_find_by_property_and_range()
            .returning(|_, _, _| Ok(vec![]));
        // An existing booking already holds 2024-02-01..2024-02-02
        mocks.bookings.expect_find_overlapping().returning(move |_, _, _, _| {
            Ok(vec![Booking::new(
                property_id,
                Uuid::new_v4(),
                date(2024, 2, 1),
                date(2024, 2, 2),
                100,
            )])
        });

        let app = mocks.into_router();
        let request = post_json(
            "/api/bookings",
            json!({
                "property_id": property_id,
                "user_id": user_id,
                "start_date": "2024-02-02",
                "end_date": "2024-02-03",
                "guests": [{ "name": "Ada", "date_of_birth": "1990-06-01" }],
            }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], json!("DATES_CONFLICT"));
        assert_eq!(
            body["error"]["details"]["unavailable_dates"],
            json!(["2024-02-02"])
        );
    }

    #[tokio::test]
    async fn booking_a_free_range_returns_the_priced_booking() {
        let user = User::new(
            "Ada".to_string(),
            date(1990, 6, 1),
            "ada@example.com".to_string(),
        );
        let property = test_property(50);
        let property_id = property.id;
        let user_id = user.id;

        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        mocks
            .properties
            .expect_find_by_id()
            .returning(move |_| Ok(Some(property.clone())));
        mocks
            .blocks
            .expect_find_by_property_and_range()
            .returning(|_, _, _| Ok(vec![]));
        mocks
            .bookings
            .expect_find_overlapping()
            .returning(|_, _, _, _| Ok(vec![]));
        mocks
            .bookings
            .expect_insert()
            .returning(|booking| Ok(booking));
        mocks
            .guests
            .expect_delete_by_booking_id()
            .returning(|_| Ok(()));
        mocks
            .guests
            .expect_insert_all()
            .returning(|guests| Ok(guests));

        let app = mocks.into_router();
        // 2 nights inclusive, 1 guest, 50 per guest per night
        let request = post_json(
            "/api/bookings",
            json!({
                "property_id": property_id,
                "user_id": user_id,
                "start_date": "2024-02-01",
                "end_date": "2024-02-02",
                "guests": [{ "name": "Ada", "date_of_birth": "1990-06-01" }],
            }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["data"]["total_price"], json!(100));
        assert_eq!(body["data"]["status"], json!("BOOKED"));
    }

    #[tokio::test]
    async fn blocking_no_dates_is_a_successful_no_op() {
        // No repository expectations: nothing may be touched
        let app = Mocks::new().into_router();
        let uri = format!("/api/properties/{}/block", Uuid::new_v4());

        let request = post_json(&uri, json!({ "dates": [], "reason": null }));

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
