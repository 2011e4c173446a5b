use std::net::SocketAddr;

use reqwest::Client;
use serde_json::{Value, json};

use server::config::AppConfig;
use server::state::AppState;

pub mod routes {
    pub const USERS: &str = "/api/v1/users";
    pub const AMENITIES: &str = "/api/v1/amenities";
    pub const PLACES: &str = "/api/v1/places";
    pub const REVIEWS: &str = "/api/v1/reviews";

    pub fn user(id: &str) -> String {
        format!("/api/v1/users/{id}")
    }

    pub fn user_places(id: &str) -> String {
        format!("/api/v1/users/{id}/places")
    }

    pub fn amenity(id: &str) -> String {
        format!("/api/v1/amenities/{id}")
    }

    pub fn place(id: &str) -> String {
        format!("/api/v1/places/{id}")
    }

    pub fn place_reviews(id: &str) -> String {
        format!("/api/v1/places/{id}/reviews")
    }

    pub fn review(id: &str) -> String {
        format!("/api/v1/reviews/{id}")
    }
}

/// A running test server backed by its own empty catalog.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = server::build_router(AppState::new(AppConfig::default()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Register a user and return its id.
    pub async fn create_user(&self, email: &str) -> String {
        let res = self
            .post(
                routes::USERS,
                &json!({
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": email,
                    "password": "secret",
                }),
            )
            .await;
        assert_eq!(res.status, 201, "User creation failed: {}", res.text);
        res.id()
    }

    /// Create an amenity and return its id.
    pub async fn create_amenity(&self, name: &str) -> String {
        let res = self.post(routes::AMENITIES, &json!({ "name": name })).await;
        assert_eq!(res.status, 201, "Amenity creation failed: {}", res.text);
        res.id()
    }

    /// Create a place owned by `owner_id` and return its id.
    pub async fn create_place(&self, owner_id: &str, amenities: &[&str]) -> String {
        let res = self
            .post(
                routes::PLACES,
                &json!({
                    "title": "Loft",
                    "description": "Bright loft near the river",
                    "price": 120.0,
                    "latitude": 48.85,
                    "longitude": 2.35,
                    "owner_id": owner_id,
                    "amenities": amenities,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "Place creation failed: {}", res.text);
        res.id()
    }

    /// Post a review and return its id.
    pub async fn create_review(&self, user_id: &str, place_id: &str, rating: i64) -> String {
        let res = self
            .post(
                routes::REVIEWS,
                &json!({
                    "text": "Lovely stay",
                    "rating": rating,
                    "user_id": user_id,
                    "place_id": place_id,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "Review creation failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .to_string()
    }
}
