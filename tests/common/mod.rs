#![allow(dead_code)]

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use bizdesk::client::ApiClient;
use bizdesk::config::Config;
use bizdesk::state::SharedState;

pub const PASSWORD: &str = "password123";

/// A running test server on a random port over a fresh in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A raw HTTP client that keeps cookies, like a browser tab.
    pub fn browser(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.base_url()).unwrap()
    }

    pub async fn post(&self, client: &Client, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn signup(&self, client: &Client, email: &str, password: &str) -> (Value, StatusCode) {
        self.post(
            client,
            "/api/auth/signup",
            &json!({
                "firstName": "Test",
                "lastName": "User",
                "email": email,
                "password": password,
            }),
        )
        .await
    }

    pub async fn login(&self, client: &Client, email: &str, password: &str) -> (Value, StatusCode) {
        self.post(
            client,
            "/api/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Sign up and log in on a fresh cookie-keeping client.
    pub async fn logged_in(&self, email: &str) -> Client {
        let client = self.browser();
        let (body, status) = self.signup(&client, email, PASSWORD).await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
        let (body, status) = self.login(&client, email, PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        client
    }

    /// Add a customer and return it as listed by the server.
    pub async fn create_customer(&self, client: &Client, first_name: &str) -> Value {
        let (body, status) = self
            .post(client, "/api/customers/add", &sample_customer(first_name))
            .await;
        assert_eq!(status, StatusCode::CREATED, "add customer failed: {body}");

        let (body, _) = self.post(client, "/api/customers/list", &json!({})).await;
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["firstName"] == first_name)
            .cloned()
            .expect("customer missing from list")
    }
}

pub fn sample_customer(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Doe",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "phone": "555-0100",
        "address": {
            "street": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701"
        }
    })
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        session_ttl: chrono::Duration::minutes(60),
        session_sweep_secs: 300,
        secure_cookies: false,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

/// A migrated in-memory store.
pub async fn test_pool() -> SqlitePool {
    let pool = bizdesk::db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    bizdesk::db::migrate(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let pool = test_pool().await;
    let (app, state) = bizdesk::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp { addr, pool, state }
}
