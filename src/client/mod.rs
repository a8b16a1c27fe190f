//! Typed HTTP client for the JSON API.
//!
//! Every call is a `POST` with a JSON body. A `204 No Content` reply becomes
//! [`Reply::NoContent`]; anything else is parsed as JSON and handed back
//! untouched, including failure envelopes and 4xx/5xx statuses. Only
//! transport and parse failures surface as [`ClientError`].

pub mod notes;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::models::{Appointment, Customer, Invoice, Service, User};

pub use notes::NoteClient;

#[derive(Debug)]
pub enum ClientError {
    /// Connection, TLS or protocol failure.
    Transport(reqwest::Error),
    /// The server answered but the body was not the expected JSON.
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "Request failed: {err}"),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// A transport-level success.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// HTTP 204. Stands for a plain `true`.
    NoContent,
    Body(T),
}

impl<T> Reply<T> {
    pub fn is_no_content(&self) -> bool {
        matches!(self, Reply::NoContent)
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Reply::NoContent => None,
            Reply::Body(body) => Some(body),
        }
    }
}

pub type ClientResult<T> = Result<Reply<Envelope<T>>, ClientError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct Login<'a> {
    email: &'a str,
    password: &'a str,
}

/// Sent for routes that take no body.
#[derive(Serialize, Deserialize)]
struct Empty {}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// A client with its own cookie store, so a successful `login` carries
    /// the session on every later call.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `path` and normalise the reply.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Reply<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Reply::NoContent);
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map(Reply::Body)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    // Auth

    pub async fn signup(&self, signup: &Signup<'_>) -> ClientResult<()> {
        self.post("/api/auth/signup", signup).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        self.post("/api/auth/login", &Login { email, password }).await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.post("/api/auth/logout", &Empty {}).await
    }

    pub async fn current_user(&self) -> ClientResult<User> {
        self.post("/api/auth/user", &Empty {}).await
    }

    // Customers

    pub async fn add_customer(&self, customer: &Customer) -> ClientResult<()> {
        self.post("/api/customers/add", customer).await
    }

    pub async fn get_customer(&self, id: i64) -> ClientResult<Customer> {
        self.post("/api/customers/get", &id).await
    }

    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.post("/api/customers/list", &Empty {}).await
    }

    pub async fn update_customer(&self, customer: &Customer) -> ClientResult<()> {
        self.post("/api/customers/update", customer).await
    }

    pub async fn delete_customer(&self, id: i64) -> ClientResult<()> {
        self.post("/api/customers/delete", &id).await
    }

    // Appointments

    pub async fn add_appointment(&self, appointment: &Appointment) -> ClientResult<()> {
        self.post("/api/appointments/add", appointment).await
    }

    pub async fn get_appointment(&self, id: i64) -> ClientResult<Appointment> {
        self.post("/api/appointments/get", &id).await
    }

    pub async fn list_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.post("/api/appointments/list", &Empty {}).await
    }

    pub async fn update_appointment(&self, appointment: &Appointment) -> ClientResult<()> {
        self.post("/api/appointments/update", appointment).await
    }

    pub async fn delete_appointment(&self, id: i64) -> ClientResult<()> {
        self.post("/api/appointments/delete", &id).await
    }

    // Services

    pub async fn add_service(&self, service: &Service) -> ClientResult<()> {
        self.post("/api/services/add", service).await
    }

    pub async fn get_service(&self, id: i64) -> ClientResult<Service> {
        self.post("/api/services/get", &id).await
    }

    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.post("/api/services/list", &Empty {}).await
    }

    pub async fn update_service(&self, service: &Service) -> ClientResult<()> {
        self.post("/api/services/update", service).await
    }

    pub async fn delete_service(&self, id: i64) -> ClientResult<()> {
        self.post("/api/services/delete", &id).await
    }

    // Invoices

    pub async fn add_invoice(&self, invoice: &Invoice) -> ClientResult<()> {
        self.post("/api/invoices/add", invoice).await
    }

    pub async fn get_invoice(&self, id: i64) -> ClientResult<Invoice> {
        self.post("/api/invoices/get", &id).await
    }

    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        self.post("/api/invoices/list", &Empty {}).await
    }

    pub async fn update_invoice(&self, invoice: &Invoice) -> ClientResult<()> {
        self.post("/api/invoices/update", invoice).await
    }

    pub async fn delete_invoice(&self, id: i64) -> ClientResult<()> {
        self.post("/api/invoices/delete", &id).await
    }

    /// Notes attached to one kind of parent.
    pub fn notes(&self, kind: crate::models::ParentKind) -> NoteClient {
        NoteClient::new(self.clone(), kind)
    }
}
