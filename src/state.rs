use std::sync::Arc;

use crate::config::Config;
use crate::db::{AppointmentStore, AuthStore, CustomerStore, InvoiceStore, NoteStore, ServiceStore};
use crate::rate_limit::LoginRateLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub auth: AuthStore,
    pub customers: CustomerStore,
    pub appointments: AppointmentStore,
    pub services: ServiceStore,
    pub invoices: InvoiceStore,
    pub notes: NoteStore,
    pub login_limiter: LoginRateLimiter,
}
