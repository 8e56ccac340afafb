// API module - HTTP endpoints

use sqlx::PgPool;

pub mod bookings;
pub mod cards;
pub mod health;
pub mod reference;
pub mod users;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
