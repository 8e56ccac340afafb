use chrono::{Datelike, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))
}

/// Card expiration months offered by the client: "01" through "12".
pub fn expiration_months() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}

/// Card expiration years offered by the client: the current year plus the
/// next ten.
pub fn expiration_years(current_year: i32) -> Vec<String> {
    (current_year..current_year + 11).map(|y| y.to_string()).collect()
}

/// US state names for the billing-address picker, in display order.
pub const STATE_NAMES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana",
    "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York",
    "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

/// Populates the reference tables (expiration months, expiration years,
/// state names). Safe to run on every startup; existing rows are left
/// untouched.
pub async fn seed_reference_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    for month in expiration_months() {
        sqlx::query("INSERT INTO expiration_months (value) VALUES ($1) ON CONFLICT (value) DO NOTHING")
            .bind(&month)
            .execute(pool)
            .await?;
    }

    for year in expiration_years(Utc::now().year()) {
        sqlx::query("INSERT INTO expiration_years (value) VALUES ($1) ON CONFLICT (value) DO NOTHING")
            .bind(&year)
            .execute(pool)
            .await?;
    }

    for name in STATE_NAMES {
        sqlx::query("INSERT INTO states (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;
    }

    tracing::info!("Reference tables seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_zero_padded_and_complete() {
        let months = expiration_months();
        assert_eq!(months.len(), 12);
        assert_eq!(months.first().unwrap(), "01");
        assert_eq!(months.last().unwrap(), "12");
        assert!(months.iter().all(|m| m.len() == 2));
    }

    #[test]
    fn years_cover_the_next_decade() {
        let years = expiration_years(2026);
        assert_eq!(years.len(), 11);
        assert_eq!(years.first().unwrap(), "2026");
        assert_eq!(years.last().unwrap(), "2036");
    }

    #[test]
    fn all_fifty_states_present_once() {
        let mut names: Vec<&str> = STATE_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 50);
    }
}
