use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub date: String,  // YYYY-MM-DD
    pub time: String,  // display range, e.g. "8:00am - 9:00am"
    pub court: String,
    pub participants: JsonValue, // list
    pub amount_paid: JsonValue,  // mapping
    pub card_used: JsonValue,    // mapping
}

#[derive(Debug, Clone)]
pub struct CreateBookingData {
    pub user_id: i32,
    pub date: String,
    pub time: String,
    pub court: String,
    pub participants: JsonValue,
    pub amount_paid: JsonValue,
    pub card_used: JsonValue,
}

/// Slot info returned when listing a user's own bookings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingSlot {
    pub date: String,
    pub time: String,
    pub court: String,
}

impl Booking {
    pub async fn create(pool: &PgPool, data: CreateBookingData) -> Result<Self, sqlx::Error> {
        let booking = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO bookings (user_id, date, time, court, participants, amount_paid, card_used)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(&data.date)
        .bind(&data.time)
        .bind(&data.court)
        .bind(&data.participants)
        .bind(&data.amount_paid)
        .bind(&data.card_used)
        .fetch_one(pool)
        .await?;

        Ok(booking)
    }

    pub async fn list_slots_by_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<BookingSlot>, sqlx::Error> {
        sqlx::query_as::<_, BookingSlot>(
            r#"
            SELECT date, time, court
            FROM bookings
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_by_date(pool: &PgPool, date: &str) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM bookings
            WHERE date = $1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Deletes the first booking matching the (date, time, court) triple.
    /// The triple is not unique in storage; when duplicates exist only the
    /// oldest row goes. Returns false when nothing matched.
    pub async fn cancel(
        pool: &PgPool,
        date: &str,
        time: &str,
        court: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE id = (
                SELECT id FROM bookings
                WHERE date = $1 AND time = $2 AND court = $3
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(date)
        .bind(time)
        .bind(court)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
