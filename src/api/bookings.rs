use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::api::AppState;
use crate::error::{require, require_nonempty, AppError, Result};
use crate::models::booking::{Booking, BookingSlot, CreateBookingData};

#[derive(Debug, Deserialize)]
struct AddBookingRequest {
    user_id: Option<i32>,
    date: Option<String>,
    time: Option<String>,
    court: Option<String>,
    participants: Option<JsonValue>,
    amount_paid: Option<JsonValue>,
    card_used: Option<JsonValue>,
}

impl AddBookingRequest {
    /// Validates the required fields. Empty strings and a zero user_id count
    /// as missing, same as absent keys.
    fn into_create_data(self) -> Result<CreateBookingData> {
        Ok(CreateBookingData {
            user_id: require("user_id", self.user_id.filter(|id| *id != 0))?,
            date: require_nonempty("date", self.date)?,
            time: require_nonempty("time", self.time)?,
            court: require_nonempty("court", self.court)?,
            participants: self.participants.unwrap_or_else(|| json!([])),
            amount_paid: self.amount_paid.unwrap_or_else(|| json!({})),
            card_used: self.card_used.unwrap_or_else(|| json!({})),
        })
    }
}

/// POST /add_booking
async fn add_booking(
    State(state): State<AppState>,
    Json(body): Json<AddBookingRequest>,
) -> Result<(StatusCode, Json<JsonValue>)> {
    let booking = Booking::create(&state.pool, body.into_create_data()?).await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = booking.user_id,
        date = %booking.date,
        court = %booking.court,
        "booking saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Booking saved" })),
    ))
}

/// GET /get_user_bookings/:user_id
///
/// Returns only the slot fields; the payment payload stays server-side.
/// An unknown user yields an empty list, not an error.
async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<BookingSlot>>> {
    let slots = Booking::list_slots_by_user(&state.pool, user_id).await?;
    Ok(Json(slots))
}

#[derive(Debug, Deserialize)]
struct BookingsByDateParams {
    date: Option<String>,
}

/// Full booking detail for the by-date listing, structured sub-fields
/// included.
#[derive(Debug, Serialize)]
struct BookingDetail {
    user_id: i32,
    date: String,
    time: String,
    court: String,
    participants: JsonValue,
    amount_paid: JsonValue,
    card_used: JsonValue,
}

impl From<Booking> for BookingDetail {
    fn from(b: Booking) -> Self {
        Self {
            user_id: b.user_id,
            date: b.date,
            time: b.time,
            court: b.court,
            participants: b.participants,
            amount_paid: b.amount_paid,
            card_used: b.card_used,
        }
    }
}

/// GET /get_bookings_by_date?date=YYYY-MM-DD
async fn get_bookings_by_date(
    State(state): State<AppState>,
    Query(params): Query<BookingsByDateParams>,
) -> Result<Json<Vec<BookingDetail>>> {
    let date = require("date", params.date)?;
    let bookings = Booking::list_by_date(&state.pool, &date).await?;
    Ok(Json(bookings.into_iter().map(BookingDetail::from).collect()))
}

#[derive(Debug, Deserialize)]
struct CancelBookingParams {
    date: Option<String>,
    time: Option<String>,
    court: Option<String>,
}

impl CancelBookingParams {
    /// The full (date, time, court) triple is required; absent and empty
    /// values are both rejected.
    fn into_key(self) -> Result<(String, String, String)> {
        match (self.date, self.time, self.court) {
            (Some(d), Some(t), Some(c)) if !d.is_empty() && !t.is_empty() && !c.is_empty() => {
                Ok((d, t, c))
            }
            _ => Err(AppError::BadRequest(
                "Missing required parameters".to_string(),
            )),
        }
    }
}

/// DELETE /cancel_booking?date=&time=&court=
///
/// Bookings are cancelled by their natural (date, time, court) key rather
/// than by id; when duplicates exist only the oldest match is removed.
async fn cancel_booking(
    State(state): State<AppState>,
    Query(params): Query<CancelBookingParams>,
) -> Result<Json<JsonValue>> {
    let (date, time, court) = params.into_key()?;

    if !Booking::cancel(&state.pool, &date, &time, &court).await? {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    tracing::info!(%date, %time, %court, "booking cancelled");

    Ok(Json(json!({ "message": "Booking cancelled" })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_booking", post(add_booking))
        .route("/get_user_bookings/:user_id", get(get_user_bookings))
        .route("/get_bookings_by_date", get(get_bookings_by_date))
        .route("/cancel_booking", delete(cancel_booking))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_payload_defaults_are_empty_structures() {
        let body: AddBookingRequest = serde_json::from_str(
            r#"{"user_id": 1, "date": "2026-09-01", "time": "8:00am - 9:00am", "court": "Court 2"}"#,
        )
        .unwrap();

        let data = body.into_create_data().unwrap();
        assert_eq!(data.participants, json!([]));
        assert_eq!(data.amount_paid, json!({}));
        assert_eq!(data.card_used, json!({}));
    }

    #[test]
    fn empty_required_fields_fail_booking_validation() {
        let body: AddBookingRequest = serde_json::from_str(
            r#"{"user_id": 1, "date": "2026-09-01", "time": "8:00am - 9:00am", "court": ""}"#,
        )
        .unwrap();
        assert!(matches!(
            body.into_create_data(),
            Err(AppError::BadRequest(_))
        ));

        let body: AddBookingRequest = serde_json::from_str(
            r#"{"user_id": 0, "date": "2026-09-01", "time": "8:00am - 9:00am", "court": "Court 2"}"#,
        )
        .unwrap();
        assert!(matches!(
            body.into_create_data(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn cancellation_key_rejects_empty_values() {
        let params = CancelBookingParams {
            date: Some(String::new()),
            time: Some("8:00am - 9:00am".to_string()),
            court: Some("Court 2".to_string()),
        };
        match params.into_key() {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Missing required parameters"),
            other => panic!("expected BadRequest, got {other:?}"),
        }

        let params = CancelBookingParams {
            date: Some("2026-09-01".to_string()),
            time: None,
            court: Some("Court 2".to_string()),
        };
        assert!(params.into_key().is_err());
    }

    #[test]
    fn complete_cancellation_key_passes() {
        let params = CancelBookingParams {
            date: Some("2026-09-01".to_string()),
            time: Some("8:00am - 9:00am".to_string()),
            court: Some("Court 2".to_string()),
        };
        let (date, time, court) = params.into_key().unwrap();
        assert_eq!(date, "2026-09-01");
        assert_eq!(time, "8:00am - 9:00am");
        assert_eq!(court, "Court 2");
    }

    #[test]
    fn structured_sub_fields_round_trip() {
        let participants = json!(["jdoe", "asmith"]);
        let amount_paid = json!({"jdoe": 12.5, "asmith": 12.5});
        let card_used = json!({"last4": "1111"});

        let detail = BookingDetail::from(Booking {
            id: 7,
            user_id: 1,
            date: "2026-09-01".to_string(),
            time: "8:00am - 9:00am".to_string(),
            court: "Court 2".to_string(),
            participants: participants.clone(),
            amount_paid: amount_paid.clone(),
            card_used: card_used.clone(),
        });

        let serialized = serde_json::to_value(&detail).unwrap();
        // Structural equality, not string equality.
        assert_eq!(serialized["participants"], participants);
        assert_eq!(serialized["amount_paid"], amount_paid);
        assert_eq!(serialized["card_used"], card_used);
        assert!(serialized.get("id").is_none());
    }
}
