use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Days, Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use crate::db::DrawResult;
use crate::middleware::AdminSession;
use crate::types::slots;
use crate::{BoardError, router::BoardState};

/// `previous` is capped at 15 days of full boards.
const PREVIOUS_LIMIT: i64 = 120;
/// `recent` spans today plus the nine days before it.
const RECENT_LOOKBACK_DAYS: u64 = 9;

/// Filters arrive as raw strings so a blank `?date=` or `?number=` (which
/// the public board sends for an empty search box) means "no filter"
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub date: Option<String>,
    pub number: Option<String>,
}

impl SearchQuery {
    fn parsed(&self) -> Result<(Option<NaiveDate>, Option<i64>), BoardError> {
        let date = match present(self.date.as_deref()) {
            Some(v) => Some(
                v.parse()
                    .map_err(|_| BoardError::Validation(format!("Invalid date: {v}")))?,
            ),
            None => None,
        };
        let number = match present(self.number.as_deref()) {
            Some(v) => Some(
                v.parse()
                    .map_err(|_| BoardError::Validation(format!("Invalid number: {v}")))?,
            ),
            None => None,
        };
        Ok((date, number))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct NewResult {
    pub result_date: NaiveDate,
    pub time_slot: String,
    pub number_1: i64,
    pub number_2: i64,
}

impl NewResult {
    fn validate(&self) -> Result<(), BoardError> {
        if !slots::is_valid(&self.time_slot) {
            return Err(BoardError::Validation(format!(
                "Invalid time slot: {}",
                self.time_slot
            )));
        }
        for number in [self.number_1, self.number_2] {
            if !(0..=99).contains(&number) {
                return Err(BoardError::Validation(
                    "Numbers must be between 0 and 99".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// GET /api/results/today
pub async fn today_results(
    State(state): State<BoardState>,
) -> Result<Json<Vec<DrawResult>>, BoardError> {
    let today = Local::now().date_naive();
    Ok(Json(state.storage.results_for_date(today).await?))
}

/// GET /api/results/previous -> everything before today, capped.
pub async fn previous_results(
    State(state): State<BoardState>,
) -> Result<Json<Vec<DrawResult>>, BoardError> {
    let today = Local::now().date_naive();
    Ok(Json(state.storage.results_before(today, PREVIOUS_LIMIT).await?))
}

/// GET /api/results/recent -> last 10 days including today.
pub async fn recent_results(
    State(state): State<BoardState>,
) -> Result<Json<Vec<DrawResult>>, BoardError> {
    let today = Local::now().date_naive();
    let since = today
        .checked_sub_days(Days::new(RECENT_LOOKBACK_DAYS))
        .unwrap_or(today);
    Ok(Json(state.storage.results_since(since).await?))
}

/// GET /api/results/search?date=&number=
pub async fn search_results(
    State(state): State<BoardState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<DrawResult>>, BoardError> {
    let (date, number) = query.parsed()?;
    Ok(Json(state.storage.search_results(date, number).await?))
}

/// POST /api/results (admin) -> upsert by `(result_date, time_slot)`.
pub async fn create_result(
    _session: AdminSession,
    State(state): State<BoardState>,
    Json(req): Json<NewResult>,
) -> Result<impl IntoResponse, BoardError> {
    req.validate()?;
    let row = state
        .storage
        .upsert_result(req.result_date, &req.time_slot, req.number_1, req.number_2)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/results/{id} (admin)
pub async fn delete_result(
    _session: AdminSession,
    State(state): State<BoardState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
    if state.storage.delete_result(id).await? == 0 {
        return Err(BoardError::NotFound("Result not found"));
    }
    Ok(Json(json!({ "message": "Result deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slot: &str, number_1: i64, number_2: i64) -> NewResult {
        NewResult {
            result_date: "2026-08-24".parse().expect("test date"),
            time_slot: slot.to_string(),
            number_1,
            number_2,
        }
    }

    #[test]
    fn accepts_zero_and_the_full_range() {
        assert!(request("10:30 AM", 0, 99).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(request("10:30 AM", 100, 5).validate().is_err());
        assert!(request("10:30 AM", 5, -1).validate().is_err());
    }

    #[test]
    fn rejects_unknown_slots() {
        assert!(request("11:00 AM", 1, 2).validate().is_err());
        assert!(request("", 1, 2).validate().is_err());
    }

    fn search(date: Option<&str>, number: Option<&str>) -> SearchQuery {
        SearchQuery {
            date: date.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[test]
    fn blank_search_filters_mean_no_filter() {
        assert_eq!(search(None, None).parsed().expect("parse"), (None, None));
        assert_eq!(search(Some(""), Some("  ")).parsed().expect("parse"), (None, None));
    }

    #[test]
    fn search_filters_parse_when_present() {
        let (date, number) = search(Some("2026-08-20"), Some("42")).parsed().expect("parse");
        assert_eq!(date, Some("2026-08-20".parse().expect("test date")));
        assert_eq!(number, Some(42));
    }

    #[test]
    fn malformed_search_filters_are_rejected() {
        assert!(search(Some("yesterday"), None).parsed().is_err());
        assert!(search(None, Some("seven")).parsed().is_err());
    }
}
