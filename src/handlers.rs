use crate::aggregate::{aggregate, total_for_date};
use crate::chart::{self, ChartLayout};
use crate::errors::AppError;
use crate::models::{DailyTotalResponse, Entry, NewEntryRequest, TotalQuery};
use crate::state::AppState;
use crate::storage::persist_journal;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let journal = state.journal.lock().await;
    let total = total_for_date(&journal.entries, &date);
    Html(render_index(&date, total))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    let journal = state.journal.lock().await;
    let mut entries = journal.entries.clone();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(entries)
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<Entry>, AppError> {
    validate_request(&payload)?;

    let entry = Entry::from_request(
        payload,
        Uuid::new_v4().to_string(),
        Local::now().to_rfc3339(),
    );

    let mut journal = state.journal.lock().await;
    journal.entries.push(entry.clone());
    persist_journal(&state.data_path, &journal).await?;

    Ok(Json(entry))
}

pub async fn get_total(
    State(state): State<AppState>,
    Query(query): Query<TotalQuery>,
) -> Result<Json<DailyTotalResponse>, AppError> {
    if parse_iso_date(&query.date).is_none() {
        return Err(AppError::bad_request("date must be formatted YYYY-MM-DD"));
    }

    let journal = state.journal.lock().await;
    let total_calories = total_for_date(&journal.entries, &query.date);

    Ok(Json(DailyTotalResponse {
        date: query.date,
        total_calories,
    }))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartLayout> {
    let journal = state.journal.lock().await;
    let totals = aggregate(&journal.entries);
    Json(chart::layout(&totals))
}

fn validate_request(request: &NewEntryRequest) -> Result<(), AppError> {
    if request.image_data_url.trim().is_empty() {
        return Err(AppError::bad_request("a photo is required"));
    }
    if !request.image_data_url.starts_with("data:image/") {
        return Err(AppError::bad_request("photo must be an image data URL"));
    }
    if request.quantity == 0 {
        return Err(AppError::bad_request("quantity must be at least 1"));
    }
    if parse_iso_date(&request.date).is_none() {
        return Err(AppError::bad_request("date must be formatted YYYY-MM-DD"));
    }
    Ok(())
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;

    fn request() -> NewEntryRequest {
        NewEntryRequest {
            date: "2024-01-01".to_string(),
            entry_type: EntryType::Meal,
            name: None,
            quantity: 1,
            calories_per_portion: None,
            image_data_url: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn rejects_missing_photo() {
        let mut req = request();
        req.image_data_url = "  ".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn rejects_non_image_payload() {
        let mut req = request();
        req.image_data_url = "data:text/plain;base64,AAAA".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut req = request();
        req.quantity = 0;
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let mut req = request();
        req.date = "01/01/2024".to_string();
        assert!(validate_request(&req).is_err());
    }
}
