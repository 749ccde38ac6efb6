//! Form submissions. Bodies may use camelCase or snake_case keys.

use crate::case::{rekey, Case};
use crate::error::AppError;
use crate::model::{ContactFormInput, DonationFormInput, NewsletterFormInput, VolunteerFormInput};
use crate::response::{success_created, success_one};
use crate::state::AppState;
use axum::{extract::State, response::Response, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

fn parse_body<T: DeserializeOwned>(mut body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    rekey(&mut body, Case::Snake);
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct UnsubscribeBody {
    email: String,
}

pub async fn submit_contact(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Response, AppError> {
    let input: ContactFormInput = parse_body(body)?;
    require("email", &input.email)?;
    success_created(state.api.submit_contact_form(&input).await?)
}

pub async fn submit_volunteer(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Response, AppError> {
    let input: VolunteerFormInput = parse_body(body)?;
    require("email", &input.email)?;
    success_created(state.api.submit_volunteer_application(&input).await?)
}

pub async fn subscribe(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Response, AppError> {
    let input: NewsletterFormInput = parse_body(body)?;
    require("email", &input.email)?;
    success_created(state.api.subscribe_newsletter(&input).await?)
}

pub async fn unsubscribe(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Response, AppError> {
    let body: UnsubscribeBody = parse_body(body)?;
    require("email", &body.email)?;
    success_one(state.api.unsubscribe_newsletter(body.email.trim()).await?)
}

pub async fn create_donation(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Response, AppError> {
    let input: DonationFormInput = parse_body(body)?;
    if !(input.amount.is_finite() && input.amount > 0.0) {
        return Err(AppError::BadRequest("amount must be positive".into()));
    }
    success_created(state.api.create_donation(&input).await?)
}
