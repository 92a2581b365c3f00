//! Vendor API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{StatusUpdate, Vendor, VendorInput, VendorOption, VendorQuery};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::vendor;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_email,
    validate_optional_text, validate_required_text,
};

fn validate_input(input: &VendorInput) -> Result<(), AppError> {
    validate_required_text(&input.vendor_code, "vendorCode", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&input.company_name, "companyName", MAX_NAME_LEN)?;
    validate_optional_text(&input.vendor_type, "vendorType", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&input.uniform_no, "uniformNo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&input.tel, "tel", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&input.fax_no, "faxNo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_email(&input.email, "email")?;
    validate_optional_text(&input.contact_person, "contactPerson", MAX_NAME_LEN)?;
    validate_optional_text(&input.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&input.payment_terms, "paymentTerms", MAX_ADDRESS_LEN)?;

    if input.capital.is_some_and(|c| !c.is_finite() || c < 0.0) {
        return Err(AppError::validation("capital must be a non-negative number"));
    }
    if input.employee_count.is_some_and(|n| n < 0) {
        return Err(AppError::validation("employeeCount must not be negative"));
    }
    Ok(())
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<VendorQuery>,
) -> AppResult<Json<Vec<Vendor>>> {
    Ok(Json(vendor::list(&state.pool, &query).await?))
}

/// Active vendors for selectors
pub async fn basic(State(state): State<ServerState>) -> AppResult<Json<Vec<VendorOption>>> {
    Ok(Json(vendor::options(&state.pool).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vendor>> {
    let vendor = vendor::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::VendorNotFound, format!("Vendor {id} not found"))
    })?;
    Ok(Json(vendor))
}

pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<VendorInput>,
) -> AppResult<Json<Vendor>> {
    validate_input(&payload)?;

    let vendor = vendor::create(&state.pool, payload).await?;
    tracing::info!(user_id = current_user.id, vendor_id = vendor.id, vendor_code = %vendor.vendor_code, "Vendor created");
    Ok(Json(vendor))
}

pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<VendorInput>,
) -> AppResult<Json<Vendor>> {
    validate_input(&payload)?;

    let vendor = vendor::update(&state.pool, id, payload).await?;
    tracing::info!(user_id = current_user.id, vendor_id = id, "Vendor updated");
    Ok(Json(vendor))
}

pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Vendor>> {
    Ok(Json(vendor::update_status(&state.pool, id, payload.status).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    vendor::delete(&state.pool, id).await?;
    tracing::info!(user_id = current_user.id, vendor_id = id, "Vendor deleted");
    Ok(ApiResponse::ok_with_message("Vendor deleted"))
}
