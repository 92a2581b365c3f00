//! Vendor Model

use serde::{Deserialize, Serialize};

use super::Status;

/// Vendor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: i64,
    pub vendor_code: String,
    pub company_name: String,
    pub vendor_type: Option<String>,
    /// Business registration number
    pub uniform_no: Option<String>,
    pub tel: Option<String>,
    pub fax_no: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub capital: Option<f64>,
    pub employee_count: Option<i64>,
    pub payment_terms: Option<String>,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Active vendor option (selectors)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct VendorOption {
    pub id: i64,
    pub vendor_code: String,
    pub company_name: String,
}

/// Query filter for vendor listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorQuery {
    pub vendor_code: Option<String>,
    pub company_name: Option<String>,
    pub uniform_no: Option<String>,
}

/// Create / update vendor payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInput {
    pub vendor_code: String,
    pub company_name: String,
    pub vendor_type: Option<String>,
    pub uniform_no: Option<String>,
    pub tel: Option<String>,
    pub fax_no: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub capital: Option<f64>,
    pub employee_count: Option<i64>,
    pub payment_terms: Option<String>,
    pub status: Option<Status>,
}
