//! Vendor Repository

use super::{RepoError, RepoResult, like_pattern};
use shared::error::ErrorCode;
use shared::models::{Status, Vendor, VendorInput, VendorOption, VendorQuery};
use shared::util::{non_blank, now_millis};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, vendor_code, company_name, vendor_type, uniform_no, tel, fax_no, email, \
                       contact_person, address, capital, employee_count, payment_terms, status, \
                       created_at, updated_at";

fn not_found(id: i64) -> RepoError {
    RepoError::Business(ErrorCode::VendorNotFound, format!("Vendor {id} not found"))
}

/// Trim required fields, collapse blank optional text to NULL
fn normalize(mut data: VendorInput) -> VendorInput {
    data.vendor_code = data.vendor_code.trim().to_string();
    data.company_name = data.company_name.trim().to_string();
    data.vendor_type = non_blank(data.vendor_type);
    data.uniform_no = non_blank(data.uniform_no);
    data.tel = non_blank(data.tel);
    data.fax_no = non_blank(data.fax_no);
    data.email = non_blank(data.email);
    data.contact_person = non_blank(data.contact_person);
    data.address = non_blank(data.address);
    data.payment_terms = non_blank(data.payment_terms);
    data
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Vendor>> {
    let vendor = sqlx::query_as::<_, Vendor>(&format!("SELECT {COLUMNS} FROM vendor WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(vendor)
}

pub async fn find_by_code(pool: &SqlitePool, vendor_code: &str) -> RepoResult<Option<Vendor>> {
    let vendor = sqlx::query_as::<_, Vendor>(&format!(
        "SELECT {COLUMNS} FROM vendor WHERE vendor_code = ? LIMIT 1"
    ))
    .bind(vendor_code)
    .fetch_optional(pool)
    .await?;
    Ok(vendor)
}

/// Filtered list ordered by vendor code
pub async fn list(pool: &SqlitePool, query: &VendorQuery) -> RepoResult<Vec<Vendor>> {
    let vendors = sqlx::query_as::<_, Vendor>(&format!(
        "SELECT {COLUMNS} FROM vendor \
         WHERE (?1 IS NULL OR vendor_code LIKE ?1) \
           AND (?2 IS NULL OR company_name LIKE ?2) \
           AND (?3 IS NULL OR uniform_no LIKE ?3) \
         ORDER BY vendor_code"
    ))
    .bind(like_pattern(query.vendor_code.as_deref()))
    .bind(like_pattern(query.company_name.as_deref()))
    .bind(like_pattern(query.uniform_no.as_deref()))
    .fetch_all(pool)
    .await?;
    Ok(vendors)
}

/// Active vendors as selector options
pub async fn options(pool: &SqlitePool) -> RepoResult<Vec<VendorOption>> {
    let rows = sqlx::query_as::<_, VendorOption>(
        "SELECT id, vendor_code, company_name FROM vendor WHERE status = 'Active' ORDER BY vendor_code",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

async fn ensure_code_free(pool: &SqlitePool, vendor_code: &str, exclude_id: Option<i64>) -> RepoResult<()> {
    if let Some(existing) = find_by_code(pool, vendor_code).await?
        && Some(existing.id) != exclude_id
    {
        return Err(RepoError::Business(
            ErrorCode::VendorCodeExists,
            format!("Vendor code '{vendor_code}' already exists"),
        ));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: VendorInput) -> RepoResult<Vendor> {
    let data = normalize(data);
    ensure_code_free(pool, &data.vendor_code, None).await?;

    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO vendor (vendor_code, company_name, vendor_type, uniform_no, tel, fax_no, email, \
                             contact_person, address, capital, employee_count, payment_terms, status, \
                             created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.vendor_code)
    .bind(&data.company_name)
    .bind(&data.vendor_type)
    .bind(&data.uniform_no)
    .bind(&data.tel)
    .bind(&data.fax_no)
    .bind(&data.email)
    .bind(&data.contact_person)
    .bind(&data.address)
    .bind(data.capital)
    .bind(data.employee_count)
    .bind(&data.payment_terms)
    .bind(data.status.unwrap_or_default().as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create vendor".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: VendorInput) -> RepoResult<Vendor> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;
    let data = normalize(data);
    ensure_code_free(pool, &data.vendor_code, Some(id)).await?;

    sqlx::query(
        "UPDATE vendor SET vendor_code = ?, company_name = ?, vendor_type = ?, uniform_no = ?, tel = ?, \
                fax_no = ?, email = ?, contact_person = ?, address = ?, capital = ?, employee_count = ?, \
                payment_terms = ?, status = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(&data.vendor_code)
    .bind(&data.company_name)
    .bind(&data.vendor_type)
    .bind(&data.uniform_no)
    .bind(&data.tel)
    .bind(&data.fax_no)
    .bind(&data.email)
    .bind(&data.contact_person)
    .bind(&data.address)
    .bind(data.capital)
    .bind(data.employee_count)
    .bind(&data.payment_terms)
    .bind(data.status.unwrap_or(existing.status).as_str())
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: Status) -> RepoResult<Vendor> {
    let rows = sqlx::query("UPDATE vendor SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(not_found(id));
    }
    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM vendor WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::pool;

    fn payload(code: &str, name: &str) -> VendorInput {
        VendorInput {
            vendor_code: code.into(),
            company_name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_blank_fields() {
        let pool = pool().await;
        let vendor = create(
            &pool,
            VendorInput {
                tel: Some("  ".into()),
                capital: Some(1_000_000.0),
                ..payload(" V001 ", "Acme Ltd")
            },
        )
        .await
        .unwrap();

        assert_eq!(vendor.vendor_code, "V001");
        assert_eq!(vendor.tel, None);
        assert_eq!(vendor.capital, Some(1_000_000.0));
        assert_eq!(vendor.status, Status::Active);
    }

    #[tokio::test]
    async fn test_duplicate_code() {
        let pool = pool().await;
        let a = create(&pool, payload("V001", "Acme")).await.unwrap();
        let b = create(&pool, payload("V002", "Globex")).await.unwrap();

        let err = create(&pool, payload("V001", "Other")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::VendorCodeExists);

        let err = update(&pool, b.id, payload("V001", "Globex")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::VendorCodeExists);

        let renamed = update(&pool, a.id, payload("V001", "Acme Corp")).await.unwrap();
        assert_eq!(renamed.company_name, "Acme Corp");
    }

    #[tokio::test]
    async fn test_list_filters_and_options() {
        let pool = pool().await;
        create(&pool, payload("V002", "Globex")).await.unwrap();
        let acme = create(&pool, payload("V001", "Acme")).await.unwrap();
        update_status(&pool, acme.id, Status::Inactive).await.unwrap();

        let all = list(&pool, &VendorQuery::default()).await.unwrap();
        assert_eq!(
            all.iter().map(|v| v.vendor_code.as_str()).collect::<Vec<_>>(),
            vec!["V001", "V002"]
        );

        let filtered = list(
            &pool,
            &VendorQuery {
                company_name: Some("glob".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(filtered.len(), 1);

        let opts = options(&pool).await.unwrap();
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].vendor_code, "V002");
    }

    #[tokio::test]
    async fn test_delete_unknown_vendor() {
        let pool = pool().await;
        let err = delete(&pool, 9).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::VendorNotFound);
    }
}
