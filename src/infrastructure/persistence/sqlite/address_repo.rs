//! SQLite Address Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{AddressFields, AddressRecord, AddressRepositoryPort, RepositoryError};

const ADDRESS_COLUMNS: &str = "id, contact_id, street, city, province, country, postal_code";

/// SQLite Address Repository
pub struct SqliteAddressRepository {
    pool: DbPool,
}

impl SqliteAddressRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AddressRow {
    id: i64,
    contact_id: i64,
    street: Option<String>,
    city: Option<String>,
    province: Option<String>,
    country: String,
    postal_code: String,
}

impl From<AddressRow> for AddressRecord {
    fn from(row: AddressRow) -> Self {
        AddressRecord {
            id: row.id,
            contact_id: row.contact_id,
            street: row.street,
            city: row.city,
            province: row.province,
            country: row.country,
            postal_code: row.postal_code,
        }
    }
}

#[async_trait]
impl AddressRepositoryPort for SqliteAddressRepository {
    async fn create(
        &self,
        contact_id: i64,
        fields: &AddressFields,
    ) -> Result<AddressRecord, RepositoryError> {
        let row: AddressRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO addresses (contact_id, street, city, province, country, postal_code)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(contact_id)
        .bind(&fields.street)
        .bind(&fields.city)
        .bind(&fields.province)
        .bind(&fields.country)
        .bind(&fields.postal_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find(
        &self,
        contact_id: i64,
        address_id: i64,
    ) -> Result<Option<AddressRecord>, RepositoryError> {
        let row: Option<AddressRow> = sqlx::query_as(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = ? AND contact_id = ?"
        ))
        .bind(address_id)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(AddressRecord::from))
    }

    async fn update(
        &self,
        contact_id: i64,
        address_id: i64,
        fields: &AddressFields,
    ) -> Result<Option<AddressRecord>, RepositoryError> {
        let row: Option<AddressRow> = sqlx::query_as(&format!(
            r#"
            UPDATE addresses
            SET street = ?, city = ?, province = ?, country = ?, postal_code = ?
            WHERE id = ? AND contact_id = ?
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(&fields.street)
        .bind(&fields.city)
        .bind(&fields.province)
        .bind(&fields.country)
        .bind(&fields.postal_code)
        .bind(address_id)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(AddressRecord::from))
    }

    async fn delete(&self, contact_id: i64, address_id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ? AND contact_id = ?")
            .bind(address_id)
            .bind(contact_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_contact(&self, contact_id: i64) -> Result<Vec<AddressRecord>, RepositoryError> {
        let rows: Vec<AddressRow> = sqlx::query_as(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE contact_id = ? ORDER BY id ASC"
        ))
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(AddressRecord::from).collect())
    }
}
