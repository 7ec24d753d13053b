//! SQLite Contact Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::DbPool;
use crate::application::ports::{ContactFields, ContactRecord, ContactRepositoryPort, RepositoryError};
use crate::domain::{ContactFilter, PageRequest};

const CONTACT_COLUMNS: &str = "id, username, first_name, last_name, email, phone";

/// SQLite Contact Repository
pub struct SqliteContactRepository {
    pool: DbPool,
}

impl SqliteContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ContactRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl From<ContactRow> for ContactRecord {
    fn from(row: ContactRow) -> Self {
        ContactRecord {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
        }
    }
}

/// 转义 LIKE 通配符后包装为子串匹配模式
fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// 追加 WHERE 子句（归属 + 过滤条件）
fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, username: &str, filter: &ContactFilter) {
    builder.push(" WHERE username = ").push_bind(username.to_string());

    if let Some(name) = &filter.name {
        let pattern = like_pattern(name);
        builder
            .push(" AND (first_name LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR last_name LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
    if let Some(email) = &filter.email {
        builder
            .push(" AND email LIKE ")
            .push_bind(like_pattern(email))
            .push(" ESCAPE '\\'");
    }
    if let Some(phone) = &filter.phone {
        builder
            .push(" AND phone LIKE ")
            .push_bind(like_pattern(phone))
            .push(" ESCAPE '\\'");
    }
}

#[async_trait]
impl ContactRepositoryPort for SqliteContactRepository {
    async fn create(
        &self,
        username: &str,
        fields: &ContactFields,
    ) -> Result<ContactRecord, RepositoryError> {
        let row: ContactRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO contacts (username, first_name, last_name, email, phone)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(username)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_owned(
        &self,
        username: &str,
        id: i64,
    ) -> Result<Option<ContactRecord>, RepositoryError> {
        let row: Option<ContactRow> = sqlx::query_as(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ? AND username = ?"
        ))
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(ContactRecord::from))
    }

    async fn update(
        &self,
        username: &str,
        id: i64,
        fields: &ContactFields,
    ) -> Result<Option<ContactRecord>, RepositoryError> {
        let row: Option<ContactRow> = sqlx::query_as(&format!(
            r#"
            UPDATE contacts
            SET first_name = ?, last_name = ?, email = ?, phone = ?
            WHERE id = ? AND username = ?
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(ContactRecord::from))
    }

    async fn delete(&self, username: &str, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ? AND username = ?")
            .bind(id)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        username: &str,
        filter: &ContactFilter,
        page: PageRequest,
    ) -> Result<(Vec<ContactRecord>, u64), RepositoryError> {
        let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM contacts");
        push_filters(&mut count_query, username, filter);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut select_query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {CONTACT_COLUMNS} FROM contacts"));
        push_filters(&mut select_query, username, filter);
        select_query
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(i64::from(page.size()))
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows: Vec<ContactRow> = select_query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let total = u64::try_from(total).unwrap_or_default();
        Ok((rows.into_iter().map(ContactRecord::from).collect(), total))
    }
}
