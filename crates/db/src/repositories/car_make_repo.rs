//! Repository for the `car_makes` table.

use dealership_core::car_make::validate_car_make;
use dealership_core::search::contains_pattern;
use dealership_core::types::DbId;
use dealership_core::validation::ValidationMode;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::car_make::{CarMake, CarMakeFilter, CreateCarMake, UpdateCarMake};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, country, founded_year, created_at, updated_at";

/// Provides CRUD operations for car makes, including the cascading delete.
pub struct CarMakeRepo;

impl CarMakeRepo {
    /// Validate and insert a new car make, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCarMake) -> Result<CarMake, StoreError> {
        validate_car_make(&input.fields(), ValidationMode::Create)?;

        let query = format!(
            "INSERT INTO car_makes (name, description, country, founded_year)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let make = sqlx::query_as::<_, CarMake>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.country)
            .bind(input.founded_year)
            .fetch_one(pool)
            .await?;
        Ok(make)
    }

    /// Find a car make by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarMake>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_makes WHERE id = $1");
        sqlx::query_as::<_, CarMake>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List car makes ordered by name, optionally narrowed by a name search.
    pub async fn list(pool: &PgPool, filter: &CarMakeFilter) -> Result<Vec<CarMake>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(contains_pattern);

        let where_clause = if pattern.is_some() {
            "WHERE name ILIKE $1 ESCAPE '\\'"
        } else {
            ""
        };
        let query =
            format!("SELECT {COLUMNS} FROM car_makes {where_clause} ORDER BY name ASC, id ASC");

        let mut q = sqlx::query_as::<_, CarMake>(&query);
        if let Some(pattern) = pattern {
            q = q.bind(pattern);
        }
        q.fetch_all(pool).await
    }

    /// Validate and apply an update. Only non-`None` fields in `input` are applied;
    /// `Some(None)` clears a nullable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarMake,
    ) -> Result<Option<CarMake>, StoreError> {
        validate_car_make(&input.fields(), ValidationMode::Update)?;

        let query = format!(
            "UPDATE car_makes SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                country = CASE WHEN $4 THEN $5 ELSE country END,
                founded_year = CASE WHEN $6 THEN $7 ELSE founded_year END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let make = sqlx::query_as::<_, CarMake>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.country.is_some())
            .bind(input.country.as_ref().and_then(|c| c.as_deref()))
            .bind(input.founded_year.is_some())
            .bind(input.founded_year.flatten())
            .fetch_optional(pool)
            .await?;
        Ok(make)
    }

    /// Delete a car make together with all of its car models.
    ///
    /// The make row is locked first so no model can be attached to it while
    /// the cascade runs; dependents and owner are removed in one transaction.
    /// Returns the number of car models removed, or `None` if the make does
    /// not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM car_makes WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let models = sqlx::query("DELETE FROM car_models WHERE car_make_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM car_makes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let removed = models.rows_affected();
        tracing::info!(car_make_id = id, car_models_removed = removed, "Car make deleted");
        Ok(Some(removed))
    }
}
