//! Repository for the `car_models` table.

use dealership_core::car_model::{validate_car_model, DEFAULT_CAR_TYPE, DEFAULT_YEAR};
use dealership_core::error::CoreError;
use dealership_core::search::contains_pattern;
use dealership_core::types::DbId;
use dealership_core::validation::ValidationMode;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::StoreError;
use crate::models::car_model::{
    CarModelFilter, CarModelWithMake, CarSummary, CreateCarModel, UpdateCarModel,
};

/// Car model columns qualified with the `cm` alias, plus the owning make's name.
const JOINED_COLUMNS: &str = "cm.id, cm.car_make_id, cm.dealer_id, cm.name, cm.car_type, cm.year, \
     cm.color, cm.price, cm.created_at, cm.updated_at, mk.name AS car_make_name";

/// Unqualified car model columns for `RETURNING` clauses.
const COLUMNS: &str =
    "id, car_make_id, dealer_id, name, car_type, year, color, price, created_at, updated_at";

/// Provides CRUD, filtered listing, and search for car models.
pub struct CarModelRepo;

impl CarModelRepo {
    /// Validate and insert a new car model, returning it joined with its make.
    ///
    /// `type` defaults to `SUV` and `year` to `2023` when omitted. Fails with
    /// `NotFound` if the referenced car make does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCarModel,
    ) -> Result<CarModelWithMake, StoreError> {
        validate_car_model(&input.fields(), ValidationMode::Create)?;

        let mut tx = pool.begin().await?;
        if let Some(car_make_id) = input.car_make_id {
            Self::lock_car_make(&mut tx, car_make_id).await?;
        }

        let query = format!(
            "WITH cm AS (
                INSERT INTO car_models (car_make_id, dealer_id, name, car_type, year, color, price)
                VALUES ($1, $2, $3, COALESCE($4, $8), COALESCE($5, $9), $6, $7)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM cm JOIN car_makes mk ON mk.id = cm.car_make_id"
        );
        let model = sqlx::query_as::<_, CarModelWithMake>(&query)
            .bind(input.car_make_id)
            .bind(input.dealer_id)
            .bind(&input.name)
            .bind(&input.car_type)
            .bind(input.year)
            .bind(&input.color)
            .bind(input.price)
            .bind(DEFAULT_CAR_TYPE)
            .bind(DEFAULT_YEAR)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(model)
    }

    /// Find a car model by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CarModelWithMake>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM car_models cm
             JOIN car_makes mk ON mk.id = cm.car_make_id
             WHERE cm.id = $1"
        );
        sqlx::query_as::<_, CarModelWithMake>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List car models matching the filter, ordered by make name then model name.
    pub async fn list(
        pool: &PgPool,
        filter: &CarModelFilter,
    ) -> Result<Vec<CarModelWithMake>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(contains_pattern);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.car_type.is_some() {
            conditions.push(format!("cm.car_type = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.year.is_some() {
            conditions.push(format!("cm.year = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.car_make_id.is_some() {
            conditions.push(format!("cm.car_make_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if pattern.is_some() {
            conditions.push(format!(
                "(cm.name ILIKE ${bind_idx} ESCAPE '\\' OR mk.name ILIKE ${bind_idx} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM car_models cm
             JOIN car_makes mk ON mk.id = cm.car_make_id
             {where_clause}
             ORDER BY mk.name ASC, cm.name ASC, cm.id ASC"
        );

        let mut q = sqlx::query_as::<_, CarModelWithMake>(&query);

        // Bind dynamic parameters in order.
        if let Some(ref car_type) = filter.car_type {
            q = q.bind(car_type);
        }
        if let Some(year) = filter.year {
            q = q.bind(year);
        }
        if let Some(car_make_id) = filter.car_make_id {
            q = q.bind(car_make_id);
        }
        if let Some(pattern) = pattern {
            q = q.bind(pattern);
        }

        q.fetch_all(pool).await
    }

    /// All car models of one make, ordered by name.
    pub async fn list_by_car_make(
        pool: &PgPool,
        car_make_id: DbId,
    ) -> Result<Vec<CarModelWithMake>, sqlx::Error> {
        let filter = CarModelFilter {
            car_make_id: Some(car_make_id),
            ..Default::default()
        };
        Self::list(pool, &filter).await
    }

    /// `(model name, make name)` pairs for every car model.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<CarSummary>, sqlx::Error> {
        sqlx::query_as::<_, CarSummary>(
            "SELECT cm.name AS car_model, mk.name AS car_make
             FROM car_models cm
             JOIN car_makes mk ON mk.id = cm.car_make_id
             ORDER BY mk.name ASC, cm.name ASC, cm.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Validate and apply an update. Only non-`None` fields in `input` are applied;
    /// `Some(None)` clears `color` or `price`.
    ///
    /// Returns `None` if no row with the given `id` exists. Fails with
    /// `NotFound` if `car_make_id` is changed to a make that does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarModel,
    ) -> Result<Option<CarModelWithMake>, StoreError> {
        validate_car_model(&input.fields(), ValidationMode::Update)?;

        let mut tx = pool.begin().await?;
        if let Some(car_make_id) = input.car_make_id {
            Self::lock_car_make(&mut tx, car_make_id).await?;
        }

        let query = format!(
            "WITH cm AS (
                UPDATE car_models SET
                    car_make_id = COALESCE($2, car_make_id),
                    dealer_id = COALESCE($3, dealer_id),
                    name = COALESCE($4, name),
                    car_type = COALESCE($5, car_type),
                    year = COALESCE($6, year),
                    color = CASE WHEN $7 THEN $8 ELSE color END,
                    price = CASE WHEN $9 THEN $10 ELSE price END
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM cm JOIN car_makes mk ON mk.id = cm.car_make_id"
        );
        let model = sqlx::query_as::<_, CarModelWithMake>(&query)
            .bind(id)
            .bind(input.car_make_id)
            .bind(input.dealer_id)
            .bind(&input.name)
            .bind(&input.car_type)
            .bind(input.year)
            .bind(input.color.is_some())
            .bind(input.color.as_ref().and_then(|c| c.as_deref()))
            .bind(input.price.is_some())
            .bind(input.price.flatten())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(model)
    }

    /// Delete a car model by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM car_models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Take a key-share lock on the owning make for the rest of the
    /// transaction, so a concurrent cascade delete waits for (or blocks)
    /// this write instead of interleaving with it.
    async fn lock_car_make(
        tx: &mut Transaction<'_, Postgres>,
        car_make_id: DbId,
    ) -> Result<(), StoreError> {
        let found = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM car_makes WHERE id = $1 FOR KEY SHARE",
        )
        .bind(car_make_id)
        .fetch_optional(&mut **tx)
        .await?;

        match found {
            Some(_) => Ok(()),
            None => Err(StoreError::Core(CoreError::NotFound {
                entity: "CarMake",
                id: car_make_id,
            })),
        }
    }
}
