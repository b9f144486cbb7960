//! Starter inventory inserted into an empty database.

use dealership_core::car_model::{CAR_TYPE_SEDAN, CAR_TYPE_SUV};
use dealership_core::types::DbId;
use sqlx::PgPool;

/// Advisory lock key serializing concurrent population attempts.
const SEED_LOCK_KEY: i64 = 0x6361_725f_7365_6564;

/// Model year given to every seeded car model.
const SEED_YEAR: i32 = 2023;

/// A seeded car make.
pub struct SeedMake {
    pub name: &'static str,
    pub description: &'static str,
}

/// A seeded car model, referencing its make by index into [`SEED_MAKES`].
pub struct SeedModel {
    pub make: usize,
    pub name: &'static str,
    pub car_type: &'static str,
    pub dealer_id: i32,
}

const fn make(name: &'static str, description: &'static str) -> SeedMake {
    SeedMake { name, description }
}

const fn model(
    make: usize,
    name: &'static str,
    car_type: &'static str,
    dealer_id: i32,
) -> SeedModel {
    SeedModel {
        make,
        name,
        car_type,
        dealer_id,
    }
}

pub const SEED_MAKES: &[SeedMake] = &[
    make("NISSAN", "Great cars. Japanese technology"),
    make("Mercedes", "Great cars. German technology"),
    make("Audi", "Great cars. German technology"),
    make("Kia", "Great cars. Korean technology"),
    make("Toyota", "Great cars. Japanese technology"),
];

pub const SEED_MODELS: &[SeedModel] = &[
    model(0, "Pathfinder", CAR_TYPE_SUV, 1),
    model(0, "Qashqai", CAR_TYPE_SUV, 2),
    model(0, "XTRAIL", CAR_TYPE_SUV, 3),
    model(1, "A-Class", CAR_TYPE_SUV, 4),
    model(1, "C-Class", CAR_TYPE_SUV, 5),
    model(1, "E-Class", CAR_TYPE_SUV, 6),
    model(2, "A4", CAR_TYPE_SUV, 7),
    model(2, "A5", CAR_TYPE_SUV, 8),
    model(2, "A6", CAR_TYPE_SUV, 9),
    model(3, "Sorrento", CAR_TYPE_SUV, 10),
    model(3, "Carnival", CAR_TYPE_SUV, 11),
    model(3, "Cerato", CAR_TYPE_SEDAN, 12),
    model(4, "Corolla", CAR_TYPE_SEDAN, 13),
    model(4, "Camry", CAR_TYPE_SEDAN, 14),
    model(4, "Kluger", CAR_TYPE_SUV, 15),
];

/// Insert the starter inventory if `car_makes` is empty.
///
/// Runs in one transaction under an advisory lock, so concurrent callers
/// seed at most once and a failure leaves the tables untouched. Returns
/// `true` if rows were inserted.
pub async fn populate_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car_makes")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    let mut make_ids: Vec<DbId> = Vec::with_capacity(SEED_MAKES.len());
    for make in SEED_MAKES {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO car_makes (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(make.name)
        .bind(make.description)
        .fetch_one(&mut *tx)
        .await?;
        make_ids.push(id);
    }

    for model in SEED_MODELS {
        sqlx::query(
            "INSERT INTO car_models (car_make_id, dealer_id, name, car_type, year)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(make_ids[model.make])
        .bind(model.dealer_id)
        .bind(model.name)
        .bind(model.car_type)
        .bind(SEED_YEAR)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        car_makes = SEED_MAKES.len(),
        car_models = SEED_MODELS.len(),
        "Populated starter inventory"
    );
    Ok(true)
}
