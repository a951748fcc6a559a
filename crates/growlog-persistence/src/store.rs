//! Generic store engine for record types.
//!
//! Every route works through the four operations here, generic over
//! [`EntityTrait`]; the `with_record!` macro is the only place route
//! segments and entity types meet. Upserts are full replacements: after a
//! payload has been shaped by [`crate::payload::shape`], every column of the
//! row is written, so fields omitted from the payload end up null rather
//! than keeping their previous value.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

use crate::payload::ShapedRecord;
use crate::registry::{self, RecordDescriptor, ReferencedBy};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("unknown record type {0}")]
    UnknownRecord(String),
    #[error("unknown column {0}")]
    UnknownColumn(String),
    #[error("{record} {id} is referenced by {dependent} records")]
    Referenced {
        record: &'static str,
        id: i32,
        dependent: &'static str,
    },
    #[error("malformed record data: {0}")]
    Codec(#[from] serde_json::Error),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Outcome of an upsert: the persisted row and whether it was newly created.
#[derive(Debug)]
pub struct Upserted {
    pub created: bool,
    pub row: Value,
}

/// Dispatch a generic store operation to the entity type behind a route
/// segment. These arms are the record table; adding a record type means
/// adding one arm (plus its entity module and registry descriptor).
macro_rules! with_record {
    ($segment:expr, $entity:ident => $body:expr) => {
        match $segment {
            "seeds" => {
                type $entity = crate::entity::seeds::Entity;
                $body
            }
            "germinations" => {
                type $entity = crate::entity::germinations::Entity;
                $body
            }
            "plants" => {
                type $entity = crate::entity::plants::Entity;
                $body
            }
            "hydroponic_systems" => {
                type $entity = crate::entity::hydroponic_systems::Entity;
                $body
            }
            "hydroponic_conditions" => {
                type $entity = crate::entity::hydroponic_conditions::Entity;
                $body
            }
            "plant_crosses" => {
                type $entity = crate::entity::plant_crosses::Entity;
                $body
            }
            "plant_plant_crosses" => {
                type $entity = crate::entity::plant_plant_crosses::Entity;
                $body
            }
            "yields" => {
                type $entity = crate::entity::yields::Entity;
                $body
            }
            "taste_tests" => {
                type $entity = crate::entity::taste_tests::Entity;
                $body
            }
            "observations" => {
                type $entity = crate::entity::observations::Entity;
                $body
            }
            other => Err(StoreError::UnknownRecord(other.to_string())),
        }
    };
}

/// Fetch a single row by primary key.
pub async fn fetch_one(
    db: &DatabaseConnection,
    descriptor: &'static RecordDescriptor,
    id: i32,
) -> Result<Value, StoreError> {
    with_record!(descriptor.segment, E => fetch_one_typed::<E>(db, descriptor, id).await)
}

/// Fetch every row of the record's table, in storage order.
pub async fn fetch_all(
    db: &DatabaseConnection,
    descriptor: &'static RecordDescriptor,
) -> Result<Value, StoreError> {
    with_record!(descriptor.segment, E => fetch_all_typed::<E>(db).await)
}

/// Insert or fully replace a row. A shaped payload without a key inserts
/// with a storage-assigned key; a key naming an existing row replaces that
/// row; a key naming no row inserts honoring the supplied key.
pub async fn upsert(
    db: &DatabaseConnection,
    descriptor: &'static RecordDescriptor,
    shaped: ShapedRecord,
) -> Result<Upserted, StoreError> {
    with_record!(descriptor.segment, E => upsert_typed::<E, _>(db, shaped).await)
}

/// Delete a row by primary key and return its last-known values.
///
/// A missing row is reported before any dependency check; a row still
/// referenced by dependent records is refused.
pub async fn delete(
    db: &DatabaseConnection,
    descriptor: &'static RecordDescriptor,
    id: i32,
) -> Result<Value, StoreError> {
    let row = fetch_one(db, descriptor, id).await?;

    for reference in descriptor.referenced_by {
        if count_dependents(db, reference, id).await? > 0 {
            let dependent = registry::lookup(reference.record)
                .ok_or_else(|| StoreError::UnknownRecord(reference.record.to_string()))?;
            return Err(StoreError::Referenced {
                record: descriptor.display_name,
                id,
                dependent: dependent.display_name,
            });
        }
    }

    with_record!(descriptor.segment, E => delete_typed::<E>(db, id).await)?;
    Ok(row)
}

async fn fetch_one_typed<E>(
    db: &DatabaseConnection,
    descriptor: &'static RecordDescriptor,
    id: i32,
) -> Result<Value, StoreError>
where
    E: EntityTrait,
    E::Model: Serialize,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let row = E::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(descriptor.display_name))?;
    Ok(serde_json::to_value(row)?)
}

async fn fetch_all_typed<E>(db: &DatabaseConnection) -> Result<Value, StoreError>
where
    E: EntityTrait,
    E::Model: Serialize,
{
    let rows = E::find().all(db).await?;
    let rows = rows
        .into_iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(rows))
}

async fn upsert_typed<E, A>(
    db: &DatabaseConnection,
    shaped: ShapedRecord,
) -> Result<Upserted, StoreError>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: DeserializeOwned + Serialize + IntoActiveModel<A>,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let model: E::Model = serde_json::from_value(shaped.record)?;

    let existing = match shaped.key {
        Some(key) => E::find_by_id(key).one(db).await?,
        None => None,
    };

    // Full replace: mark every column dirty so omitted optionals are
    // written back as null instead of surviving from the previous row.
    let mut active = model.into_active_model();
    for column in E::Column::iter() {
        active.reset(column);
    }

    match existing {
        Some(_) => {
            let updated = active.update(db).await?;
            Ok(Upserted {
                created: false,
                row: serde_json::to_value(updated)?,
            })
        }
        None => {
            if shaped.key.is_none() {
                for key in E::PrimaryKey::iter() {
                    active.not_set(key.into_column());
                }
            }
            let inserted = active.insert(db).await?;
            Ok(Upserted {
                created: true,
                row: serde_json::to_value(inserted)?,
            })
        }
    }
}

async fn delete_typed<E>(db: &DatabaseConnection, id: i32) -> Result<(), StoreError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::delete_by_id(id).exec(db).await?;
    Ok(())
}

async fn count_dependents(
    db: &DatabaseConnection,
    reference: &ReferencedBy,
    id: i32,
) -> Result<u64, StoreError> {
    with_record!(reference.record, E => count_matching::<E>(db, reference.column, id).await)
}

async fn count_matching<E>(
    db: &DatabaseConnection,
    column: &str,
    id: i32,
) -> Result<u64, StoreError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let column = E::Column::iter()
        .find(|c| c.as_str() == column)
        .ok_or_else(|| StoreError::UnknownColumn(column.to_string()))?;
    Ok(E::find().filter(column.eq(id)).count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{payload, registry};
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, Schema};
    use serde_json::json;

    async fn open_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // One connection so every statement sees the same in-memory database
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();

        let schema = Schema::new(DbBackend::Sqlite);
        execute_create(&db, &schema.create_table_from_entity(crate::entity::seeds::Entity)).await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::germinations::Entity),
        )
        .await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::hydroponic_systems::Entity),
        )
        .await;
        execute_create(&db, &schema.create_table_from_entity(crate::entity::plants::Entity)).await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::hydroponic_conditions::Entity),
        )
        .await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::plant_crosses::Entity),
        )
        .await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::plant_plant_crosses::Entity),
        )
        .await;
        execute_create(&db, &schema.create_table_from_entity(crate::entity::yields::Entity)).await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::taste_tests::Entity),
        )
        .await;
        execute_create(
            &db,
            &schema.create_table_from_entity(crate::entity::observations::Entity),
        )
        .await;
        db
    }

    async fn execute_create(db: &DatabaseConnection, stmt: &sea_orm::sea_query::TableCreateStatement) {
        db.execute(db.get_database_backend().build(stmt))
            .await
            .unwrap();
    }

    async fn upsert_json(
        db: &DatabaseConnection,
        descriptor: &'static registry::RecordDescriptor,
        body: serde_json::Value,
    ) -> Upserted {
        let shaped = payload::shape(descriptor, &body).unwrap();
        upsert(db, descriptor, shaped).await.unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_a_key_and_roundtrips() {
        let db = open_db().await;

        let outcome = upsert_json(
            &db,
            &registry::SEEDS,
            json!({ "species": "Tomato", "variety": "Roma", "number_of_seeds": 20 }),
        )
        .await;

        assert!(outcome.created);
        let id = outcome.row["seed_id"].as_i64().unwrap();
        assert!(id >= 1);
        assert_eq!(outcome.row["species"], "Tomato");
        assert_eq!(outcome.row["heirloom"], serde_json::Value::Null);

        let fetched = fetch_one(&db, &registry::SEEDS, id as i32).await.unwrap();
        assert_eq!(fetched, outcome.row);

        let all = fetch_all(&db, &registry::SEEDS).await.unwrap();
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_with_existing_key_replaces_every_field() {
        let db = open_db().await;

        let first = upsert_json(
            &db,
            &registry::SEEDS,
            json!({
                "species": "Tomato",
                "variety": "Roma",
                "number_of_seeds": 20,
                "heirloom": true
            }),
        )
        .await;
        let id = first.row["seed_id"].as_i64().unwrap();

        let second = upsert_json(
            &db,
            &registry::SEEDS,
            json!({
                "seed_id": id,
                "species": "Tomato",
                "variety": "San Marzano",
                "number_of_seeds": 12
            }),
        )
        .await;

        assert!(!second.created);
        assert_eq!(second.row["variety"], "San Marzano");
        assert_eq!(second.row["number_of_seeds"], 12);
        // Omitted optional went back to null, not the previous value
        assert_eq!(second.row["heirloom"], serde_json::Value::Null);

        let fetched = fetch_one(&db, &registry::SEEDS, id as i32).await.unwrap();
        assert_eq!(fetched, second.row);

        let all = fetch_all(&db, &registry::SEEDS).await.unwrap();
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_with_unmatched_key_inserts_that_key() {
        let db = open_db().await;

        let outcome = upsert_json(
            &db,
            &registry::SEEDS,
            json!({
                "seed_id": 41,
                "species": "Pepper",
                "variety": "Jalapeno",
                "number_of_seeds": 8
            }),
        )
        .await;

        assert!(outcome.created);
        assert_eq!(outcome.row["seed_id"], 41);
        let fetched = fetch_one(&db, &registry::SEEDS, 41).await.unwrap();
        assert_eq!(fetched["variety"], "Jalapeno");
    }

    #[tokio::test]
    async fn fetch_one_reports_missing_rows() {
        let db = open_db().await;
        let err = fetch_one(&db, &registry::SEEDS, 99).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Seed")));
        assert_eq!(err.to_string(), "Seed not found");
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row() {
        let db = open_db().await;

        let outcome = upsert_json(
            &db,
            &registry::SEEDS,
            json!({ "species": "Tomato", "variety": "Roma", "number_of_seeds": 20 }),
        )
        .await;
        let id = outcome.row["seed_id"].as_i64().unwrap() as i32;

        let removed = delete(&db, &registry::SEEDS, id).await.unwrap();
        assert_eq!(removed, outcome.row);

        let err = fetch_one(&db, &registry::SEEDS, id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = open_db().await;
        let err = delete(&db, &registry::SEEDS, 7).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Seed")));
    }

    #[tokio::test]
    async fn delete_refuses_referenced_rows() {
        let db = open_db().await;

        let seed = upsert_json(
            &db,
            &registry::SEEDS,
            json!({ "species": "Tomato", "variety": "Roma", "number_of_seeds": 20 }),
        )
        .await;
        let seed_id = seed.row["seed_id"].as_i64().unwrap();

        upsert_json(
            &db,
            &registry::GERMINATIONS,
            json!({
                "seed_id": seed_id,
                "planted_date": "2024-03-01",
                "seeds_attempted": 10,
                "seeds_successful": 8,
                "method": "paper towel"
            }),
        )
        .await;

        let err = delete(&db, &registry::SEEDS, seed_id as i32)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Referenced { .. }));
        assert_eq!(
            err.to_string(),
            format!("Seed {seed_id} is referenced by Germination records")
        );

        // Remove the dependent, then the delete goes through
        let germination = fetch_all(&db, &registry::GERMINATIONS).await.unwrap();
        let germination_id = germination[0]["germination_id"].as_i64().unwrap() as i32;
        delete(&db, &registry::GERMINATIONS, germination_id)
            .await
            .unwrap();
        delete(&db, &registry::SEEDS, seed_id as i32).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_segment_is_rejected() {
        let db = open_db().await;
        let err = fetch_all_for_segment(&db, "mushrooms").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownRecord(_)));
    }

    async fn fetch_all_for_segment(
        db: &DatabaseConnection,
        segment: &str,
    ) -> Result<Value, StoreError> {
        with_record!(segment, E => fetch_all_typed::<E>(db).await)
    }
}
