//! Item repository

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use super::form::check_lengths;
use super::model::{Item, ItemFields};
use crate::core::error::{AppError, AppResult};

/// All reads and writes of stored items go through this trait.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every item, ascending by id.
    async fn list_all(&self) -> AppResult<Vec<Item>>;

    async fn get(&self, id: i32) -> AppResult<Item>;

    async fn create(&self, fields: ItemFields) -> AppResult<Item>;

    /// Overwrites all six fields of an existing item.
    async fn update(&self, id: i32, fields: ItemFields) -> AppResult<Item>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// PostgreSQL-backed repository.
///
/// Each call runs in its own transaction. Returning early with `?` drops the
/// transaction, which rolls it back and hands the connection back to the pool.
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn list_all(&self) -> AppResult<Vec<Item>> {
        let mut tx = self.pool.begin().await?;
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, price, mac_address, serial_number, manufacturer, description \
             FROM inventory ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(items)
    }

    async fn get(&self, id: i32) -> AppResult<Item> {
        let mut tx = self.pool.begin().await?;
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, price, mac_address, serial_number, manufacturer, description \
             FROM inventory WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound(id))?;
        tx.commit().await?;
        Ok(item)
    }

    async fn create(&self, fields: ItemFields) -> AppResult<Item> {
        check_lengths(&fields)?;

        let mut tx = self.pool.begin().await?;
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO inventory (name, price, mac_address, serial_number, manufacturer, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, price, mac_address, serial_number, manufacturer, description
            "#,
        )
        .bind(&fields.name)
        .bind(fields.price)
        .bind(&fields.mac_address)
        .bind(&fields.serial_number)
        .bind(&fields.manufacturer)
        .bind(&fields.description)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(item)
    }

    async fn update(&self, id: i32, fields: ItemFields) -> AppResult<Item> {
        check_lengths(&fields)?;

        let mut tx = self.pool.begin().await?;
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE inventory
            SET name = $2, price = $3, mac_address = $4, serial_number = $5,
                manufacturer = $6, description = $7
            WHERE id = $1
            RETURNING id, name, price, mac_address, serial_number, manufacturer, description
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.price)
        .bind(&fields.mac_address)
        .bind(&fields.serial_number)
        .bind(&fields.manufacturer)
        .bind(&fields.description)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound(id))?;
        tx.commit().await?;
        Ok(item)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }
        tx.commit().await?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryState {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// In-process repository with the same observable behavior as the table:
/// ids count up from 1 and are never reused.
#[derive(Default)]
pub struct MemoryItemRepository {
    state: Mutex<MemoryState>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // a panic mid-operation cannot leave the map half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list_all(&self) -> AppResult<Vec<Item>> {
        Ok(self.lock().items.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Item> {
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    async fn create(&self, fields: ItemFields) -> AppResult<Item> {
        check_lengths(&fields)?;

        let mut state = self.lock();
        // same outcome as an exhausted SERIAL sequence
        let id = state.last_id.checked_add(1).ok_or_else(|| {
            AppError::Database(sqlx::Error::Protocol(
                "inventory id sequence exhausted".to_string(),
            ))
        })?;
        state.last_id = id;
        let item = Item::from_fields(id, fields);
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i32, fields: ItemFields) -> AppResult<Item> {
        check_lengths(&fields)?;

        let mut state = self.lock();
        let slot = state.items.get_mut(&id).ok_or(AppError::NotFound(id))?;
        *slot = Item::from_fields(id, fields);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }
}
