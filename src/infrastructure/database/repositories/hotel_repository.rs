//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::db_err;
use crate::domain::{DomainResult, Hotel, HotelRepository};
use crate::infrastructure::database::entities::hotel;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        image: m.image,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let models = hotel::Entity::find()
            .order_by_asc(hotel::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
