//! SeaORM implementation of EnrollmentRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::db_err;
use crate::domain::{Address, DomainResult, Enrollment, EnrollmentRepository};
use crate::infrastructure::database::entities::{address, enrollment};

pub struct SeaOrmEnrollmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn address_to_domain(m: address::Model) -> Address {
    Address {
        id: m.id,
        cep: m.cep,
        street: m.street,
        city: m.city,
        state: m.state,
        number: m.number,
        neighborhood: m.neighborhood,
        address_detail: m.address_detail,
        enrollment_id: m.enrollment_id,
    }
}

fn model_to_domain(m: enrollment::Model, address: Option<address::Model>) -> Enrollment {
    Enrollment {
        id: m.id,
        name: m.name,
        cpf: m.cpf,
        birthday: m.birthday,
        phone: m.phone,
        user_id: m.user_id,
        address: address.map(address_to_domain),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn find_with_address_by_user_id(&self, user_id: i32) -> DomainResult<Option<Enrollment>> {
        let row = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(|(e, a)| model_to_domain(e, a)))
    }
}
