//! SeaORM implementation of TicketRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::db_err;
use crate::domain::{DomainError, DomainResult, Ticket, TicketRepository, TicketStatus, TicketType};
use crate::infrastructure::database::entities::{ticket, ticket_type};

pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
}

impl SeaOrmTicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn status_to_domain(s: ticket::TicketStatus) -> TicketStatus {
    match s {
        ticket::TicketStatus::Reserved => TicketStatus::Reserved,
        ticket::TicketStatus::Paid => TicketStatus::Paid,
    }
}

fn model_to_domain(m: ticket::Model, t: ticket_type::Model) -> Ticket {
    Ticket {
        id: m.id,
        enrollment_id: m.enrollment_id,
        status: status_to_domain(m.status),
        ticket_type: TicketType {
            id: t.id,
            name: t.name,
            price: t.price,
            is_remote: t.is_remote,
            includes_hotel: t.includes_hotel,
        },
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn find_by_enrollment_id(&self, enrollment_id: i32) -> DomainResult<Option<Ticket>> {
        let row = ticket::Entity::find()
            .filter(ticket::Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(ticket::Column::Id)
            .find_also_related(ticket_type::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match row {
            None => Ok(None),
            Some((t, Some(tt))) => Ok(Some(model_to_domain(t, tt))),
            // The foreign key makes this unreachable on a consistent schema.
            Some((t, None)) => Err(DomainError::NotFound {
                entity: "TicketType",
                field: "id",
                value: t.ticket_type_id.to_string(),
            }),
        }
    }
}
