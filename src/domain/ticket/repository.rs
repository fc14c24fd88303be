use async_trait::async_trait;

use super::model::Ticket;
use crate::domain::DomainResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the ticket bought under an enrollment, with its ticket type
    async fn find_by_enrollment_id(&self, enrollment_id: i32) -> DomainResult<Option<Ticket>>;
}
