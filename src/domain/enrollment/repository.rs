use async_trait::async_trait;

use super::model::Enrollment;
use crate::domain::DomainResult;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the user's enrollment, with its address when one is on file
    async fn find_with_address_by_user_id(&self, user_id: i32) -> DomainResult<Option<Enrollment>>;
}
