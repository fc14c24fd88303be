//! Hotel repository interface

use async_trait::async_trait;

use super::model::Hotel;
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// All hotels
    async fn find_all(&self) -> DomainResult<Vec<Hotel>>;
}
