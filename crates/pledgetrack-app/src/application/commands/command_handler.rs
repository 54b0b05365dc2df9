use async_trait::async_trait;

use pledgetrack_domain::shared::DomainError;

/// Marker for write-side requests.
pub trait Command: Send + Sync {}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result: Send;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}
