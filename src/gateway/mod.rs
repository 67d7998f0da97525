use crate::environment::Environment;
use crate::gateway::error::GatewayError;
use crate::payments::{PaymentRecord, PaymentStatus};

pub(crate) mod client;
pub use client::GatewayClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List one page of payment records, in gateway order.
    async fn list_payments(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<PaymentRecord>, GatewayError>;

    /// Fetch a snapshot of up to `limit` payment records for stats derivation.
    async fn list_all(&self, limit: u32) -> Result<Vec<PaymentRecord>, GatewayError>;

    /// Set the status of a single payment.
    async fn set_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
    ) -> Result<(), GatewayError>;
}
