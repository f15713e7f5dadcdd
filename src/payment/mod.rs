use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Card details captured by the checkout form. Opaque to the engine; the
/// simulated processor never inspects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String,
    pub cvv: String,
}

/// Confirmation returned by a processor for a successful charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: i64,
    pub processed_at: DateTime<Utc>,
}

/// Failure surface of a payment processor.
///
/// The simulated processor never produces one of these; the variants exist
/// so a real gateway with decline/timeout outcomes can slot in behind the
/// same trait.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("payment declined: {reason}")]
    Declined { reason: String },
    #[error("payment processor unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Common trait for payment processors.
/// This allows swapping the simulated processor for a real gateway later.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge the given amount against the supplied card details
    async fn process(
        &self,
        details: &PaymentDetails,
        amount: i64,
    ) -> Result<PaymentReceipt, PaymentError>;

    /// Get the name of the processor
    fn name(&self) -> &'static str;
}

/// Demo processor: waits out a fixed latency, then approves unconditionally.
///
/// The delay exists only to drive feedback in a front end; no work happens
/// during it. No failure path is modeled.
pub struct SimulatedProcessor {
    latency: Duration,
}

impl SimulatedProcessor {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(2),
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn process(
        &self,
        _details: &PaymentDetails,
        amount: i64,
    ) -> Result<PaymentReceipt, PaymentError> {
        debug!("Simulating payment of {} ({:?} latency)", amount, self.latency);
        tokio::time::sleep(self.latency).await;

        let processed_at = Utc::now();
        let receipt = PaymentReceipt {
            reference: format!("SIM-{}", processed_at.timestamp_millis()),
            amount,
            processed_at,
        };
        info!("Simulated payment of {} approved ({})", amount, receipt.reference);
        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "Simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_processor_always_approves() {
        let processor = SimulatedProcessor::with_latency(Duration::ZERO);
        let receipt = processor
            .process(&PaymentDetails::default(), 945_000)
            .await
            .unwrap();
        assert_eq!(receipt.amount, 945_000);
        assert!(receipt.reference.starts_with("SIM-"));
    }

    #[tokio::test]
    async fn simulated_processor_waits_out_its_latency() {
        let processor = SimulatedProcessor::with_latency(Duration::from_millis(20));
        let start = std::time::Instant::now();
        processor
            .process(&PaymentDetails::default(), 1_000)
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
