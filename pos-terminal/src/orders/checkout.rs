//! Checkout workflow
//!
//! Per-attempt state machine: method selection, method-specific validation,
//! simulated gateway processing, then finalization. At most one payment is
//! in flight per order; the aggregate is locked for the duration.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::order::{CompletedOrderRecord, PaymentMethod};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::AppSettings;
use crate::printing::{ReceiptPrinter, ReceiptRenderer};
use crate::reporting::SalesRecorder;

use super::cart::Cart;
use super::error::OrderError;
use super::finalize;

/// Gateway-side payment failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("payment was cancelled")]
    Cancelled,

    #[error("payment declined: {0}")]
    Declined(String),
}

impl From<GatewayError> for OrderError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Cancelled => OrderError::PaymentCancelled,
            GatewayError::Declined(reason) => OrderError::Gateway(reason),
        }
    }
}

/// Payment gateway seam
///
/// The simulated implementation below only sleeps; a real integration can
/// be substituted without changing the workflow.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process(
        &self,
        method: &PaymentMethod,
        amount: Decimal,
        cancel: &CancellationToken,
    ) -> Result<(), GatewayError>;
}

/// Simulated gateway: fixed per-method confirmation delays
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    /// Delay awaiting mobile-money confirmation
    pub mobile_money_delay: Duration,
    /// Delay awaiting card authorization
    pub card_delay: Duration,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self {
            mobile_money_delay: Duration::from_secs(3),
            card_delay: Duration::from_secs(2),
        }
    }
}

impl SimulatedGateway {
    /// Gateway with no delays (tests)
    pub fn instant() -> Self {
        Self {
            mobile_money_delay: Duration::ZERO,
            card_delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process(
        &self,
        method: &PaymentMethod,
        amount: Decimal,
        cancel: &CancellationToken,
    ) -> Result<(), GatewayError> {
        let delay = match method {
            // Cash changes hands at the counter, nothing to wait for
            PaymentMethod::Cash { .. } => Duration::ZERO,
            PaymentMethod::MobileMoney { phone } => {
                tracing::info!(
                    "Payment request of {:.2} sent to {}, awaiting confirmation",
                    amount,
                    phone
                );
                self.mobile_money_delay
            }
            PaymentMethod::Card { .. } => {
                tracing::info!("Processing card payment of {:.2}", amount);
                self.card_delay
            }
        };

        if delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(GatewayError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

/// Validate method-specific inputs against the order total
///
/// Returns `(amount_paid, change)` on acceptance. Rejection leaves the
/// order untouched; the attempt can be retried with corrected inputs.
pub(crate) fn validate_method(
    method: &PaymentMethod,
    total: Decimal,
) -> Result<(Decimal, Option<Decimal>), OrderError> {
    match method {
        PaymentMethod::Cash { tendered } => {
            if *tendered < total {
                return Err(OrderError::InsufficientTendered);
            }
            Ok((*tendered, Some(*tendered - total)))
        }
        PaymentMethod::MobileMoney { phone } => {
            if phone.trim().is_empty() {
                return Err(OrderError::PhoneRequired);
            }
            Ok((total, None))
        }
        // Card details are collected but not algorithmically checked
        PaymentMethod::Card { .. } => Ok((total, None)),
    }
}

/// Change due for a tendered amount, for live display while the operator
/// types; `None` while the amount is still insufficient
pub fn change_due(total: Decimal, tendered: Decimal) -> Option<Decimal> {
    (tendered >= total).then(|| tendered - total)
}

/// Order workflow: one live order, its checkout and finalization
///
/// The single owned aggregate handle: UI adapters mutate the cart through
/// [`Self::cart_mut`] and drive checkout through [`Self::pay`].
pub struct OrderWorkflow {
    cart: Cart,
    order_number: u32,
    gateway: Arc<dyn PaymentGateway>,
    recorder: Arc<dyn SalesRecorder>,
    printer: Arc<dyn ReceiptPrinter>,
    renderer: ReceiptRenderer,
    cancel: CancellationToken,
}

impl OrderWorkflow {
    pub fn new(
        settings: &AppSettings,
        gateway: Arc<dyn PaymentGateway>,
        recorder: Arc<dyn SalesRecorder>,
        printer: Arc<dyn ReceiptPrinter>,
    ) -> Self {
        Self {
            cart: Cart::new(settings.tax_rate_fraction()),
            order_number: finalize::next_order_number(),
            gateway,
            recorder,
            printer,
            renderer: ReceiptRenderer::from_settings(settings),
            cancel: CancellationToken::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Order number for the order currently being built
    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    pub(crate) fn set_order_number(&mut self, number: u32) {
        self.order_number = number;
    }

    pub(crate) fn renderer(&self) -> &ReceiptRenderer {
        &self.renderer
    }

    pub(crate) fn recorder(&self) -> &Arc<dyn SalesRecorder> {
        &self.recorder
    }

    pub(crate) fn printer(&self) -> &Arc<dyn ReceiptPrinter> {
        &self.printer
    }

    /// Token cancelling any in-flight simulated payment
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Entry guard for method selection
    ///
    /// The order needs at least one line, and dine-in orders need a table.
    /// Failure aborts to method selection with no change to the order.
    pub fn begin_checkout(&self) -> Result<(), OrderError> {
        let order = self.cart.order();
        if order.locked {
            return Err(OrderError::PaymentInFlight);
        }
        if order.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if order.service_type == shared::order::ServiceType::DineIn && order.table.is_empty() {
            return Err(OrderError::TableRequired);
        }
        Ok(())
    }

    /// Run one checkout attempt to completion
    ///
    /// Validates the method inputs, locks the order, awaits the gateway and
    /// finalizes on success. A second call while a payment is processing is
    /// rejected with `PaymentInFlight`; a rejected attempt leaves the order
    /// untouched and can be retried.
    pub async fn pay(
        &mut self,
        method: PaymentMethod,
    ) -> Result<CompletedOrderRecord, OrderError> {
        self.begin_checkout()?;

        let total = self.cart.order().total;
        let (amount_paid, change) = validate_method(&method, total)?;

        self.cart.lock();
        let outcome = self
            .gateway
            .process(&method, total, &self.cancel.clone())
            .await;
        self.cart.unlock();

        if let Err(e) = &outcome {
            tracing::warn!("Payment via {} failed: {}", method.label(), e);
        }
        outcome?;

        Ok(self.finalize(method.label(), amount_paid, change))
    }
}
