/*
[INPUT]:  Raw order input, Binance futures client, presentation callbacks
[OUTPUT]: Interpreted order outcomes; client failures forwarded unchanged
[POS]:    Orchestration layer - validate, call, interpret, present
[UPDATE]: When order flow or outcome interpretation changes
*/

use binance_futures_adapter::{
    BinanceError, BinanceFuturesClient, OrderRequest, OrderResponse, Result, TimeInForce,
    normalize_symbol, validate_order_input,
};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

/// Receives what the orchestrator wants shown. Owns no state the core relies on.
pub trait OrderPresenter {
    /// Validated order, before it is sent
    fn order_request(&self, order: &OrderRequest);
    /// Raw exchange record after a successful call
    fn order_response(&self, response: &OrderResponse);
    /// Interpretation of a freshly placed order
    fn order_outcome(&self, outcome: &OrderOutcome);
    fn order_cancelled(&self, order_id: i64, response: &OrderResponse);
    fn error(&self, message: &str);
}

/// What the exchange said about a placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Fully executed; `avg_price` is the exchange's average or the requested price
    Filled { avg_price: String },
    /// Accepted and resting on the book
    Pending,
    /// Any other status, passed through for display
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub order_id: Option<i64>,
    pub status: OutcomeStatus,
    pub response: OrderResponse,
}

impl OrderOutcome {
    /// Interpret a place-order response. `requested_price` backs up a missing `avgPrice`.
    pub fn from_response(response: OrderResponse, requested_price: Option<Decimal>) -> Self {
        let status = match response.status.as_deref() {
            Some("FILLED") => OutcomeStatus::Filled {
                avg_price: non_empty(&response.avg_price)
                    .or_else(|| requested_price.map(|p| p.to_string()))
                    .or_else(|| non_empty(&response.price))
                    .unwrap_or_else(|| "N/A".to_string()),
            },
            Some("NEW") => OutcomeStatus::Pending,
            Some(other) => OutcomeStatus::Other(other.to_string()),
            None => OutcomeStatus::Other("UNKNOWN".to_string()),
        };

        Self {
            order_id: response.order_id,
            status,
            response,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.status, OutcomeStatus::Filled { .. })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

/// Runs the validate -> place -> interpret sequence against one client
pub struct OrderManager<P> {
    client: BinanceFuturesClient,
    presenter: P,
    time_in_force: TimeInForce,
}

impl<P: OrderPresenter> OrderManager<P> {
    pub fn new(client: BinanceFuturesClient, presenter: P) -> Self {
        info!("OrderManager initialized");
        Self {
            client,
            presenter,
            time_in_force: TimeInForce::default(),
        }
    }

    /// Time-in-force sent with LIMIT orders (default GTC)
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Validate and place an order.
    ///
    /// Validation failures return before any network call. Client failures are
    /// shown through the presenter and then returned unchanged.
    pub async fn submit_order(
        &self,
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<OrderOutcome> {
        let order = validate_order_input(symbol, side, order_type, quantity, price)
            .inspect_err(|err| warn!(error = %err, "order validation failed"))?;
        self.submit(order).await
    }

    /// Place an order that already passed validation
    pub async fn submit(&self, order: OrderRequest) -> Result<OrderOutcome> {
        self.presenter.order_request(&order);

        let response = self
            .client
            .place_order(
                order.symbol(),
                order.side(),
                order.order_type(),
                order.quantity(),
                order.price(),
                self.time_in_force,
            )
            .await
            .inspect_err(|err| self.report_failure("Order placement failed", err))?;

        info!(
            order_id = ?response.order_id,
            status = ?response.status,
            "order placed successfully"
        );
        self.presenter.order_response(&response);

        let outcome = OrderOutcome::from_response(response, order.price());
        self.presenter.order_outcome(&outcome);
        Ok(outcome)
    }

    /// Look up one order and show it
    pub async fn get_order_status(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        let symbol = normalize_symbol(symbol);
        let response = self
            .client
            .get_order(&symbol, order_id)
            .await
            .inspect_err(|err| self.report_failure("Failed to get order status", err))?;

        info!(order_id, status = ?response.status, "retrieved order status");
        self.presenter.order_response(&response);
        Ok(response)
    }

    /// Cancel one order and confirm it
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        let symbol = normalize_symbol(symbol);
        let response = self
            .client
            .cancel_order(&symbol, order_id)
            .await
            .inspect_err(|err| self.report_failure("Failed to cancel order", err))?;

        info!(order_id, status = ?response.status, "order cancelled successfully");
        self.presenter.order_cancelled(order_id, &response);
        Ok(response)
    }

    fn report_failure(&self, context: &str, err: &BinanceError) {
        error!(kind = %err.kind(), error = %err, "{context}");
        self.presenter.error(&err.to_string());
    }
}
