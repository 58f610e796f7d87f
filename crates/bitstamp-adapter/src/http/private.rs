/*
[INPUT]:  Operation parameters and the credential triple
[OUTPUT]: Account data and order management results (raw JSON)
[POS]:    HTTP layer - signed account endpoints (POST, form-encoded)
[UPDATE]: When adding new signed endpoints or typed mappings for them
*/

use serde_json::Value;

use crate::http::client::BitstampClient;
use crate::http::error::Result;
use crate::types::CurrencyPair;

impl BitstampClient {
    /// Account balance across all currencies
    ///
    /// POST /balance/
    pub async fn balance(&self) -> Result<Value> {
        self.send_signed(&["balance"], &[]).await
    }

    /// The account's transaction history
    ///
    /// POST /user_transactions/
    pub async fn user_transactions(&self) -> Result<Value> {
        self.send_signed(&["user_transactions"], &[]).await
    }

    /// Open orders for one pair, or for all pairs when `None`
    ///
    /// POST /open_orders/{pair|all}/
    pub async fn open_orders(&self, pair: Option<CurrencyPair>) -> Result<Value> {
        let segment = pair.map(|p| p.as_str()).unwrap_or("all");
        self.send_signed(&["open_orders", segment], &[]).await
    }

    /// Status of a single order
    ///
    /// POST /order_status/
    pub async fn order_status(&self, order_id: &str) -> Result<Value> {
        self.send_signed(&["order_status"], &[("id", order_id.to_string())])
            .await
    }

    /// Cancel a single order
    ///
    /// POST /cancel_order/
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        self.send_signed(&["cancel_order"], &[("id", order_id.to_string())])
            .await
    }

    /// Cancel every open order on the account
    ///
    /// POST /cancel_all_orders/
    pub async fn cancel_all_orders(&self) -> Result<Value> {
        self.send_signed(&["cancel_all_orders"], &[]).await
    }
}
