/*
[INPUT]:  Currency pairs and query parameters
[OUTPUT]: Market data (ticker, order book, transactions, pair info)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::client::BitstampClient;
use crate::http::error::{BitstampError, Result};
use crate::types::{CurrencyPair, OrderBook, OrderBookSnapshot, Ticker, TimeWindow, Transaction};

impl BitstampClient {
    /// Current ticker for a pair
    ///
    /// GET /ticker/{pair}/
    pub async fn ticker(&self, pair: CurrencyPair) -> Result<Ticker> {
        let raw = self.ticker_raw(pair).await?;
        self.gateway().map_to_model(raw)
    }

    /// Current ticker, raw JSON
    pub async fn ticker_raw(&self, pair: CurrencyPair) -> Result<Value> {
        self.send_public(&["ticker", pair.as_str()], &[]).await
    }

    /// Hourly ticker for a pair
    ///
    /// GET /ticker_hour/{pair}/
    pub async fn hourly_ticker(&self, pair: CurrencyPair) -> Result<Ticker> {
        let raw = self.hourly_ticker_raw(pair).await?;
        self.gateway().map_to_model(raw)
    }

    /// Hourly ticker, raw JSON
    pub async fn hourly_ticker_raw(&self, pair: CurrencyPair) -> Result<Value> {
        self.send_public(&["ticker_hour", pair.as_str()], &[]).await
    }

    /// Full order book for a pair, asks and bids mapped separately and
    /// the requested pair attached to the assembled collection
    ///
    /// GET /order_book/{pair}/
    pub async fn order_book(&self, pair: CurrencyPair) -> Result<OrderBook> {
        let raw = self.order_book_raw(pair).await?;
        let snapshot: OrderBookSnapshot = self.gateway().map_to_model(raw)?;

        Ok(OrderBook::from_snapshot(pair, snapshot))
    }

    /// Order book, raw JSON
    pub async fn order_book_raw(&self, pair: CurrencyPair) -> Result<Value> {
        self.send_public(&["order_book", pair.as_str()], &[]).await
    }

    /// Trades within the given time window, newest first
    ///
    /// GET /transactions/{pair}/?time={window}
    pub async fn transactions(
        &self,
        pair: CurrencyPair,
        window: TimeWindow,
    ) -> Result<Vec<Transaction>> {
        let raw = self.transactions_raw(pair, window).await?;
        let items = match raw {
            Value::Array(items) => items,
            other => {
                return Err(BitstampError::mapping(format!(
                    "expected a transaction array, got: {other}"
                )));
            }
        };

        self.gateway().map_many_to_model(items)
    }

    /// Transactions, raw JSON
    pub async fn transactions_raw(
        &self,
        pair: CurrencyPair,
        window: TimeWindow,
    ) -> Result<Value> {
        self.send_public(
            &["transactions", pair.as_str()],
            &[("time", window.as_str())],
        )
        .await
    }

    /// Listing of all tradeable pairs; no typed mapping defined
    ///
    /// GET /trading-pairs-info/
    pub async fn trading_pairs_info(&self) -> Result<Value> {
        self.send_public(&["trading-pairs-info"], &[]).await
    }
}
