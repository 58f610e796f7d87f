/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - market data models
[UPDATE]: When API schema changes or new models are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CurrencyPair, TransactionSide};

/// Market snapshot for one trading pair.
///
/// All price and amount fields arrive as decimal strings and are parsed
/// without precision loss. Immutable once constructed from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(with = "rust_decimal::serde::str")]
    pub last: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub vwap: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub open: Decimal,
    /// Unix seconds, sent as a string on the wire
    #[serde(with = "serde_helpers::i64_str")]
    pub timestamp: i64,
}

/// One historical trade, ordered by exchange-assigned id/date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unix seconds, sent as a string on the wire
    #[serde(with = "serde_helpers::i64_str")]
    pub date: i64,
    #[serde(with = "serde_helpers::i64_str")]
    pub tid: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub side: TransactionSide,
}

/// One price level of the order book, `["price", "amount"]` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel(
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
);

impl BookLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn amount(&self) -> Decimal {
        self.1
    }

    /// `price * amount`, decimal-exact
    pub fn total(&self) -> Decimal {
        self.0 * self.1
    }
}

/// Order book body as returned by the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    #[serde(with = "serde_helpers::i64_str")]
    pub timestamp: i64,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

/// Full order book for one pair, assembled fresh per request.
///
/// Owns its levels: asks ascend by price, bids descend, as delivered by
/// the exchange. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub pair: CurrencyPair,
    pub timestamp: i64,
    pub asks: Vec<BookLevel>,
    pub bids: Vec<BookLevel>,
}

impl OrderBook {
    /// Attach the requested pair to a decoded snapshot
    pub fn from_snapshot(pair: CurrencyPair, snapshot: OrderBookSnapshot) -> Self {
        Self {
            pair,
            timestamp: snapshot.timestamp,
            asks: snapshot.asks,
            bids: snapshot.bids,
        }
    }

    /// Lowest ask, if any
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Highest bid, if any
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }
}

mod serde_helpers {
    /// Unix timestamps and trade ids arrive as decimal strings but some
    /// feeds send plain numbers; accept both.
    pub mod i64_str {
        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            match &value {
                Value::String(raw) => raw.parse().map_err(serde::de::Error::custom),
                Value::Number(n) => n
                    .as_i64()
                    .ok_or_else(|| serde::de::Error::custom("integer out of range")),
                _ => Err(serde::de::Error::custom("expected an integer string")),
            }
        }

        pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticker_parses_decimal_strings_exactly() {
        let value = json!({
            "last": "9314.38",
            "high": "9487.73",
            "low": "9005.10",
            "vwap": "9216.01",
            "volume": "9913.19747575",
            "bid": "9310.37",
            "ask": "9314.38",
            "open": "9065.72",
            "timestamp": "1573223314"
        });

        let ticker: Ticker = serde_json::from_value(value).expect("ticker deserializes");

        assert_eq!(ticker.volume.to_string(), "9913.19747575");
        assert_eq!(ticker.low.to_string(), "9005.10");
        assert_eq!(ticker.timestamp, 1_573_223_314);
    }

    #[test]
    fn test_transaction_side_from_wire_type() {
        let value = json!({
            "date": "1573225404",
            "tid": "100123456",
            "price": "9334.06",
            "amount": "0.06040000",
            "type": "1"
        });

        let transaction: Transaction =
            serde_json::from_value(value).expect("transaction deserializes");

        assert_eq!(transaction.side, TransactionSide::Sell);
        assert_eq!(transaction.tid, 100_123_456);
        assert_eq!(transaction.amount.to_string(), "0.06040000");
    }

    #[test]
    fn test_book_level_total_is_decimal_exact() {
        let level = BookLevel(
            "100.0".parse().expect("price"),
            "2.0".parse().expect("amount"),
        );

        assert_eq!(level.total(), "200.00".parse().expect("total"));
    }

    #[test]
    fn test_book_level_total_no_binary_drift() {
        // 0.1 * 0.2 is inexact in binary floating point
        let level = BookLevel(
            "0.1".parse().expect("price"),
            "0.2".parse().expect("amount"),
        );

        assert_eq!(level.total().to_string(), "0.02");
    }

    #[test]
    fn test_order_book_from_snapshot() {
        let value = json!({
            "timestamp": "123",
            "bids": [["100.0", "2.0"]],
            "asks": [["101.0", "1.0"]]
        });

        let snapshot: OrderBookSnapshot =
            serde_json::from_value(value).expect("snapshot deserializes");
        let book = OrderBook::from_snapshot(CurrencyPair::BtcUsd, snapshot);

        assert_eq!(book.timestamp, 123);
        assert_eq!(book.pair, CurrencyPair::BtcUsd);

        let bid = book.best_bid().expect("one bid");
        assert_eq!(bid.price(), "100.0".parse().expect("price"));
        assert_eq!(bid.amount(), "2.0".parse().expect("amount"));
        assert_eq!(bid.total(), "200.0".parse().expect("total"));

        let ask = book.best_ask().expect("one ask");
        assert_eq!(ask.price(), "101.0".parse().expect("price"));
        assert_eq!(ask.total(), "101.0".parse().expect("total"));
    }

    #[test]
    fn test_timestamp_accepts_plain_number() {
        let value = json!({
            "timestamp": 123,
            "bids": [],
            "asks": []
        });

        let snapshot: OrderBookSnapshot =
            serde_json::from_value(value).expect("snapshot deserializes");
        assert_eq!(snapshot.timestamp, 123);
    }
}
