/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed enumerations for API communication
[UPDATE]: When the exchange lists new pairs or query values
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::error::BitstampError;

/// Trading pairs supported by the exchange.
///
/// A closed enumeration rather than a free string, so an unsupported
/// symbol is rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPair {
    BtcUsd,
    BtcEur,
    EurUsd,
    EthUsd,
    EthEur,
    EthBtc,
    XrpUsd,
    XrpEur,
    XrpBtc,
    LtcUsd,
    LtcEur,
    LtcBtc,
}

impl CurrencyPair {
    /// The lowercase wire symbol used in endpoint paths
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyPair::BtcUsd => "btcusd",
            CurrencyPair::BtcEur => "btceur",
            CurrencyPair::EurUsd => "eurusd",
            CurrencyPair::EthUsd => "ethusd",
            CurrencyPair::EthEur => "etheur",
            CurrencyPair::EthBtc => "ethbtc",
            CurrencyPair::XrpUsd => "xrpusd",
            CurrencyPair::XrpEur => "xrpeur",
            CurrencyPair::XrpBtc => "xrpbtc",
            CurrencyPair::LtcUsd => "ltcusd",
            CurrencyPair::LtcEur => "ltceur",
            CurrencyPair::LtcBtc => "ltcbtc",
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyPair {
    type Err = BitstampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "btcusd" => Ok(CurrencyPair::BtcUsd),
            "btceur" => Ok(CurrencyPair::BtcEur),
            "eurusd" => Ok(CurrencyPair::EurUsd),
            "ethusd" => Ok(CurrencyPair::EthUsd),
            "etheur" => Ok(CurrencyPair::EthEur),
            "ethbtc" => Ok(CurrencyPair::EthBtc),
            "xrpusd" => Ok(CurrencyPair::XrpUsd),
            "xrpeur" => Ok(CurrencyPair::XrpEur),
            "xrpbtc" => Ok(CurrencyPair::XrpBtc),
            "ltcusd" => Ok(CurrencyPair::LtcUsd),
            "ltceur" => Ok(CurrencyPair::LtcEur),
            "ltcbtc" => Ok(CurrencyPair::LtcBtc),
            other => Err(BitstampError::invalid_argument(format!(
                "unknown currency pair: {other}"
            ))),
        }
    }
}

/// Time window for the public transactions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Minute,
    Hour,
    Day,
}

impl TimeWindow {
    /// The `time` query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Minute => "minute",
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = BitstampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(TimeWindow::Minute),
            "hour" => Ok(TimeWindow::Hour),
            "day" => Ok(TimeWindow::Day),
            other => Err(BitstampError::invalid_argument(format!(
                "unknown time window: {other}"
            ))),
        }
    }
}

/// Trade side as encoded in the public transactions feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionSide {
    #[serde(rename = "0")]
    Buy,
    #[serde(rename = "1")]
    Sell,
}
