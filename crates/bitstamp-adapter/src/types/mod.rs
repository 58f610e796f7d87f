/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed data structures for API communication
[POS]:    Data layer - module wiring
[UPDATE]: When adding new types
*/

pub mod enums;
pub mod models;

pub use enums::{CurrencyPair, TimeWindow, TransactionSide};
pub use models::{BookLevel, OrderBook, OrderBookSnapshot, Ticker, Transaction};
