//! Comanda
//!
//! Order-draft aggregation for a restaurant point-of-sale client: an
//! insertion-ordered cart of menu items, staged in memory and projected into
//! an order-creation payload. This crate is pure and synchronous; all I/O
//! lives in `comanda-app`.

pub mod cart;
pub mod catalog;
pub mod draft;
pub mod ids;
