// src/payment/mod.rs
//! Bindings for the payment helper contracts: escrows, pull payments, the
//! share-weighted splitter, and the token lockup contracts.

pub mod conditional_escrow;
pub mod escrow;
pub mod payment_splitter;
pub mod pull_payment;
pub mod refund_escrow;
pub mod token_timelock;
pub mod token_vesting;
