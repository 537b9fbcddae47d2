// src/payment/pull_payment.rs
//! Pull-payment base: credited amounts sit in an internal escrow until the
//! payee withdraws.

use ethers::contract::abigen;

abigen!(PullPayment, r#"[
    function payments(address dest) external view returns (uint256)
    function withdrawPayments(address payee) external
]"#);
