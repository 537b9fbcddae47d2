// src/token/ierc777_sender.rs
//! Hook called on a holder's registered implementer before tokens move out of
//! its balance.

use ethers::contract::abigen;

abigen!(IERC777Sender, r#"[
    function tokensToSend(address operator, address from, address to, uint256 amount, bytes userData, bytes operatorData) external
]"#);
