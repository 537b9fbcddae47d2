// src/token/ierc777_recipient.rs
//! Hook called on a recipient's registered implementer after tokens land in
//! its balance.

use ethers::contract::abigen;

abigen!(IERC777Recipient, r#"[
    function tokensReceived(address operator, address from, address to, uint256 amount, bytes userData, bytes operatorData) external
]"#);
