// src/access/secondary.rs
//! Contract bound to a primary account, as used by the escrows.

use ethers::contract::abigen;

abigen!(Secondary, r#"[
    function primary() external view returns (address)
    function transferPrimary(address recipient) external
    event PrimaryTransferred(address recipient)
]"#);
