// src/token/erc20_metadata.rs
//! Off-chain metadata pointer extension for ERC20 tokens: a single URI for
//! the whole token, set at deployment.

use ethers::contract::abigen;

abigen!(ERC20Metadata, r#"[
    function tokenURI() external view returns (string)
]"#);
