// src/payment/token_timelock.rs
//! Holds an ERC20 balance for a beneficiary until a release timestamp.

use ethers::contract::abigen;

abigen!(TokenTimelock, r#"[
    function token() external view returns (address)
    function beneficiary() external view returns (address)
    function releaseTime() external view returns (uint256)
    function release() external
]"#);
