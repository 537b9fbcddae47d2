// src/crowdsale/minted.rs
//! Crowdsale that mints tokens on purchase instead of transferring from an
//! allowance. Same external surface as the base sale.

use ethers::contract::abigen;

abigen!(MintedCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
]"#);
