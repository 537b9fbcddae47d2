// src/crowdsale/capped.rs
//! Crowdsale with a global cap on the wei that can be raised.

use ethers::contract::abigen;

abigen!(CappedCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function cap() external view returns (uint256)
    function capReached() external view returns (bool)
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
]"#);
