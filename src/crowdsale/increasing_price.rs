// src/crowdsale/increasing_price.rs
//! Timed crowdsale whose rate interpolates linearly from `initialRate` down
//! to `finalRate` over the sale window. The inherited `rate()` getter always
//! reverts on-chain; `getCurrentRate()` is the live value.

use ethers::contract::abigen;

abigen!(IncreasingPriceCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function openingTime() external view returns (uint256)
    function closingTime() external view returns (uint256)
    function isOpen() external view returns (bool)
    function hasClosed() external view returns (bool)
    function initialRate() external view returns (uint256)
    function finalRate() external view returns (uint256)
    function getCurrentRate() external view returns (uint256)
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event TimedCrowdsaleExtended(uint256 prevClosingTime, uint256 newClosingTime)
]"#);
