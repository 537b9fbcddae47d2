// src/crowdsale/timed.rs
//! Crowdsale restricted to an opening/closing time window. `extendTime` comes
//! from the test harness the original ABI was taken from.

use ethers::contract::abigen;

abigen!(TimedCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function openingTime() external view returns (uint256)
    function closingTime() external view returns (uint256)
    function isOpen() external view returns (bool)
    function hasClosed() external view returns (bool)
    function extendTime(uint256 closingTime) external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event TimedCrowdsaleExtended(uint256 prevClosingTime, uint256 newClosingTime)
]"#);
