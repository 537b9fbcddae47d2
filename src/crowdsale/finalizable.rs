// src/crowdsale/finalizable.rs
//! Timed crowdsale with a one-shot finalization step after closing.

use ethers::contract::abigen;

abigen!(FinalizableCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function openingTime() external view returns (uint256)
    function closingTime() external view returns (uint256)
    function isOpen() external view returns (bool)
    function hasClosed() external view returns (bool)
    function finalized() external view returns (bool)
    function finalize() external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event TimedCrowdsaleExtended(uint256 prevClosingTime, uint256 newClosingTime)
    event CrowdsaleFinalized()
]"#);
