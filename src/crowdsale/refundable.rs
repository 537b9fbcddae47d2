// src/crowdsale/refundable.rs
//! Finalizable crowdsale with a funding goal. If the goal is missed,
//! contributors reclaim their wei through the escrow.

use ethers::contract::abigen;

abigen!(RefundableCrowdsale, r#"[
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
    function goal() external view returns (uint256)
    function goalReached() external view returns (bool)
    function claimRefund(address refundee) external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event TimedCrowdsaleExtended(uint256 prevClosingTime, uint256 newClosingTime)
    event CrowdsaleFinalized()
]"#);
