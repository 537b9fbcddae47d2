// src/crowdsale/individually_capped.rs
//! Crowdsale with per-beneficiary contribution caps managed by capper
//! accounts.

use ethers::contract::abigen;

abigen!(IndividuallyCappedCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function setCap(address beneficiary, uint256 cap) external
    function getCap(address beneficiary) external view returns (uint256)
    function getContribution(address beneficiary) external view returns (uint256)
    function isCapper(address account) external view returns (bool)
    function addCapper(address account) external
    function renounceCapper() external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event CapperAdded(address indexed account)
    event CapperRemoved(address indexed account)
]"#);
