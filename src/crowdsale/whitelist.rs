// src/crowdsale/whitelist.rs
//! Crowdsale restricted to whitelisted beneficiaries, with the whitelist
//! managed by admin accounts.

use ethers::contract::abigen;

abigen!(WhitelistCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function isWhitelisted(address account) external view returns (bool)
    function addWhitelisted(address account) external
    function removeWhitelisted(address account) external
    function renounceWhitelisted() external
    function isWhitelistAdmin(address account) external view returns (bool)
    function addWhitelistAdmin(address account) external
    function renounceWhitelistAdmin() external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event WhitelistedAdded(address indexed account)
    event WhitelistedRemoved(address indexed account)
    event WhitelistAdminAdded(address indexed account)
    event WhitelistAdminRemoved(address indexed account)
]"#);
