// src/access/whitelisted_role.rs
//! Whitelisted accounts, managed by whitelist admins.

use ethers::contract::abigen;

abigen!(WhitelistedRole, r#"[
    function isWhitelisted(address account) external view returns (bool)
    function addWhitelisted(address account) external
    function removeWhitelisted(address account) external
    function renounceWhitelisted() external
    function isWhitelistAdmin(address account) external view returns (bool)
    function addWhitelistAdmin(address account) external
    function renounceWhitelistAdmin() external
    event WhitelistedAdded(address indexed account)
    event WhitelistedRemoved(address indexed account)
    event WhitelistAdminAdded(address indexed account)
    event WhitelistAdminRemoved(address indexed account)
]"#);
