// src/access/whitelist_admin_role.rs
//! Accounts allowed to manage a whitelist. Kept apart from
//! [`super::whitelisted_role`] because the two surfaces share the admin
//! function and event names.

use ethers::contract::abigen;

abigen!(WhitelistAdminRole, r#"[
    function isWhitelistAdmin(address account) external view returns (bool)
    function addWhitelistAdmin(address account) external
    function renounceWhitelistAdmin() external
    event WhitelistAdminAdded(address indexed account)
    event WhitelistAdminRemoved(address indexed account)
]"#);
