// src/access/ownable.rs
//! Single-owner access control.

use ethers::contract::abigen;

abigen!(Ownable, r#"[
    function owner() external view returns (address)
    function isOwner() external view returns (bool)
    function transferOwnership(address newOwner) external
    function renounceOwnership() external
    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner)
]"#);
