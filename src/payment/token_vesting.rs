// src/payment/token_vesting.rs
//! Owner-revocable linear vesting of ERC20 balances held by the contract.
//! The release curve is mirrored off-chain in [`crate::schedule`].

use ethers::contract::abigen;

abigen!(TokenVesting, r#"[
    function beneficiary() external view returns (address)
    function start() external view returns (uint256)
    function cliff() external view returns (uint256)
    function duration() external view returns (uint256)
    function revocable() external view returns (bool)
    function released(address token) external view returns (uint256)
    function revoked(address token) external view returns (bool)
    function release(address token) external
    function revoke(address token) external
    function owner() external view returns (address)
    function isOwner() external view returns (bool)
    function transferOwnership(address newOwner) external
    function renounceOwnership() external
    event TokensReleased(address token, uint256 amount)
    event TokenVestingRevoked(address token)
    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner)
]"#);
