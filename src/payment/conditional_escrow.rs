// src/payment/conditional_escrow.rs
//! Escrow whose withdrawals are gated by a contract-defined condition.

use ethers::contract::abigen;

abigen!(ConditionalEscrow, r#"[
    function depositsOf(address payee) external view returns (uint256)
    function deposit(address payee) external payable
    function withdraw(address payee) external
    function withdrawalAllowed(address payee) external view returns (bool)
    function primary() external view returns (address)
    function transferPrimary(address recipient) external
    event Deposited(address indexed payee, uint256 weiAmount)
    event Withdrawn(address indexed payee, uint256 weiAmount)
    event PrimaryTransferred(address recipient)
]"#);
