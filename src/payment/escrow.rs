// src/payment/escrow.rs
//! Base escrow holding wei per payee, controlled by its primary account.

use ethers::contract::abigen;

abigen!(Escrow, r#"[
    function depositsOf(address payee) external view returns (uint256)
    function deposit(address payee) external payable
    function withdraw(address payee) external
    function primary() external view returns (address)
    function transferPrimary(address recipient) external
    event Deposited(address indexed payee, uint256 weiAmount)
    event Withdrawn(address indexed payee, uint256 weiAmount)
    event PrimaryTransferred(address recipient)
]"#);
