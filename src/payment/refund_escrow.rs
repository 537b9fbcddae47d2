// src/payment/refund_escrow.rs
//! Escrow used by refundable crowdsales. `state` walks Active -> Refunding or
//! Active -> Closed; the beneficiary collects only after a close.

use ethers::contract::abigen;

abigen!(RefundEscrow, r#"[
    function depositsOf(address payee) external view returns (uint256)
    function deposit(address refundee) external payable
    function withdraw(address payee) external
    function withdrawalAllowed(address payee) external view returns (bool)
    function primary() external view returns (address)
    function transferPrimary(address recipient) external
    function state() external view returns (uint8)
    function beneficiary() external view returns (address)
    function close() external
    function enableRefunds() external
    function beneficiaryWithdraw() external
    event Deposited(address indexed payee, uint256 weiAmount)
    event Withdrawn(address indexed payee, uint256 weiAmount)
    event PrimaryTransferred(address recipient)
    event RefundsClosed()
    event RefundsEnabled()
]"#);
