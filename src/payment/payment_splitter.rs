// src/payment/payment_splitter.rs
//! Splits received wei between payees in proportion to their shares, released
//! on demand.

use ethers::contract::abigen;

abigen!(PaymentSplitter, r#"[
    function totalShares() external view returns (uint256)
    function totalReleased() external view returns (uint256)
    function shares(address account) external view returns (uint256)
    function released(address account) external view returns (uint256)
    function payee(uint256 index) external view returns (address)
    function release(address account) external
    event PayeeAdded(address account, uint256 shares)
    event PaymentReleased(address to, uint256 amount)
    event PaymentReceived(address from, uint256 amount)
]"#);
