// src/token/ierc777.rs
//! ERC777 advanced token interface, as specified by EIP-777. Operator
//! authorization and the `data`/`operatorData` payloads are what distinguish
//! it from plain ERC20.

use ethers::contract::abigen;

abigen!(IERC777, r#"[
    function name() external view returns (string)
    function symbol() external view returns (string)
    function granularity() external view returns (uint256)
    function totalSupply() external view returns (uint256)
    function balanceOf(address tokenHolder) external view returns (uint256)
    function send(address to, uint256 amount, bytes data) external
    function burn(uint256 amount, bytes data) external
    function isOperatorFor(address operator, address tokenHolder) external view returns (bool)
    function authorizeOperator(address operator) external
    function revokeOperator(address operator) external
    function defaultOperators() external view returns (address[])
    function operatorSend(address from, address to, uint256 amount, bytes data, bytes operatorData) external
    function operatorBurn(address from, uint256 amount, bytes data, bytes operatorData) external
    event Sent(address indexed operator, address indexed from, address indexed to, uint256 amount, bytes data, bytes operatorData)
    event Minted(address indexed operator, address indexed to, uint256 amount, bytes data, bytes operatorData)
    event Burned(address indexed operator, address indexed from, uint256 amount, bytes data, bytes operatorData)
    event AuthorizedOperator(address indexed operator, address indexed tokenHolder)
    event RevokedOperator(address indexed operator, address indexed tokenHolder)
]"#);
