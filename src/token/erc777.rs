// src/token/erc777.rs
//! Concrete ERC777 implementation surface. On top of the EIP-777 interface it
//! carries the ERC20 compatibility layer (`transfer`/`approve`/`transferFrom`
//! and a fixed `decimals` of 18), as the OpenZeppelin implementation does.

use ethers::contract::abigen;

abigen!(ERC777, r#"[
    function name() external view returns (string)
    function symbol() external view returns (string)
    function decimals() external view returns (uint8)
    function granularity() external view returns (uint256)
    function totalSupply() external view returns (uint256)
    function balanceOf(address tokenHolder) external view returns (uint256)
    function send(address to, uint256 amount, bytes data) external
    function transfer(address to, uint256 value) external returns (bool)
    function allowance(address owner, address spender) external view returns (uint256)
    function approve(address spender, uint256 value) external returns (bool)
    function transferFrom(address from, address to, uint256 value) external returns (bool)
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
    event Transfer(address indexed from, address indexed to, uint256 value)
    event Approval(address indexed owner, address indexed spender, uint256 value)
]"#);
