// src/token/erc20.rs
//! Full ERC20 surface with the optional metadata extension
//! (`name`/`symbol`/`decimals`) and the OpenZeppelin allowance helpers.

use ethers::contract::abigen;

abigen!(ERC20, r#"[
    function name() external view returns (string)
    function symbol() external view returns (string)
    function decimals() external view returns (uint8)
    function totalSupply() external view returns (uint256)
    function balanceOf(address owner) external view returns (uint256)
    function transfer(address to, uint256 value) external returns (bool)
    function allowance(address owner, address spender) external view returns (uint256)
    function approve(address spender, uint256 value) external returns (bool)
    function transferFrom(address from, address to, uint256 value) external returns (bool)
    function increaseAllowance(address spender, uint256 addedValue) external returns (bool)
    function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool)
    event Transfer(address indexed from, address indexed to, uint256 value)
    event Approval(address indexed owner, address indexed spender, uint256 value)
]"#);
