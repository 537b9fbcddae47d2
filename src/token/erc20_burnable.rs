// src/token/erc20_burnable.rs
//! ERC20 whose holders can destroy their own tokens (or tokens they have an
//! allowance for).

use ethers::contract::abigen;

abigen!(ERC20Burnable, r#"[
    function totalSupply() external view returns (uint256)
    function balanceOf(address owner) external view returns (uint256)
    function transfer(address to, uint256 value) external returns (bool)
    function allowance(address owner, address spender) external view returns (uint256)
    function approve(address spender, uint256 value) external returns (bool)
    function transferFrom(address from, address to, uint256 value) external returns (bool)
    function increaseAllowance(address spender, uint256 addedValue) external returns (bool)
    function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool)
    function burn(uint256 amount) external
    function burnFrom(address account, uint256 amount) external
    event Transfer(address indexed from, address indexed to, uint256 value)
    event Approval(address indexed owner, address indexed spender, uint256 value)
]"#);
