// src/access/mod.rs
//! Bindings for the ownership and role-management contracts.

pub mod ownable;
pub mod roles;
pub mod secondary;
pub mod whitelist_admin_role;
pub mod whitelisted_role;
