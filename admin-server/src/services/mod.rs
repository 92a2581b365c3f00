//! 服务层 - 角色权限业务
//!
//! # 服务列表
//!
//! - [`permission`] - 角色权限查询（模块树 / 用户 / 功能勾选列表）
//! - [`role_assignment`] - 角色授权整体替换（事务内 delete + insert）

pub mod permission;
pub mod role_assignment;
