//! API 路由模块
//!
//! 每个资源一个子模块，`router()` 返回 `Router<ServerState>`：
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录 / 令牌校验
//! - [`modules`] - 模块树、导航、前端路由表
//! - [`functions`] - 功能点管理
//! - [`roles`] - 角色及授权 (模块 / 用户 / 功能)
//! - [`users`] - 用户管理
//! - [`vendors`] - 厂商管理

pub mod auth;
pub mod functions;
pub mod health;
pub mod modules;
pub mod roles;
pub mod users;
pub mod vendors;

pub use shared::{ApiResponse, AppError, AppResult};
