//! Admin Server - 后台管理系统核心
//!
//! 模块树、角色权限、前端路由表和基础资料 (用户 / 厂商) 的 HTTP 服务。
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、启动
//! ├── auth/          # JWT 认证、密码哈希
//! ├── navigation/    # 树构建、权限标注、路由生成 (纯函数)
//! ├── services/      # 权限查询、角色授权
//! ├── db/            # SQLite 连接池与 repository
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 中间件装配
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use routes::build_app;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
