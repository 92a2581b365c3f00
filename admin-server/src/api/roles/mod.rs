//! Role API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/roles | GET / POST | 列表 / 新增 |
//! | /api/roles/{id} | GET / PUT / DELETE | 详情 / 修改 / 删除 (连同全部授权) |
//! | /api/roles/{id}/modules | GET / PUT | 权限树 / 整体替换模块授权 |
//! | /api/roles/{id}/users | GET / PUT | 用户勾选列表 / 整体替换角色成员 |
//! | /api/roles/{id}/functions | GET / PUT | 功能勾选列表 / 整体替换功能授权 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/roles", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/modules", get(handler::modules).put(handler::set_modules))
        .route("/{id}/users", get(handler::users).put(handler::set_users))
        .route("/{id}/functions", get(handler::functions).put(handler::set_functions))
}
