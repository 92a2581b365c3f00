//! Module API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/modules | GET / POST | 列表 (?moduleName=&codeNo=) / 新增 |
//! | /api/modules/parents | GET | 可选上级模块 |
//! | /api/modules/navigation | GET | 导航树 |
//! | /api/modules/menu-routes | GET | 前端路由表 |
//! | /api/modules/{id} | GET / PUT / PATCH / DELETE | 详情 / 修改 / 启停 / 删除 |
//! | /api/modules/{id}/functions | GET | 模块下的功能点 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/modules", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/parents", get(handler::parents))
        .route("/navigation", get(handler::navigation))
        .route("/menu-routes", get(handler::menu_routes))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update_status)
                .delete(handler::delete),
        )
        .route("/{id}/functions", get(handler::functions))
}
