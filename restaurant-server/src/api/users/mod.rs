//! User API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/users/signup | POST | 注册 | 无 |
//! | /api/users/login | POST | 登录 | 无 |
//! | /api/users | GET | 分页用户列表 | 需要 |
//! | /api/users/me | GET | 当前用户 | 需要 |
//! | /api/users/{id} | GET | 单个用户 | 需要 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
        .route("/me", get(handler::me))
        .route("/{id}", get(handler::get_by_id))
}
