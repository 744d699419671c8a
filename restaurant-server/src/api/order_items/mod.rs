//! Order Item API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/order-items | GET / POST | 列表 / 批量创建 |
//! | /api/order-items/{id} | GET / PUT / PATCH / DELETE | 单条明细 |
//! | /api/order-items-order/{order_id} | GET | 订单账单汇总 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/order-items", routes())
        .route("/api/order-items-order/{order_id}", get(handler::bill_for_order))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
