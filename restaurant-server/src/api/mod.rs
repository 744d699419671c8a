//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`users`] - 注册、登录和用户查询
//! - [`foods`] - 菜品管理接口
//! - [`menus`] - 菜单管理接口
//! - [`tables`] - 桌台管理接口
//! - [`orders`] - 订单管理接口
//! - [`order_items`] - 订单明细与账单汇总
//! - [`invoices`] - 账单管理接口

pub mod health;
pub mod users;

// Data models API
pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::middleware::log_request;

/// Build the application router
///
/// Layers, outermost first: request logging, compression, CORS, authentication.
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(foods::router())
        .merge(menus::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(order_items::router())
        .merge(invoices::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
