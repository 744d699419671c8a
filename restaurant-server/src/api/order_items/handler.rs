//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::billing::{BillingService, OrderBill, SurrealBillingStore};
use crate::core::ServerState;
use crate::db::models::{OrderItem, OrderItemPack, OrderItemPackCreated, OrderItemUpdate};
use crate::db::repository::OrderItemRepository;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppJson, AppResult, MessageResponse};

/// GET /api/order-items - 获取所有订单明细
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderItem>>> {
    let repo = OrderItemRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/order-items/:id - 获取单条订单明细
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/order-items - 批量创建订单明细
///
/// 未指定 `order_id` 时为 `table_id` 新建订单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderItemPack>,
) -> AppResult<Json<OrderItemPackCreated>> {
    validate_payload(&payload)?;
    let repo = OrderItemRepository::new(state.db.clone());
    let created = repo.create_pack(payload).await?;
    tracing::info!(
        order_id = %created.order_id,
        count = created.order_items.len(),
        "Order items created"
    );
    Ok(Json(created))
}

/// PUT/PATCH /api/order-items/:id - 更新订单明细
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderItemUpdate>,
) -> AppResult<Json<OrderItem>> {
    validate_payload(&payload)?;
    let repo = OrderItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/order-items/:id - 删除订单明细
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = OrderItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Order item {} not found", id)));
    }
    Ok(Json(MessageResponse::new("Order item deleted successfully")))
}

/// GET /api/order-items-order/:order_id - 订单账单汇总
pub async fn bill_for_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderBill>> {
    let billing = BillingService::new(SurrealBillingStore::new(state.db.clone()));
    Ok(Json(billing.bill_for_order(&order_id).await?))
}
