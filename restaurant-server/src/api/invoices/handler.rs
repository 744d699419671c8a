//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::billing::{BillingService, SurrealBillingStore};
use crate::core::ServerState;
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView};
use crate::db::repository::InvoiceRepository;
use crate::utils::{AppError, AppJson, AppResult, MessageResponse};

/// GET /api/invoices - 获取所有账单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Invoice>>> {
    let repo = InvoiceRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/invoices/:id - 账单视图 (含应付金额与明细)
pub async fn get_view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceView>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoice = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Invoice {} not found", id)))?;

    let billing = BillingService::new(SurrealBillingStore::new(state.db.clone()));
    Ok(Json(billing.invoice_view(invoice).await?))
}

/// POST /api/invoices - 创建账单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoice = repo.create(payload).await?;
    tracing::info!(
        invoice_id = %invoice.invoice_id,
        order_id = %invoice.order_id,
        "Invoice created"
    );
    Ok(Json(invoice))
}

/// PUT/PATCH /api/invoices/:id - 更新账单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoice = repo.update(&id, payload).await?;
    Ok(Json(invoice))
}

/// DELETE /api/invoices/:id - 删除账单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = InvoiceRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Invoice {} not found", id)));
    }
    Ok(Json(MessageResponse::new("Invoice deleted successfully")))
}
