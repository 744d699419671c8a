//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Menu, MenuCreate, MenuUpdate};
use crate::db::repository::MenuRepository;
use crate::utils::time::{in_time_span, now_millis};
use crate::utils::validation::{validate_date_range, validate_payload};
use crate::utils::{AppError, AppJson, AppResult, MessageResponse};

/// GET /api/menus - 获取所有菜单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/menus/:id - 获取单个菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu {} not found", id)))?;
    Ok(Json(menu))
}

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuCreate>,
) -> AppResult<Json<Menu>> {
    validate_payload(&payload)?;
    validate_date_range(payload.start_date, payload.end_date)?;

    let repo = MenuRepository::new(state.db.clone());
    let menu = repo.create(payload).await?;
    tracing::info!(menu_id = %menu.menu_id, name = %menu.name, "Menu created");
    Ok(Json(menu))
}

/// PUT/PATCH /api/menus/:id - 更新菜单
///
/// 同时修改起止时间时，当前时间必须落在新区间内；
/// 只修改一端时，与已存储的另一端组成的区间必须有效。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MenuUpdate>,
) -> AppResult<Json<Menu>> {
    validate_payload(&payload)?;
    let repo = MenuRepository::new(state.db.clone());

    match (payload.start_date, payload.end_date) {
        (Some(start), Some(end)) => {
            if !in_time_span(start, end, now_millis()) {
                return Err(AppError::validation("kindly retype the time"));
            }
        }
        (None, None) => {}
        (start, end) => {
            let stored = repo
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Menu {} not found", id)))?;
            validate_date_range(start.or(stored.start_date), end.or(stored.end_date))?;
        }
    }

    let menu = repo.update(&id, payload).await?;
    Ok(Json(menu))
}

/// DELETE /api/menus/:id - 删除菜单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = MenuRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Menu {} not found", id)));
    }
    Ok(Json(MessageResponse::new("Menu deleted successfully")))
}
