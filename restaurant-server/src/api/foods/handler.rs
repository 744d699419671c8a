//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Food, FoodCreate, FoodUpdate};
use crate::db::repository::FoodRepository;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppJson, AppResult, MessageResponse};

/// GET /api/foods - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Food>>> {
    let repo = FoodRepository::new(state.db.clone());
    let foods = repo.find_all().await?;
    Ok(Json(foods))
}

/// GET /api/foods/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food {} not found", id)))?;
    Ok(Json(food))
}

/// POST /api/foods - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<FoodCreate>,
) -> AppResult<Json<Food>> {
    validate_payload(&payload)?;
    let repo = FoodRepository::new(state.db.clone());
    let food = repo.create(payload).await?;
    tracing::info!(food_id = %food.food_id, name = %food.name, "Food created");
    Ok(Json(food))
}

/// PUT/PATCH /api/foods/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<FoodUpdate>,
) -> AppResult<Json<Food>> {
    validate_payload(&payload)?;
    let repo = FoodRepository::new(state.db.clone());
    let food = repo.update(&id, payload).await?;
    Ok(Json(food))
}

/// DELETE /api/foods/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = FoodRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Food {} not found", id)));
    }
    Ok(Json(MessageResponse::new("Food deleted successfully")))
}
