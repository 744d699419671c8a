//! User Handlers
//!
//! Sign-up, login and user lookups

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{LoginRequest, SignUpRequest, User, UserPage, UserResponse};
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::types::PaginationParams;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppJson, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Issue a fresh token pair and store it on the user
async fn issue_tokens(
    state: &ServerState,
    repo: &UserRepository,
    user: &User,
) -> AppResult<User> {
    let tokens = state
        .get_jwt_service()
        .generate_tokens(&user.user_id, &user.email, &user.first_name, &user.last_name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(repo
        .update_tokens(&user.user_id, tokens.token, tokens.refresh_token)
        .await?)
}

/// POST /api/users/signup - 注册
pub async fn signup(
    State(state): State<ServerState>,
    AppJson(req): AppJson<SignUpRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_payload(&req)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(req).await?;
    let user = issue_tokens(&state, &repo, &user).await?;

    tracing::info!(user_id = %user.user_id, email = %user.email, "User signed up");
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users/login - 登录
///
/// Unknown email and wrong password share one error
pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_payload(&req)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(user) => {
            let password_valid = user
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
            if !password_valid {
                security_log!(
                    "WARN",
                    "login_failed",
                    email = req.email.clone(),
                    reason = "invalid_password"
                );
                return Err(AppError::invalid_credentials());
            }
            user
        }
        None => {
            security_log!(
                "WARN",
                "login_failed",
                email = req.email.clone(),
                reason = "user_not_found"
            );
            return Err(AppError::invalid_credentials());
        }
    };

    let user = issue_tokens(&state, &repo, &user).await?;
    tracing::info!(user_id = %user.user_id, email = %user.email, "User logged in successfully");
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users - 分页用户列表
///
/// Query: `recordPerPage`, `page`, `startIndex`
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<UserPage>> {
    let repo = UserRepository::new(state.db.clone());
    let total_count = repo.count().await?;
    let users = repo.find_page(params.offset(), params.limit()).await?;

    Ok(Json(UserPage {
        total_count,
        user_items: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// GET /api/users/me - 当前用户
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(&current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", current_user.id)))?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users/:id - 获取单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", id)))?;
    Ok(Json(UserResponse::from(user)))
}
