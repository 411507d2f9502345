//! 用户路由处理器

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

use super::model::{CreateUserRequest, User};
use super::store::UserStore;
use crate::app::AppState;
use crate::core::{error::ApiError, response::ApiResponse};

/// 获取全部用户
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(state.store.all()))
}

/// 创建新用户
/// 请求体自行解析：JSON 语法错误返回 400，形状不符时字段按缺失处理
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("error processing request".to_string()))?;
    let payload: CreateUserRequest = serde_json::from_value(value).unwrap_or_default();

    let user = state.store.append(payload.name, payload.email);

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

/// 按路径段查找用户，找不到时返回 404
pub fn lookup_user(store: &UserStore, segment: &str) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = parse_user_id(segment)
        .and_then(|id| store.find(id))
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(Json(ApiResponse::success(user)))
}

/// 解析路径段开头连续的十进制数字作为 id，后缀非数字字符忽略
/// 空段或无前导数字时返回 None
pub fn parse_user_id(segment: &str) -> Option<u64> {
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    segment[..end].parse().ok()
}
