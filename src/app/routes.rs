//! 路由装配
//! 精确路由之外的请求统一落入 fallback，保持"首个匹配生效"的分发顺序

use std::time::Instant;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::{any, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::users::store::UserStore;
use super::{system, users};
use crate::core::error::ApiError;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: UserStore::with_seed_data(),
            started_at: Instant::now(),
        }
    }
}

/// 构建完整路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(system::handler::welcome))
        .route("/date", any(system::handler::current_date))
        .route("/status", any(system::handler::server_status))
        // POST 创建用户，其余方法一律返回列表
        .route(
            "/users",
            post(users::handler::create_user).fallback(users::handler::list_users),
        )
        .fallback(dispatch_unmatched)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 未命中精确路由的请求：
/// /users/ 前缀按第三个路径段查找用户（不限方法，POST /users/5 也走查找），
/// 其余路径返回 404
async fn dispatch_unmatched(State(state): State<AppState>, uri: Uri) -> Response {
    if let Some(rest) = uri.path().strip_prefix("/users/") {
        let segment = rest.split('/').next().unwrap_or("");
        return users::handler::lookup_user(&state.store, segment).into_response();
    }

    ApiError::NotFound("route not found".to_string()).into_response()
}
