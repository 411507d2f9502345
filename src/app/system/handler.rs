//! 系统路由处理器

use axum::{extract::State, response::Json};

use super::model::ServerStatus;
use crate::app::AppState;
use crate::core::response::ApiResponse;

const SERVER_NAME: &str = "AxumServer";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 欢迎页，纯文本响应
pub async fn welcome() -> &'static str {
    "欢迎使用 Axum 示例 API！"
}

/// 返回服务器当前时间
pub async fn current_date() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(chrono::Utc::now().to_rfc3339()))
}

/// 返回服务器运行状态
pub async fn server_status(State(state): State<AppState>) -> Json<ApiResponse<ServerStatus>> {
    let status = ServerStatus {
        server_name: SERVER_NAME,
        version: SERVER_VERSION,
        uptime: state.started_at.elapsed().as_secs_f64(),
    };

    Json(ApiResponse::success(status))
}
