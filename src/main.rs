//! 示例 API 服务器入口

use tokio::net::TcpListener;
use tracing::{info, Level};

use axum_demo_api::app::{create_router, AppState};

const LISTEN_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("启动示例 API 服务器...");

    let state = AppState::new();
    let app = create_router(state);

    let listener = TcpListener::bind(LISTEN_ADDR)
        .await
        .expect("无法绑定到端口 3000");

    info!("🚀 服务器运行在 http://{}", LISTEN_ADDR);
    info!("📖 可用的路由:");
    info!("   GET  /           - 欢迎页");
    info!("   GET  /date       - 当前时间");
    info!("   GET  /status     - 运行状态");
    info!("   GET  /users      - 获取所有用户");
    info!("   POST /users      - 创建新用户");
    info!("   GET  /users/:id  - 获取特定用户");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
