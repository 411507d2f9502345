//! 系统信息模型

use serde::Serialize;

/// /status 路由的响应数据
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub server_name: &'static str,
    pub version: &'static str,
    /// 进程启动以来的秒数
    pub uptime: f64,
}
