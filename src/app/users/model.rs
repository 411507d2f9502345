//! 用户数据模型

use serde::{Deserialize, Serialize};

/// 用户记录
/// 创建时缺失的 name/email 保持缺失，序列化时省略对应字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: String,
}

/// 创建用户请求
/// 未知字段忽略，缺失字段按 None 传递，不做内容校验
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
