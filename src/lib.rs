//! # Axum 示例 API 服务器
//!
//! 一个小型 HTTP 服务，提供内存用户数据的查询与创建，
//! 以及欢迎页、当前时间、运行状态等固定信息路由。
//! 所有 JSON 响应使用统一的信封结构。

pub mod app;
pub mod core;
