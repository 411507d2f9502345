//! 应用层：路由装配与各业务模块

pub mod routes;
pub mod system;
pub mod users;

pub use routes::{create_router, AppState};
