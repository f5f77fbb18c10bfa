//! IMS 共享领域层
//!
//! SPA 前端与传统页面脚本共用的类型与规则：
//! - `policy`: 角色→权限策略表
//! - `protocol`: REST 协议定义
//! - `report`: 报表聚合（纯折叠）
//! - `validate`: 商品表单校验
//! - `error`: 客户端错误分类

pub mod error;
pub mod policy;
pub mod protocol;
pub mod report;
pub mod validate;

pub use error::{ApiError, ApiResult, ErrorKind};
pub use policy::{Permission, Role};

use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中会话令牌的键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// LocalStorage 中用户记录（JSON 字符串）的键
pub const STORAGE_USER_KEY: &str = "user";
/// 商品接口的认证请求头
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// Bearer 方案前缀
pub const BEARER_PREFIX: &str = "Bearer ";

/// 固定的商品类别列表（与后端表单下拉一致）
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Accessories",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Other",
];

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// 问候语用的显示名：优先全名，缺失时退回用户名
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// 认证会话
///
/// 令牌与用户记录作为一个整体写入/清除（登录时两者都写，
/// 登出或收到 401 时两者都删）。
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// 库存状态（由后端按数量推导，客户端只读）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// 线上字符串形式，同时用作状态直方图的键
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "IN_STOCK",
            StockStatus::LowStock => "LOW_STOCK",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }

    /// 是否计入低库存统计
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// 商品
///
/// 由后端独占持有并修改；客户端按视图拉取只读副本，导航即丢弃。
/// `sku`/`supplier`/`location` 由后端维护，表单不编辑。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub status: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Product {
    /// 库存价值 = 单价 × 数量
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// 创建/更新商品的请求体（即表单的五个字段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

/// 登录请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应
///
/// 后端对该响应的字段并不稳定（失败时只有 message），
/// 全部按可选处理，由调用方在边界处校验：`token` 存在即成功。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "4K Monitor",
            "category": "Electronics",
            "price": 399.99,
            "quantity": 0,
            "description": "27-inch 4K Ultra HD monitor",
            "status": "OUT_OF_STOCK",
            "sku": "MON-4K-27",
            "supplier": "LG Electronics",
            "location": "Warehouse C"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, StockStatus::OutOfStock);
        assert_eq!(product.sku.as_deref(), Some("MON-4K-27"));
        assert_eq!(product.value(), 0.0);
    }

    #[test]
    fn test_product_optional_fields_default() {
        // 后端省略的字段不应导致解析失败
        let json = r#"{"id":1,"name":"Cable","category":"Accessories","price":12.99,"quantity":120,"status":"IN_STOCK"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_none());
        assert!(product.sku.is_none());
    }

    #[test]
    fn test_login_response_failure_shape() {
        // 失败响应只带 message，其余字段缺失
        let json = r#"{"message":"Invalid username or password"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(resp.token.is_none());
        assert_eq!(resp.message.as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn test_login_response_success_shape() {
        let json = r#"{"token":"jwt-abc","username":"admin","role":"ADMIN","fullName":"System Administrator","message":"Login successful"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token.as_deref(), Some("jwt-abc"));
        assert_eq!(resp.role, Some(Role::Admin));
        assert_eq!(resp.full_name.as_deref(), Some("System Administrator"));
        assert!(resp.id.is_none());
    }

    #[test]
    fn test_user_display_name_falls_back_to_username() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            role: Role::Admin,
            full_name: None,
        };
        assert_eq!(user.display_name(), "admin");

        let named = User {
            full_name: Some("System Administrator".to_string()),
            ..user
        };
        assert_eq!(named.display_name(), "System Administrator");
    }
}
