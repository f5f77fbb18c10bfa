//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、认证要求、权限要求与重定向目标。

use ims_shared::Permission;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 公开首页（默认路由）
    #[default]
    Home,
    /// 登录页
    Login,
    /// 仪表盘（需认证）
    Dashboard,
    /// 商品列表（需认证）
    Products,
    /// 新增商品（需 create_products 权限）
    ProductAdd,
    /// 编辑商品（需 edit_products 权限）
    ProductEdit(i64),
    /// 报表（需认证）
    Reports,
    /// 关于（需认证）
    About,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        // "/products/" 与 "/products" 等价
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/products" => Self::Products,
            "/products/add" => Self::ProductAdd,
            "/reports" => Self::Reports,
            "/about" => Self::About,
            other => {
                if let Some(raw_id) = other.strip_prefix("/products/edit/") {
                    if let Ok(id) = raw_id.parse::<i64>() {
                        return Self::ProductEdit(id);
                    }
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductAdd => "/products/add".to_string(),
            Self::ProductEdit(id) => format!("/products/edit/{id}"),
            Self::Reports => "/reports".to_string(),
            Self::About => "/about".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **守卫之一：该路由是否要求已认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Home | Self::Login | Self::NotFound)
    }

    /// **守卫之二：该路由要求的权限（若有）**
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Self::ProductAdd => Some(Permission::CreateProducts),
            Self::ProductEdit(_) => Some(Permission::EditProducts),
            _ => None,
        }
    }

    /// 已认证用户是否应离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 缺少权限时的重定向目标（回首页，而不是错误页）
    pub fn permission_failure_redirect() -> Self {
        Self::Home
    }

    /// 已认证用户访问登录页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/products"), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/products/add"), AppRoute::ProductAdd);
        assert_eq!(AppRoute::from_path("/reports"), AppRoute::Reports);
        assert_eq!(AppRoute::from_path("/about"), AppRoute::About);
    }

    #[test]
    fn test_from_path_edit_carries_id() {
        assert_eq!(
            AppRoute::from_path("/products/edit/42"),
            AppRoute::ProductEdit(42)
        );
        // 非数字 id 不是合法路由
        assert_eq!(AppRoute::from_path("/products/edit/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/edit/"), AppRoute::NotFound);
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash() {
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/oops"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Products,
            AppRoute::ProductAdd,
            AppRoute::ProductEdit(7),
            AppRoute::Reports,
            AppRoute::About,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_requires_auth_matrix() {
        // 公开路由
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        // 受保护路由
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Products.requires_auth());
        assert!(AppRoute::ProductAdd.requires_auth());
        assert!(AppRoute::ProductEdit(1).requires_auth());
        assert!(AppRoute::Reports.requires_auth());
        assert!(AppRoute::About.requires_auth());
    }

    #[test]
    fn test_permission_matrix() {
        assert_eq!(
            AppRoute::ProductAdd.required_permission(),
            Some(Permission::CreateProducts)
        );
        assert_eq!(
            AppRoute::ProductEdit(1).required_permission(),
            Some(Permission::EditProducts)
        );
        assert_eq!(AppRoute::Products.required_permission(), None);
        assert_eq!(AppRoute::Dashboard.required_permission(), None);
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::permission_failure_redirect(), AppRoute::Home);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
