//! 角色与权限策略
//!
//! 唯一的一份声明式 角色→权限 映射表。
//! 前端的路由守卫、页面按钮以及传统页面脚本都从这里取权限，
//! 避免各处各抄一份表导致漂移。

use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

/// 权限标签（固定集合，不持久化，按需由角色推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ViewProducts,
    CreateProducts,
    EditProducts,
    DeleteProducts,
    ViewReports,
    ViewAbout,
}

impl Permission {
    /// 线上/日志用的标签字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewProducts => "view_products",
            Permission::CreateProducts => "create_products",
            Permission::EditProducts => "edit_products",
            Permission::DeleteProducts => "delete_products",
            Permission::ViewReports => "view_reports",
            Permission::ViewAbout => "view_about",
        }
    }
}

/// USER：只读权限
const USER_PERMISSIONS: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewProducts,
    Permission::ViewReports,
    Permission::ViewAbout,
];

/// ADMIN：USER 的全部权限，外加商品的增/改/删
const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewProducts,
    Permission::CreateProducts,
    Permission::EditProducts,
    Permission::DeleteProducts,
    Permission::ViewReports,
    Permission::ViewAbout,
];

impl Role {
    /// 角色对应的权限集合
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => ADMIN_PERMISSIONS,
            Role::User => USER_PERMISSIONS,
        }
    }

    /// 集合成员判断，除此之外没有任何别的逻辑
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_all_seven_permissions() {
        assert_eq!(Role::Admin.permissions().len(), 7);
        for permission in ADMIN_PERMISSIONS {
            assert!(Role::Admin.has_permission(*permission));
        }
    }

    #[test]
    fn test_user_lacks_write_permissions() {
        assert!(!Role::User.has_permission(Permission::CreateProducts));
        assert!(!Role::User.has_permission(Permission::EditProducts));
        assert!(!Role::User.has_permission(Permission::DeleteProducts));
    }

    #[test]
    fn test_user_has_read_permissions() {
        assert_eq!(Role::User.permissions().len(), 4);
        assert!(Role::User.has_permission(Permission::ViewDashboard));
        assert!(Role::User.has_permission(Permission::ViewProducts));
        assert!(Role::User.has_permission(Permission::ViewReports));
        assert!(Role::User.has_permission(Permission::ViewAbout));
    }

    #[test]
    fn test_admin_is_strict_superset_of_user() {
        for permission in USER_PERMISSIONS {
            assert!(Role::Admin.has_permission(*permission));
        }
    }

    #[test]
    fn test_wire_forms() {
        // 角色与权限的序列化形式必须与后端约定一致
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""USER""#);
        assert_eq!(
            serde_json::to_string(&Permission::CreateProducts).unwrap(),
            r#""create_products""#
        );
        assert_eq!(Permission::ViewDashboard.as_str(), "view_dashboard");
    }
}
