//! IMS 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义（领域模型）与路由服务（守卫引擎）
//! - `session`: 会话持久化（令牌 + 用户记录，整体读写）
//! - `auth`: 认证状态管理
//! - `theme`: 亮/暗主题
//! - `notify`: 全局通知
//! - `api`: REST 客户端
//! - `components`: 页面与布局组件

mod api;
mod auth;
mod notify;
mod session;
mod theme;

mod components {
    pub mod about;
    pub mod dashboard;
    pub mod home;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod product_form;
    pub mod products;
    pub mod reports;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::about::AboutPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::product_form::ProductFormPage;
use crate::components::products::ProductsPage;
use crate::components::reports::ReportsPage;
use crate::notify::{Toasts, provide_notifications};
use crate::theme::{ThemeContext, init_theme};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量封装，替代 gloo-storage / gloo-timers，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
/// 守卫（认证/权限）已在路由服务中完成，这里只做纯映射。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Layout>
                <DashboardPage />
            </Layout>
        }
        .into_any(),
        AppRoute::Products => view! {
            <Layout>
                <ProductsPage />
            </Layout>
        }
        .into_any(),
        AppRoute::ProductAdd => view! {
            <Layout>
                <ProductFormPage />
            </Layout>
        }
        .into_any(),
        AppRoute::ProductEdit(id) => view! {
            <Layout>
                <ProductFormPage id=id />
            </Layout>
        }
        .into_any(),
        AppRoute::Reports => view! {
            <Layout>
                <ReportsPage />
            </Layout>
        }
        .into_any(),
        AppRoute::About => view! {
            <Layout>
                <AboutPage />
            </Layout>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 全局通知与主题
    let notifications = provide_notifications();
    let theme_ctx = ThemeContext::new();
    provide_context(theme_ctx);
    init_theme(&theme_ctx);

    // 2. 认证上下文（持有通知句柄，登录/登出流程直接提示）
    let auth_ctx = AuthContext::new(notifications);
    provide_context(auth_ctx);

    // 3. 从 LocalStorage 恢复会话
    init_auth(&auth_ctx);

    // 4. 取认证与角色信号注入路由服务，守卫与认证系统解耦
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let role = auth_ctx.role_signal();

    view! {
        <Router is_authenticated=is_authenticated role=role>
            <Toasts />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
