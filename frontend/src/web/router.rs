//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程：请求 -> 守卫（认证 + 权限）-> 处理 -> 加载。
//! 守卫在每次导航与 popstate 时同步求值，不缓存、不异步。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use ims_shared::Role;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 守卫结论：目标路由被放行，或被改写为重定向目标
fn apply_guards(target: AppRoute, is_auth: bool, role: Option<Role>) -> AppRoute {
    // 需要认证但未认证 → 登录页
    if target.requires_auth() && !is_auth {
        web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
        return AppRoute::auth_failure_redirect();
    }

    // 已认证却访问登录页 → 仪表盘
    if target.should_redirect_when_authenticated() && is_auth {
        return AppRoute::auth_success_redirect();
    }

    // 已认证但缺少该路由要求的权限 → 回首页（静默重定向，不是错误页）
    if let Some(permission) = target.required_permission() {
        let allowed = role.is_some_and(|r| r.has_permission(permission));
        if !allowed {
            web_sys::console::log_1(
                &format!(
                    "[Router] Missing permission '{}'. Redirecting home.",
                    permission.as_str()
                )
                .into(),
            );
            return AppRoute::permission_failure_redirect();
        }
    }

    target
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证与角色均为注入的信号，本模块不反向依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入）
    is_authenticated: Signal<bool>,
    /// 当前角色（注入，权限守卫的数据源）
    role: Signal<Option<Role>>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> Self {
        // 初始路由从 URL 解析
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            role,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState，false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let role = self.role.get_untracked();

        let resolved = apply_guards(target_route, is_auth, role);

        if use_push {
            push_history_state(&resolved.to_path());
        } else {
            replace_history_state(&resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let role = self.role;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            // popstate 时也执行同一套守卫
            let resolved = apply_guards(target_route, is_auth, role.get_untracked());
            if resolved.to_path() != current_path() {
                replace_history_state(&resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登录成功（在登录页）→ 仪表盘；登出或会话失效（在受保护页）
    /// → 登录页。信号每翻转一次只产生一次跳转。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(&redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: logged in, redirecting to dashboard.".into(),
                    );
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                );
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(is_authenticated, role);

    // 初始导航也要过守卫（深链接直达受保护页面的场景）
    router.navigate_to_route(AppRoute::from_path(&current_path()), false);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 当前角色信号（权限守卫）
    role: Signal<Option<Role>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, role);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
