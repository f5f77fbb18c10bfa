//! 认证模块
//!
//! 管理认证状态，与路由系统解耦：路由服务只消费这里导出的
//! `is_authenticated` / `role` 两个信号，不反向依赖本模块。
//! 会话的持久化细节在 `session`，这里只负责状态与流程。

use crate::api::ImsApi;
use crate::notify::Notifications;
use crate::session::SessionStore;
use ims_shared::{ApiResult, ErrorKind, LoginRequest, Permission, Role, Session, User};
use leptos::prelude::*;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前会话（None 即未登录）
    pub session: Option<Session>,
    /// 启动恢复是否仍在进行
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }
}

/// 认证上下文
///
/// 包含读写信号与通知句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    /// 全局通知（登录/登出流程直接提示）
    notifications: Notifications,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(notifications: Notifications) -> Self {
        let (state, set_state) = signal(AuthState {
            session: None,
            is_loading: true,
        });
        Self {
            state,
            set_state,
            notifications,
        }
    }

    /// 认证状态信号（注入路由服务）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 角色信号（注入路由服务的权限守卫）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().session.as_ref().map(|s| s.user.role))
    }

    /// 当前用户是否持有某权限（无会话时一律 false）
    ///
    /// 在响应式闭包里调用会跟踪认证状态，控件随登录/登出显隐。
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.state
            .get()
            .session
            .as_ref()
            .is_some_and(|s| s.user.role.has_permission(permission))
    }

    /// 当前会话对应的 API 客户端
    pub fn api(&self) -> ImsApi {
        let token = self
            .state
            .get_untracked()
            .session
            .map(|session| session.token);
        ImsApi::with_token(token)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：尝试从 LocalStorage 恢复会话
///
/// 恢复失败（缺失或损坏）由 SessionStore 负责清理，
/// 这里只是降级为未登录，绝不抛错。
pub fn init_auth(ctx: &AuthContext) {
    let session = SessionStore::load();
    ctx.set_state.update(|state| {
        state.session = session;
        state.is_loading = false;
    });
}

/// 登录并持久化会话
///
/// # Returns
/// - `Ok(true)`: 登录成功（已持久化并更新状态，路由服务会自动跳转）
/// - `Ok(false)`: 凭据被拒或响应缺 token（已提示）
/// - `Err`: 网络层失败（已提示，错误原样交给调用方）
pub async fn login(ctx: &AuthContext, username: String, password: String) -> ApiResult<bool> {
    let api = ImsApi::without_token();
    let request = LoginRequest {
        username: username.clone(),
        password,
    };

    match api.login(&request).await {
        Ok(response) => {
            let Some(token) = response.token else {
                ctx.notifications.error("登录失败，请重试");
                return Ok(false);
            };

            // 后端可能不回 id：退回毫秒时间戳作为本地 id
            let user = User {
                id: response.id.unwrap_or_else(|| js_sys::Date::now() as i64),
                username: response.username.unwrap_or(username),
                role: response.role.unwrap_or(Role::User),
                full_name: response.full_name,
            };
            let session = Session { token, user };

            SessionStore::save(&session);
            ctx.notifications
                .success(format!("欢迎回来，{}！", session.user.display_name()));
            ctx.set_state.update(|state| state.session = Some(session));
            Ok(true)
        }
        Err(error) => match error.kind {
            ErrorKind::Unauthorized => {
                ctx.notifications.error("用户名或密码错误");
                Ok(false)
            }
            ErrorKind::Network => {
                ctx.notifications.error("网络错误，请检查连接");
                Err(error)
            }
            _ => {
                // 优先展示后端给的 message
                if error.message.is_empty() {
                    ctx.notifications.error("登录失败，请重试");
                } else {
                    ctx.notifications.error(error.message.clone());
                }
                Ok(false)
            }
        },
    }
}

/// 登出并清除状态
///
/// 不调用后端，无条件清除。导航由路由服务监听认证信号自动完成。
pub fn logout(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.update(|state| state.session = None);
    ctx.notifications.success("已退出登录");
}

/// 统一的「会话失效」处理（商品接口返回 401 时调用）
///
/// 清空持久化与内存状态；路由服务监听到信号翻转后跳转登录，
/// 每个 401 响应只会产生一次跳转。
pub fn handle_unauthorized(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.update(|state| state.session = None);
    ctx.notifications.error("登录已过期，请重新登录");
}
