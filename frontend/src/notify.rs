//! 全局通知
//!
//! 页面级的「消息 + 是否出错」信号提升为全局 Context：
//! 成功 3 秒自动消失，错误 5 秒。所有失败都只提示一次，
//! 之后交给用户手动重试——不做自动重试。

use leptos::prelude::*;
use std::time::Duration;

/// 通知级别
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// 一条通知
#[derive(Clone)]
pub struct Notification {
    pub message: String,
    pub level: Level,
}

/// 通知上下文（Copy 的信号句柄，可捕获进任意闭包）
#[derive(Clone, Copy)]
pub struct Notifications {
    current: ReadSignal<Option<Notification>>,
    set_current: WriteSignal<Option<Notification>>,
}

impl Notifications {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), Level::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), Level::Error);
    }

    fn push(&self, message: String, level: Level) {
        let seconds = match level {
            Level::Success => 3,
            Level::Error => 5,
        };
        self.set_current.set(Some(Notification { message, level }));

        let set_current = self.set_current;
        set_timeout(move || set_current.set(None), Duration::from_secs(seconds));
    }

    pub fn current(&self) -> ReadSignal<Option<Notification>> {
        self.current
    }
}

/// 创建并注入通知上下文
pub fn provide_notifications() -> Notifications {
    let (current, set_current) = signal(Option::<Notification>::None);
    let notifications = Notifications {
        current,
        set_current,
    };
    provide_context(notifications);
    notifications
}

/// 从 Context 获取通知上下文
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications context should be provided")
}

/// 通知提示框（App 根部挂一次）
#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = use_notifications();
    let current = notifications.current();

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    match current.get().map(|n| n.level) {
                        Some(Level::Error) => "alert alert-error shadow-lg",
                        _ => "alert alert-success shadow-lg",
                    }
                }>
                    <span>{move || current.get().map(|n| n.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
