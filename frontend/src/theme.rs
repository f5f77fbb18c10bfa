//! 主题切换
//!
//! 亮/暗两档偏好，持久化在 LocalStorage，落地为文档根元素上的
//! daisyUI `data-theme` 属性。只影响呈现，与业务状态完全正交。

use crate::web::LocalStorage;
use leptos::prelude::*;

/// 主题持久化键
const STORAGE_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_raw(raw: &str) -> Self {
        if raw == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 把主题写到 <html> 上
fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let (theme, set_theme) = signal(Theme::default());
        Self { theme, set_theme }
    }

    /// 切换并持久化
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        LocalStorage::set(STORAGE_THEME_KEY, next.as_str());
        apply_theme(next);
        self.set_theme.set(next);
    }
}

/// 从 Context 获取主题上下文
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// 启动时恢复持久化的主题偏好
pub fn init_theme(ctx: &ThemeContext) {
    let theme = LocalStorage::get(STORAGE_THEME_KEY)
        .map(|raw| Theme::from_raw(&raw))
        .unwrap_or_default();
    apply_theme(theme);
    ctx.set_theme.set(theme);
}
