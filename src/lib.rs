//! IMS 传统页面增强脚本
//!
//! 面向服务端渲染的 HTML 页面（非 SPA 渲染路径）的 wasm 模块，
//! 做渐进增强：移动端导航、滚动动画、登录辅助、表格排序/搜索、
//! 以及一套镜像 SPA 商品列表的 fetch CRUD 客户端。
//! 每个增强都以页面上存在对应锚点元素为前提，缺了就整体跳过。

pub mod api;
pub mod dom;
pub mod enhance;
pub mod forms;
pub mod request;
pub mod table;

use wasm_bindgen::prelude::*;

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

pub(crate) use log_info;

/// 模块加载入口：按页面锚点逐项接线
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    enhance::init_navigation();
    enhance::init_animations();
    enhance::init_login_form();
    enhance::init_stats_counter();
    enhance::init_product_management();
    forms::init_form_validation();

    log_info!("[ims] page enhancements initialized");
}
