//! DOM 快捷工具
//!
//! 把 web_sys 常用的「查询 + 转型 + 挂监听」组合收敛到这里，
//! 增强逻辑里只剩业务动作。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// 首个匹配的元素
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// 所有匹配的元素
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// 首个匹配的输入框
pub fn input(selector: &str) -> Option<HtmlInputElement> {
    query(selector)?.dyn_into().ok()
}

/// 首个匹配的块级元素（用于 style / dataset 访问）
pub fn html_element(element: Element) -> Option<HtmlElement> {
    element.dyn_into().ok()
}

/// 挂事件监听
///
/// 闭包 `forget` 泄漏以保持存活：传统页面的监听器与页面同生命周期，
/// 不存在卸载时机。
pub fn listen(target: &web_sys::EventTarget, event: &str, callback: impl Fn(web_sys::Event) + 'static) {
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(callback);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// 一次性的延时回调（所有权交给 JS，触发后自动释放）
pub fn set_timeout_once(millis: i32, callback: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), millis)
        .ok()
}

/// 取消延时回调
pub fn clear_timeout(handle: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(handle);
    }
}
