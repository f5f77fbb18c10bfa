//! 页面增强接线
//!
//! 对应服务端渲染页面上的各个锚点：移动端导航、滚动动画、
//! 数字滚动、登录辅助、商品表格（确认删除 / 防抖搜索 / 列排序 /
//! fetch 渲染）。所有接线都是「有锚点才生效」，各增强互不依赖。

use crate::api::ProductApi;
use crate::log_info;
use crate::request::FetchHttpClient;
use crate::{dom, table};
use ims_shared::Product;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("确定要删除这个商品吗？")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

// =========================================================
// 导航
// =========================================================

/// 移动端汉堡菜单与锚点平滑滚动
pub fn init_navigation() {
    let hamburger = dom::query(".hamburger");
    let nav_menu = dom::query(".nav-menu");

    if let (Some(hamburger), Some(nav_menu)) = (hamburger, nav_menu) {
        {
            let hamburger = hamburger.clone();
            let nav_menu = nav_menu.clone();
            dom::listen(&hamburger.clone(), "click", move |_| {
                let _ = hamburger.class_list().toggle("active");
                let _ = nav_menu.class_list().toggle("active");
            });
        }

        // 点击导航链接后收起移动端菜单
        for link in dom::query_all(".nav-link") {
            let hamburger = hamburger.clone();
            let nav_menu = nav_menu.clone();
            dom::listen(&link, "click", move |_| {
                let _ = hamburger.class_list().remove_1("active");
                let _ = nav_menu.class_list().remove_1("active");
            });
        }
    }

    for anchor in dom::query_all("a[href^='#']") {
        let anchor_clone = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor_clone.get_attribute("href") else {
                return;
            };
            if let Some(target) = dom::query(&href) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

// =========================================================
// 滚动动画
// =========================================================

/// 进入视口时的淡入上移动画
pub fn init_animations() {
    let targets = dom::query_all(".feature-card, .stat-item, .floating-box, .floating-element");
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(element) = dom::html_element(entry.target()) {
                    let _ = element.style().set_property("opacity", "1");
                    let _ = element.style().set_property("transform", "translateY(0)");
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        callback.forget();
        return;
    };
    callback.forget();

    for element in targets {
        if let Some(html) = dom::html_element(element.clone()) {
            let _ = html.style().set_property("opacity", "0");
            let _ = html.style().set_property("transform", "translateY(30px)");
            let _ = html
                .style()
                .set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        }
        observer.observe(&element);
    }
}

// =========================================================
// 数字滚动
// =========================================================

/// 统计数字进入视口后从 0 滚动到 data-target
pub fn init_stats_counter() {
    let stats = dom::query_all(".stat-number");
    if stats.is_empty() {
        return;
    }

    let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target_element = entry.target();
                // 只滚一次
                observer.unobserve(&target_element);
                if let Some(element) = dom::html_element(target_element) {
                    let target = element
                        .dataset()
                        .get("target")
                        .and_then(|raw| raw.parse::<f64>().ok())
                        .unwrap_or(0.0);
                    start_count_up(element, target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        callback.forget();
        return;
    };
    callback.forget();

    for element in stats {
        observer.observe(&element);
    }
}

/// 20ms 一步、共 100 步的数字滚动
fn start_count_up(element: web_sys::HtmlElement, target: f64) {
    let current = Rc::new(Cell::new(0.0));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let closure = {
        let current = current.clone();
        let handle = handle.clone();
        let element = element.clone();
        Closure::<dyn Fn()>::new(move || {
            let next = current.get() + target / 100.0;
            if next >= target {
                current.set(target);
                if let (Some(window), Some(h)) = (web_sys::window(), handle.get()) {
                    window.clear_interval_with_handle(h);
                }
            } else {
                current.set(next);
            }
            element.set_text_content(Some(&format!("{}", current.get().floor() as i64)));
        })
    };

    if let Some(window) = web_sys::window() {
        if let Ok(h) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            20,
        ) {
            handle.set(Some(h));
        }
    }
    closure.forget();
}

// =========================================================
// 登录辅助
// =========================================================

/// 角色标签高亮 / 说明切换 / 演示账号填充，以及密码可见性切换
pub fn init_login_form() {
    for tab in dom::query_all(".credential-tab") {
        let tab_clone = tab.clone();
        dom::listen(&tab, "click", move |_| {
            for other in dom::query_all(".credential-tab") {
                let _ = other.class_list().remove_1("active");
            }
            let _ = tab_clone.class_list().add_1("active");

            let Some(tab_html) = dom::html_element(tab_clone.clone()) else {
                return;
            };
            let Some(role) = tab_html.dataset().get("role") else {
                return;
            };

            for info in dom::query_all(".credential-info") {
                if let Some(info) = dom::html_element(info) {
                    let _ = info.style().set_property("display", "none");
                }
            }
            if let Some(active_info) = dom::query(&format!("#{role}-cred")) {
                if let Some(active_info) = dom::html_element(active_info) {
                    let _ = active_info.style().set_property("display", "block");
                }
            }

            // 演示账号自动填充（硬编码，仅为演示便利，不是安全特性）
            let username = dom::input("input[name='username']");
            let password = dom::input("input[name='password']");
            if let (Some(username), Some(password)) = (username, password) {
                match role.as_str() {
                    "admin" => {
                        username.set_value("admin");
                        password.set_value("admin123");
                    }
                    "user" => {
                        username.set_value("user");
                        password.set_value("user123");
                    }
                    _ => {}
                }
            }
        });
    }

    for btn in dom::query_all(".user-type-btn") {
        let btn_clone = btn.clone();
        dom::listen(&btn, "click", move |_| {
            for other in dom::query_all(".user-type-btn") {
                let _ = other.class_list().remove_1("active");
            }
            let _ = btn_clone.class_list().add_1("active");

            let Some(btn_html) = dom::html_element(btn_clone.clone()) else {
                return;
            };
            let Some(user_type) = btn_html.dataset().get("type") else {
                return;
            };
            set_user_type_field(&user_type);
        });
    }

    if let (Some(toggle), Some(password)) = (
        dom::query(".password-toggle"),
        dom::input("input[type='password']"),
    ) {
        dom::listen(&toggle, "click", move |_| {
            let next = if password.type_() == "password" {
                "text"
            } else {
                "password"
            };
            password.set_type(next);
        });
    }
}

/// 写入（必要时创建）隐藏的 userType 字段
fn set_user_type_field(user_type: &str) {
    if let Some(existing) = dom::input("input[name='userType']") {
        existing.set_value(user_type);
        return;
    }
    let Some(document) = dom::document() else {
        return;
    };
    let Some(form) = dom::query(".login-form") else {
        return;
    };
    let Ok(element) = document.create_element("input") else {
        return;
    };
    let Ok(hidden) = element.dyn_into::<HtmlInputElement>() else {
        return;
    };
    hidden.set_type("hidden");
    hidden.set_name("userType");
    hidden.set_value(user_type);
    let _ = form.append_child(&hidden);
}

// =========================================================
// 商品表格
// =========================================================

/// 确认删除 / 防抖搜索 / 列排序 / fetch 渲染商品表
pub fn init_product_management() {
    // 服务端渲染的删除按钮：未确认就拦下默认动作
    for btn in dom::query_all(".btn-delete") {
        dom::listen(&btn, "click", move |event| {
            if !confirm_delete() {
                event.prevent_default();
            }
        });
    }

    if let Some(search_input) = dom::input(".search-input") {
        init_search(search_input);
    }

    for btn in dom::query_all(".sort-btn") {
        let btn_clone = btn.clone();
        dom::listen(&btn, "click", move |_| {
            let Some(btn_html) = dom::html_element(btn_clone.clone()) else {
                return;
            };
            let Some(column) = btn_html.dataset().get("column") else {
                return;
            };
            if let Some(tbody) = dom::query(".product-table table tbody") {
                table::sort_table_rows(&tbody, &column);
            }
        });
    }

    // 商品页 / 首页：fetch 渲染商品表格
    let path = current_pathname();
    if (path == "/products" || path == "/") && dom::query(".product-table tbody").is_some() {
        load_products();
    }
}

/// 输入 500ms 后自动提交；提交（自动或手动）前先过 2 字符门槛
fn init_search(search_input: HtmlInputElement) {
    let Some(form_element) = search_input.closest("form").ok().flatten() else {
        return;
    };
    let Ok(form) = form_element.dyn_into::<HtmlFormElement>() else {
        return;
    };

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    {
        let pending = pending.clone();
        let form = form.clone();
        let input = search_input.clone();
        dom::listen(&search_input, "input", move |_| {
            if let Some(handle) = pending.take() {
                dom::clear_timeout(handle);
            }
            let form = form.clone();
            let input = input.clone();
            let handle = dom::set_timeout_once(500, move || {
                if table::is_valid_search_term(&input.value()) {
                    let _ = form.submit();
                }
            });
            pending.set(handle);
        });
    }

    {
        let input = search_input.clone();
        dom::listen(&form.clone(), "submit", move |event| {
            if !table::is_valid_search_term(&input.value()) {
                event.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("搜索至少需要 2 个字符");
                }
            }
        });
    }
}

/// 拉取全量商品并重建表格行
pub(crate) fn load_products() {
    wasm_bindgen_futures::spawn_local(async {
        let api = ProductApi::new(FetchHttpClient);
        match api.get_all().await {
            Ok(products) => render_product_rows(&products),
            Err(error) => {
                log_info!("[ims] 加载商品失败: {error}");
                show_toast("加载商品失败", true);
            }
        }
    });
}

fn render_product_rows(products: &[Product]) {
    let Some(tbody) = dom::query(".product-table tbody") else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };

    tbody.set_inner_html("");
    for product in products {
        if let Some(row) = build_product_row(&document, product) {
            let _ = tbody.append_child(&row);
        }
    }
}

/// 逐节点构建行（文本一律走 textContent，不拼 HTML）
fn build_product_row(document: &Document, product: &Product) -> Option<Element> {
    let row = document.create_element("tr").ok()?;

    // (排序列名, data 属性原始值, 展示文本)
    let cells = [
        ("name", product.name.clone(), product.name.clone()),
        ("category", product.category.clone(), product.category.clone()),
        (
            "price",
            product.price.to_string(),
            format!("￥{:.2}", product.price),
        ),
        (
            "quantity",
            product.quantity.to_string(),
            product.quantity.to_string(),
        ),
    ];
    for (column, raw, text) in cells {
        let cell = document.create_element("td").ok()?;
        cell.set_attribute(&format!("data-{column}"), &raw).ok()?;
        cell.set_text_content(Some(&text));
        row.append_child(&cell).ok()?;
    }

    let actions = document.create_element("td").ok()?;
    let wrapper = document.create_element("div").ok()?;
    wrapper.set_class_name("action-buttons");

    let edit = document.create_element("a").ok()?;
    edit.set_class_name("btn-edit");
    edit.set_attribute("href", &format!("/products/edit/{}", product.id))
        .ok()?;
    edit.set_text_content(Some("编辑"));
    wrapper.append_child(&edit).ok()?;

    let delete = document.create_element("button").ok()?;
    delete.set_class_name("btn-delete");
    delete.set_text_content(Some("删除"));
    let id = product.id;
    dom::listen(&delete, "click", move |_| delete_product(id));
    wrapper.append_child(&delete).ok()?;

    actions.append_child(&wrapper).ok()?;
    row.append_child(&actions).ok()?;
    Some(row)
}

/// 确认后删除并整表重载
fn delete_product(id: i64) {
    if !confirm_delete() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let api = ProductApi::new(FetchHttpClient);
        match api.delete(id).await {
            Ok(()) => {
                show_toast("商品删除成功", false);
                load_products();
            }
            Err(error) => {
                log_info!("[ims] 删除商品失败: {error}");
                show_toast("删除商品失败", true);
            }
        }
    });
}

/// 轻量 toast：3 秒后自动移除
pub(crate) fn show_toast(message: &str, is_error: bool) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_class_name(if is_error {
        "toast toast-error"
    } else {
        "toast toast-success"
    });
    toast.set_text_content(Some(message));
    let background = if is_error { "#dc3545" } else { "#28a745" };
    let _ = toast.set_attribute(
        "style",
        &format!(
            "position:fixed;top:20px;right:20px;padding:15px 20px;\
             border-radius:10px;color:white;font-weight:500;z-index:10000;\
             max-width:300px;background-color:{background};"
        ),
    );
    let _ = body.append_child(&toast);

    let toast_clone = toast.clone();
    let _ = dom::set_timeout_once(3000, move || {
        toast_clone.remove();
    });
}
