//! 通用表单校验（传统页面）
//!
//! 必填、邮箱、密码长度三条规则。校验核心是纯函数；
//! DOM 层在 submit 时拦截，逐字段渲染/清除错误节点。

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// 密码最短长度
pub const MIN_PASSWORD_LEN: usize = 6;

/// 必填：去空白后非空
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 结构性邮箱检查：`local@domain`，域名至少带一个非空点段
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

/// 密码长度检查；空串放行（是否必填由 required 规则决定）
pub fn is_valid_password(value: &str) -> bool {
    value.is_empty() || value.chars().count() >= MIN_PASSWORD_LEN
}

// =========================================================
// DOM 层
// =========================================================

/// 在字段下方渲染错误信息（先清掉旧的）
fn show_field_error(field: &HtmlInputElement, message: &str) {
    clear_field_error(field);

    let Some(document) = dom::document() else {
        return;
    };
    let Ok(error_div) = document.create_element("div") else {
        return;
    };
    error_div.set_class_name("field-error");
    error_div.set_text_content(Some(message));
    let _ = error_div.set_attribute("style", "color:#dc3545;font-size:0.8rem;margin-top:5px;");

    if let Some(parent) = field.parent_element() {
        let _ = parent.append_child(&error_div);
    }
    let _ = field.style().set_property("border-color", "#dc3545");
}

/// 清除字段的错误信息
fn clear_field_error(field: &HtmlInputElement) {
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(existing)) = parent.query_selector(".field-error") {
            existing.remove();
        }
    }
    let _ = field.style().set_property("border-color", "#e0e0e0");
}

/// 校验单个表单，渲染错误并返回整体是否通过
fn validate_form(form: &Element) -> bool {
    let mut is_valid = true;

    let collect_inputs = |selector: &str| -> Vec<HtmlInputElement> {
        let Ok(list) = form.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    };

    for field in collect_inputs("[required]") {
        if !is_present(&field.value()) {
            is_valid = false;
            show_field_error(&field, "该字段为必填项");
        } else {
            clear_field_error(&field);
        }
    }

    for field in collect_inputs("input[type=email]") {
        if !field.value().is_empty() && !is_valid_email(&field.value()) {
            is_valid = false;
            show_field_error(&field, "请输入有效的邮箱地址");
        }
    }

    for field in collect_inputs("input[type=password]") {
        if !is_valid_password(&field.value()) {
            is_valid = false;
            show_field_error(&field, "密码至少需要 6 个字符");
        }
    }

    is_valid
}

/// 给页面上的所有表单挂 submit 校验
pub fn init_form_validation() {
    for form in dom::query_all("form") {
        let form_clone = form.clone();
        dom::listen(&form, "submit", move |event| {
            if !validate_form(&form_clone) {
                event.prevent_default();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("x"));
        assert!(is_present(" x "));
        assert!(!is_present(""));
        assert!(!is_present("   "));
    }

    #[test]
    fn test_email_accepts_normal_addresses() {
        assert!(is_valid_email("admin@imspro.com"));
        assert!(is_valid_email("a.b@c.d.e"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@@domain.com"));
        assert!(!is_valid_email("user name@domain.com"));
    }

    #[test]
    fn test_password_length() {
        // 空串放行：必填与否由 required 决定
        assert!(is_valid_password(""));
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
    }
}
