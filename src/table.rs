//! 表格排序与搜索
//!
//! 纯逻辑核心（比较器、搜索词规则）与 DOM 适配层分开：
//! 核心不碰 web_sys，可以直接测试；适配层只负责把 `<tbody>`
//! 的行按比较结果原地重排。

use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// 搜索词去除空白后至少 2 个字符
pub const MIN_SEARCH_LEN: usize = 2;

/// 列的比较方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 字符串列：大小写不敏感
    Text,
    /// 数值列：剥掉货币符号后按浮点比较
    Numeric,
}

impl ColumnKind {
    /// price 与 quantity 列按数值比较，其余按字符串
    pub fn of(column: &str) -> Self {
        match column {
            "price" | "quantity" => ColumnKind::Numeric,
            _ => ColumnKind::Text,
        }
    }
}

/// 剥掉非数字字符（保留小数点与负号）后解析；解析不动返回 0
pub fn numeric_value(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// 单元格比较（升序）
pub fn compare_cells(kind: ColumnKind, a: &str, b: &str) -> Ordering {
    match kind {
        ColumnKind::Numeric => numeric_value(a)
            .partial_cmp(&numeric_value(b))
            .unwrap_or(Ordering::Equal),
        ColumnKind::Text => a.trim().to_lowercase().cmp(&b.trim().to_lowercase()),
    }
}

/// 搜索词是否满足提交条件
pub fn is_valid_search_term(term: &str) -> bool {
    term.trim().chars().count() >= MIN_SEARCH_LEN
}

// =========================================================
// DOM 适配层
// =========================================================

/// 按列对 `<tbody>` 的行排序（原地重排 DOM 节点）
///
/// 每行的排序键取自 `td[data-<column>]` 单元格的文本内容；
/// 没有该单元格的行按空串参与比较。
pub fn sort_table_rows(tbody: &web_sys::Element, column: &str) {
    let kind = ColumnKind::of(column);
    let selector = format!("td[data-{column}]");

    let Ok(row_list) = tbody.query_selector_all("tr") else {
        return;
    };

    let mut rows: Vec<(String, web_sys::Element)> = (0..row_list.length())
        .filter_map(|i| row_list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|row| {
            let key = row
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|cell| cell.text_content())
                .unwrap_or_default();
            (key, row)
        })
        .collect();

    rows.sort_by(|(a, _), (b, _)| compare_cells(kind, a, b));

    // append_child 对已有子节点是移动语义，按新顺序重挂即完成排序
    for (_, row) in rows {
        let _ = tbody.append_child(&row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_mapping() {
        assert_eq!(ColumnKind::of("price"), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of("quantity"), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of("name"), ColumnKind::Text);
        assert_eq!(ColumnKind::of("category"), ColumnKind::Text);
    }

    #[test]
    fn test_numeric_value_strips_currency() {
        assert_eq!(numeric_value("$12.99"), 12.99);
        assert_eq!(numeric_value("￥1,299.99"), 1299.99);
        assert_eq!(numeric_value("45"), 45.0);
        assert_eq!(numeric_value("-3"), -3.0);
        // 解析不动的内容按 0 处理
        assert_eq!(numeric_value("n/a"), 0.0);
    }

    #[test]
    fn test_numeric_compare() {
        assert_eq!(
            compare_cells(ColumnKind::Numeric, "$9.99", "$100.00"),
            Ordering::Less
        );
        // 字符串比较会把 "100" 排在 "9" 前面，数值比较不会
        assert_eq!(
            compare_cells(ColumnKind::Text, "100", "9"),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_compare_is_case_insensitive() {
        assert_eq!(
            compare_cells(ColumnKind::Text, "Laptop", "laptop"),
            Ordering::Equal
        );
        assert_eq!(
            compare_cells(ColumnKind::Text, "  apple ", "Banana"),
            Ordering::Less
        );
    }

    #[test]
    fn test_search_term_minimum_length() {
        assert!(!is_valid_search_term(""));
        assert!(!is_valid_search_term("a"));
        assert!(!is_valid_search_term("  a  "));
        assert!(is_valid_search_term("ab"));
        assert!(is_valid_search_term(" 鼠标 "));
    }
}
