//! 报表聚合
//!
//! 仪表盘与报表页共用的统计逻辑：对一次拉取的完整商品列表
//! 做同步纯折叠。没有增量更新，也没有后端聚合接口——
//! 每次拉取后整体重算，从不持久化。

use crate::Product;

/// 价值排名条目数
const TOP_PRODUCTS_LIMIT: usize = 5;

/// 按价值排名的商品条目
#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    pub name: String,
    pub quantity: u32,
    pub value: f64,
}

/// 保持键首次出现顺序的直方图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    entries: Vec<(String, u32)>,
}

impl Histogram {
    fn bump(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    /// 按首次出现顺序排列的 (键, 计数)
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// 指定键的计数（缺失为 0）
    pub fn count(&self, key: &str) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// 最大计数，绘制比例条时作分母用
    pub fn max_count(&self) -> u32 {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 聚合报表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryReport {
    pub total_products: usize,
    pub total_value: f64,
    pub low_stock_items: usize,
    pub top_products: Vec<TopProduct>,
    pub stock_status: Histogram,
    pub categories: Histogram,
}

impl InventoryReport {
    /// 对完整商品列表做一次纯折叠
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let total_value = products.iter().map(Product::value).sum();
        let low_stock_items = products.iter().filter(|p| p.status.is_low()).count();

        let mut top_products: Vec<TopProduct> = products
            .iter()
            .map(|p| TopProduct {
                name: p.name.clone(),
                quantity: p.quantity,
                value: p.value(),
            })
            .collect();
        // 稳定排序：价值相同的条目保持原数组顺序
        top_products
            .sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(core::cmp::Ordering::Equal));
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        let mut stock_status = Histogram::default();
        let mut categories = Histogram::default();
        for product in products {
            stock_status.bump(product.status.label());
            categories.bump(&product.category);
        }

        Self {
            total_products,
            total_value,
            low_stock_items,
            top_products,
            stock_status,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StockStatus;

    fn product(name: &str, category: &str, price: f64, quantity: u32, status: StockStatus) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
            description: None,
            status,
            sku: None,
            supplier: None,
            location: None,
        }
    }

    #[test]
    fn test_total_value_and_top_by_value() {
        let products = vec![
            product("A", "Books", 10.0, 2, StockStatus::InStock),
            product("B", "Books", 5.0, 1, StockStatus::InStock),
            product("C", "Books", 100.0, 1, StockStatus::InStock),
        ];
        let report = InventoryReport::from_products(&products);

        assert_eq!(report.total_products, 3);
        assert_eq!(report.total_value, 125.0);
        assert_eq!(report.top_products[0].name, "C");
        assert_eq!(report.top_products[0].value, 100.0);
    }

    #[test]
    fn test_low_stock_counts_low_and_out_only() {
        let products = vec![
            product("A", "Books", 1.0, 10, StockStatus::InStock),
            product("B", "Books", 1.0, 3, StockStatus::LowStock),
            product("C", "Books", 1.0, 0, StockStatus::OutOfStock),
        ];
        let report = InventoryReport::from_products(&products);
        assert_eq!(report.low_stock_items, 2);
    }

    #[test]
    fn test_top_products_truncated_to_five() {
        let products: Vec<Product> = (0..8)
            .map(|i| product(&format!("P{i}"), "Books", f64::from(i), 1, StockStatus::InStock))
            .collect();
        let report = InventoryReport::from_products(&products);

        assert_eq!(report.top_products.len(), 5);
        // 降序：价值最高的在前
        assert_eq!(report.top_products[0].name, "P7");
        assert_eq!(report.top_products[4].name, "P3");
    }

    #[test]
    fn test_top_products_ties_keep_original_order() {
        let products = vec![
            product("first", "Books", 10.0, 1, StockStatus::InStock),
            product("second", "Books", 10.0, 1, StockStatus::InStock),
            product("third", "Books", 20.0, 1, StockStatus::InStock),
        ];
        let report = InventoryReport::from_products(&products);

        assert_eq!(report.top_products[0].name, "third");
        assert_eq!(report.top_products[1].name, "first");
        assert_eq!(report.top_products[2].name, "second");
    }

    #[test]
    fn test_histograms_keep_first_seen_order() {
        let products = vec![
            product("A", "Electronics", 1.0, 1, StockStatus::InStock),
            product("B", "Accessories", 1.0, 1, StockStatus::OutOfStock),
            product("C", "Electronics", 1.0, 1, StockStatus::InStock),
        ];
        let report = InventoryReport::from_products(&products);

        let categories: Vec<&str> = report
            .categories
            .entries()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(categories, vec!["Electronics", "Accessories"]);
        assert_eq!(report.categories.count("Electronics"), 2);
        assert_eq!(report.stock_status.count("IN_STOCK"), 2);
        assert_eq!(report.stock_status.count("OUT_OF_STOCK"), 1);
        assert_eq!(report.stock_status.count("LOW_STOCK"), 0);
    }

    #[test]
    fn test_empty_product_list() {
        let report = InventoryReport::from_products(&[]);
        assert_eq!(report.total_products, 0);
        assert_eq!(report.total_value, 0.0);
        assert!(report.top_products.is_empty());
        assert!(report.categories.is_empty());
        assert_eq!(report.stock_status.max_count(), 0);
    }
}
