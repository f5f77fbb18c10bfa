//! 商品表单校验
//!
//! Add/Edit 两个表单共用的提交前校验：原始字符串 → 类型化请求体。
//! 任何字段不通过就拒绝整次提交并给出逐字段错误，调用方此时
//! 不得发起后端请求。

use crate::{CATEGORIES, ProductPayload};

/// 表单原始输入（均为未解析的字符串）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormInput {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

/// 逐字段错误信息（`None` 表示该字段通过）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub category: Option<&'static str>,
    pub price: Option<&'static str>,
    pub quantity: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

/// 校验表单输入并转换为请求体
///
/// 规则：
/// - `name` 去除首尾空白后非空
/// - `category` 必须在固定类别列表内
/// - `price` 可解析为有限小数且 > 0
/// - `quantity` 可解析为整数且 ≥ 0
/// - `description` 可选，不做约束
pub fn validate_product_form(input: &ProductFormInput) -> Result<ProductPayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    if input.name.trim().is_empty() {
        errors.name = Some("请输入商品名称");
    }

    if !CATEGORIES.contains(&input.category.as_str()) {
        errors.category = Some("请选择商品类别");
    }

    let price = match input.price.trim().parse::<f64>() {
        Ok(value) if value > 0.0 && value.is_finite() => Some(value),
        _ => {
            errors.price = Some("请输入大于 0 的价格");
            None
        }
    };

    let quantity = match input.quantity.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.quantity = Some("请输入不小于 0 的整数数量");
            None
        }
    };

    match (price, quantity) {
        (Some(price), Some(quantity)) if errors.is_empty() => Ok(ProductPayload {
            name: input.name.trim().to_string(),
            category: input.category.clone(),
            price,
            quantity,
            description: input.description.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductFormInput {
        ProductFormInput {
            name: "X".to_string(),
            category: "Books".to_string(),
            price: "9.99".to_string(),
            quantity: "5".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_input_produces_payload() {
        let payload = validate_product_form(&valid_input()).unwrap();
        assert_eq!(payload.name, "X");
        assert_eq!(payload.category, "Books");
        assert_eq!(payload.price, 9.99);
        assert_eq!(payload.quantity, 5);
    }

    #[test]
    fn test_zero_price_is_rejected() {
        // 价格必须严格大于 0
        let input = ProductFormInput {
            price: "0".to_string(),
            ..valid_input()
        };
        let errors = validate_product_form(&input).unwrap_err();
        assert!(errors.price.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_negative_and_garbage_price_rejected() {
        for bad in ["-1", "abc", "", "inf", "NaN"] {
            let input = ProductFormInput {
                price: bad.to_string(),
                ..valid_input()
            };
            assert!(validate_product_form(&input).is_err(), "price {bad:?} 应被拒绝");
        }
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let input = ProductFormInput {
            name: "   ".to_string(),
            ..valid_input()
        };
        let errors = validate_product_form(&input).unwrap_err();
        assert!(errors.name.is_some());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let input = ProductFormInput {
            category: "Gadgets".to_string(),
            ..valid_input()
        };
        let errors = validate_product_form(&input).unwrap_err();
        assert!(errors.category.is_some());
    }

    #[test]
    fn test_quantity_zero_is_allowed() {
        let input = ProductFormInput {
            quantity: "0".to_string(),
            ..valid_input()
        };
        let payload = validate_product_form(&input).unwrap();
        assert_eq!(payload.quantity, 0);
    }

    #[test]
    fn test_quantity_must_be_integer() {
        for bad in ["-1", "1.5", "many", ""] {
            let input = ProductFormInput {
                quantity: bad.to_string(),
                ..valid_input()
            };
            let errors = validate_product_form(&input).unwrap_err();
            assert!(errors.quantity.is_some(), "quantity {bad:?} 应被拒绝");
        }
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let input = ProductFormInput::default();
        let errors = validate_product_form(&input).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.category.is_some());
        assert!(errors.price.is_some());
        assert!(errors.quantity.is_some());
    }
}
