//! 商品 CRUD 客户端（传统页面版）
//!
//! 镜像 SPA 商品列表的五个端点，路径与方法取自共享协议定义。
//! 传统页面由服务端会话承载身份，请求不带 Bearer 头。

use crate::request::{HttpClient, HttpRequest};
use ims_shared::protocol::{
    ApiRequest, CreateProductRequest, DeleteProductRequest, GetProductRequest,
    ListProductsRequest, UpdateProductRequest,
};
use ims_shared::{ApiError, ApiResult, Product, ProductPayload};

/// 商品接口网关
///
/// 对 HTTP 实现泛型，生产与测试共用同一套逻辑。
pub struct ProductApi<C: HttpClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> ProductApi<C> {
    pub fn new(client: C) -> Self {
        Self {
            base_url: String::new(),
            client,
        }
    }

    pub fn with_base_url(base_url: &str, client: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(response: &crate::request::HttpResponse) -> ApiResult<()> {
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_status(response.status, String::new()))
        }
    }

    /// 获取全部商品
    pub async fn get_all(&self) -> ApiResult<Vec<Product>> {
        let request = ListProductsRequest;
        let req = HttpRequest::new(&self.url(&request.path()), ListProductsRequest::METHOD);
        let response = self.client.send(req).await?;
        Self::check(&response)?;
        response.json()
    }

    /// 按 id 获取单个商品
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Product> {
        let request = GetProductRequest { id };
        let req = HttpRequest::new(&self.url(&request.path()), GetProductRequest::METHOD);
        let response = self.client.send(req).await?;
        Self::check(&response)?;
        response.json()
    }

    /// 创建商品
    pub async fn create(&self, payload: ProductPayload) -> ApiResult<Product> {
        let request = CreateProductRequest(payload);
        let req = HttpRequest::new(&self.url(&request.path()), CreateProductRequest::METHOD)
            .with_header("Content-Type", "application/json")
            .with_json_body(&request)?;
        let response = self.client.send(req).await?;
        Self::check(&response)?;
        response.json()
    }

    /// 更新商品
    pub async fn update(&self, id: i64, payload: ProductPayload) -> ApiResult<Product> {
        let request = UpdateProductRequest { id, payload };
        let req = HttpRequest::new(&self.url(&request.path()), UpdateProductRequest::METHOD)
            .with_header("Content-Type", "application/json")
            .with_json_body(&request)?;
        let response = self.client.send(req).await?;
        Self::check(&response)?;
        response.json()
    }

    /// 删除商品（204，无响应体）
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let request = DeleteProductRequest { id };
        let req = HttpRequest::new(&self.url(&request.path()), DeleteProductRequest::METHOD);
        let response = self.client.send(req).await?;
        Self::check(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;
    use ims_shared::ErrorKind;

    // =========================================================
    // 辅助函数
    // =========================================================

    fn sample_payload() -> ProductPayload {
        ProductPayload {
            name: "Wireless Mouse".to_string(),
            category: "Accessories".to_string(),
            price: 29.99,
            quantity: 45,
            description: String::new(),
        }
    }

    const PRODUCT_JSON: &str = r#"{
        "id": 2,
        "name": "Wireless Mouse",
        "category": "Accessories",
        "price": 29.99,
        "quantity": 45,
        "status": "IN_STOCK"
    }"#;

    // =========================================================
    // get_all 测试
    // =========================================================

    #[tokio::test]
    async fn test_get_all_parses_product_list() {
        let client = MockHttpClient::new().with_response(200, &format!("[{PRODUCT_JSON}]"));
        let api = ProductApi::new(client);

        let products = api.get_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Wireless Mouse");

        // 只发了一次 GET /api/products
        let requests = api.client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], ("GET".to_string(), "/api/products".to_string()));
    }

    #[tokio::test]
    async fn test_get_by_id_hits_id_path() {
        let client = MockHttpClient::new().with_response(200, PRODUCT_JSON);
        let api = ProductApi::new(client);

        let product = api.get_by_id(2).await.unwrap();
        assert_eq!(product.id, 2);

        let requests = api.client.requests.borrow();
        assert_eq!(requests[0].1, "/api/products/2");
    }

    // =========================================================
    // create / update 测试
    // =========================================================

    #[tokio::test]
    async fn test_create_posts_exactly_once() {
        let client = MockHttpClient::new().with_response(201, PRODUCT_JSON);
        let api = ProductApi::new(client);

        api.create(sample_payload()).await.unwrap();

        let requests = api.client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], ("POST".to_string(), "/api/products".to_string()));
    }

    #[tokio::test]
    async fn test_update_puts_to_id_path() {
        let client = MockHttpClient::new().with_response(200, PRODUCT_JSON);
        let api = ProductApi::new(client);

        api.update(2, sample_payload()).await.unwrap();

        let requests = api.client.requests.borrow();
        assert_eq!(requests[0], ("PUT".to_string(), "/api/products/2".to_string()));
    }

    // =========================================================
    // delete 与错误分类测试
    // =========================================================

    #[tokio::test]
    async fn test_delete_treats_204_as_success() {
        let client = MockHttpClient::new().with_response(204, "");
        let api = ProductApi::new(client);

        assert!(api.delete(7).await.is_ok());

        let requests = api.client.requests.borrow();
        assert_eq!(requests[0], ("DELETE".to_string(), "/api/products/7".to_string()));
    }

    #[tokio::test]
    async fn test_unauthorized_is_classified() {
        let client = MockHttpClient::new().with_response(401, "");
        let api = ProductApi::new(client);

        let error = api.get_all().await.unwrap_err();
        assert!(error.is_unauthorized());
    }

    #[tokio::test]
    async fn test_server_error_is_classified() {
        let client = MockHttpClient::new().with_response(500, "");
        let api = ProductApi::new(client);

        let error = api.delete(1).await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::Server(500));
    }

    #[tokio::test]
    async fn test_garbage_body_is_parse_error() {
        let client = MockHttpClient::new().with_response(200, "not json");
        let api = ProductApi::new(client);

        let error = api.get_all().await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::Parse);
    }
}
