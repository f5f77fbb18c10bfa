//! REST API 客户端
//!
//! 基于 gloo-net 的轻量客户端。端点路径与方法由共享协议定义驱动，
//! 商品接口自动携带 `Authorization: Bearer <token>`。
//!
//! 错误映射：
//! - 传输失败（没有收到响应）→ `Network`
//! - 非 2xx → 按状态码分类，尽量带上响应体中的 message
//! - 响应体解码失败 → `Parse`

use gloo_net::http::{Request, RequestBuilder, Response};
use ims_shared::protocol::{
    ApiRequest, CreateProductRequest, DeleteProductRequest, GetProductRequest, HttpMethod,
    ListProductsRequest, UpdateProductRequest,
};
use ims_shared::{
    ApiError, ApiResult, BEARER_PREFIX, HEADER_AUTHORIZATION, LoginRequest, LoginResponse, Product,
    ProductPayload,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// 后端错误响应体（只关心 message 字段）
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ImsApi {
    base_url: String,
    token: Option<String>,
}

impl ImsApi {
    /// 携带会话令牌的客户端
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            base_url: String::new(),
            token,
        }
    }

    /// 未认证客户端（仅登录接口使用）
    pub fn without_token() -> Self {
        Self::default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn builder(&self, method: HttpMethod, url: &str, requires_auth: bool) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        match (&self.token, requires_auth) {
            (Some(token), true) => {
                builder.header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}"))
            }
            _ => builder,
        }
    }

    // =========================================================
    // 端点方法
    // =========================================================

    /// 登录
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send_json(request).await
    }

    /// 获取全部商品
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.send_empty(&ListProductsRequest).await
    }

    /// 按 id 获取单个商品
    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        self.send_empty(&GetProductRequest { id }).await
    }

    /// 创建商品
    pub async fn create_product(&self, payload: ProductPayload) -> ApiResult<Product> {
        self.send_json(&CreateProductRequest(payload)).await
    }

    /// 更新商品
    pub async fn update_product(&self, id: i64, payload: ProductPayload) -> ApiResult<Product> {
        self.send_json(&UpdateProductRequest { id, payload }).await
    }

    /// 删除商品（后端返回 204，无响应体）
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        let request = DeleteProductRequest { id };
        let url = self.url(&request.path());
        let response = self
            .builder(
                DeleteProductRequest::METHOD,
                &url,
                DeleteProductRequest::REQUIRES_AUTH,
            )
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::into_error(response).await);
        }
        Ok(())
    }

    // =========================================================
    // 发送与解码
    // =========================================================

    /// 无请求体的调用
    async fn send_empty<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let url = self.url(&request.path());
        let response = self
            .builder(R::METHOD, &url, R::REQUIRES_AUTH)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::decode(response).await
    }

    /// 带 JSON 请求体的调用
    async fn send_json<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let url = self.url(&request.path());
        let response = self
            .builder(R::METHOD, &url, R::REQUIRES_AUTH)
            .json(request)
            .map_err(|e| ApiError::parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            return Err(Self::into_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::parse(e.to_string()))
    }

    /// 非 2xx 响应 → 分类错误，带上后端给的 message（若有）
    async fn into_error(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or_default(),
            Err(_) => String::new(),
        };
        ApiError::from_status(status, message)
    }
}
