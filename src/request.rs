//! HTTP 抽象层
//!
//! 与运行环境无关的请求/响应结构和 `HttpClient` trait：
//! 生产实现走浏览器 fetch，测试实现在内存中回放预设响应，
//! CRUD 客户端对两者一视同仁。

use ims_shared::protocol::HttpMethod;
use ims_shared::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use wasm_bindgen::JsCast;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_json_body(mut self, body: &impl serde::Serialize) -> ApiResult<Self> {
        self.body =
            Some(serde_json::to_string(body).map_err(|e| ApiError::parse(e.to_string()))?);
        Ok(self)
    }
}

/// 通用 HTTP 响应结构
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx 即成功
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::parse(e.to_string()))
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 使用 async_trait 支持异步；(?Send) 因为浏览器端的 JsFuture
/// 不是 Send 的。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 实现层: 浏览器 fetch (Production)
// =========================================================

#[derive(Clone, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers =
            web_sys::Headers::new().map_err(|e| ApiError::network(format!("{e:?}")))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ApiError::network(format!("{e:?}")))?;
        }

        let init = web_sys::RequestInit::new();
        init.set_method(req.method.as_str());
        init.set_headers(&headers.into());
        if let Some(body) = &req.body {
            init.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let request = web_sys::Request::new_with_str_and_init(&req.url, &init)
            .map_err(|e| ApiError::network(format!("{e:?}")))?;
        let window = web_sys::window().ok_or_else(|| ApiError::network("window 不可用"))?;

        let resp_value =
            wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
                .await
                .map_err(|e| ApiError::network(format!("{e:?}")))?;
        let response: web_sys::Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::parse("Response 类型转换失败"))?;

        let status = response.status();
        let text_promise = response
            .text()
            .map_err(|e| ApiError::parse(format!("{e:?}")))?;
        let text = wasm_bindgen_futures::JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::parse(format!("{e:?}")))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

// =========================================================
// 实现层: 内存 Mock (测试)
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    responses: std::cell::RefCell<std::collections::VecDeque<HttpResponse>>,
    /// 记录收到的 (method, url)，测试断言调用次数与目标
    pub requests: std::cell::RefCell<Vec<(String, String)>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: std::cell::RefCell::new(std::collections::VecDeque::new()),
            requests: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// 追加一条预设响应（按 FIFO 回放）
    pub fn with_response(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests
            .borrow_mut()
            .push((req.method.as_str().to_string(), req.url.clone()));
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::network("mock: 没有预设响应"))
    }
}
