use crate::{LoginRequest, LoginResponse, Product, ProductPayload};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths can carry resource ids (`/api/products/{id}`), hence `path()` is a
/// method rather than a constant.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the call carries the bearer token.
    const REQUIRES_AUTH: bool = true;
    /// The URL path, relative to the API base.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

/// Log in with credentials. The only unauthenticated call.
impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
    fn path(&self) -> String {
        "/api/auth/login".to_string()
    }
}

/// List all products
#[derive(Debug, Serialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/products".to_string()
    }
}

/// Fetch one product by id
#[derive(Debug, Serialize)]
pub struct GetProductRequest {
    pub id: i64,
}

impl ApiRequest for GetProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/products/{}", self.id)
    }
}

/// Create a new product (the body is the payload itself)
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreateProductRequest(pub ProductPayload);

impl ApiRequest for CreateProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/products".to_string()
    }
}

/// Update an existing product. The id rides in the path, the payload in the body.
#[derive(Debug, Serialize)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub id: i64,
    #[serde(flatten)]
    pub payload: ProductPayload,
}

impl ApiRequest for UpdateProductRequest {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/api/products/{}", self.id)
    }
}

/// Delete a product. The backend answers 204, so success carries no body.
#[derive(Debug, Serialize)]
pub struct DeleteProductRequest {
    #[serde(skip)]
    pub id: i64,
}

impl ApiRequest for DeleteProductRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/products/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_methods() {
        assert_eq!(
            LoginRequest {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            }
            .path(),
            "/api/auth/login"
        );
        assert_eq!(ListProductsRequest.path(), "/api/products");
        assert_eq!(GetProductRequest { id: 42 }.path(), "/api/products/42");
        assert_eq!(DeleteProductRequest { id: 7 }.path(), "/api/products/7");
        assert_eq!(ListProductsRequest::METHOD.as_str(), "GET");
        assert_eq!(UpdateProductRequest::METHOD.as_str(), "PUT");
    }

    #[test]
    fn test_only_login_skips_auth() {
        assert!(!LoginRequest::REQUIRES_AUTH);
        assert!(ListProductsRequest::REQUIRES_AUTH);
        assert!(GetProductRequest::REQUIRES_AUTH);
        assert!(CreateProductRequest::REQUIRES_AUTH);
        assert!(UpdateProductRequest::REQUIRES_AUTH);
        assert!(DeleteProductRequest::REQUIRES_AUTH);
    }

    #[test]
    fn test_update_body_flattens_payload_without_id() {
        let request = UpdateProductRequest {
            id: 3,
            payload: ProductPayload {
                name: "X".to_string(),
                category: "Books".to_string(),
                price: 9.99,
                quantity: 5,
                description: String::new(),
            },
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "X");
        assert_eq!(body["quantity"], 5);
    }
}
