//! HTTP 网关
//!
//! 唯一的出站客户端。请求阶段：存在 Token 时附加 Bearer 凭据；
//! 响应阶段：非 2xx 解析服务端错误载荷并映射为 `ApiError`。
//! 只有认证路径上的 401 会清除会话并强制回到登录页——受保护资源上的
//! 401/403 原样抛出，不销毁仍然有效的会话。
//!
//! 无重试、无缓存：每次调用都是一次全新往返。

use crate::session::SessionStore;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use roomstay_shared::error::{ApiError, ApiResult, ErrorResponse};
use roomstay_shared::protocol::{ApiRequest, HttpMethod, is_auth_path};
use roomstay_shared::{API_BASE_PATH, HEADER_AUTHORIZATION};

mod auth;
mod guests;
pub mod images;
mod reservations;
mod rooms;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    /// 同源部署：直接挂在 /api 下
    fn default() -> Self {
        Self::new(API_BASE_PATH)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
            HttpMethod::Patch => Request::patch(url),
        }
    }

    /// 存在会话时附加 Bearer 凭据
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match SessionStore::token() {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// 发送一个类型化请求并解码响应
    pub(crate) async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let path = request.path();
        let url = self.url(&path);
        let builder = Self::authorize(Self::builder(R::METHOD, &url));

        let response = if R::has_body() {
            builder
                .header("Content-Type", "application/json")
                .json(request)
                .map_err(|e| ApiError::serialization(e.to_string()))?
                .send()
                .await
        } else {
            builder.send().await
        }
        .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if (200..300).contains(&status) {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::serialization(e.to_string()))?;
            // 空响应体按 null 解码，兼容 204 与无返回值的端点
            let text = if text.is_empty() {
                "null".to_string()
            } else {
                text
            };
            serde_json::from_str::<R::Response>(&text)
                .map_err(|e| ApiError::serialization(format!("decode {}: {}", path, e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str::<ErrorResponse>(&text).ok();
            let error = ApiError::from_response(status, payload, &text);

            if status == 401 && is_auth_path(&path) {
                self.expire_session();
            }
            Err(error)
        }
    }

    /// 认证路径返回 401：会话已失效，清库并回到登录入口
    fn expire_session(&self) {
        web_sys::console::warn_1(&"[Gateway] auth endpoint returned 401, clearing session".into());
        SessionStore::clear();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// 从 Context 获取 API 网关
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
