//! 认证服务门面

use super::ApiClient;
use roomstay_shared::error::ApiResult;
use roomstay_shared::{LoginRequest, LoginResponse, RegisterRequest};

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send(credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<LoginResponse> {
        self.send(request).await
    }
}
