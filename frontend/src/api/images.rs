//! 图片服务门面
//!
//! 上传走 multipart 表单，是唯一不经过类型化端点层的请求；
//! 大小与类型校验是纯函数，在发送前由调用方执行。

use super::ApiClient;
use gloo_net::http::Request;
use roomstay_shared::error::{ApiError, ApiResult, ErrorResponse};
use roomstay_shared::protocol::{DeleteImage, UPLOAD_IMAGE_PATH};
use roomstay_shared::{MAX_IMAGE_BYTES, MessageResponse, UploadResponse};

impl ApiClient {
    /// 上传图片文件，返回服务端生成的 URL
    pub async fn upload_image(&self, file: &web_sys::File) -> ApiResult<UploadResponse> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::transport(format!("FormData: {:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::transport(format!("FormData append: {:?}", e)))?;

        // 不手动设置 Content-Type，浏览器会带上 multipart boundary
        let builder = Self::authorize(Request::post(&self.url(UPLOAD_IMAGE_PATH)));
        let response = builder
            .body(form)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if (200..300).contains(&status) {
            response
                .json::<UploadResponse>()
                .await
                .map_err(|e| ApiError::serialization(e.to_string()))
        } else {
            let text = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str::<ErrorResponse>(&text).ok();
            Err(ApiError::from_response(status, payload, &text))
        }
    }

    pub async fn delete_image(&self, filename: &str) -> ApiResult<MessageResponse> {
        self.send(&DeleteImage {
            filename: filename.to_string(),
        })
        .await
    }
}

/// 上传前的客户端校验：大小 ≤ 5MB 且 MIME 以 image/ 开头
///
/// 服务端仍会做权威校验，这里只为更快的用户反馈。
pub fn validate_image_file(size: f64, mime: &str) -> Result<(), String> {
    if size > MAX_IMAGE_BYTES {
        return Err("图片大小不能超过 5MB".to_string());
    }
    if !mime.starts_with("image/") {
        return Err("只允许上传图片文件".to_string());
    }
    Ok(())
}

/// 从图片 URL 提取文件名（删除接口需要）
pub fn filename_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_images() {
        assert!(validate_image_file(1024.0, "image/png").is_ok());
        assert!(validate_image_file(MAX_IMAGE_BYTES, "image/jpeg").is_ok());
    }

    #[test]
    fn rejects_oversized_files() {
        assert!(validate_image_file(MAX_IMAGE_BYTES + 1.0, "image/png").is_err());
    }

    #[test]
    fn rejects_non_image_mime() {
        assert!(validate_image_file(1024.0, "application/pdf").is_err());
        assert!(validate_image_file(1024.0, "text/html").is_err());
        assert!(validate_image_file(1024.0, "").is_err());
    }

    #[test]
    fn extracts_filename_from_url() {
        assert_eq!(
            filename_from_url("/api/images/room-101.jpg"),
            Some("room-101.jpg")
        );
        assert_eq!(
            filename_from_url("https://cdn.example.com/a/b/c.png"),
            Some("c.png")
        );
        assert_eq!(filename_from_url("no-slash.jpg"), Some("no-slash.jpg"));
        assert_eq!(filename_from_url("trailing/"), None);
    }
}
