//! 住客服务门面

use super::ApiClient;
use roomstay_shared::error::{ApiError, ApiResult};
use roomstay_shared::protocol::{DeleteGuest, GetGuest, GuestByUser, ListGuests, UpdateGuest};
use roomstay_shared::{Guest, GuestRequest};

impl ApiClient {
    pub async fn list_guests(&self) -> ApiResult<Vec<Guest>> {
        self.send(&ListGuests).await
    }

    pub async fn get_guest(&self, id: i64) -> ApiResult<Guest> {
        self.send(&GetGuest { id }).await
    }

    pub async fn create_guest(&self, request: &GuestRequest) -> ApiResult<Guest> {
        self.send(request).await
    }

    pub async fn update_guest(&self, id: i64, guest: GuestRequest) -> ApiResult<Guest> {
        self.send(&UpdateGuest { id, guest }).await
    }

    pub async fn delete_guest(&self, id: i64) -> ApiResult<()> {
        self.send(&DeleteGuest { id }).await
    }

    /// 按认证账号查住客档案
    ///
    /// 服务端对"还没有档案"返回空列表而不是 404；这里显式转成
    /// NotFound 失败，让调用方能区分"首次预订需要建档"与传输错误。
    pub async fn guest_by_user(&self, user_id: i64) -> ApiResult<Guest> {
        let mut guests = self.send(&GuestByUser { user_id }).await?;
        if guests.is_empty() {
            return Err(ApiError::not_found("no guest profile for this user"));
        }
        Ok(guests.remove(0))
    }
}
