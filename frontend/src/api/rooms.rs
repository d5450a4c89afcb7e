//! 房间服务门面：UI 意图到远端资源的 1:1 转译，无业务逻辑

use super::ApiClient;
use roomstay_shared::error::ApiResult;
use roomstay_shared::protocol::{
    CreateRoom, DeleteRoom, GetRoom, ListRooms, SetRoomAvailability, UpdateRoom,
};
use roomstay_shared::{Room, RoomRequest, RoomSearchCriteria};

impl ApiClient {
    pub async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        self.send(&ListRooms).await
    }

    pub async fn get_room(&self, id: i64) -> ApiResult<Room> {
        self.send(&GetRoom { id }).await
    }

    pub async fn search_rooms(&self, criteria: &RoomSearchCriteria) -> ApiResult<Vec<Room>> {
        self.send(criteria).await
    }

    pub async fn create_room(&self, room: RoomRequest) -> ApiResult<Room> {
        self.send(&CreateRoom(room)).await
    }

    pub async fn update_room(&self, id: i64, room: RoomRequest) -> ApiResult<Room> {
        self.send(&UpdateRoom { id, room }).await
    }

    pub async fn delete_room(&self, id: i64) -> ApiResult<()> {
        self.send(&DeleteRoom { id }).await
    }

    pub async fn set_room_availability(&self, id: i64, available: bool) -> ApiResult<Room> {
        self.send(&SetRoomAvailability { id, available }).await
    }
}
