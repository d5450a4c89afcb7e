//! 类型化端点定义
//!
//! 每个远程操作对应一个实现 `ApiRequest` 的请求类型，网关据此
//! 统一构造 URL、方法与请求体。路径含动态段（资源 id），因此用
//! `path(&self)` 而不是常量。

use crate::{
    Guest, GuestRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    Reservation, ReservationCreated, ReservationRequest, Room, RoomRequest, RoomSearchCriteria,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path below the API base, with dynamic segments filled in.
    fn path(&self) -> String;
    /// 该请求是否携带 JSON 请求体。
    /// 默认：写方法带请求体；确认/取消这类纯动作端点覆写为 false。
    fn has_body() -> bool {
        matches!(
            Self::METHOD,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch
        )
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

impl ApiRequest for RegisterRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

// =========================================================
// 房间 (Rooms)
// =========================================================

/// List all rooms
#[derive(Debug, Clone, Serialize)]
pub struct ListRooms;

impl ApiRequest for ListRooms {
    type Response = Vec<Room>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/rooms".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetRoom {
    pub id: i64,
}

impl ApiRequest for GetRoom {
    type Response = Room;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/rooms/{}", self.id)
    }
}

/// 按条件搜索；复用 RoomSearchCriteria 作为请求体
impl ApiRequest for RoomSearchCriteria {
    type Response = Vec<Room>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/rooms/search".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateRoom(pub RoomRequest);

impl ApiRequest for CreateRoom {
    type Response = Room;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/rooms".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UpdateRoom {
    #[serde(skip)]
    pub id: i64,
    pub room: RoomRequest,
}

impl ApiRequest for UpdateRoom {
    type Response = Room;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/rooms/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRoom {
    pub id: i64,
}

impl ApiRequest for DeleteRoom {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/rooms/{}", self.id)
    }
}

/// 可用性开关走查询参数，无请求体
#[derive(Debug, Clone, Serialize)]
pub struct SetRoomAvailability {
    pub id: i64,
    pub available: bool,
}

impl ApiRequest for SetRoomAvailability {
    type Response = Room;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("/rooms/{}/availability?available={}", self.id, self.available)
    }

    fn has_body() -> bool {
        false
    }
}

// =========================================================
// 预订 (Reservations)
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListReservations;

impl ApiRequest for ListReservations {
    type Response = Vec<Reservation>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/reservations".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetReservation {
    pub id: i64,
}

impl ApiRequest for GetReservation {
    type Response = Reservation;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/reservations/{}", self.id)
    }
}

impl ApiRequest for ReservationRequest {
    type Response = ReservationCreated;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/reservations".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UpdateReservation {
    #[serde(skip)]
    pub id: i64,
    pub request: ReservationRequest,
}

impl ApiRequest for UpdateReservation {
    type Response = Reservation;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/reservations/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmReservation {
    pub id: i64,
}

impl ApiRequest for ConfirmReservation {
    type Response = Reservation;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/reservations/{}/confirm", self.id)
    }

    fn has_body() -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelReservation {
    pub id: i64,
}

impl ApiRequest for CancelReservation {
    type Response = Reservation;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/reservations/{}/cancel", self.id)
    }

    fn has_body() -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationsByGuest {
    pub guest_id: i64,
}

impl ApiRequest for ReservationsByGuest {
    type Response = Vec<Reservation>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/reservations/guest/{}", self.guest_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationsByRoom {
    pub room_id: i64,
}

impl ApiRequest for ReservationsByRoom {
    type Response = Vec<Reservation>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/reservations/room/{}", self.room_id)
    }
}

// =========================================================
// 住客 (Guests)
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListGuests;

impl ApiRequest for ListGuests {
    type Response = Vec<Guest>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/guests".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetGuest {
    pub id: i64,
}

impl ApiRequest for GetGuest {
    type Response = Guest;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/guests/{}", self.id)
    }
}

impl ApiRequest for GuestRequest {
    type Response = Guest;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/guests".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UpdateGuest {
    #[serde(skip)]
    pub id: i64,
    pub guest: GuestRequest,
}

impl ApiRequest for UpdateGuest {
    type Response = Guest;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/guests/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteGuest {
    pub id: i64,
}

impl ApiRequest for DeleteGuest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/guests/{}", self.id)
    }
}

/// 按认证账号查住客档案。
/// 服务端返回列表；空列表表示该用户还没有住客档案。
#[derive(Debug, Clone, Serialize)]
pub struct GuestByUser {
    pub user_id: i64,
}

impl ApiRequest for GuestByUser {
    type Response = Vec<Guest>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/guests/user/{}", self.user_id)
    }
}

// =========================================================
// 图片 (Images)
// =========================================================

// 注意：上传 (POST /images/upload) 是 multipart 表单，不走本 trait，
// 由网关的专用方法处理。

#[derive(Debug, Clone, Serialize)]
pub struct DeleteImage {
    pub filename: String,
}

impl ApiRequest for DeleteImage {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/images/{}", self.filename)
    }
}

/// 图片上传端点路径（multipart，专用方法使用）
pub const UPLOAD_IMAGE_PATH: &str = "/images/upload";

/// 当前登录态相关的路径前缀：401 时只有这些路径会触发强制登出
pub fn is_auth_path(path: &str) -> bool {
    path.contains("/auth/") || path.contains("/login")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_room_request() -> RoomRequest {
        RoomRequest {
            room_number: "101".into(),
            room_type: crate::RoomType::Double,
            price: 50000.0,
            capacity: 2,
            description: None,
            image_url: None,
            image_urls: None,
            is_available: true,
        }
    }

    #[test]
    fn auth_endpoints() {
        let login = LoginRequest {
            username: "jane".into(),
            password: "secret".into(),
        };
        assert_eq!(login.path(), "/auth/login");
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert!(LoginRequest::has_body());
    }

    #[test]
    fn room_endpoints() {
        assert_eq!(ListRooms.path(), "/rooms");
        assert_eq!(ListRooms::METHOD, HttpMethod::Get);
        assert!(!ListRooms::has_body());

        assert_eq!(GetRoom { id: 4 }.path(), "/rooms/4");
        assert_eq!(RoomSearchCriteria::default().path(), "/rooms/search");
        assert_eq!(CreateRoom(sample_room_request()).path(), "/rooms");
        assert_eq!(
            UpdateRoom {
                id: 4,
                room: sample_room_request()
            }
            .path(),
            "/rooms/4"
        );
        assert_eq!(DeleteRoom { id: 4 }.path(), "/rooms/4");
        assert_eq!(DeleteRoom::METHOD, HttpMethod::Delete);

        let toggle = SetRoomAvailability {
            id: 4,
            available: false,
        };
        assert_eq!(toggle.path(), "/rooms/4/availability?available=false");
        assert_eq!(SetRoomAvailability::METHOD, HttpMethod::Patch);
        assert!(!SetRoomAvailability::has_body());
    }

    #[test]
    fn reservation_endpoints() {
        assert_eq!(ListReservations.path(), "/reservations");
        assert_eq!(GetReservation { id: 9 }.path(), "/reservations/9");

        let req = ReservationRequest {
            guest_id: 1,
            room_id: 2,
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            number_of_guests: 2,
            number_of_rooms: 1,
            special_requests: None,
        };
        assert_eq!(req.path(), "/reservations");
        assert_eq!(ReservationRequest::METHOD, HttpMethod::Post);

        assert_eq!(
            UpdateReservation { id: 9, request: req }.path(),
            "/reservations/9"
        );
        assert_eq!(
            ConfirmReservation { id: 9 }.path(),
            "/reservations/9/confirm"
        );
        assert!(!ConfirmReservation::has_body());
        assert_eq!(CancelReservation { id: 9 }.path(), "/reservations/9/cancel");
        assert!(!CancelReservation::has_body());
        assert_eq!(
            ReservationsByGuest { guest_id: 5 }.path(),
            "/reservations/guest/5"
        );
        assert_eq!(
            ReservationsByRoom { room_id: 7 }.path(),
            "/reservations/room/7"
        );
    }

    #[test]
    fn guest_endpoints() {
        assert_eq!(ListGuests.path(), "/guests");
        assert_eq!(GetGuest { id: 3 }.path(), "/guests/3");
        let req = GuestRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone_number: "+221-000-0000".into(),
            address: None,
            user_id: Some(7),
        };
        assert_eq!(req.path(), "/guests");
        assert_eq!(UpdateGuest { id: 3, guest: req }.path(), "/guests/3");
        assert_eq!(DeleteGuest { id: 3 }.path(), "/guests/3");
        assert_eq!(GuestByUser { user_id: 7 }.path(), "/guests/user/7");
    }

    #[test]
    fn image_endpoints() {
        assert_eq!(
            DeleteImage {
                filename: "room-101.jpg".into()
            }
            .path(),
            "/images/room-101.jpg"
        );
        assert_eq!(UPLOAD_IMAGE_PATH, "/images/upload");
    }

    #[test]
    fn transparent_wrappers_serialize_inner_body_only() {
        let update = UpdateRoom {
            id: 4,
            room: sample_room_request(),
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"roomNumber\":\"101\""));
        // id 只进路径，不进请求体
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn auth_path_classification() {
        assert!(is_auth_path("/auth/login"));
        assert!(is_auth_path("/auth/register"));
        assert!(is_auth_path("/login"));
        assert!(!is_auth_path("/reservations/9/confirm"));
        assert!(!is_auth_path("/rooms"));
        assert!(!is_auth_path("/guests/user/7"));
    }
}
