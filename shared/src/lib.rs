use serde::{Deserialize, Serialize};

pub mod date;
pub mod error;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// API 根路径（后端未分版本，直接挂在 /api 下）
pub const API_BASE_PATH: &str = "/api";

/// LocalStorage 中保存 Bearer Token 的键
pub const TOKEN_KEY: &str = "hotel_auth_token";
/// LocalStorage 中保存用户记录 (JSON) 的键
pub const USER_KEY: &str = "hotel_user_data";

pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 单次预订允许的最大房间数
pub const MAX_ROOMS_PER_BOOKING: u32 = 10;
/// 上传图片的大小上限（5MB）
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

// =========================================================
// 用户与认证 (Auth)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// 展示名：优先 "名 姓"，否则退回用户名
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{} {}", first, last)
            }
            _ => self.username.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// 登录/注册成功后服务端返回的会话载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 房间 (Rooms)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    #[default]
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
            RoomType::Deluxe => "DELUXE",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s {
            "SINGLE" => Some(RoomType::Single),
            "DOUBLE" => Some(RoomType::Double),
            "SUITE" => Some(RoomType::Suite),
            "DELUXE" => Some(RoomType::Deluxe),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub capacity: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// 多图场景：服务端以 JSON 数组字符串存储
    #[serde(default)]
    pub image_urls: Option<String>,
    pub is_available: bool,
}

impl Room {
    /// 解析展示用图片列表：优先 image_urls (JSON 数组字符串)，
    /// 解析失败或为空时退回单张 image_url。
    pub fn gallery(&self) -> Vec<String> {
        if let Some(raw) = &self.image_urls {
            if let Ok(urls) = serde_json::from_str::<Vec<String>>(raw) {
                if !urls.is_empty() {
                    return urls;
                }
            }
        }
        self.image_url.clone().into_iter().collect()
    }
}

/// 创建/更新房间的请求体（无 id）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<String>,
    pub is_available: bool,
}

/// 房间搜索条件，所有字段可选
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<chrono::NaiveDate>,
}

// =========================================================
// 住客档案 (Guests)
// =========================================================

/// 预订域的住客记录，区别于认证账号；首次预订时懒创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

// =========================================================
// 预订 (Reservations)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    #[serde(default)]
    pub guest_name: String,
    pub room_id: i64,
    #[serde(default)]
    pub room_number: String,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub number_of_guests: u32,
    pub number_of_rooms: u32,
    /// 权威金额来自服务端；客户端只做展示性推算
    pub total_price: f64,
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub number_of_guests: u32,
    pub number_of_rooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// 创建预订的响应是包装结构，而不是裸的 Reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreated {
    #[serde(default)]
    pub reservation: Option<Reservation>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

// =========================================================
// 图片上传 (Images)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 仅携带一条提示消息的响应体（删除图片等接口使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
    }

    #[test]
    fn room_fields_use_camel_case() {
        let json = r#"{
            "id": 1,
            "roomNumber": "101",
            "roomType": "DOUBLE",
            "price": 50000.0,
            "capacity": 2,
            "isAvailable": true
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.room_number, "101");
        assert_eq!(room.room_type, RoomType::Double);
        assert!(room.is_available);
        assert!(room.description.is_none());
    }

    #[test]
    fn gallery_prefers_image_urls_array() {
        let room = Room {
            id: 1,
            room_number: "101".into(),
            room_type: RoomType::Single,
            price: 100.0,
            capacity: 1,
            description: None,
            image_url: Some("/images/a.jpg".into()),
            image_urls: Some(r#"["/images/b.jpg", "/images/c.jpg"]"#.into()),
            is_available: true,
        };
        assert_eq!(room.gallery(), vec!["/images/b.jpg", "/images/c.jpg"]);
    }

    #[test]
    fn gallery_falls_back_on_malformed_array() {
        let room = Room {
            id: 1,
            room_number: "101".into(),
            room_type: RoomType::Single,
            price: 100.0,
            capacity: 1,
            description: None,
            image_url: Some("/images/a.jpg".into()),
            image_urls: Some("not json".into()),
            is_available: true,
        };
        assert_eq!(room.gallery(), vec!["/images/a.jpg"]);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = User {
            id: 7,
            username: "jane.doe".into(),
            email: "jane@example.com".into(),
            first_name: None,
            last_name: None,
            phone_number: None,
            role: Role::User,
        };
        assert_eq!(user.display_name(), "jane.doe");
    }

    #[test]
    fn reservation_dates_parse_iso() {
        let json = r#"{
            "id": 3,
            "guestId": 1,
            "guestName": "Jane Doe",
            "roomId": 2,
            "roomNumber": "202",
            "checkInDate": "2024-06-01",
            "checkOutDate": "2024-06-04",
            "numberOfGuests": 2,
            "numberOfRooms": 2,
            "totalPrice": 300000.0,
            "status": "PENDING",
            "createdAt": "2024-05-20T10:15:30"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.status, ReservationStatus::Pending);
        assert_eq!((r.check_out_date - r.check_in_date).num_days(), 3);
        assert!(r.created_at.is_some());
    }
}
