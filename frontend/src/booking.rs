//! 预订工作流模块
//!
//! 单表单上的状态机：Idle → Validating → Submitting → Succeeded | Failed。
//! 校验与价格推算是纯函数（客户端校验仅为提示，服务端才是权威）；
//! 表单状态本身参照 RwSignal 结构体的写法组织，
//! 负责数据持有、重置与到请求对象的转换。

use chrono::NaiveDate;
use leptos::prelude::*;
use roomstay_shared::date::{is_valid_range, nights_between, parse_input_date};
use roomstay_shared::{GuestRequest, MAX_ROOMS_PER_BOOKING, ReservationRequest, User};

/// 首次建档时的占位电话（用户未留电话时使用）
pub const PLACEHOLDER_PHONE: &str = "+221-000-0000";
/// 首次建档时的占位地址
pub const PLACEHOLDER_ADDRESS: &str = "Dakar, Sénégal";

// =========================================================
// 纯数据层
// =========================================================

/// 表单字段快照，脱离信号系统，便于校验与测试
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFields {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
    pub special_requests: String,
}

/// 字段级校验错误集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingErrors {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
    pub rooms: Option<String>,
}

impl BookingErrors {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none()
            && self.check_out.is_none()
            && self.guests.is_none()
            && self.rooms.is_none()
    }
}

/// 提交失败的分类：冲突与普通失败走不同的用户提示
#[derive(Debug, Clone, PartialEq)]
pub enum BookingFailure {
    /// 建档失败；此时不会再尝试创建预订
    GuestProvisioning(String),
    /// 可用性冲突：房间在所选日期已被占用
    Conflict(String),
    /// 其他失败，展示服务端原文
    Other(String),
}

/// 提交状态机
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(BookingFailure),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// 客户端校验（仅提示性质）：
/// 退房严格晚于入住；住客数 1..=容量；房间数 1..=上限。
pub fn validate(fields: &BookingFields, capacity: u32) -> BookingErrors {
    let mut errors = BookingErrors::default();

    match (fields.check_in, fields.check_out) {
        (None, _) => errors.check_in = Some("请选择入住日期".to_string()),
        (Some(_), None) => errors.check_out = Some("请选择退房日期".to_string()),
        (Some(check_in), Some(check_out)) => {
            if !is_valid_range(check_in, check_out) {
                errors.check_out = Some("退房日期必须晚于入住日期".to_string());
            }
        }
    }

    if fields.guests < 1 {
        errors.guests = Some("至少 1 位住客".to_string());
    } else if fields.guests > capacity {
        errors.guests = Some(format!("该房型最多容纳 {} 位住客", capacity));
    }

    if fields.rooms < 1 {
        errors.rooms = Some("至少预订 1 间".to_string());
    } else if fields.rooms > MAX_ROOMS_PER_BOOKING {
        errors.rooms = Some(format!("单次最多预订 {} 间", MAX_ROOMS_PER_BOOKING));
    }

    errors
}

/// 展示用总价 = 晚数 × 单价 × 房间数
///
/// 日期缺失或晚数非正时显示 0，但不阻止提交（服务端做权威拒绝）。
pub fn total_price(fields: &BookingFields, nightly_price: f64) -> f64 {
    let (Some(check_in), Some(check_out)) = (fields.check_in, fields.check_out) else {
        return 0.0;
    };
    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return 0.0;
    }
    nights as f64 * nightly_price * fields.rooms as f64
}

/// 首次预订建档请求：姓名尽量从用户资料推导，
/// 用户名按 `.` 切分作退路，电话/地址用占位值兜底。
pub fn guest_request_for(user: &User) -> GuestRequest {
    let mut parts = user.username.split('.');
    let from_username_first = parts.next().unwrap_or("").to_string();
    let from_username_last = parts.next().unwrap_or("").to_string();

    let pick = |primary: &Option<String>, fallback: String, default: &str| -> String {
        match primary {
            Some(v) if !v.is_empty() => v.clone(),
            _ if !fallback.is_empty() => fallback,
            _ => default.to_string(),
        }
    };

    GuestRequest {
        first_name: pick(&user.first_name, from_username_first, "Guest"),
        last_name: pick(&user.last_name, from_username_last, "User"),
        email: user.email.clone(),
        phone_number: match &user.phone_number {
            Some(p) if !p.is_empty() => p.clone(),
            _ => PLACEHOLDER_PHONE.to_string(),
        },
        address: Some(PLACEHOLDER_ADDRESS.to_string()),
        user_id: Some(user.id),
    }
}

/// 字段快照转预订请求；日期缺失时无法构造
pub fn to_reservation_request(
    fields: &BookingFields,
    guest_id: i64,
    room_id: i64,
) -> Option<ReservationRequest> {
    let check_in = fields.check_in?;
    let check_out = fields.check_out?;
    let special = fields.special_requests.trim();
    Some(ReservationRequest {
        guest_id,
        room_id,
        check_in_date: check_in,
        check_out_date: check_out,
        number_of_guests: fields.guests,
        number_of_rooms: fields.rooms,
        special_requests: if special.is_empty() {
            None
        } else {
            Some(special.to_string())
        },
    })
}

// =========================================================
// 响应式表单状态
// =========================================================

/// 预订表单状态结构体
///
/// 使用 `RwSignal` 因为它实现 Copy，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct BookingForm {
    pub check_in: RwSignal<String>,
    pub check_out: RwSignal<String>,
    pub guests: RwSignal<u32>,
    pub rooms: RwSignal<u32>,
    pub special_requests: RwSignal<String>,
    pub state: RwSignal<SubmitState>,
    pub errors: RwSignal<BookingErrors>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            check_in: RwSignal::new(String::new()),
            check_out: RwSignal::new(String::new()),
            guests: RwSignal::new(1),
            rooms: RwSignal::new(1),
            special_requests: RwSignal::new(String::new()),
            state: RwSignal::new(SubmitState::Idle),
            errors: RwSignal::new(BookingErrors::default()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.check_in.set(String::new());
        self.check_out.set(String::new());
        self.guests.set(1);
        self.rooms.set(1);
        self.special_requests.set(String::new());
        self.state.set(SubmitState::Idle);
        self.errors.set(BookingErrors::default());
    }

    /// 当前字段快照（响应式读取，供派生总价使用）
    pub fn fields(&self) -> BookingFields {
        BookingFields {
            check_in: parse_input_date(&self.check_in.get()),
            check_out: parse_input_date(&self.check_out.get()),
            guests: self.guests.get(),
            rooms: self.rooms.get(),
            special_requests: self.special_requests.get(),
        }
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
