//! 酒店管理控制台（仅管理员）
//!
//! 按 `?tab=rooms|reservations|guests` 选择标签页。
//! 所有变更都是独立请求 + 无条件整表重载，没有乐观更新。

use crate::api::images::{filename_from_url, validate_image_file};
use crate::api::use_api;
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use roomstay_shared::date::format_display_date;
use roomstay_shared::{
    Guest, GuestRequest, Reservation, ReservationStatus, Room, RoomRequest, RoomType,
};

// =========================================================
// 标签页
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AdminTab {
    #[default]
    Rooms,
    Reservations,
    Guests,
}

impl AdminTab {
    /// 解析查询参数；缺省或无法识别时落在房间页
    fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("reservations") => AdminTab::Reservations,
            Some("guests") => AdminTab::Guests,
            _ => AdminTab::Rooms,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Rooms => "客房",
            AdminTab::Reservations => "预订",
            AdminTab::Guests => "住客",
        }
    }
}

// =========================================================
// 表单输入 → 请求体（纯函数）
// =========================================================

fn room_request_from_inputs(
    room_number: &str,
    room_type: &str,
    price: &str,
    capacity: &str,
    description: &str,
    image_url: &str,
    is_available: bool,
) -> Result<RoomRequest, String> {
    let room_number = room_number.trim();
    if room_number.is_empty() {
        return Err("房间号不能为空".to_string());
    }
    let room_type = RoomType::from_str_loose(room_type).ok_or("请选择房型")?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "请输入有效的价格".to_string())?;
    if price < 0.0 {
        return Err("价格不能为负".to_string());
    }
    let capacity: u32 = capacity
        .trim()
        .parse()
        .map_err(|_| "请输入有效的容量".to_string())?;
    if capacity < 1 {
        return Err("容量至少为 1".to_string());
    }

    let opt = |s: &str| {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    Ok(RoomRequest {
        room_number: room_number.to_string(),
        room_type,
        price,
        capacity,
        description: opt(description),
        image_url: opt(image_url),
        image_urls: None,
        is_available,
    })
}

fn guest_request_from_inputs(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
    address: &str,
    user_id: Option<i64>,
) -> Result<GuestRequest, String> {
    let required = |s: &str, label: &str| -> Result<String, String> {
        let s = s.trim();
        if s.is_empty() {
            Err(format!("{}不能为空", label))
        } else {
            Ok(s.to_string())
        }
    };
    let address = address.trim();
    Ok(GuestRequest {
        first_name: required(first_name, "名")?,
        last_name: required(last_name, "姓")?,
        email: required(email, "邮箱")?,
        phone_number: required(phone_number, "电话")?,
        address: if address.is_empty() {
            None
        } else {
            Some(address.to_string())
        },
        user_id,
    })
}

// =========================================================
// 表单状态结构体
// =========================================================

/// 房间表单状态；RwSignal 实现 Copy，便于在各处理器间传递
#[derive(Clone, Copy)]
struct RoomFormState {
    editing: RwSignal<Option<i64>>,
    room_number: RwSignal<String>,
    room_type: RwSignal<String>,
    price: RwSignal<String>,
    capacity: RwSignal<String>,
    description: RwSignal<String>,
    image_url: RwSignal<String>,
    is_available: RwSignal<bool>,
    uploading: RwSignal<bool>,
}

impl RoomFormState {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            room_number: RwSignal::new(String::new()),
            room_type: RwSignal::new("SINGLE".to_string()),
            price: RwSignal::new(String::new()),
            capacity: RwSignal::new("1".to_string()),
            description: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            is_available: RwSignal::new(true),
            uploading: RwSignal::new(false),
        }
    }

    fn reset(&self) {
        self.editing.set(None);
        self.room_number.set(String::new());
        self.room_type.set("SINGLE".to_string());
        self.price.set(String::new());
        self.capacity.set("1".to_string());
        self.description.set(String::new());
        self.image_url.set(String::new());
        self.is_available.set(true);
    }

    /// 进入编辑态：用现有房间填充表单
    fn load(&self, room: &Room) {
        self.editing.set(Some(room.id));
        self.room_number.set(room.room_number.clone());
        self.room_type.set(room.room_type.as_str().to_string());
        self.price.set(format!("{}", room.price));
        self.capacity.set(room.capacity.to_string());
        self.description
            .set(room.description.clone().unwrap_or_default());
        self.image_url.set(room.image_url.clone().unwrap_or_default());
        self.is_available.set(room.is_available);
    }

    fn to_request(&self) -> Result<RoomRequest, String> {
        room_request_from_inputs(
            &self.room_number.get_untracked(),
            &self.room_type.get_untracked(),
            &self.price.get_untracked(),
            &self.capacity.get_untracked(),
            &self.description.get_untracked(),
            &self.image_url.get_untracked(),
            self.is_available.get_untracked(),
        )
    }
}

/// 住客编辑表单状态
#[derive(Clone, Copy)]
struct GuestFormState {
    editing: RwSignal<Option<i64>>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone_number: RwSignal<String>,
    address: RwSignal<String>,
    user_id: RwSignal<Option<i64>>,
}

impl GuestFormState {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            user_id: RwSignal::new(None),
        }
    }

    fn reset(&self) {
        self.editing.set(None);
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.phone_number.set(String::new());
        self.address.set(String::new());
        self.user_id.set(None);
    }

    fn load(&self, guest: &Guest) {
        self.editing.set(Some(guest.id));
        self.first_name.set(guest.first_name.clone());
        self.last_name.set(guest.last_name.clone());
        self.email.set(guest.email.clone());
        self.phone_number.set(guest.phone_number.clone());
        self.address.set(guest.address.clone().unwrap_or_default());
        self.user_id.set(guest.user_id);
    }

    fn to_request(&self) -> Result<GuestRequest, String> {
        guest_request_from_inputs(
            &self.first_name.get_untracked(),
            &self.last_name.get_untracked(),
            &self.email.get_untracked(),
            &self.phone_number.get_untracked(),
            &self.address.get_untracked(),
            self.user_id.get_untracked(),
        )
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

// =========================================================
// 页面组件
// =========================================================

#[component]
pub fn AdminManagePage() -> impl IntoView {
    // StoredValue 让非 Copy 的网关句柄可以进入各行级闭包
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let query = use_query_map();

    let active_tab = RwSignal::new(AdminTab::default());

    // 查询参数出现时覆盖当前标签页
    Effect::new(move |_| {
        if let Some(tab) = query.get().get("tab") {
            active_tab.set(AdminTab::from_query(Some(&tab)));
        }
    });

    let (rooms, set_rooms) = signal(Vec::<Room>::new());
    let (reservations, set_reservations) = signal(Vec::<Reservation>::new());
    let (guests, set_guests) = signal(Vec::<Guest>::new());
    let (loading, set_loading) = signal(false);

    let room_form = RoomFormState::new();
    let guest_form = GuestFormState::new();
    // 预订标签页的按房间过滤（空 = 全部）
    let room_filter = RwSignal::new(String::new());

    let load_rooms = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_rooms().await {
                Ok(data) => set_rooms.set(data),
                Err(e) => toast.error(format!("加载客房失败：{}", e.message)),
            }
            set_loading.set(false);
        });
    };

    // 整表重载；设置了房间过滤时改走按房间查询
    let load_reservations = move || {
        let api = api.get_value();
        let filter = room_filter.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let result = match filter.trim().parse::<i64>() {
                Ok(room_id) => api.reservations_by_room(room_id).await,
                Err(_) => api.list_reservations().await,
            };
            match result {
                Ok(data) => set_reservations.set(data),
                Err(e) => toast.error(format!("加载预订失败：{}", e.message)),
            }
            set_loading.set(false);
        });
    };

    let load_guests = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_guests().await {
                Ok(data) => set_guests.set(data),
                Err(e) => toast.error(format!("加载住客失败：{}", e.message)),
            }
            set_loading.set(false);
        });
    };

    // 切换标签页即加载对应列表
    Effect::new(move |_| match active_tab.get() {
        AdminTab::Rooms => load_rooms(),
        AdminTab::Reservations => load_reservations(),
        AdminTab::Guests => load_guests(),
    });

    // --- 房间处理器 ---

    let on_submit_room = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match room_form.to_request() {
            Ok(r) => r,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };
        let api = api.get_value();
        let editing = room_form.editing.get_untracked();
        spawn_local(async move {
            let result = match editing {
                Some(id) => api.update_room(id, request).await.map(|_| "房间已更新"),
                None => api.create_room(request).await.map(|_| "房间已创建"),
            };
            match result {
                Ok(msg) => {
                    toast.success(msg);
                    room_form.reset();
                    load_rooms();
                }
                Err(e) => toast.error(format!("保存房间失败：{}", e.message)),
            }
        });
    };

    let on_delete_room = move |id: i64| {
        if !confirm("确定要删除这个房间吗？") {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_room(id).await {
                Ok(_) => {
                    toast.success("房间已删除");
                    load_rooms();
                }
                Err(e) => toast.error(format!("删除房间失败：{}", e.message)),
            }
        });
    };

    let on_toggle_room = move |room: Room| {
        let api = api.get_value();
        spawn_local(async move {
            match api.set_room_availability(room.id, !room.is_available).await {
                Ok(_) => {
                    toast.success("房间可用性已更新");
                    load_rooms();
                }
                Err(e) => toast.error(format!("更新可用性失败：{}", e.message)),
            }
        });
    };

    let on_image_change = move |ev: leptos::web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        if let Err(msg) = validate_image_file(file.size(), &file.type_()) {
            toast.error(msg);
            return;
        }
        let api = api.get_value();
        room_form.uploading.set(true);
        spawn_local(async move {
            match api.upload_image(&file).await {
                Ok(response) => {
                    room_form.image_url.set(response.url);
                    toast.success("图片上传成功");
                }
                Err(e) => toast.error(format!("图片上传失败：{}", e.message)),
            }
            room_form.uploading.set(false);
        });
    };

    let on_clear_image = move |_| {
        let url = room_form.image_url.get_untracked();
        let Some(filename) = filename_from_url(&url).map(str::to_string) else {
            room_form.image_url.set(String::new());
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_image(&filename).await {
                Ok(_) => {
                    room_form.image_url.set(String::new());
                    toast.success("图片已删除");
                }
                Err(e) => toast.error(format!("删除图片失败：{}", e.message)),
            }
        });
    };

    // --- 预订处理器 ---

    let on_confirm_reservation = move |id: i64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.confirm_reservation(id).await {
                Ok(_) => {
                    toast.success("预订已确认");
                    load_reservations();
                }
                Err(e) => toast.error(format!("确认预订失败：{}", e.message)),
            }
        });
    };

    let on_cancel_reservation = move |id: i64| {
        if !confirm("确定要取消这个预订吗？") {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            match api.cancel_reservation(id).await {
                Ok(_) => {
                    toast.success("预订已取消");
                    load_reservations();
                }
                Err(e) => toast.error(format!("取消预订失败：{}", e.message)),
            }
        });
    };

    // --- 住客处理器 ---

    let on_submit_guest = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = guest_form.editing.get_untracked() else {
            return;
        };
        let request = match guest_form.to_request() {
            Ok(r) => r,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };
        let api = api.get_value();
        spawn_local(async move {
            match api.update_guest(id, request).await {
                Ok(_) => {
                    toast.success("住客资料已更新");
                    guest_form.reset();
                    load_guests();
                }
                Err(e) => toast.error(format!("更新住客失败：{}", e.message)),
            }
        });
    };

    let on_delete_guest = move |id: i64| {
        if !confirm("确定要删除这位住客吗？") {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_guest(id).await {
                Ok(_) => {
                    toast.success("住客已删除");
                    load_guests();
                }
                Err(e) => toast.error(format!("删除住客失败：{}", e.message)),
            }
        });
    };

    let tab_button = move |tab: AdminTab| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == tab {
                        "tab tab-active"
                    } else {
                        "tab"
                    }
                }
                on:click=move |_| active_tab.set(tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"🛠️ 酒店管理"</h1>

            <div role="tablist" class="tabs tabs-boxed w-fit">
                {tab_button(AdminTab::Rooms)}
                {tab_button(AdminTab::Reservations)}
                {tab_button(AdminTab::Guests)}
            </div>

            // ------------------- 客房 -------------------
            <Show when=move || active_tab.get() == AdminTab::Rooms>
                <div class="grid lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body" on:submit=on_submit_room>
                            <h2 class="card-title">
                                {move || if room_form.editing.get().is_some() { "编辑房间" } else { "新增房间" }}
                            </h2>

                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"房间号"</span></label>
                                    <input
                                        type="text"
                                        class="input input-bordered"
                                        on:input=move |ev| room_form.room_number.set(event_target_value(&ev))
                                        prop:value=room_form.room_number
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"房型"</span></label>
                                    <select
                                        class="select select-bordered"
                                        on:change=move |ev| room_form.room_type.set(event_target_value(&ev))
                                    >
                                        {RoomType::ALL
                                            .iter()
                                            .map(|t| {
                                                let value = t.as_str();
                                                view! {
                                                    <option
                                                        value=value
                                                        selected=move || room_form.room_type.get() == value
                                                    >
                                                        {value}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"每晚价格"</span></label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        class="input input-bordered"
                                        on:input=move |ev| room_form.price.set(event_target_value(&ev))
                                        prop:value=room_form.price
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"容量"</span></label>
                                    <input
                                        type="number"
                                        min="1"
                                        class="input input-bordered"
                                        on:input=move |ev| room_form.capacity.set(event_target_value(&ev))
                                        prop:value=room_form.capacity
                                        required
                                    />
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label"><span class="label-text">"描述"</span></label>
                                <textarea
                                    rows="3"
                                    class="textarea textarea-bordered"
                                    on:input=move |ev| room_form.description.set(event_target_value(&ev))
                                    prop:value=room_form.description
                                ></textarea>
                            </div>

                            <div class="form-control">
                                <label class="label"><span class="label-text">"图片 URL"</span></label>
                                <input
                                    type="url"
                                    placeholder="https://example.com/room.jpg"
                                    class="input input-bordered"
                                    on:input=move |ev| room_form.image_url.set(event_target_value(&ev))
                                    prop:value=room_form.image_url
                                />
                            </div>

                            <div class="form-control">
                                <label class="label"><span class="label-text">"或上传图片（≤5MB）"</span></label>
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="file-input file-input-bordered"
                                    on:change=on_image_change
                                    disabled=move || room_form.uploading.get()
                                />
                                <Show when=move || room_form.uploading.get()>
                                    <span class="text-sm text-base-content/60 mt-1">"上传中..."</span>
                                </Show>
                                <Show when=move || !room_form.image_url.get().is_empty()>
                                    <div class="mt-2 space-y-2">
                                        <img src=move || room_form.image_url.get() alt="预览" class="max-h-32 rounded" />
                                        <button type="button" class="btn btn-ghost btn-xs" on:click=on_clear_image>
                                            "移除图片"
                                        </button>
                                    </div>
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label cursor-pointer justify-start gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox"
                                        prop:checked=room_form.is_available
                                        on:change=move |ev| room_form.is_available.set(event_target_checked(&ev))
                                    />
                                    <span class="label-text">"可预订"</span>
                                </label>
                            </div>

                            <div class="card-actions mt-2">
                                <button type="submit" class="btn btn-primary">
                                    {move || if room_form.editing.get().is_some() { "更新房间" } else { "新增房间" }}
                                </button>
                                <Show when=move || room_form.editing.get().is_some()>
                                    <button type="button" class="btn btn-ghost" on:click=move |_| room_form.reset()>
                                        "取消编辑"
                                    </button>
                                </Show>
                            </div>
                        </form>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <h2 class="card-title p-6 pb-2">"全部客房"</h2>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"房间号"</th>
                                            <th>"房型"</th>
                                            <th>"价格"</th>
                                            <th>"容量"</th>
                                            <th>"状态"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || rooms.get().is_empty() && !loading.get()>
                                            <tr>
                                                <td colspan="6" class="text-center py-8 text-base-content/50">
                                                    "暂无客房。"
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || rooms.get()
                                            key=|room| (room.id, room.is_available)
                                            children=move |room| {
                                                let edit_target = room.clone();
                                                let toggle_target = room.clone();
                                                let id = room.id;
                                                view! {
                                                    <tr>
                                                        <td class="font-mono">{room.room_number.clone()}</td>
                                                        <td>{room.room_type.as_str()}</td>
                                                        <td>{format!("{:.2} CFA", room.price)}</td>
                                                        <td>{room.capacity}</td>
                                                        <td>
                                                            <span class=if room.is_available {
                                                                "badge badge-success badge-outline"
                                                            } else {
                                                                "badge badge-error badge-outline"
                                                            }>
                                                                {if room.is_available { "可预订" } else { "停用" }}
                                                            </span>
                                                        </td>
                                                        <td class="space-x-1">
                                                            <button
                                                                class="btn btn-info btn-xs"
                                                                on:click=move |_| room_form.load(&edit_target)
                                                            >
                                                                "编辑"
                                                            </button>
                                                            <button
                                                                class="btn btn-warning btn-xs"
                                                                on:click=move |_| on_toggle_room(toggle_target.clone())
                                                            >
                                                                "切换"
                                                            </button>
                                                            <button
                                                                class="btn btn-error btn-xs"
                                                                on:click=move |_| on_delete_room(id)
                                                            >
                                                                "删除"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            // ------------------- 预订 -------------------
            <Show when=move || active_tab.get() == AdminTab::Reservations>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2 gap-4">
                            <h2 class="card-title">"全部预订"</h2>
                            <div class="join">
                                <input
                                    type="number"
                                    placeholder="按房间 ID 过滤"
                                    class="input input-bordered input-sm join-item"
                                    on:input=move |ev| room_filter.set(event_target_value(&ev))
                                    prop:value=room_filter
                                />
                                <button class="btn btn-sm join-item" on:click=move |_| load_reservations()>
                                    "筛选"
                                </button>
                                <button
                                    class="btn btn-ghost btn-sm join-item"
                                    on:click=move |_| {
                                        room_filter.set(String::new());
                                        load_reservations();
                                    }
                                >
                                    "清除"
                                </button>
                            </div>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"住客"</th>
                                        <th>"房间"</th>
                                        <th>"入住"</th>
                                        <th>"退房"</th>
                                        <th>"总价"</th>
                                        <th>"状态"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || reservations.get().is_empty() && !loading.get()>
                                        <tr>
                                            <td colspan="8" class="text-center py-8 text-base-content/50">
                                                "暂无预订。"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || reservations.get()
                                        key=|r| (r.id, r.status)
                                        children=move |r| {
                                            let id = r.id;
                                            let status = r.status;
                                            view! {
                                                <tr>
                                                    <td>{format!("#{}", r.id)}</td>
                                                    <td>{r.guest_name.clone()}</td>
                                                    <td>{format!("房间 {}", r.room_number)}</td>
                                                    <td>{format_display_date(r.check_in_date)}</td>
                                                    <td>{format_display_date(r.check_out_date)}</td>
                                                    <td>{format!("{:.2} CFA", r.total_price)}</td>
                                                    <td><span class="badge badge-outline">{r.status.as_str()}</span></td>
                                                    <td class="space-x-1">
                                                        <Show when=move || status == ReservationStatus::Pending>
                                                            <button
                                                                class="btn btn-success btn-xs"
                                                                title="确认"
                                                                on:click=move |_| on_confirm_reservation(id)
                                                            >
                                                                "✓"
                                                            </button>
                                                        </Show>
                                                        <Show when=move || matches!(
                                                            status,
                                                            ReservationStatus::Pending | ReservationStatus::Confirmed
                                                        )>
                                                            <button
                                                                class="btn btn-error btn-xs"
                                                                title="取消"
                                                                on:click=move |_| on_cancel_reservation(id)
                                                            >
                                                                "✗"
                                                            </button>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </Show>

            // ------------------- 住客 -------------------
            <Show when=move || active_tab.get() == AdminTab::Guests>
                <div class="space-y-6">
                    <Show when=move || guest_form.editing.get().is_some()>
                        <div class="card bg-base-100 shadow-xl">
                            <form class="card-body" on:submit=on_submit_guest>
                                <h2 class="card-title">
                                    {move || format!("编辑住客 #{}", guest_form.editing.get().unwrap_or(0))}
                                </h2>
                                <div class="grid grid-cols-2 gap-4">
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">"名"</span></label>
                                        <input
                                            type="text"
                                            class="input input-bordered"
                                            on:input=move |ev| guest_form.first_name.set(event_target_value(&ev))
                                            prop:value=guest_form.first_name
                                            required
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">"姓"</span></label>
                                        <input
                                            type="text"
                                            class="input input-bordered"
                                            on:input=move |ev| guest_form.last_name.set(event_target_value(&ev))
                                            prop:value=guest_form.last_name
                                            required
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">"邮箱"</span></label>
                                        <input
                                            type="email"
                                            class="input input-bordered"
                                            on:input=move |ev| guest_form.email.set(event_target_value(&ev))
                                            prop:value=guest_form.email
                                            required
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">"电话"</span></label>
                                        <input
                                            type="tel"
                                            class="input input-bordered"
                                            on:input=move |ev| guest_form.phone_number.set(event_target_value(&ev))
                                            prop:value=guest_form.phone_number
                                            required
                                        />
                                    </div>
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"地址"</span></label>
                                    <input
                                        type="text"
                                        class="input input-bordered"
                                        on:input=move |ev| guest_form.address.set(event_target_value(&ev))
                                        prop:value=guest_form.address
                                    />
                                </div>
                                <div class="card-actions mt-2">
                                    <button type="submit" class="btn btn-primary">"保存"</button>
                                    <button type="button" class="btn btn-ghost" on:click=move |_| guest_form.reset()>
                                        "取消"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <h2 class="card-title p-6 pb-2">"全部住客"</h2>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"姓名"</th>
                                            <th>"邮箱"</th>
                                            <th>"电话"</th>
                                            <th>"地址"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || guests.get().is_empty() && !loading.get()>
                                            <tr>
                                                <td colspan="6" class="text-center py-8 text-base-content/50">
                                                    "暂无住客。"
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || guests.get()
                                            key=|g| g.id
                                            children=move |g| {
                                                let edit_target = g.clone();
                                                let id = g.id;
                                                view! {
                                                    <tr>
                                                        <td>{g.id}</td>
                                                        <td>{g.full_name()}</td>
                                                        <td>{g.email.clone()}</td>
                                                        <td>{g.phone_number.clone()}</td>
                                                        <td>{g.address.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                                        <td class="space-x-1">
                                                            <button
                                                                class="btn btn-info btn-xs"
                                                                on:click=move |_| guest_form.load(&edit_target)
                                                            >
                                                                "编辑"
                                                            </button>
                                                            <button
                                                                class="btn btn-error btn-xs"
                                                                on:click=move |_| on_delete_guest(id)
                                                            >
                                                                "删除"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parses_query_values() {
        assert_eq!(AdminTab::from_query(None), AdminTab::Rooms);
        assert_eq!(AdminTab::from_query(Some("rooms")), AdminTab::Rooms);
        assert_eq!(
            AdminTab::from_query(Some("reservations")),
            AdminTab::Reservations
        );
        assert_eq!(AdminTab::from_query(Some("guests")), AdminTab::Guests);
        assert_eq!(AdminTab::from_query(Some("bogus")), AdminTab::Rooms);
    }

    #[test]
    fn room_inputs_build_request() {
        let req = room_request_from_inputs(
            " 101 ",
            "DOUBLE",
            "50000",
            "2",
            "海景房",
            "",
            true,
        )
        .unwrap();
        assert_eq!(req.room_number, "101");
        assert_eq!(req.room_type, RoomType::Double);
        assert_eq!(req.price, 50000.0);
        assert_eq!(req.capacity, 2);
        assert_eq!(req.description.as_deref(), Some("海景房"));
        assert!(req.image_url.is_none());
        assert!(req.is_available);
    }

    #[test]
    fn room_inputs_reject_invalid_values() {
        assert!(room_request_from_inputs("", "DOUBLE", "1", "1", "", "", true).is_err());
        assert!(room_request_from_inputs("101", "VILLA", "1", "1", "", "", true).is_err());
        assert!(room_request_from_inputs("101", "DOUBLE", "abc", "1", "", "", true).is_err());
        assert!(room_request_from_inputs("101", "DOUBLE", "-5", "1", "", "", true).is_err());
        assert!(room_request_from_inputs("101", "DOUBLE", "1", "0", "", "", true).is_err());
    }

    #[test]
    fn guest_inputs_require_contact_fields() {
        let ok = guest_request_from_inputs(
            "Jane",
            "Doe",
            "jane@example.com",
            "+221-000-0000",
            "",
            Some(7),
        )
        .unwrap();
        assert_eq!(ok.user_id, Some(7));
        assert!(ok.address.is_none());

        assert!(
            guest_request_from_inputs("", "Doe", "j@e.com", "+221", "", None).is_err()
        );
        assert!(
            guest_request_from_inputs("Jane", "Doe", "", "+221", "", None).is_err()
        );
    }
}
