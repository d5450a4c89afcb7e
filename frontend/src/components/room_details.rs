//! 房间详情 + 预订工作流
//!
//! 提交编排（顺序固定）：
//! 1. 客户端提示性校验（服务端才是权威）
//! 2. 没有住客档案时先同步建档；建档失败直接终止，不再发预订请求
//! 3. 创建预订；可用性冲突与普通失败走不同的提示文案
//!
//! 任何一步失败都不影响会话，页面保持可交互。

use crate::api::use_api;
use crate::auth::use_auth;
use crate::booking::{self, BookingFailure, BookingForm, SubmitState};
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use roomstay_shared::{Guest, MAX_ROOMS_PER_BOOKING, Room};

#[component]
pub fn RoomDetailsPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let auth = use_auth();
    let auth_state = auth.state;
    let navigate = use_navigate();
    let params = use_params_map();

    let room_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let (room, set_room) = signal(Option::<Room>::None);
    let (guest, set_guest) = signal(Option::<Guest>::None);
    let (loading, set_loading) = signal(true);
    let (image_index, set_image_index) = signal(0usize);

    let form = BookingForm::new();

    // 加载房间详情；已登录时顺带取住客档案（没有档案不是错误）
    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(id) = room_id.get() else {
                set_loading.set(false);
                return;
            };
            let state = auth_state.get();
            if state.is_loading {
                return;
            }
            let user_id = state.user.as_ref().map(|u| u.id);
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_room(id).await {
                    Ok(data) => set_room.set(Some(data)),
                    Err(e) => toast.error(format!("加载房间详情失败：{}", e.message)),
                }
                if let Some(user_id) = user_id {
                    match api.guest_by_user(user_id).await {
                        Ok(g) => set_guest.set(Some(g)),
                        Err(e) if e.is_not_found() => {
                            // 首次预订时再建档
                            web_sys::console::log_1(&"[Booking] no guest profile yet".into());
                        }
                        Err(e) => toast.error(format!("加载住客档案失败：{}", e.message)),
                    }
                }
                set_loading.set(false);
            });
        }
    });

    // 派生总价：晚数 × 单价 × 房间数，字段变化即重算
    let total = move || {
        room.get()
            .map(|r| booking::total_price(&form.fields(), r.price))
            .unwrap_or(0.0)
    };

    let images = move || room.get().map(|r| r.gallery()).unwrap_or_default();
    let next_image = move |_| {
        let len = images().len();
        if len > 0 {
            set_image_index.update(|i| *i = (*i + 1) % len);
        }
    };
    let prev_image = move |_| {
        let len = images().len();
        if len > 0 {
            set_image_index.update(|i| *i = (*i + len - 1) % len);
        }
    };

    let on_submit = StoredValue::new_local({
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let state = auth_state.get();
            let Some(user) = state.user else {
                toast.error("请先登录再预订");
                navigate("/login", Default::default());
                return;
            };
            let Some(current_room) = room.get() else {
                return;
            };

            // 1. 校验
            form.state.set(SubmitState::Validating);
            let fields = form.fields();
            let errors = booking::validate(&fields, current_room.capacity);
            if !errors.is_empty() {
                form.errors.set(errors);
                form.state.set(SubmitState::Idle);
                return;
            }
            form.errors.set(Default::default());
            form.state.set(SubmitState::Submitting);

            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                // 2. 懒建档：恰好一次建档调用，失败则终止
                let guest_id = match guest.get_untracked() {
                    Some(g) => g.id,
                    None => {
                        let request = booking::guest_request_for(&user);
                        match api.create_guest(&request).await {
                            Ok(created) => {
                                let id = created.id;
                                set_guest.set(Some(created));
                                id
                            }
                            Err(e) => {
                                form.state.set(SubmitState::Failed(
                                    BookingFailure::GuestProvisioning(e.message.clone()),
                                ));
                                toast.error("无法创建住客档案，请稍后重试");
                                return;
                            }
                        }
                    }
                };

                // 3. 创建预订
                let Some(request) =
                    booking::to_reservation_request(&fields, guest_id, current_room.id)
                else {
                    form.state.set(SubmitState::Idle);
                    return;
                };
                match api.create_reservation(&request).await {
                    Ok(_) => {
                        form.state.set(SubmitState::Succeeded);
                        toast.success("预订创建成功！");
                        navigate("/reservations", Default::default());
                    }
                    Err(e) if e.is_availability_conflict() => {
                        form.state.set(SubmitState::Failed(BookingFailure::Conflict(
                            e.message.clone(),
                        )));
                        toast.error("该房间在所选日期不可用，请更换日期或其他房间。");
                    }
                    Err(e) => {
                        form.state
                            .set(SubmitState::Failed(BookingFailure::Other(e.message.clone())));
                        toast.error(format!("创建预订失败：{}", e.message));
                    }
                }
            });
        }
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-[60vh]">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <Show
                when=move || room.get().is_some()
                fallback=|| view! {
                    <div class="text-center py-16">
                        <h1 class="text-2xl font-bold text-error">"未找到该房间"</h1>
                        <a href="/rooms" class="btn btn-primary mt-4">"返回客房列表"</a>
                    </div>
                }
            >
                {move || {
                    let on_submit = on_submit.get_value();
                    let current = room.get().unwrap();
                    let capacity = current.capacity;
                    let is_available = current.is_available;
                    view! {
                        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
                            <h1 class="text-3xl font-bold">{format!("房间 {}", current.room_number)}</h1>

                            // 图片轮播
                            <Show when=move || !images().is_empty()>
                                <div class="relative rounded-box overflow-hidden shadow-xl">
                                    <img
                                        src=move || {
                                            let list = images();
                                            list.get(image_index.get() % list.len().max(1))
                                                .cloned()
                                                .unwrap_or_default()
                                        }
                                        alt="客房照片"
                                        class="w-full max-h-96 object-cover"
                                    />
                                    <Show when=move || (images().len() > 1)>
                                        <button class="btn btn-circle btn-sm absolute left-2 top-1/2" on:click=prev_image>"❮"</button>
                                        <button class="btn btn-circle btn-sm absolute right-2 top-1/2" on:click=next_image>"❯"</button>
                                        <span class="badge badge-neutral absolute bottom-2 right-2">
                                            {move || format!("{} / {}", image_index.get() + 1, images().len())}
                                        </span>
                                    </Show>
                                </div>
                            </Show>

                            <div class="grid md:grid-cols-2 gap-6">
                                // 房间信息
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body space-y-1">
                                        <h2 class="card-title">"房间信息"</h2>
                                        <p><span class="font-bold">"房型："</span> {current.room_type.as_str()}</p>
                                        <p><span class="font-bold">"容量："</span> {format!("{} 位住客", capacity)}</p>
                                        <p><span class="font-bold">"价格："</span> {format!("{:.2} CFA / 晚", current.price)}</p>
                                        <p>
                                            <span class="font-bold">"状态："</span>
                                            <span class=if is_available { "text-success" } else { "text-error" }>
                                                {if is_available { " 可预订" } else { " 不可预订" }}
                                            </span>
                                        </p>
                                        {current.description.clone().map(|desc| view! {
                                            <div>
                                                <h3 class="font-bold mt-2">"描述"</h3>
                                                <p class="text-base-content/70">{desc}</p>
                                            </div>
                                        })}
                                    </div>
                                </div>

                                // 预订表单 / 登录提示
                                <Show
                                    when=move || is_available && auth_state.get().is_authenticated()
                                    fallback=move || view! {
                                        <div class="card bg-base-100 shadow-xl">
                                            <div class="card-body items-center justify-center">
                                                {if is_available {
                                                    view! {
                                                        <p>"请先 " <a href="/login" class="link link-primary">"登录"</a> " 再预订"</p>
                                                    }.into_any()
                                                } else {
                                                    view! { <p class="text-base-content/50">"该房间当前不可预订。"</p> }.into_any()
                                                }}
                                            </div>
                                        </div>
                                    }
                                >
                                    <div class="card bg-base-100 shadow-xl">
                                        <form class="card-body" on:submit=on_submit.clone()>
                                            <h2 class="card-title">"发起预订"</h2>

                                            <div class="form-control">
                                                <label class="label" for="check_in">
                                                    <span class="label-text">"入住日期"</span>
                                                </label>
                                                <input
                                                    id="check_in"
                                                    type="date"
                                                    class="input input-bordered"
                                                    on:input=move |ev| form.check_in.set(event_target_value(&ev))
                                                    prop:value=form.check_in
                                                    required
                                                />
                                                {move || form.errors.get().check_in.map(|msg| view! {
                                                    <span class="text-error text-sm">{msg}</span>
                                                })}
                                            </div>

                                            <div class="form-control">
                                                <label class="label" for="check_out">
                                                    <span class="label-text">"退房日期"</span>
                                                </label>
                                                <input
                                                    id="check_out"
                                                    type="date"
                                                    class="input input-bordered"
                                                    on:input=move |ev| form.check_out.set(event_target_value(&ev))
                                                    prop:value=form.check_out
                                                    required
                                                />
                                                {move || form.errors.get().check_out.map(|msg| view! {
                                                    <span class="text-error text-sm">{msg}</span>
                                                })}
                                            </div>

                                            <div class="grid grid-cols-2 gap-4">
                                                <div class="form-control">
                                                    <label class="label" for="guests">
                                                        <span class="label-text">"住客数"</span>
                                                    </label>
                                                    <input
                                                        id="guests"
                                                        type="number"
                                                        min="1"
                                                        max=capacity.to_string()
                                                        class="input input-bordered"
                                                        on:input=move |ev| {
                                                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                                                form.guests.set(v);
                                                            }
                                                        }
                                                        prop:value=move || form.guests.get().to_string()
                                                    />
                                                    {move || form.errors.get().guests.map(|msg| view! {
                                                        <span class="text-error text-sm">{msg}</span>
                                                    })}
                                                </div>
                                                <div class="form-control">
                                                    <label class="label" for="rooms">
                                                        <span class="label-text">"房间数"</span>
                                                    </label>
                                                    <input
                                                        id="rooms"
                                                        type="number"
                                                        min="1"
                                                        max=MAX_ROOMS_PER_BOOKING.to_string()
                                                        class="input input-bordered"
                                                        on:input=move |ev| {
                                                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                                                form.rooms.set(v);
                                                            }
                                                        }
                                                        prop:value=move || form.rooms.get().to_string()
                                                    />
                                                    {move || form.errors.get().rooms.map(|msg| view! {
                                                        <span class="text-error text-sm">{msg}</span>
                                                    })}
                                                </div>
                                            </div>

                                            <div class="form-control">
                                                <label class="label" for="special">
                                                    <span class="label-text">"特殊要求（可选）"</span>
                                                </label>
                                                <textarea
                                                    id="special"
                                                    rows="3"
                                                    class="textarea textarea-bordered"
                                                    on:input=move |ev| form.special_requests.set(event_target_value(&ev))
                                                    prop:value=form.special_requests
                                                ></textarea>
                                            </div>

                                            <Show when=move || (total() > 0.0)>
                                                <div class="alert bg-base-200 mt-2">
                                                    <span class="font-bold">
                                                        {move || format!("总价：{:.2} CFA", total())}
                                                    </span>
                                                </div>
                                            </Show>

                                            // 冲突与普通失败分开提示
                                            {move || match form.state.get() {
                                                SubmitState::Failed(BookingFailure::Conflict(_)) => Some(view! {
                                                    <div role="alert" class="alert alert-warning text-sm py-2">
                                                        <span>"该房间在所选日期不可用，请更换日期或其他房间。"</span>
                                                    </div>
                                                }.into_any()),
                                                SubmitState::Failed(BookingFailure::GuestProvisioning(_)) => Some(view! {
                                                    <div role="alert" class="alert alert-error text-sm py-2">
                                                        <span>"无法创建住客档案。"</span>
                                                    </div>
                                                }.into_any()),
                                                SubmitState::Failed(BookingFailure::Other(msg)) => Some(view! {
                                                    <div role="alert" class="alert alert-error text-sm py-2">
                                                        <span>{msg}</span>
                                                    </div>
                                                }.into_any()),
                                                _ => None,
                                            }}

                                            <div class="form-control mt-4">
                                                <button
                                                    class="btn btn-primary"
                                                    disabled=move || form.state.get().is_submitting()
                                                >
                                                    {move || if form.state.get().is_submitting() {
                                                        view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                                                    } else {
                                                        "立即预订".into_any()
                                                    }}
                                                </button>
                                            </div>
                                        </form>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                }}
            </Show>
        </Show>
    }
}
