//! 客房列表页：全量列表 + 条件搜索
//!
//! 搜索条件全部可选；重置即回到全量列表。每次搜索都是一次新的往返。

use crate::api::use_api;
use crate::components::room_card::RoomCard;
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use roomstay_shared::date::parse_input_date;
use roomstay_shared::{Room, RoomSearchCriteria, RoomType};

/// 搜索表单原始输入转条件对象（纯函数）
///
/// 空串即"不限"；数字解析失败按未填处理。
fn criteria_from_inputs(
    room_type: &str,
    min_price: &str,
    max_price: &str,
    min_capacity: &str,
    availability: &str,
    check_in: &str,
    check_out: &str,
) -> RoomSearchCriteria {
    RoomSearchCriteria {
        room_type: RoomType::from_str_loose(room_type),
        min_price: min_price.trim().parse::<f64>().ok(),
        max_price: max_price.trim().parse::<f64>().ok(),
        min_capacity: min_capacity.trim().parse::<u32>().ok(),
        is_available: match availability {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        check_in_date: parse_input_date(check_in),
        check_out_date: parse_input_date(check_out),
    }
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (rooms, set_rooms) = signal(Vec::<Room>::new());
    let (loading, set_loading) = signal(true);

    // 搜索表单字段
    let room_type = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let min_capacity = RwSignal::new(String::new());
    let availability = RwSignal::new(String::new());
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());

    let load_rooms = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_rooms().await {
                    Ok(data) => set_rooms.set(data),
                    Err(e) => toast.error(format!("加载客房失败：{}", e.message)),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new({
        let load_rooms = load_rooms.clone();
        move |_| {
            load_rooms();
        }
    });

    let on_search = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let criteria = criteria_from_inputs(
                &room_type.get(),
                &min_price.get(),
                &max_price.get(),
                &min_capacity.get(),
                &availability.get(),
                &check_in.get(),
                &check_out.get(),
            );
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.search_rooms(&criteria).await {
                    Ok(data) => set_rooms.set(data),
                    Err(e) => toast.error(format!("搜索失败：{}", e.message)),
                }
                set_loading.set(false);
            });
        }
    };

    let on_reset = {
        let load_rooms = load_rooms.clone();
        move |_| {
            room_type.set(String::new());
            min_price.set(String::new());
            max_price.set(String::new());
            min_capacity.set(String::new());
            availability.set(String::new());
            check_in.set(String::new());
            check_out.set(String::new());
            load_rooms();
        }
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"客房"</h1>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_search>
                    <h2 class="card-title text-lg">"搜索"</h2>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">"房型"</span></label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| room_type.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || room_type.get().is_empty()>"不限"</option>
                                {RoomType::ALL
                                    .iter()
                                    .map(|t| {
                                        let value = t.as_str();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || room_type.get() == value
                                            >
                                                {value}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"最低价"</span></label>
                            <input
                                type="number"
                                step="0.01"
                                placeholder="Min"
                                class="input input-bordered"
                                on:input=move |ev| min_price.set(event_target_value(&ev))
                                prop:value=min_price
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"最高价"</span></label>
                            <input
                                type="number"
                                step="0.01"
                                placeholder="Max"
                                class="input input-bordered"
                                on:input=move |ev| max_price.set(event_target_value(&ev))
                                prop:value=max_price
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"住客数"</span></label>
                            <input
                                type="number"
                                min="1"
                                placeholder="人数"
                                class="input input-bordered"
                                on:input=move |ev| min_capacity.set(event_target_value(&ev))
                                prop:value=min_capacity
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"可用性"</span></label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| availability.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || availability.get().is_empty()>"不限"</option>
                                <option value="true" selected=move || availability.get() == "true">"仅可预订"</option>
                                <option value="false" selected=move || availability.get() == "false">"仅不可预订"</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"入住日期"</span></label>
                            <input
                                type="date"
                                class="input input-bordered"
                                on:input=move |ev| check_in.set(event_target_value(&ev))
                                prop:value=check_in
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"退房日期"</span></label>
                            <input
                                type="date"
                                class="input input-bordered"
                                on:input=move |ev| check_out.set(event_target_value(&ev))
                                prop:value=check_out
                            />
                        </div>
                    </div>
                    <div class="card-actions mt-2">
                        <button type="submit" class="btn btn-primary">"搜索"</button>
                        <button type="button" on:click=on_reset class="btn btn-ghost">"重置"</button>
                    </div>
                </form>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="text-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !rooms.get().is_empty()
                    fallback=|| view! {
                        <p class="text-center py-12 text-base-content/50">"没有符合条件的客房。"</p>
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || rooms.get()
                            key=|room| room.id
                            children=move |room| view! { <RoomCard room=room /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_mean_no_constraints() {
        let c = criteria_from_inputs("", "", "", "", "", "", "");
        assert!(c.room_type.is_none());
        assert!(c.min_price.is_none());
        assert!(c.max_price.is_none());
        assert!(c.min_capacity.is_none());
        assert!(c.is_available.is_none());
        assert!(c.check_in_date.is_none());
        assert!(c.check_out_date.is_none());
    }

    #[test]
    fn filled_inputs_are_parsed() {
        let c = criteria_from_inputs(
            "SUITE",
            "10000",
            "90000.5",
            "2",
            "true",
            "2024-06-01",
            "2024-06-04",
        );
        assert_eq!(c.room_type, Some(RoomType::Suite));
        assert_eq!(c.min_price, Some(10000.0));
        assert_eq!(c.max_price, Some(90000.5));
        assert_eq!(c.min_capacity, Some(2));
        assert_eq!(c.is_available, Some(true));
        assert!(c.check_in_date.is_some());
        assert!(c.check_out_date.is_some());
    }

    #[test]
    fn garbage_numbers_are_treated_as_unset() {
        let c = criteria_from_inputs("PENTHOUSE", "abc", "-", "x", "maybe", "soon", "");
        assert!(c.room_type.is_none());
        assert!(c.min_price.is_none());
        assert!(c.max_price.is_none());
        assert!(c.min_capacity.is_none());
        assert!(c.is_available.is_none());
        assert!(c.check_in_date.is_none());
    }
}
