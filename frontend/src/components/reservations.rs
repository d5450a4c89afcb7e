//! 我的预订页（需登录）
//!
//! 先按当前用户取住客档案，再按档案取预订列表；
//! "还没有档案" 等价于空列表，不是错误。

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::reservation_card::ReservationCard;
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use roomstay_shared::Reservation;

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let auth = use_auth();
    let auth_state = auth.state;

    let (reservations, set_reservations) = signal(Vec::<Reservation>::new());
    let (loading, set_loading) = signal(true);

    let load = {
        let api = api.clone();
        move || {
            let state = auth_state.get_untracked();
            let Some(user) = state.user else {
                set_loading.set(false);
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.guest_by_user(user.id).await {
                    Ok(guest) => match api.reservations_by_guest(guest.id).await {
                        Ok(data) => set_reservations.set(data),
                        Err(e) => toast.error(format!("加载预订失败：{}", e.message)),
                    },
                    // 还没有住客档案 = 还没有预订
                    Err(e) if e.is_not_found() => set_reservations.set(Vec::new()),
                    Err(e) => toast.error(format!("加载预订失败：{}", e.message)),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载（等初始会话读取完成）
    Effect::new({
        let load = load.clone();
        move |_| {
            let state = auth_state.get();
            if !state.is_loading && state.is_authenticated() {
                load();
            }
        }
    });

    let on_cancel = Callback::new({
        let api = api.clone();
        let load = load.clone();
        move |id: i64| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("确定要取消这个预订吗？")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            let load = load.clone();
            spawn_local(async move {
                match api.cancel_reservation(id).await {
                    Ok(_) => {
                        toast.success("预订已取消");
                        load();
                    }
                    Err(e) => toast.error(format!("取消预订失败：{}", e.message)),
                }
            });
        }
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"我的预订"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="text-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !reservations.get().is_empty()
                    fallback=|| view! {
                        <div class="text-center py-12 space-y-4">
                            <p class="text-base-content/50">"你还没有任何预订。"</p>
                            <a href="/rooms" class="btn btn-primary">"浏览客房"</a>
                        </div>
                    }
                >
                    <div class="grid md:grid-cols-2 gap-6">
                        <For
                            each=move || reservations.get()
                            key=|r| (r.id, r.status)
                            children=move |reservation| view! {
                                <ReservationCard reservation=reservation on_cancel=on_cancel />
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
