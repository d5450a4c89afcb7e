//! 顶部导航栏：按登录状态与角色切换入口

use crate::auth::{logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    let is_authenticated = move || state.get().is_authenticated();
    let is_admin = move || state.get().is_admin();
    let display_name = move || {
        state
            .get()
            .user
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        logout(&auth);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <a href="/" class="btn btn-ghost text-xl">"🏨 RoomStay"</a>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal items-center gap-1">
                    <li><a href="/">"首页"</a></li>
                    <li><a href="/rooms">"客房"</a></li>
                    <Show
                        when=is_authenticated
                        fallback=|| view! {
                            <li><a href="/login">"登录"</a></li>
                            <li><a href="/register" class="btn btn-primary btn-sm text-primary-content">"注册"</a></li>
                        }
                    >
                        <Show when=move || !is_admin()>
                            <li><a href="/reservations">"我的预订"</a></li>
                        </Show>
                        <Show when=is_admin>
                            <li><a href="/admin">"控制面板"</a></li>
                        </Show>
                        <li>
                            <span class="opacity-70">"欢迎，" {display_name}</span>
                        </li>
                        <li>
                            <button on:click=on_logout.clone() class="btn btn-outline btn-error btn-sm">
                                "退出登录"
                            </button>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
