//! RoomStay 前端应用
//!
//! 酒店预订服务的浏览器客户端，纯展示与编排层：
//! - `session`: 会话存储（Token + 用户记录）
//! - `auth`: 认证上下文（响应式会话状态）
//! - `api`: HTTP 网关与各资源服务门面
//! - `booking`: 预订表单状态机与价格推算
//! - `components`: 页面与 UI 组件层
//!
//! 所有业务规则（可用性、定价、状态流转）都在远端服务，
//! 本层不做任何权威校验。

mod api;
mod auth;
mod booking;
mod session;

mod components {
    pub mod admin_dashboard;
    pub mod admin_manage;
    pub mod debug;
    pub mod footer;
    pub mod guard;
    pub mod home;
    pub mod login;
    pub mod navbar;
    pub mod register;
    pub mod reservation_card;
    pub mod reservations;
    pub mod room_card;
    pub mod room_details;
    pub mod rooms;
    pub mod toast;
}

// 原生 Web API 封装模块
// 仅保留 gloo 未覆盖的部分（storage 事件监听）。
pub(crate) mod web {
    mod storage_events;

    pub use storage_events::StorageEventListener;
}

use crate::api::ApiClient;
use crate::auth::{AuthContext, init_auth, watch_session_storage};
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::admin_manage::AdminManagePage;
use crate::components::debug::DebugPage;
use crate::components::footer::Footer;
use crate::components::guard::RequireAuth;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::components::reservations::ReservationsPage;
use crate::components::room_details::RoomDetailsPage;
use crate::components::rooms::RoomsPage;
use crate::components::toast::{ToastContext, ToastHost};

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文 + API 网关 + 通知上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(ApiClient::default());
    provide_context(ToastContext::new());

    // 2. 从 LocalStorage 恢复会话
    init_auth(&auth_ctx);

    // 3. 跨标签页登录/登出同步；监听器随 App 的 owner 销毁而注销
    //    （Closure 不是 Send，用 new_local 持有）
    let _listener = StoredValue::new_local(watch_session_storage(&auth_ctx));

    view! {
        <Router>
            <div class="flex flex-col min-h-screen bg-base-200">
                <Navbar />
                <main class="flex-1">
                    <Routes fallback=|| view! {
                        <div class="flex items-center justify-center min-h-screen">
                            <div class="text-center">
                                <h1 class="text-6xl font-bold text-error">"404"</h1>
                                <p class="text-xl mt-4">"页面未找到"</p>
                            </div>
                        </div>
                    }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/rooms") view=RoomsPage />
                        <Route path=path!("/rooms/:id") view=RoomDetailsPage />
                        <Route
                            path=path!("/reservations")
                            view=|| view! { <RequireAuth><ReservationsPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/admin")
                            view=|| view! { <RequireAuth admin=true><AdminDashboardPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/admin/manage")
                            view=|| view! { <RequireAuth admin=true><AdminManagePage /></RequireAuth> }
                        />
                        <Route path=path!("/debug") view=DebugPage />
                    </Routes>
                </main>
                <Footer />
                <ToastHost />
            </div>
        </Router>
    }
}
