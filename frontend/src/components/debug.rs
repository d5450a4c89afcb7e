//! 调试检查页（不需要登录）
//!
//! 展示当前认证状态与 LocalStorage 原始条目，提供一键清库。

use crate::auth::{logout, use_auth};
use crate::session::SessionStore;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DebugPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    // 原始条目快照 + 手动刷新
    let (entries, set_entries) = signal(SessionStore::raw_entries());
    let refresh = move |_| set_entries.set(SessionStore::raw_entries());

    let user_json = move || {
        state
            .get()
            .user
            .and_then(|u| serde_json::to_string_pretty(&u).ok())
            .unwrap_or_else(|| "null".to_string())
    };

    let on_clear = move |_| {
        SessionStore::clear();
        logout(&auth);
        set_entries.set(SessionStore::raw_entries());
        navigate("/login", Default::default());
    };

    view! {
        <div class="max-w-3xl mx-auto p-8 space-y-4">
            <h1 class="text-3xl font-bold">"🔍 调试页"</h1>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"认证状态"</h2>
                    <p>
                        <span class="font-bold">"已登录："</span>
                        {move || if state.get().is_authenticated() { "是 ✓" } else { "否 ✗" }}
                    </p>
                    <p>
                        <span class="font-bold">"管理员："</span>
                        {move || if state.get().is_admin() { "是 ✓" } else { "否 ✗" }}
                    </p>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"用户记录"</h2>
                    <pre class="bg-base-200 p-4 rounded overflow-auto text-sm">{user_json}</pre>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"LocalStorage"</h2>
                    <pre class="bg-base-200 p-4 rounded overflow-auto text-sm">
                        {move || {
                            let (token, user) = entries.get();
                            format!(
                                "token: {}\nuser: {}",
                                token.unwrap_or_else(|| "<空>".to_string()),
                                user.unwrap_or_else(|| "<空>".to_string()),
                            )
                        }}
                    </pre>
                    <div class="card-actions">
                        <button class="btn btn-ghost btn-sm" on:click=refresh>"刷新"</button>
                        <button class="btn btn-error btn-sm" on:click=on_clear>
                            "🗑️ 清空 LocalStorage"
                        </button>
                    </div>
                </div>
            </div>

            <div class="alert bg-warning/20">
                <div>
                    <h3 class="font-bold">"说明"</h3>
                    <ol class="list-decimal list-inside text-sm">
                        <li>"检查用户记录是否包含 firstName 与 lastName"</li>
                        <li>"管理员账号的 role 应为 ADMIN"</li>
                        <li>"数据异常时清空 LocalStorage 并重新登录"</li>
                    </ol>
                </div>
            </div>
        </div>
    }
}
