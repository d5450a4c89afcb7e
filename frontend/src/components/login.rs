use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use roomstay_shared::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let navigate = use_navigate();
    let auth_state = auth.state;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 已登录用户按角色转走：管理员去控制面板，其余回首页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let state = auth_state.get();
            if !state.is_loading && state.is_authenticated() {
                if state.is_admin() {
                    navigate("/admin", Default::default());
                } else {
                    navigate("/", Default::default());
                }
            }
        }
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if username.get().is_empty() || password.get().is_empty() {
                toast.error("请填写用户名和密码");
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let credentials = LoginRequest {
                    username: username.get_untracked(),
                    password: password.get_untracked(),
                };
                match login(&auth, &api, credentials).await {
                    Ok(user) => {
                        toast.success("登录成功！");
                        if user.is_admin() {
                            navigate("/admin", Default::default());
                        } else {
                            navigate("/", Default::default());
                        }
                    }
                    Err(e) => {
                        toast.error(format!("登录失败：{}", e.message));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"登录"</h1>
                    <p class="text-base-content/70">"使用账号密码进入 RoomStay"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "还没有账号？" <a href="/register" class="link link-primary">"去注册"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
