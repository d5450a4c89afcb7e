use crate::api::use_api;
use crate::auth::{register, use_auth};
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use roomstay_shared::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let navigate = use_navigate();
    let auth_state = auth.state;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 已登录就不该停留在注册页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let state = auth_state.get();
            if !state.is_loading && state.is_authenticated() {
                navigate("/", Default::default());
            }
        }
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if username.get().is_empty()
                || password.get().is_empty()
                || email.get().is_empty()
                || first_name.get().is_empty()
                || last_name.get().is_empty()
            {
                toast.error("请填写所有必填项");
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let phone = phone_number.get_untracked();
                let request = RegisterRequest {
                    username: username.get_untracked(),
                    password: password.get_untracked(),
                    email: email.get_untracked(),
                    first_name: first_name.get_untracked(),
                    last_name: last_name.get_untracked(),
                    phone_number: if phone.trim().is_empty() {
                        None
                    } else {
                        Some(phone)
                    },
                };
                match register(&auth, &api, request).await {
                    Ok(user) => {
                        toast.success("注册成功，已自动登录！");
                        if user.is_admin() {
                            navigate("/admin", Default::default());
                        } else {
                            navigate("/", Default::default());
                        }
                    }
                    Err(e) => {
                        toast.error(format!("注册失败：{}", e.message));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"注册"</h1>
                    <p class="text-base-content/70">"创建账号开始预订"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="first_name">
                                    <span class="label-text">"名"</span>
                                </label>
                                <input
                                    id="first_name"
                                    type="text"
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                    prop:value=first_name
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="last_name">
                                    <span class="label-text">"姓"</span>
                                </label>
                                <input
                                    id="last_name"
                                    type="text"
                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                    prop:value=last_name
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="reg_username"
                                type="text"
                                on:input=move |ev| username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="reg_email"
                                type="email"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="reg_password"
                                type="password"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_phone">
                                <span class="label-text">"电话（可选）"</span>
                            </label>
                            <input
                                id="reg_phone"
                                type="tel"
                                placeholder="+221-000-0000"
                                on:input=move |ev| phone_number.set(event_target_value(&ev))
                                prop:value=phone_number
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "已有账号？" <a href="/login" class="link link-primary">"去登录"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
