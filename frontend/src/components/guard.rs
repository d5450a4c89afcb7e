//! 路由守卫
//!
//! 两种模式："需要登录" 与 "需要登录且为管理员"。
//! 判定是当前会话状态的纯函数，不缓存历史决策；
//! 初始会话还在读取时先渲染加载态，不做任何重定向。

use crate::auth::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 初始会话尚未读取完成，不做决定
    Wait,
    Allow,
    /// 未登录，转登录页
    RedirectLogin,
    /// 已登录但不是管理员，转中性页面
    RedirectHome,
}

/// 纯判定函数
pub fn decide(
    is_loading: bool,
    is_authenticated: bool,
    is_admin: bool,
    admin_required: bool,
) -> GuardOutcome {
    if is_loading {
        return GuardOutcome::Wait;
    }
    if !is_authenticated {
        return GuardOutcome::RedirectLogin;
    }
    if admin_required && !is_admin {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Allow
}

/// 受保护路由包装组件
#[component]
pub fn RequireAuth(
    /// 是否要求管理员角色
    #[prop(optional)]
    admin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    let decision = move || {
        let s = state.get();
        decide(s.is_loading, s.is_authenticated(), s.is_admin(), admin)
    };

    Effect::new({
        let navigate = navigate.clone();
        move |_| match decision() {
            GuardOutcome::RedirectLogin => {
                web_sys::console::log_1(&"[Guard] access denied, redirecting to login".into());
                navigate("/login", Default::default());
            }
            GuardOutcome::RedirectHome => {
                web_sys::console::log_1(&"[Guard] admin only, redirecting home".into());
                navigate("/", Default::default());
            }
            GuardOutcome::Wait | GuardOutcome::Allow => {}
        }
    });

    view! {
        <Show
            when=move || decision() == GuardOutcome::Allow
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_session_defers_decision() {
        assert_eq!(decide(true, false, false, false), GuardOutcome::Wait);
        assert_eq!(decide(true, true, true, true), GuardOutcome::Wait);
    }

    #[test]
    fn unauthenticated_always_goes_to_login() {
        assert_eq!(decide(false, false, false, false), GuardOutcome::RedirectLogin);
        assert_eq!(decide(false, false, false, true), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn authenticated_user_allowed_on_plain_routes() {
        assert_eq!(decide(false, true, false, false), GuardOutcome::Allow);
        assert_eq!(decide(false, true, true, false), GuardOutcome::Allow);
    }

    #[test]
    fn non_admin_redirected_off_admin_routes() {
        assert_eq!(decide(false, true, false, true), GuardOutcome::RedirectHome);
        assert_eq!(decide(false, true, true, true), GuardOutcome::Allow);
    }
}
