//! 全局通知（toast）
//!
//! 所有失败的 UI 操作都在操作边界收口成一条短暂通知，绝不静默吞掉。
//! 展示 3 秒后自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// 自动消失的毫秒数
const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// 序号：自动消失只作用于当前这一条，后来的通知不受影响
    id: u64,
    pub message: String,
    pub is_error: bool,
}

/// 通知上下文，通过 Context 在组件间共享
#[derive(Clone, Copy)]
pub struct ToastContext {
    state: ReadSignal<Option<Toast>>,
    set_state: WriteSignal<Option<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(Option::<Toast>::None);
        Self {
            state,
            set_state,
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, message: String, is_error: bool) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.set_state.set(Some(Toast {
            id,
            message,
            is_error,
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), true);
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知宿主组件，挂在 App 根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();
    let state = ctx.state;
    let set_state = ctx.set_state;

    // 每条通知 3 秒后清除；若期间被新通知顶掉则由新一轮定时器接管
    Effect::new(move |_| {
        if let Some(toast) = state.get() {
            let id = toast.id;
            Timeout::new(DISMISS_AFTER_MS, move || {
                set_state.update(|current| {
                    if current.as_ref().map(|t| t.id) == Some(id) {
                        *current = None;
                    }
                });
            })
            .forget();
        }
    });

    view! {
        <Show when=move || state.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if state.get().map(|t| t.is_error).unwrap_or(false) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || state.get().map(|t| t.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
