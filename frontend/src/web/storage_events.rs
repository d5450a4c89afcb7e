//! storage 事件监听封装
//!
//! 其他标签页写 LocalStorage 时浏览器会在本页派发 `storage` 事件，
//! 这是跨标签页同步登录/登出的唯一通道（无轮询）。
//! 监听器是受控资源：drop 时自动注销。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 已注册的 storage 事件监听器
///
/// 持有期间回调保持存活；drop 时从 window 上移除监听。
pub struct StorageEventListener {
    closure: Closure<dyn Fn(web_sys::StorageEvent)>,
}

impl StorageEventListener {
    /// 注册监听器
    ///
    /// 回调参数是变化条目的键；整库被清空 (`storage.clear()`) 时为 None。
    /// 无法获取 window 时返回 None（非浏览器环境）。
    pub fn register<F>(callback: F) -> Option<Self>
    where
        F: Fn(Option<String>) + 'static,
    {
        let closure =
            Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
                callback(ev.key());
            });

        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { closure })
    }
}

impl Drop for StorageEventListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "storage",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
