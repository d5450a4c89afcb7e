//! 会话存储模块
//!
//! 封装 LocalStorage 中的持久化凭据（Token + 用户记录）。
//! 两个键要么同时存在要么同时清除；读取采取 fail-closed 策略：
//! 记录损坏或缺少必要字段时，连同 Token 一并丢弃。
//!
//! 写入方只有认证流程（登录/注册/登出）和网关的 401 处理。

use gloo_storage::{LocalStorage, Storage};
use roomstay_shared::{TOKEN_KEY, USER_KEY, User};

/// 会话存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage 中的会话条目。
pub struct SessionStore;

impl SessionStore {
    /// 同时写入 Token 与用户记录
    pub fn save(token: &str, user: &User) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
        let _ = LocalStorage::set(USER_KEY, user);
    }

    /// 读取 Bearer Token
    pub fn token() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }

    /// 读取当前用户记录
    ///
    /// fail-closed：记录缺失、JSON 损坏或缺少 id/username 时，
    /// 清除两个条目并返回 None，避免半有效会话。
    pub fn current_user() -> Option<User> {
        let token = Self::token();
        let raw = LocalStorage::raw().get_item(USER_KEY).ok().flatten();

        match (token, raw) {
            (Some(_), Some(raw)) => match parse_user_record(&raw) {
                Some(user) => Some(user),
                None => {
                    Self::clear();
                    None
                }
            },
            // 只有一半的会话同样视为损坏
            (Some(_), None) | (None, Some(_)) => {
                Self::clear();
                None
            }
            (None, None) => None,
        }
    }

    /// 同时清除 Token 与用户记录
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }

    pub fn is_authenticated() -> bool {
        Self::token().is_some()
    }

    pub fn is_admin() -> bool {
        Self::current_user().map(|u| u.is_admin()).unwrap_or(false)
    }

    /// 调试页用：两个条目的原始值，不做任何校验
    pub fn raw_entries() -> (Option<String>, Option<String>) {
        let storage = LocalStorage::raw();
        (
            storage.get_item(TOKEN_KEY).ok().flatten(),
            storage.get_item(USER_KEY).ok().flatten(),
        )
    }
}

/// 解析并校验持久化的用户记录（纯函数）
///
/// 合法条件：JSON 可解析，且 id 非零、username 非空。
/// 注意：gloo-storage 写入时会把值序列化为 JSON，
/// 所以这里拿到的就是一个 JSON 对象字符串。
pub(crate) fn parse_user_record(raw: &str) -> Option<User> {
    let user: User = serde_json::from_str(raw).ok()?;
    if user.id == 0 || user.username.is_empty() {
        return None;
    }
    Some(user)
}

#[cfg(test)]
mod tests;
