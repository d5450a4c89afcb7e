//! 认证模块
//!
//! 管理进程内的会话状态，与路由系统解耦。
//! 会话存储 (`SessionStore`) 是持久化后备；本模块在启动时读取一次，
//! 之后只在登录/注册/登出以及跨标签页 storage 事件时更新。

use crate::api::ApiClient;
use crate::session::SessionStore;
use crate::web::StorageEventListener;
use leptos::prelude::*;
use roomstay_shared::error::ApiResult;
use roomstay_shared::{LoginRequest, RegisterRequest, TOKEN_KEY, USER_KEY, User};

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（未登录时为 None）
    pub user: Option<User>,
    /// 是否正在加载（仅在初始读取完成前为 true）
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(User::is_admin).unwrap_or(false)
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文（初始为加载中）
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            user: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 管理员标志信号
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_admin())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：读取会话存储一次，随后解除加载标志
pub fn init_auth(ctx: &AuthContext) {
    let user = SessionStore::current_user();
    ctx.set_state.update(|state| {
        state.user = user;
        state.is_loading = false;
    });
}

/// 登录：调用认证服务，持久化会话并采纳返回的用户
pub async fn login(ctx: &AuthContext, api: &ApiClient, credentials: LoginRequest) -> ApiResult<User> {
    let session = api.login(&credentials).await?;
    SessionStore::save(&session.token, &session.user);
    let user = session.user.clone();
    ctx.set_state.update(|state| state.user = Some(session.user));
    Ok(user)
}

/// 注册：成功即视为登录，会话采纳逻辑与登录一致
pub async fn register(
    ctx: &AuthContext,
    api: &ApiClient,
    request: RegisterRequest,
) -> ApiResult<User> {
    let session = api.register(&request).await?;
    SessionStore::save(&session.token, &session.user);
    let user = session.user.clone();
    ctx.set_state.update(|state| state.user = Some(session.user));
    Ok(user)
}

/// 登出：同步清除存储与内存状态，无网络往返
///
/// 导航由调用方或路由守卫处理。
pub fn logout(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.update(|state| state.user = None);
}

/// 订阅跨标签页的 storage 变化，把其他标签页的登录/登出同步进来
///
/// 返回的监听器是受控资源，drop 时注销；调用方应持有到组件销毁。
pub fn watch_session_storage(ctx: &AuthContext) -> Option<StorageEventListener> {
    let set_state = ctx.set_state;
    StorageEventListener::register(move |key| {
        let relevant = match key.as_deref() {
            // key 为 None 表示整库被清空
            None => true,
            Some(k) => k == TOKEN_KEY || k == USER_KEY,
        };
        if relevant {
            web_sys::console::log_1(&"[Auth] storage changed in another tab, re-syncing".into());
            let user = SessionStore::current_user();
            set_state.update(|state| state.user = user);
        }
    })
}
