use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-100 text-base-content/70 mt-8">
            <aside>
                <p class="font-bold">"🏨 RoomStay"</p>
                <p>"客房浏览 · 在线预订 · 住客服务"</p>
            </aside>
        </footer>
    }
}
