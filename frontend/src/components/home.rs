use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"欢迎来到 RoomStay"</h1>
                    <p class="py-6 text-base-content/70">
                        "浏览客房、查询可用日期并在线完成预订。"
                    </p>
                    <a href="/rooms" class="btn btn-primary">"浏览客房"</a>
                </div>
            </div>
        </div>
        <div class="max-w-5xl mx-auto grid md:grid-cols-3 gap-4 p-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"🛏️ 多种房型"</h2>
                    <p>"单人间到豪华套房，按容量与价格筛选。"</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"📅 即时预订"</h2>
                    <p>"选择日期即时提交，冲突立刻反馈。"</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"🧾 预订管理"</h2>
                    <p>"随时查看或取消待确认的预订。"</p>
                </div>
            </div>
        </div>
    }
}
