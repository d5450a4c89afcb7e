//! 房间列表卡片

use leptos::prelude::*;
use roomstay_shared::Room;

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let detail_href = format!("/rooms/{}", room.id);
    let cover = room.gallery().into_iter().next();

    view! {
        <div class="card bg-base-100 shadow-xl">
            {cover.map(|url| view! {
                <figure class="h-48 overflow-hidden">
                    <img src=url alt=format!("Room {}", room.room_number) class="w-full object-cover" />
                </figure>
            })}
            <div class="card-body">
                <h2 class="card-title">
                    {format!("房间 {}", room.room_number)}
                    <div class="badge badge-accent badge-outline">{room.room_type.as_str()}</div>
                </h2>
                <p class="text-lg font-bold text-primary">
                    {format!("{:.2} CFA", room.price)}
                    <span class="text-sm font-normal text-base-content/60">" / 晚"</span>
                </p>
                <p class="text-sm text-base-content/70">{format!("最多 {} 位住客", room.capacity)}</p>
                <div class="card-actions justify-between items-center mt-2">
                    <div class=move || {
                        if room.is_available {
                            "badge badge-success badge-outline"
                        } else {
                            "badge badge-error badge-outline"
                        }
                    }>
                        {if room.is_available { "可预订" } else { "不可预订" }}
                    </div>
                    <a href=detail_href class="btn btn-primary btn-sm">"查看详情"</a>
                </div>
            </div>
        </div>
    }
}
