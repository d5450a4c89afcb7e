//! 预订卡片：我的预订页使用

use leptos::prelude::*;
use roomstay_shared::date::format_display_date;
use roomstay_shared::{Reservation, ReservationStatus};

/// 状态对应的徽章样式
fn status_badge_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmed => "badge badge-success",
        ReservationStatus::Pending => "badge badge-warning",
        ReservationStatus::Cancelled => "badge badge-error",
        ReservationStatus::Completed => "badge badge-neutral",
    }
}

#[component]
pub fn ReservationCard(
    reservation: Reservation,
    /// 仅 PENDING 状态展示取消入口
    #[prop(into, optional)]
    on_cancel: Option<Callback<i64>>,
) -> impl IntoView {
    let id = reservation.id;
    let cancellable = reservation.status == ReservationStatus::Pending && on_cancel.is_some();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">{format!("预订 #{}", reservation.id)}</h3>
                    <span class=status_badge_class(reservation.status)>
                        {reservation.status.as_str()}
                    </span>
                </div>
                <div class="space-y-1 text-sm">
                    <p><span class="font-bold">"房间："</span> {reservation.room_number.clone()}</p>
                    <p><span class="font-bold">"住客："</span> {reservation.guest_name.clone()}</p>
                    <p>
                        <span class="font-bold">"入住："</span>
                        {format_display_date(reservation.check_in_date)}
                    </p>
                    <p>
                        <span class="font-bold">"退房："</span>
                        {format_display_date(reservation.check_out_date)}
                    </p>
                    <p>
                        <span class="font-bold">"总价："</span>
                        {format!("{:.2} CFA", reservation.total_price)}
                    </p>
                </div>
                <Show when=move || cancellable>
                    <div class="card-actions justify-end">
                        <button
                            class="btn btn-error btn-sm"
                            on:click=move |_| {
                                if let Some(cb) = on_cancel {
                                    cb.run(id);
                                }
                            }
                        >
                            "取消预订"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
