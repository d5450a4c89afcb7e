//! 管理员控制面板
//!
//! 三个列表并行加载（all-complete join，彼此间无顺序约束），
//! 统计计算是列表上的纯函数。

use crate::api::use_api;
use crate::components::toast::use_toast;
use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use roomstay_shared::date::format_display_date;
use roomstay_shared::{Guest, Reservation, ReservationStatus, Room};

/// 面板统计值
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DashboardStats {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub total_reservations: usize,
    pub pending_reservations: usize,
    pub confirmed_reservations: usize,
    pub completed_reservations: usize,
    pub cancelled_reservations: usize,
    pub total_guests: usize,
    /// 已确认 + 已完成的总营收
    pub total_revenue: f64,
    /// 当月（按入住日期）营收
    pub monthly_revenue: f64,
}

/// 对已加载的列表做统计（纯函数）
pub(crate) fn compute_stats(
    rooms: &[Room],
    reservations: &[Reservation],
    guests: &[Guest],
    today: NaiveDate,
) -> DashboardStats {
    let available_rooms = rooms.iter().filter(|r| r.is_available).count();
    let count_status = |status: ReservationStatus| {
        reservations.iter().filter(|r| r.status == status).count()
    };
    let earning = |r: &&Reservation| {
        matches!(
            r.status,
            ReservationStatus::Confirmed | ReservationStatus::Completed
        )
    };

    let total_revenue: f64 = reservations
        .iter()
        .filter(earning)
        .map(|r| r.total_price)
        .sum();
    let monthly_revenue: f64 = reservations
        .iter()
        .filter(earning)
        .filter(|r| {
            r.check_in_date.month() == today.month() && r.check_in_date.year() == today.year()
        })
        .map(|r| r.total_price)
        .sum();

    DashboardStats {
        total_rooms: rooms.len(),
        available_rooms,
        occupied_rooms: rooms.len() - available_rooms,
        total_reservations: reservations.len(),
        pending_reservations: count_status(ReservationStatus::Pending),
        confirmed_reservations: count_status(ReservationStatus::Confirmed),
        completed_reservations: count_status(ReservationStatus::Completed),
        cancelled_reservations: count_status(ReservationStatus::Cancelled),
        total_guests: guests.len(),
        total_revenue,
        monthly_revenue,
    }
}

/// 最近 n 条预订：按创建时间倒序，缺创建时间的排最后
pub(crate) fn recent_reservations(reservations: &[Reservation], n: usize) -> Vec<Reservation> {
    let mut sorted: Vec<Reservation> = reservations.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (recent, set_recent) = signal(Vec::<Reservation>::new());
    let (loading, set_loading) = signal(true);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (rooms, reservations, guests) = futures::join!(
                    api.list_rooms(),
                    api.list_reservations(),
                    api.list_guests()
                );
                match (rooms, reservations, guests) {
                    (Ok(rooms), Ok(reservations), Ok(guests)) => {
                        let today = Utc::now().date_naive();
                        set_stats.set(compute_stats(&rooms, &reservations, &guests, today));
                        set_recent.set(recent_reservations(&reservations, 5));
                    }
                    _ => toast.error("加载控制面板数据失败"),
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"📊 管理员控制面板"</h1>
                <a href="/admin/manage" class="btn btn-primary">"管理酒店"</a>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="text-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"客房总数"</div>
                        <div class="stat-value text-primary">{move || stats.get().total_rooms}</div>
                        <div class="stat-desc">
                            {move || format!("可预订 {} / 停用 {}", stats.get().available_rooms, stats.get().occupied_rooms)}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"预订总数"</div>
                        <div class="stat-value text-secondary">{move || stats.get().total_reservations}</div>
                        <div class="stat-desc">
                            {move || format!(
                                "待确认 {} / 已确认 {} / 已完成 {} / 已取消 {}",
                                stats.get().pending_reservations,
                                stats.get().confirmed_reservations,
                                stats.get().completed_reservations,
                                stats.get().cancelled_reservations,
                            )}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"住客总数"</div>
                        <div class="stat-value">{move || stats.get().total_guests}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"总营收"</div>
                        <div class="stat-value text-success">
                            {move || format!("{:.0}", stats.get().total_revenue)}
                        </div>
                        <div class="stat-desc">
                            {move || format!("本月 {:.0} CFA", stats.get().monthly_revenue)}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h2 class="card-title p-6 pb-2">"最近预订"</h2>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"住客"</th>
                                        <th>"房间"</th>
                                        <th>"入住"</th>
                                        <th>"退房"</th>
                                        <th>"总价"</th>
                                        <th>"状态"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || recent.get().is_empty()>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                "暂无预订记录。"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || recent.get()
                                        key=|r| r.id
                                        children=move |r| view! {
                                            <tr>
                                                <td>{format!("#{}", r.id)}</td>
                                                <td>{r.guest_name.clone()}</td>
                                                <td>{format!("房间 {}", r.room_number)}</td>
                                                <td>{format_display_date(r.check_in_date)}</td>
                                                <td>{format_display_date(r.check_out_date)}</td>
                                                <td>{format!("{:.2} CFA", r.total_price)}</td>
                                                <td><span class="badge badge-outline">{r.status.as_str()}</span></td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use roomstay_shared::RoomType;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn room(id: i64, available: bool) -> Room {
        Room {
            id,
            room_number: format!("{}", 100 + id),
            room_type: RoomType::Double,
            price: 50000.0,
            capacity: 2,
            description: None,
            image_url: None,
            image_urls: None,
            is_available: available,
        }
    }

    fn reservation(
        id: i64,
        status: ReservationStatus,
        check_in: &str,
        total: f64,
        created: Option<&str>,
    ) -> Reservation {
        Reservation {
            id,
            guest_id: 1,
            guest_name: "Jane Doe".into(),
            room_id: 1,
            room_number: "101".into(),
            check_in_date: d(check_in),
            check_out_date: d(check_in).succ_opt().unwrap(),
            number_of_guests: 2,
            number_of_rooms: 1,
            total_price: total,
            status,
            created_at: created.map(|c| {
                NaiveDateTime::parse_from_str(c, "%Y-%m-%dT%H:%M:%S").unwrap()
            }),
        }
    }

    #[test]
    fn stats_split_rooms_and_statuses() {
        let rooms = vec![room(1, true), room(2, true), room(3, false)];
        let reservations = vec![
            reservation(1, ReservationStatus::Pending, "2024-06-01", 100.0, None),
            reservation(2, ReservationStatus::Confirmed, "2024-06-02", 200.0, None),
            reservation(3, ReservationStatus::Cancelled, "2024-06-03", 400.0, None),
        ];
        let stats = compute_stats(&rooms, &reservations, &[], d("2024-07-15"));
        assert_eq!(stats.total_rooms, 3);
        assert_eq!(stats.available_rooms, 2);
        assert_eq!(stats.occupied_rooms, 1);
        assert_eq!(stats.pending_reservations, 1);
        assert_eq!(stats.confirmed_reservations, 1);
        assert_eq!(stats.cancelled_reservations, 1);
        assert_eq!(stats.completed_reservations, 0);
    }

    #[test]
    fn revenue_counts_confirmed_and_completed_only() {
        let reservations = vec![
            reservation(1, ReservationStatus::Confirmed, "2024-06-01", 200.0, None),
            reservation(2, ReservationStatus::Completed, "2024-05-10", 300.0, None),
            reservation(3, ReservationStatus::Pending, "2024-06-02", 999.0, None),
            reservation(4, ReservationStatus::Cancelled, "2024-06-03", 999.0, None),
        ];
        let stats = compute_stats(&[], &reservations, &[], d("2024-06-15"));
        assert_eq!(stats.total_revenue, 500.0);
        // 只有 6 月入住的已确认单计入当月
        assert_eq!(stats.monthly_revenue, 200.0);
    }

    #[test]
    fn recent_sorts_by_creation_desc() {
        let reservations = vec![
            reservation(1, ReservationStatus::Pending, "2024-06-01", 1.0, Some("2024-05-01T08:00:00")),
            reservation(2, ReservationStatus::Pending, "2024-06-01", 1.0, Some("2024-05-03T08:00:00")),
            reservation(3, ReservationStatus::Pending, "2024-06-01", 1.0, None),
            reservation(4, ReservationStatus::Pending, "2024-06-01", 1.0, Some("2024-05-02T08:00:00")),
        ];
        let recent = recent_reservations(&reservations, 3);
        let ids: Vec<i64> = recent.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }
}
