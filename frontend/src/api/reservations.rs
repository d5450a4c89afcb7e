//! 预订服务门面

use super::ApiClient;
use roomstay_shared::error::ApiResult;
use roomstay_shared::protocol::{
    CancelReservation, ConfirmReservation, GetReservation, ListReservations, ReservationsByGuest,
    ReservationsByRoom, UpdateReservation,
};
use roomstay_shared::{Reservation, ReservationCreated, ReservationRequest};

impl ApiClient {
    pub async fn list_reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.send(&ListReservations).await
    }

    pub async fn get_reservation(&self, id: i64) -> ApiResult<Reservation> {
        self.send(&GetReservation { id }).await
    }

    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ApiResult<ReservationCreated> {
        self.send(request).await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        request: ReservationRequest,
    ) -> ApiResult<Reservation> {
        self.send(&UpdateReservation { id, request }).await
    }

    pub async fn confirm_reservation(&self, id: i64) -> ApiResult<Reservation> {
        self.send(&ConfirmReservation { id }).await
    }

    pub async fn cancel_reservation(&self, id: i64) -> ApiResult<Reservation> {
        self.send(&CancelReservation { id }).await
    }

    pub async fn reservations_by_guest(&self, guest_id: i64) -> ApiResult<Vec<Reservation>> {
        self.send(&ReservationsByGuest { guest_id }).await
    }

    pub async fn reservations_by_room(&self, room_id: i64) -> ApiResult<Vec<Reservation>> {
        self.send(&ReservationsByRoom { room_id }).await
    }
}
