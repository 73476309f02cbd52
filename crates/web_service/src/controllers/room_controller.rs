use actix_web::{
    web::{self, Data},
    HttpResponse,
};
use room_store::OverviewRow;
use uuid::Uuid;

use crate::error::Result;
use crate::models::RoomsQuery;
use crate::server::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms", web::get().to(rooms))
        .route("/bookings", web::get().to(bookings))
        .route("/bookings/{booking_id}/cancel", web::post().to(cancel))
        .route("/bookings/{booking_id}/check-in", web::post().to(check_in))
        .route("/bookings/{booking_id}/check-out", web::post().to(check_out));
}

async fn rooms(state: Data<AppState>, query: web::Query<RoomsQuery>) -> Result<HttpResponse> {
    let overview = match (query.min_price, query.max_price) {
        (None, None) => state.store().room_overview().await?,
        (min, max) => {
            let bands = state
                .store()
                .rooms_in_price_range(min.unwrap_or(0.0), max.unwrap_or(f64::MAX))
                .await?;
            bands
                .into_iter()
                .map(|band| OverviewRow {
                    room_type: band.room_type,
                    price: band.price,
                    available_rooms: band.available_rooms,
                    features: band.room_type.features(),
                    max_occupancy: band.room_type.max_occupancy(),
                })
                .collect()
        }
    };
    Ok(HttpResponse::Ok().json(overview))
}

async fn bookings(state: Data<AppState>) -> Result<HttpResponse> {
    let bookings = state.store().bookings().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

async fn cancel(state: Data<AppState>, booking_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let booking = state.store().cancel_booking(*booking_id).await?;
    Ok(HttpResponse::Ok().json(booking))
}

async fn check_in(state: Data<AppState>, booking_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let booking = state.store().check_in(*booking_id).await?;
    Ok(HttpResponse::Ok().json(booking))
}

async fn check_out(state: Data<AppState>, booking_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let booking = state.store().check_out(*booking_id).await?;
    Ok(HttpResponse::Ok().json(booking))
}
