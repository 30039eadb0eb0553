use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod cars;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/car", post(cars::create_car))
        .route("/car/:id", get(cars::get_car_by_id))
        .route("/car/upd/:id", put(cars::update_car))
        .route("/car/del/:id", delete(cars::delete_car))
        .route("/cars", get(cars::get_cars_by_brand))
}
