//! Car endpoints: parse the request, call the service, encode the response.
//!
//! Any service failure on a read is a 500 and any service failure on a write is
//! a 400. Only the brand lookup and delete paths carry a (plain-text) error body.

use axum::{
    body::Bytes,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use dealership_core::{Car, CarId};

use crate::app::{dto, errors};
use crate::app::services::SharedCarService;

pub async fn get_car_by_id(
    Extension(service): Extension<SharedCarService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CarId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "get car: bad id");
            return errors::status_only(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match service.get_car_by_id(id).await {
        Ok(car) => (StatusCode::OK, Json(car)).into_response(),
        Err(e) => {
            tracing::warn!(car_id = %id, error = %e, "get car failed");
            errors::status_only(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_cars_by_brand(
    Extension(service): Extension<SharedCarService>,
    Query(query): Query<dto::BrandQuery>,
) -> axum::response::Response {
    let include_engine = match errors::parse_bool(query.is_engine.as_deref().unwrap_or_default()) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "list cars: bad isEngine");
            return errors::status_only(StatusCode::BAD_REQUEST);
        }
    };

    match service.get_cars_by_brand(&query.brand, include_engine).await {
        Ok(cars) => (StatusCode::OK, Json(cars)).into_response(),
        Err(e) => {
            tracing::error!(brand = %query.brand, error = %e, "list cars failed");
            errors::plain_text(StatusCode::INTERNAL_SERVER_ERROR, errors::DB_ERROR)
        }
    }
}

pub async fn create_car(
    Extension(service): Extension<SharedCarService>,
    body: Bytes,
) -> axum::response::Response {
    let car: Car = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "create car: undecodable body");
            return errors::status_only(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match service.create_car(car).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "create car failed");
            errors::status_only(StatusCode::BAD_REQUEST)
        }
    }
}

pub async fn update_car(
    Extension(service): Extension<SharedCarService>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let car: Car = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "update car: undecodable body");
            return errors::status_only(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let id: CarId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "update car: bad id");
            return errors::status_only(StatusCode::BAD_REQUEST);
        }
    };

    match service.update_car(id, car).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            tracing::warn!(car_id = %id, error = %e, "update car failed");
            errors::status_only(StatusCode::BAD_REQUEST)
        }
    }
}

pub async fn delete_car(
    Extension(service): Extension<SharedCarService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CarId = match id.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "delete car: bad id");
            return errors::plain_text(StatusCode::BAD_REQUEST, errors::INVALID_ID);
        }
    };

    match service.delete_car(id).await {
        Ok(_) => errors::plain_text(StatusCode::OK, errors::DELETED),
        Err(e) => {
            tracing::warn!(car_id = %id, error = %e, "delete car failed");
            errors::plain_text(StatusCode::BAD_REQUEST, errors::INVALID_ID)
        }
    }
}
