//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, map_rejection, Problem},
};
use crate::contract::RoomError;
use crate::domain::Service;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

// ===== Room Handlers =====

/// List all rooms
pub async fn list_rooms(service: Arc<Service>) -> Result<Json<RoomsListResponse>, Problem> {
    let rooms = service.list_all().await.map_err(map_domain_error)?;
    Ok(Json(rooms.into()))
}

/// Create a room with its metadata and initial statuses
///
/// A missing or malformed body reaches the service as an absent room.
pub async fn create_room(
    service: Arc<Service>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomDto>), Problem> {
    let room = match payload {
        Ok(Json(req)) => Some(req.into()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected room payload");
            None
        }
    };

    let room = service.save(room).await.map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Get a room by identifier
pub async fn get_room(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<RoomDto>, Problem> {
    let room = service.find_by_id(id).await.map_err(map_domain_error)?;
    Ok(Json(room.into()))
}

/// Get a room by room number
pub async fn get_room_by_number(
    service: Arc<Service>,
    Path(room_number): Path<String>,
) -> Result<Json<RoomDto>, Problem> {
    let room = service
        .find_by_room_number(&room_number)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(room.into()))
}

/// Rooms with the given capacity
pub async fn list_rooms_by_occupancy(
    service: Arc<Service>,
    Path(occupancy): Path<i32>,
) -> Result<Json<RoomsListResponse>, Problem> {
    let rooms = service
        .find_by_max_occupancy(occupancy)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(rooms.into()))
}

/// Rooms owned by the given owner
pub async fn list_rooms_by_owner(
    service: Arc<Service>,
    Path(owner_id): Path<i32>,
) -> Result<Json<RoomsListResponse>, Problem> {
    let rooms = service
        .find_by_resource_owner(owner_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(rooms.into()))
}

/// Update an existing room
///
/// Fields missing from the request keep their stored values.
pub async fn update_room(
    service: Arc<Service>,
    payload: Result<Json<UpdateRoomRequest>, JsonRejection>,
) -> Result<Json<RoomDto>, Problem> {
    let Json(req) = payload.map_err(map_rejection)?;
    let id = req
        .id
        .ok_or_else(|| map_domain_error(RoomError::room_not_found("<unsaved>")))?;

    let current = service.find_by_id(id).await.map_err(map_domain_error)?;
    let room = service
        .update(req.apply_to(current))
        .await
        .map_err(map_domain_error)?;
    Ok(Json(room.into()))
}

/// Soft delete a room
pub async fn delete_room(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<RoomDto>, Problem> {
    let room = service.delete(id).await.map_err(map_domain_error)?;
    Ok(Json(room.into()))
}

// ===== Room Status Handlers =====

/// List all status reports
pub async fn list_statuses(
    service: Arc<Service>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    let statuses = service.list_all_status().await.map_err(map_domain_error)?;
    Ok(Json(statuses.into()))
}

/// Get a status report by identifier
pub async fn get_status(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<RoomStatusDto>, Problem> {
    let status = service
        .find_status_by_id(id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(RoomError::status_not_found(id)))?;
    Ok(Json(status.into()))
}

/// Status reports filed by a submitter
pub async fn list_statuses_by_submitter(
    service: Arc<Service>,
    Path(submitter_id): Path<i32>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    let statuses = service
        .find_all_status_by_submitter(submitter_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(statuses.into()))
}

/// Status reports submitted at exactly the given timestamp
pub async fn list_statuses_by_date(
    service: Arc<Service>,
    Path(date): Path<String>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    let statuses = service
        .find_all_status_by_date(&date)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(statuses.into()))
}

/// Record a new status report
pub async fn create_status(
    service: Arc<Service>,
    payload: Result<Json<UpsertRoomStatusRequest>, JsonRejection>,
) -> Result<StatusCode, Problem> {
    let Json(req) = payload.map_err(map_rejection)?;
    service
        .save_status(req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(StatusCode::CREATED)
}

/// Rewrite a status report
pub async fn update_status(
    service: Arc<Service>,
    payload: Result<Json<UpsertRoomStatusRequest>, JsonRejection>,
) -> Result<Json<RoomStatusDto>, Problem> {
    let Json(req) = payload.map_err(map_rejection)?;
    let status = service
        .update_status(req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(status.into()))
}
