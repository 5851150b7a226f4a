//! Route registration and OpenAPI document

use super::{
    dto::*,
    error::{map_rejection, Problem},
    handlers,
};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document listing the room service schemas
#[derive(OpenApi)]
#[openapi(
    info(title = "Campus Room Service"),
    components(schemas(
        RoomDto,
        ResourceMetadataDto,
        CreateRoomRequest,
        NewResourceMetadataRequest,
        UpdateRoomRequest,
        RoomStatusDto,
        NewRoomStatusRequest,
        UpsertRoomStatusRequest,
        RoomsListResponse,
        RoomStatusListResponse,
    ))
)]
pub struct ApiDoc;

/// Register all REST routes under `prefix` (empty for the root)
pub fn register_routes(
    router: Router,
    prefix: &str,
    service: Arc<Service>,
) -> anyhow::Result<Router> {
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        anyhow::bail!("route prefix must start with '/' and not end with '/': {prefix:?}");
    }

    let rooms = Router::new()
        // Room endpoints
        .route(
            "/room",
            get(list_rooms_handler)
                .post(create_room_handler)
                .put(update_room_handler),
        )
        .route("/room/{id}", get(get_room_handler).delete(delete_room_handler))
        .route("/room/number/{room_number}", get(get_room_by_number_handler))
        .route("/room/occupancy/{occupancy}", get(list_rooms_by_occupancy_handler))
        .route("/room/owner/{owner_id}", get(list_rooms_by_owner_handler))
        // Room status endpoints
        .route(
            "/room/status",
            get(list_statuses_handler)
                .post(create_status_handler)
                .put(update_status_handler),
        )
        .route("/room/status/{id}", get(get_status_handler))
        .route(
            "/room/status/submitter/{submitter_id}",
            get(list_statuses_by_submitter_handler),
        )
        .route("/room/status/date/{date}", get(list_statuses_by_date_handler))
        .route("/api-doc/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    let router = if prefix.is_empty() {
        router.merge(rooms)
    } else {
        router.nest(prefix, rooms)
    };

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_rooms_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<RoomsListResponse>, Problem> {
    handlers::list_rooms(service).await
}

async fn create_room_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomDto>), Problem> {
    handlers::create_room(service, payload).await
}

async fn update_room_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<UpdateRoomRequest>, JsonRejection>,
) -> Result<Json<RoomDto>, Problem> {
    handlers::update_room(service, payload).await
}

async fn get_room_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomDto>, Problem> {
    handlers::get_room(service, path.map_err(map_rejection)?).await
}

async fn delete_room_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomDto>, Problem> {
    handlers::delete_room(service, path.map_err(map_rejection)?).await
}

async fn get_room_by_number_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RoomDto>, Problem> {
    handlers::get_room_by_number(service, path.map_err(map_rejection)?).await
}

async fn list_rooms_by_occupancy_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomsListResponse>, Problem> {
    handlers::list_rooms_by_occupancy(service, path.map_err(map_rejection)?).await
}

async fn list_rooms_by_owner_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomsListResponse>, Problem> {
    handlers::list_rooms_by_owner(service, path.map_err(map_rejection)?).await
}

async fn list_statuses_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    handlers::list_statuses(service).await
}

async fn create_status_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<UpsertRoomStatusRequest>, JsonRejection>,
) -> Result<StatusCode, Problem> {
    handlers::create_status(service, payload).await
}

async fn update_status_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<UpsertRoomStatusRequest>, JsonRejection>,
) -> Result<Json<RoomStatusDto>, Problem> {
    handlers::update_status(service, payload).await
}

async fn get_status_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomStatusDto>, Problem> {
    handlers::get_status(service, path.map_err(map_rejection)?).await
}

async fn list_statuses_by_submitter_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    handlers::list_statuses_by_submitter(service, path.map_err(map_rejection)?).await
}

async fn list_statuses_by_date_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RoomStatusListResponse>, Problem> {
    handlers::list_statuses_by_date(service, path.map_err(map_rejection)?).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
