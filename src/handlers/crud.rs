//! Generic route handlers over [`Resource`], plus the scope factory that
//! wires the six uniform routes for one entity.
//!
//! Response contract:
//! - list shapes answer 200 with an array; an empty table is an empty array,
//!   never an error
//! - single-row shapes answer 404 with `{"error": "<entity> not found"}`
//!   when no row matches
//! - delete answers 200 whether or not the row existed
//! - a duplicate key on create answers 409, detected from the driver error
//!   rather than a pre-check query

use actix_web::{web, HttpResponse, Scope};
use serde_json::json;

use crate::crud::Resource;
use crate::db::DbPool;
use crate::errors::AppError;

/// Build the scope for one entity:
/// `GET ""`, `POST ""`, `GET /quantity/{count}`, `GET /{id}`, `PUT /{id}`,
/// `DELETE /{id}`. Literal segments must be registered before `/{id}`.
pub fn resource_scope<R: Resource>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(list_all::<R>))
        .route("", web::post().to(create::<R>))
        .route("/quantity/{count}", web::get().to(list_limited::<R>))
        .route("/{id}", web::get().to(get_by_id::<R>))
        .route("/{id}", web::put().to(update::<R>))
        .route("/{id}", web::delete().to(delete::<R>))
}

/// `GET` on the collection.
pub async fn list_all<R: Resource>(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::list(&mut conn)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// `GET .../quantity/{count}`
///
/// The bound is clamped to zero and passed through the query builder as a
/// bind parameter, never interpolated into SQL text.
pub async fn list_limited<R: Resource>(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let limit = path.into_inner().max(0);

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::list_limited(&mut conn, limit)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// `GET .../{id}`
pub async fn get_by_id<R: Resource>(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let row = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::find(&mut conn, id)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match row {
        Some(row) => Ok(HttpResponse::Ok().json(row)),
        None => Err(AppError::not_found(R::ENTITY)),
    }
}

/// `POST` on the collection.
///
/// Answers 200 with the stored row, generated columns included.
pub async fn create<R: Resource>(
    pool: web::Data<DbPool>,
    body: web::Json<R::New>,
) -> Result<HttpResponse, AppError> {
    let new = body.into_inner();

    let row = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::insert(&mut conn, new)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(row))
}

/// `PUT .../{id}`
///
/// Applies only the fields present in the body and answers 200 with the
/// merged row, or 404 when no row matches.
pub async fn update<R: Resource>(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<R::Changes>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = body.into_inner();

    let row = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::update(&mut conn, id, changes)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match row {
        Some(row) => Ok(HttpResponse::Ok().json(row)),
        None => Err(AppError::not_found(R::ENTITY)),
    }
}

/// `DELETE .../{id}`
///
/// Idempotent: deleting an absent row still answers 200.
pub async fn delete<R: Resource>(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(R::delete(&mut conn, id)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({
        "success": format!("{} deleted", R::ENTITY)
    })))
}
