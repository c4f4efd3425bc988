use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::warn;

use crate::error::AppError;
use crate::services::{activities_service, signup_service};

pub const STATIC_ENTRY_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn root_handler() -> Redirect {
    Redirect::temporary(STATIC_ENTRY_PAGE)
}

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<activities_service::ActivityCatalog>, AppError> {
    let catalog = activities_service::list_activities(&pool).await?;
    Ok(Json(catalog))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };
    match signup_service::sign_up(&pool, &activity_name, &query.email).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => {
            if !matches!(e, AppError::Database(_)) {
                warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            }
            e.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };
    match signup_service::unregister(&pool, &activity_name, &query.email).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => {
            if !matches!(e, AppError::Database(_)) {
                warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            }
            e.into_response()
        }
    }
}
