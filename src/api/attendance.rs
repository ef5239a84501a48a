use crate::{
    db::DbPool,
    error::AppError,
    model::attendance::{AttendanceForm, first_value},
    render::{IndexView, Renderer},
    repository,
};
use actix_web::{
    HttpMessage, HttpRequest, HttpResponse,
    http::header::{self, ContentType},
    web,
};
use tracing::{debug, error, warn};

/// Decoded query string. Kept as pairs so a repeated key never fails the
/// request; the first value wins.
type QueryPairs = web::Query<Vec<(String, String)>>;

fn back_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// List page. `?id=N` loads record N into the form; an id that is not a
/// number, or that matches nothing, just leaves the form empty.
pub async fn index(
    pool: web::Data<DbPool>,
    renderer: web::Data<Renderer>,
    query: QueryPairs,
) -> Result<HttpResponse, AppError> {
    let edit_id = first_value(&query, "id").and_then(|id| id.parse::<i64>().ok());

    let edit = match edit_id {
        Some(id) => repository::get_by_id(pool.get_ref(), id)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Failed to fetch attendance record");
                AppError::Storage("Unable to fetch the attendance record")
            })?,
        None => None,
    };

    let records = repository::list_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to list attendance");
        AppError::Storage("Unable to fetch attendance")
    })?;

    let html = renderer
        .render("index", &IndexView { records, edit })
        .map_err(|e| {
            error!(error = %e, "Failed to render index");
            AppError::Render
        })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Body fields come first, then query string fields. A body that is not
/// urlencoded contributes nothing; only an unreadable Content-Type is refused.
fn read_form(
    req: &HttpRequest,
    body: &[u8],
    query: &[(String, String)],
) -> Result<AttendanceForm, AppError> {
    fn rejected(e: impl std::fmt::Display) -> AppError {
        warn!(error = %e, "Rejected attendance form");
        AppError::BadRequest("Unable to parse form data")
    }

    let mime = req.mime_type().map_err(rejected)?;
    let urlencoded = mime.is_some_and(|m| m.essence_str() == "application/x-www-form-urlencoded");

    let mut pairs: Vec<(String, String)> = if urlencoded {
        serde_urlencoded::from_bytes(body).map_err(rejected)?
    } else {
        Vec::new()
    };
    pairs.extend_from_slice(query);

    Ok(AttendanceForm::from_pairs(&pairs))
}

/// Saves the submitted form: id 0 inserts, anything else updates.
pub async fn save(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    query: QueryPairs,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let record = read_form(&req, &body, &query)?.into_record();

    let written = repository::upsert(pool.get_ref(), &record)
        .await
        .map_err(|e| {
            error!(error = %e, id = record.id, "Failed to save attendance");
            AppError::Storage("Failed to save attendance")
        })?;
    debug!(id = record.id, written, "Saved attendance");

    Ok(back_to_index())
}

/// `/add` answers anything but POST with an empty 200.
pub async fn ignore() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn delete(
    pool: web::Data<DbPool>,
    query: QueryPairs,
) -> Result<HttpResponse, AppError> {
    let id: i64 = first_value(&query, "id")
        .and_then(|id| id.parse().ok())
        .ok_or(AppError::BadRequest("Invalid ID"))?;

    let removed = repository::delete_by_id(pool.get_ref(), id)
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to delete attendance");
            AppError::Storage("Failed to delete attendance")
        })?;
    debug!(id, removed, "Deleted attendance");

    Ok(back_to_index())
}
