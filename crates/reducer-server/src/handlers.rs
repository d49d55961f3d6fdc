//! Route handlers.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use reducer_core::{reduce_with, sniff};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::form::{ReduceForm, IMAGE_FIELD};
use crate::AppState;

/// `GET /ping` liveness probe.
pub async fn ping() -> &'static str {
    "Pong!\n"
}

/// `POST /reduce`: shrink the uploaded image to fit `maxWidth x maxHeight`.
///
/// The bounds may come from the multipart body or the URL query string.
pub async fn reduce(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let query = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            warn!(%rejection, "ignoring unparsable query string");
            Vec::new()
        }
    };
    let multipart = multipart.map_err(|rejection| {
        warn!(%rejection, "request is not a multipart form");
        ApiError::MissingField(IMAGE_FIELD)
    })?;

    let (image, params) = ReduceForm::read(multipart)
        .await?
        .with_query(&query)
        .validate()?;

    info!(
        format = %sniff(&image),
        bytes = image.len(),
        max_width = params.max_width,
        max_height = params.max_height,
        "reducing image"
    );

    // Decoding and resampling are CPU-bound; keep them off the async workers.
    let backend = state.backend.clone();
    let reduction = tokio::task::spawn_blocking(move || reduce_with(&*backend, &image, params))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(
        format = %reduction.format,
        width = reduction.width,
        height = reduction.height,
        bytes = reduction.bytes.len(),
        "reduced image"
    );

    Ok((
        [(header::CONTENT_TYPE, reduction.content_type())],
        reduction.bytes,
    )
        .into_response())
}
