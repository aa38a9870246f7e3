//! Request body extraction.
//!
//! Axum's stock `Json` extractor rejects malformed bodies with a 422 and
//! a plain-text message. The error contract here has exactly three
//! classes, and a body that fails to deserialize (bad JSON, wrong type,
//! unknown enum value) is a validation failure: 400 with
//! `{"error": "<message>"}`. This wrapper routes the rejection through
//! [`ApiError`] so every handler gets that behavior for free.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError::Validation`].
///
/// Drop-in replacement for `axum::Json` in handlers; also usable as a
/// response type.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
