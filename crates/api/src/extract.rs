//! Request extractors whose rejections render through [`AppError`].

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// Drop-in for [`axum::extract::Path`] that answers malformed segments
/// (for example invalid percent-encoded UTF-8) with a JSON 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
