//! Custom Extractors
//!
//! Axum extractors for the per-request repository scope and for request
//! parsing that reports failures as `AppError`.

use std::convert::Infallible;
use std::ops::Deref;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::RepositoryManager;
use crate::infrastructure::repositories::RepositoryManagerImpl;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Repository manager scoped to the current request.
///
/// Changes staged through it are discarded unless the handler calls `save`.
pub struct Repository(RepositoryManagerImpl);

impl Deref for Repository {
    type Target = dyn RepositoryManager;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Repository {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Repository(RepositoryManagerImpl::new(state.store.clone())))
    }
}

/// JSON request body that may be `null`.
///
/// A literal `null` yields `JsonBody(None)` so the handler can report it;
/// malformed JSON or a wrong content type is rejected with 400.
pub struct JsonBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Option<T>>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameters whose parse failures are reported as `AppError`.
///
/// A segment that does not parse (for example a malformed UUID) is
/// rejected with 400 and the usual JSON error body.
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| IdPath(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}

/// Identifier list written as `(id1,id2,...)` in the final path segment.
///
/// An empty list is reported as `IdList(None)`; an unparseable identifier
/// is rejected with 400.
#[derive(Debug, PartialEq, Eq)]
pub struct IdList(pub Option<Vec<Uuid>>);

impl IdList {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Ok(IdList(None));
        }

        inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                Uuid::parse_str(part)
                    .map_err(|_| AppError::BadRequest(format!("Invalid id in collection: {}", part)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|ids| IdList(Some(ids)))
    }

    /// Render identifiers the way the collection route expects them.
    pub fn format(ids: &[Uuid]) -> String {
        let joined = ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("({})", joined)
    }
}

impl<S> FromRequestParts<S> for IdList
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        IdList::parse(&raw)
    }
}
