use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Method;
use serde::Deserialize;

use roster_core::{ApiResponse, Member, MemberId, MemberSummary, Roster};

use crate::error::ApiError;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Pick the id from the path segment, falling back to `?id=`.
fn resolve_id(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<MemberId, ApiError> {
    let raw = match path {
        Ok(Path(id)) => Some(id),
        Err(_) => query.ok().and_then(|Query(q)| q.id),
    };
    raw.as_deref()
        .and_then(MemberId::new)
        .ok_or(ApiError::InvalidId)
}

/// Shared prelude of both handlers: id format, then method, then load.
async fn prepare(
    state: &AppState,
    method: &Method,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<(MemberId, Roster), ApiError> {
    let id = resolve_id(path, query)?;

    if *method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let roster = state.source.load_roster().await?;
    Ok((id, roster))
}

/// GET /member/{id} — fetch one member as `{id, name}`.
pub async fn get_member(
    State(state): State<AppState>,
    method: Method,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Envelope<MemberSummary>, ApiError> {
    let (id, roster) = prepare(&state, &method, path, query).await?;

    let member = roster.find(&id).ok_or(ApiError::MemberNotFound)?;
    tracing::debug!(id = %id, "member found");
    Ok(ApiResponse::ok(member.summary()).into())
}

/// GET /member/exclude/{id} — every member except the given one.
pub async fn exclude_member(
    State(state): State<AppState>,
    method: Method,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Envelope<Vec<Member>>, ApiError> {
    let (id, roster) = prepare(&state, &method, path, query).await?;

    if !roster.contains(&id) {
        return Err(ApiError::MemberNotFound);
    }

    let rest = roster.excluding(&id);
    tracing::debug!(id = %id, remaining = rest.len(), "member excluded");
    Ok(ApiResponse::ok(rest).into())
}
