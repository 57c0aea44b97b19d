pub mod member;

use axum::Router;
use axum::routing::any;

use crate::state::AppState;

/// Member routes. Every method is routed to the handlers so a wrong method
/// still gets the JSON envelope.
///
/// The static `exclude` segment takes priority over the `{id}` capture.
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/member", any(member::get_member))
        .route("/member/", any(member::get_member))
        .route("/member/exclude", any(member::exclude_member))
        .route("/member/exclude/", any(member::exclude_member))
        .route("/member/exclude/{id}", any(member::exclude_member))
        .route("/member/{id}", any(member::get_member))
}

/// Build the full route tree, served both at the root and under `/api`.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .merge(member_routes())
        .nest("/api", member_routes())
        .with_state(state)
}
