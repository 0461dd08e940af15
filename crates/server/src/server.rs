use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post, put},
};
use axum_extra::{
    TypedHeader,
    headers::{Error as AxumError, Header},
};

use std::sync::Arc;

use crate::{categories, items, summary, vacation, workspace};
use engine::Engine;

static USER_HEADER: axum::http::HeaderName = axum::http::HeaderName::from_static("x-planora-user");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// `TypedHeader` for the identity header.
///
/// The external identity provider authenticates the request upstream and
/// forwards the opaque user id in "x-planora-user". The server only checks
/// presence; the id is carried through as an audit field.
#[derive(Debug)]
struct UserHeader(String);

impl Header for UserHeader {
    fn name() -> &'static axum::http::HeaderName {
        &USER_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };
        if value.trim().is_empty() {
            return Err(AxumError::invalid());
        }

        Ok(UserHeader(value.trim().to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode x-planora-user header"),
        }
    }
}

/// The authenticated caller, inserted by the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub String);

async fn auth(
    user_header: Option<TypedHeader<UserHeader>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(TypedHeader(UserHeader(user_id))) = user_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/categories", get(categories::registry))
        .route("/workspaces", post(workspace::create))
        .route(
            "/workspaces/{workspace_id}",
            get(workspace::get).delete(workspace::remove),
        )
        .route("/workspaces/{workspace_id}/join", post(workspace::join))
        .route(
            "/workspaces/{workspace_id}/members",
            get(workspace::list_members),
        )
        .route(
            "/workspaces/{workspace_id}/members/{member_id}",
            delete(workspace::remove_member),
        )
        .route(
            "/workspaces/{workspace_id}/vacations",
            get(vacation::list).post(vacation::create),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}",
            get(vacation::get)
                .patch(vacation::update)
                .delete(vacation::remove),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/items",
            post(items::create),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/items/{item_id}",
            patch(items::update).delete(items::remove),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/selection",
            put(items::select),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/categories",
            post(categories::create_custom),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/categories/{name}",
            delete(categories::remove_custom),
        )
        .route(
            "/workspaces/{workspace_id}/vacations/{vacation_id}/summary",
            get(summary::get),
        )
        .route_layer(middleware::from_fn(auth))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Arc<Engine>,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState { engine };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Arc<Engine>,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
