use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{AuthUser, ServerState, router, run_with_listener, spawn_with_listener};

mod categories;
mod items;
mod server;
mod summary;
mod vacation;
mod workspace;

pub mod types {
    pub mod workspace {
        pub use api_types::workspace::{MembersResponse, WorkspaceNew, WorkspaceView};
        pub use engine::Workspace;
    }

    pub mod vacation {
        pub use api_types::vacation::{VacationListRow, VacationNew, VacationUpdate};
        pub use engine::Vacation;
    }

    pub mod item {
        pub use api_types::item::{CategorySelector, ItemNew, ItemUpdate, SelectionSet, SelectionView};
        pub use engine::Item;
    }

    pub mod category {
        pub use api_types::category::{
            CategoriesResponse, CategoryView, CustomCategoryCreated, CustomCategoryNew,
            FieldSpecView,
        };
    }

    pub mod summary {
        pub use engine::CostSummary;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Forbidden(_) => StatusCode::FORBIDDEN,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::InvalidName(_) | EngineError::InvalidValue(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
