//! Core engine for collaborative vacation planning.
//!
//! A [`Workspace`] groups members around a set of [`Vacation`] documents.
//! Each vacation compares options per category (flights, hotels, custom
//! sections, ...), selects at most one option per category, and derives its
//! running total from those selections with [`cost_summary`]. Persistence is
//! delegated to an injected [`VacationStore`]; the engine itself is pure,
//! synchronous bookkeeping over document snapshots.

pub use aggregate::{CostSummary, cost_summary};
pub use categories::{CategoryKey, FieldKind, FieldSpec, StandardCategory};
pub use error::EngineError;
pub use item::Item;
pub use ops::{Engine, EngineBuilder, VacationDraft, VacationPatch};
pub use prices::PriceCents;
pub use pricing::resolve_price;
pub use store::{ChangeEvent, MemoryStore, VacationStore};
pub use vacation::Vacation;
pub use workspace::Workspace;

mod aggregate;
mod categories;
mod error;
mod item;
mod ops;
mod prices;
mod pricing;
mod store;
mod util;
mod vacation;
mod workspace;

type ResultEngine<T> = Result<T, EngineError>;
