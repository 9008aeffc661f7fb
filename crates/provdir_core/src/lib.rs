//! Provider Directory Core
//!
//! Client-side record management for a healthcare provider directory:
//! validated creation, free-text filtering, stable sorting, multi-select
//! removal, and inline single-cell editing over one in-memory record
//! sequence, persisted through an injected key-value bridge.
//!
//! # Design
//!
//! Everything derives from three pieces of state owned by
//! [`directory::ProviderDirectory`]:
//!
//! 1. **The record store** ([`store::RecordStore`]) — the ordered backing
//!    sequence. All indices anywhere in this crate are positions in this
//!    sequence ("original indices"), never positions in a filtered or
//!    sorted view.
//! 2. **The creation form** ([`form::ProviderForm`]) — per-field values and
//!    touched flags; emits a complete validated record on submit.
//! 3. **The list view** ([`view::ListView`]) — filter, sort, selection,
//!    display mode, and the inline cell editor. The visible row set is
//!    re-derived from the backing sequence on every call.
//!
//! Validation is one rule table in [`validate`], shared by the form and the
//! inline editor. Display projection lives in [`render`]: two pure
//! functions map the same state to the table layout and the card layout.
//!
//! # Modules
//!
//! - [`record`]: the provider record and its field keys
//! - [`validate`]: the per-field rule table and validity predicate
//! - [`store`]: the in-memory backing sequence
//! - [`form`]: the creation-form state machine
//! - [`view`]: filter/sort/select/inline-edit engine
//! - [`render`]: table and card projections of the view state
//! - [`storage`]: the persistence bridge and its file/in-memory stores
//! - [`directory`]: the top-level owner tying it all together

pub mod directory;
pub mod form;
pub mod record;
pub mod render;
pub mod storage;
pub mod store;
pub mod validate;
pub mod view;

pub use directory::ProviderDirectory;
pub use form::ProviderForm;
pub use record::{Field, ProviderRecord, UnknownField};
pub use render::{card_view, form_view, table_view, CardListView, FormView, TableView};
pub use storage::{
    sample_providers, FileStore, MemStore, StorageBridge, StorageError, PROVIDERS_KEY,
};
pub use store::RecordStore;
pub use validate::{is_valid, record_is_valid, FieldRule};
pub use view::{CellEdit, EditCommit, ListView, SortDirection, ViewMode, VisibleRow};
