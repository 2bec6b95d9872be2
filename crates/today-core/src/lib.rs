pub mod cancel;
pub mod config;
pub mod draft;
pub mod quote;
pub mod snapshot;
pub mod store;
pub mod task;

pub use cancel::CancelToken;
pub use config::AppConfig;
pub use draft::TaskDraft;
pub use quote::{Quote, QuoteError, QuoteEvent, QuoteState};
pub use snapshot::{SnapshotSlot, TASKS_STORAGE_KEY};
pub use store::TaskStore;
pub use task::{Task, TaskId};
