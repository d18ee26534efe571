pub mod drafts;
pub mod list;
pub mod models;

pub use drafts::{CreateDraft, EditDraft};
pub use list::{edit_outcome, reduce, EditOutcome, ListEvent};
pub use models::{User, UserFields};
