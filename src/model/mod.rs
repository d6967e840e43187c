//! Data models for commit-deck
//!
//! UI-independent data structures: commit records, sort settings,
//! notifications, and the demo fallback set.

mod commit;
mod fallback;
mod notification;

pub use commit::{
    CommitId, CommitPatch, CommitRecord, NewCommit, SortDirection, SortField, SortSpec,
    compose_header,
};
pub use fallback::{FALLBACK_LEN, fallback_commits};
pub use notification::{Notification, NotificationKind};
