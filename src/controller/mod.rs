//! Screen controllers.
//!
//! A [`ListController`] owns the in-memory list of one entity kind together with its filter
//! state, and the [`Navigator`] routes taps on key fields between them. Controllers never
//! render anything: the presentation layer reads [`ListController::visible`] and drains the
//! notification queue.

pub mod list;
pub mod notification;
pub mod router;

#[cfg(test)]
mod tests;

pub use list::{ListController, LoadRequest, LoadResponse, LoadStatus, PinnedFilter};
pub use notification::{Notification, NotificationLevel, RetryAction};
pub use router::{Navigator, Route, Screen};
