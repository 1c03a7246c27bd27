//! Contact list rendering.
//!
//! Rendering is split in three pure steps: contacts become a
//! [`ContactListView`], the view becomes markup, and the actions the view
//! exposes are dispatched separately by the client board.

pub mod actions;
pub mod escape;
pub mod html;
pub mod view;

pub use actions::{Confirm, ViewAction};
pub use escape::escape_html;
pub use html::{render_list, render_page};
pub use view::{ContactListView, ContactView, DELETE_CONFIRMATION, EMPTY_PLACEHOLDER};
