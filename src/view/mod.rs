//! Page rendering.

mod notification;
mod render;

pub use notification::{Notification, NotificationKind};
pub use render::{render_index, IndexPage};
