//! Web platform adapter: binds side menu controllers to `web-sys` elements.

mod dom;
mod error;
mod mount;
mod user_agent;

pub use dom::WebDom;
pub use error::WebBindError;
pub use mount::{bind_all, mount, mount_selector, WebHandle, WebRegistry};
pub use user_agent::is_ios_safari;
