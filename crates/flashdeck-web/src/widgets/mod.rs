//! Client-side runtime: mounts a `flashdeck` controller on every widget root
//! the server rendered.

mod boot;
pub mod browser;

pub use boot::mount_all;
