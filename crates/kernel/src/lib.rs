//! Sommario Kernel Library
//!
//! Page registry, menu widget bridge, and render-pass orchestration for
//! host frameworks that re-execute the whole UI script on every user
//! interaction. The host owns rendering and session state; this library
//! reaches it only through the traits in [`host`], [`session`], and
//! [`menu`].

pub mod config;
pub mod error;
pub mod host;
pub mod menu;
pub mod page;
pub mod pass;
pub mod session;
