//! Wire types exchanged with the directory API
//!
//! Field names follow the API's camelCase JSON.

pub mod auth;
pub mod common;
pub mod history;
pub mod identity;
pub mod image;
pub mod news;
pub mod rag;
pub mod scholar;
pub mod tag;
pub mod user;

pub use auth::*;
pub use common::*;
pub use history::*;
pub use identity::*;
pub use image::*;
pub use news::*;
pub use rag::*;
pub use scholar::*;
pub use tag::*;
pub use user::*;
