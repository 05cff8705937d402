//! Typed endpoint surface for the scholar directory API
//!
//! Split into focused modules:
//! - `auth`: login URL, explicit refresh, logout, session setup
//! - `scholars`, `news`, `tags`, `identities`: public reads and admin CRUD
//! - `users`, `images`: admin-only resources
//! - `rag`: semantic search and chat console

mod auth;
mod client;
mod identities;
mod images;
mod news;
mod rag;
mod scholars;
mod tags;
mod users;

pub use client::{ScholarApi, ScholarApiBuilder};
