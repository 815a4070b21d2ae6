//! Waypoint Workers - backend integration layer for the Waypoint app.
//!
//! Each domain (accounts, users, places, chats, systems health, auth, ...)
//! gets one worker implementing its caller-facing protocol. Workers share a
//! single request pipeline, a unified error taxonomy, and fire-and-forget
//! health reporting; vendor backends sit behind port traits.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod ports;
pub mod status;
pub mod workers;
