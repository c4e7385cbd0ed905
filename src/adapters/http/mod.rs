//! HTTP adapters - one router module per dashboard area.

pub mod catalog;
pub mod checkin;
pub mod dashboard;
pub mod error;
pub mod exercises;
pub mod members;
pub mod sales;
pub mod subscriptions;
