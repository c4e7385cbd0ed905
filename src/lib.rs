//! Gymbase - Gym Management Backend
//!
//! Members, subscriptions, product inventory, point-of-sale, training
//! exercises, check-ins, and a dashboard overview, exposed as an HTTP API
//! over PostgreSQL. The member check-in entry validator is the one
//! rule-driven core; everything else is a validate-then-insert workflow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
