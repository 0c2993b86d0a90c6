//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating store calls, validation,
//! and business rules. Services consume the store trait and provide a clean
//! API for the CLI and library users.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, listing, clearing
//! - [`services::redirect_service::RedirectService`] - Resolution and click tracking
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod dto;
pub mod services;
