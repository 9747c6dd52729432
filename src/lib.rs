//! Core library exports for the ad board service.
//!
//! This crate exposes the domain model, forms, repositories, routes and
//! service layers used by the classifieds web application.

pub mod assets;
pub mod db;
pub mod domain;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
