//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the mall directory: API endpoints,
//! business logic, data access and infrastructure. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token keys, media URL)
//! - **Startup** (`startup`) - Database connection, migrations and housekeeping
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** runs the `AuthGuard`, validates the body, converts DTOs to params
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** projects the domain model into a DTO for the current viewer

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
