//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for Inke's note sharing: API endpoints,
//! business rules, data access and infrastructure. The backend uses Axum as the web
//! framework, SeaORM for database operations and GitHub OAuth for login.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and envelope responses
//! - **Service Layer** (`service/`) - Business rules such as quotas, ownership and nickname validation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and envelope response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, OAuth client)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user when the endpoint requires one
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** applies business rules and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO inside the `{ code, msg, data }` envelope

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
