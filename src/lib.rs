//! # Commonlib
//!
//! Cross-cutting pieces shared by HTTP services:
//!
//! - **Authentication**: a tower layer that validates `Authorization: Bearer` tokens
//!   and attaches `id`/`role` attributes to the request. It never rejects; handlers
//!   decide what an anonymous caller may do.
//! - **Event logging**: a logger that also counts events, handed to components
//!   explicitly from the composition root.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── commonlib-core/           # AppError
//! ├── commonlib-config/         # JwtConfig, ConfigError
//! ├── commonlib-auth/           # TokenCodec, Claims, AuthOutcome
//! └── commonlib-observability/  # EventLog, EventLogger, metrics
//! src/
//! ├── middleware/               # JwtAuthLayer, Identity extractors
//! ├── router.rs                 # demo routes
//! └── state.rs                  # composition root
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-shared-secret
//! JWT_ALGORITHM=HS256
//! JWT_LEEWAY_SECONDS=0
//! ```
//!
//! ```ignore
//! let state = commonlib::state::init_app_state("orders-service")?;
//! let app = Router::new()
//!     .route("/orders", get(list_orders))
//!     .layer(state.auth_layer());
//! ```

pub mod middleware;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use commonlib_auth;
pub use commonlib_config;
pub use commonlib_core;
pub use commonlib_observability;
