//! # Zeta4G Cluster
//!
//! Cluster resilience layer for the [Zeta4G](https://github.com/zeta9044/zeta4g)
//! graph database driver.
//!
//! A session, result cursor or explicit transaction bound to one cluster member
//! is wrapped so that every failure it raises is classified before it reaches
//! the caller.
//!
//! ## Features
//!
//! - **Failure Classification** - Transport failures and write rejections are told apart by error variant
//! - **Routing Invalidation** - Failed or demoted members are reported to a routing error handler
//! - **Retry-Friendly Errors** - Cluster failures surface as retryable `SessionExpired` errors
//! - **Serialized Transactions** - Concurrent `run` calls on one transaction never overlap
//!
//! ## Failure Classification
//!
//! | Raw error | Access mode | Handler call | Caller sees |
//! |-----------|-------------|--------------|-------------|
//! | Connection / I/O / Timeout / ServiceUnavailable | any | `on_connection_failure` | `SessionExpired` |
//! | `NotALeader`, `ForbiddenOnReadOnlyDatabase` | `WRITE` | `on_write_failure` | `SessionExpired` |
//! | `NotALeader`, `ForbiddenOnReadOnlyDatabase` | `READ` | none | `ClientRejected` |
//! | anything else | any | none | unchanged |
//!
//! ```rust
//! use std::sync::Arc;
//! use zeta4g_cluster::routing::{classify, FailureKind, RoutingTable, RoutingTableErrorHandler};
//! use zeta4g_cluster::{AccessMode, DriverError, ServerAddress};
//!
//! let leader = ServerAddress::new("core1", 7687);
//! let mut table = RoutingTable::new("zeta4g");
//! table.add_writer(leader.clone());
//! let handler = RoutingTableErrorHandler::new(table);
//!
//! let raw = DriverError::client("Neo.ClientError.Cluster.NotALeader", "not a leader");
//! let classified = classify(raw, AccessMode::Write, &leader, &handler);
//!
//! assert_eq!(classified.kind, FailureKind::WriteRedirected);
//! assert_eq!(classified.error.to_string(), "Server at core1:7687 no longer accepts writes");
//! assert!(classified.error.is_retryable());
//! assert!(!handler.routing_table().has_writers());
//! ```
//!
//! ## Wrapping a Session
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use zeta4g_cluster::routing::{RoutingSession, RoutingTable, RoutingTableErrorHandler};
//! use zeta4g_cluster::{Query, QuerySession, ResultCursor, ServerAddress, SessionConfig};
//!
//! let handler = Arc::new(RoutingTableErrorHandler::new(RoutingTable::new("zeta4g")));
//! let config = SessionConfig::builder().with_write_access().build();
//!
//! let mut session = RoutingSession::from_config(
//!     bolt_session,
//!     &config,
//!     ServerAddress::new("core1", 7687),
//!     handler,
//! );
//!
//! let mut cursor = session.run(Query::new("CREATE (n:Person {name: $name})")
//!     .with_param("name", "Alice")).await?;
//! let summary = cursor.consume().await?;
//! session.close().await?;
//! ```
//!
//! ## Modules
//!
//! - [`driver`] - Error, session, result and transaction contracts
//! - [`routing`] - Failure classifier and cluster wrappers
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod driver;

pub use driver::routing;

// Re-exports for convenience
pub use driver::{
    AccessMode, Bookmark,
    DriverError, DriverResult,
    ExplicitTransaction, TransactionState,
    Query, QuerySession, SessionConfig, SessionConfigBuilder,
    QueryResult, ResultCursor, ResultSummary,
    Record, Value,
    ServerAddress,
};
