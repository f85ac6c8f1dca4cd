//! 라우팅 모듈
//!
//! 클러스터 멤버 하나에 바인딩된 세션, 결과 커서, 트랜잭션을 감싸서
//! 실패를 분류합니다.
//!
//! # 개요
//!
//! - 전송 실패는 항상 세션 만료로 번역되고, 핸들러의
//!   `on_connection_failure`가 먼저 호출됩니다.
//! - 쓰기 거부(`NotALeader`, `ForbiddenOnReadOnlyDatabase`)는 WRITE 모드에서
//!   세션 만료로, READ 모드에서는 클라이언트 에러로 번역됩니다.
//! - 그 밖의 에러는 손대지 않고 그대로 올려 보냅니다.
//!
//! 세션 만료 에러는 재시도 가능(`is_retryable`)하므로 상위 재시도 실행기가
//! 작업 전체를 다시 실행할 수 있습니다.
//!
//! # 예시
//!
//! ```ignore
//! use std::sync::Arc;
//! use zeta4g_cluster::driver::routing::{RoutingSession, RoutingTable, RoutingTableErrorHandler};
//! use zeta4g_cluster::driver::{AccessMode, Query, QuerySession, ServerAddress};
//!
//! let handler = Arc::new(RoutingTableErrorHandler::new(RoutingTable::new("zeta4g")));
//! let address = ServerAddress::new("core1", 7687);
//!
//! // 프로토콜 세션을 래핑
//! let mut session = RoutingSession::new(raw_session, AccessMode::Write, address, handler);
//!
//! match session.run(Query::new("CREATE (n:Person)")).await {
//!     Ok(mut cursor) => { cursor.consume().await?; }
//!     Err(e) if e.is_retryable() => { /* 다른 멤버로 재시도 */ }
//!     Err(e) => return Err(e),
//! }
//! ```

pub mod classifier;
mod cursor;
mod handler;
mod session;
mod table;
mod transaction;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::{
    classify, classify_transport_only, Classified, FailureClassifier, FailureKind,
    READ_MODE_WRITE_MESSAGE, WRITE_REJECTION_CODES,
};
pub use cursor::RoutingCursor;
pub use handler::{RoutingErrorHandler, RoutingTableErrorHandler, SharedErrorHandler};
pub use session::RoutingSession;
pub use table::{RoutingTable, ServerRole};
pub use transaction::RoutingTransaction;
