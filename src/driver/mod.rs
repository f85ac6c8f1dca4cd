//! Driver Module
//!
//! 클러스터 드라이버의 공통 타입과 복원력 계층
//!
//! # 구성
//!
//! - 에러 (DriverError, DriverResult)
//! - 서버 주소 (ServerAddress)
//! - 레코드와 값 (Record, Value)
//! - 세션 계약 (QuerySession, SessionConfig, AccessMode, Query)
//! - 결과 계약 (ResultCursor, QueryResult, ResultSummary)
//! - 트랜잭션 계약 (ExplicitTransaction, TransactionState)
//! - 라우팅 (RoutingSession, RoutingCursor, RoutingTransaction, 실패 분류기)
//!
//! 프로토콜 계층은 `QuerySession`, `ResultCursor`, `ExplicitTransaction`을
//! 구현해서 번역되지 않은 에러를 올려 보내고, [`routing`] 래퍼가 같은
//! 트레이트를 구현하며 에러를 분류합니다.

pub mod routing;
mod address;
mod error;
mod record;
mod result;
mod session;
mod transaction;

// Re-exports
pub use address::{ServerAddress, DEFAULT_PORT};
pub use error::{DriverError, DriverResult};
pub use record::{Record, Value};
pub use result::{Counters, QueryResult, ResultCursor, ResultSummary, REMOVE_UNSUPPORTED_MESSAGE};
pub use session::{
    AccessMode, Bookmark, Query, QuerySession, SessionConfig, SessionConfigBuilder,
};
pub use transaction::{ExplicitTransaction, TransactionState};
