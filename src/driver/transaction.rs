//! Transaction
//!
//! 명시적 트랜잭션 계약

use std::future::Future;

use super::error::DriverResult;
use super::result::ResultCursor;
use super::session::Query;

// ============================================================================
// TransactionState - 트랜잭션 상태
// ============================================================================

/// 트랜잭션 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// 활성 상태
    Active,
    /// 커밋됨
    Committed,
    /// 롤백됨
    RolledBack,
    /// 실패
    Failed,
}

impl TransactionState {
    /// 완료 상태 여부
    pub fn is_terminated(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

// ============================================================================
// ExplicitTransaction - 프로토콜 트랜잭션 계약
// ============================================================================

/// 하나의 물리 연결 위에서 진행되는 명시적 트랜잭션
///
/// `commit`, `rollback`, `close`는 모두 서버 왕복을 일으킬 수 있습니다.
/// 이미 종료된 트랜잭션에 대한 호출을 거부하거나 무시하는 것은
/// 구현체의 책임입니다.
pub trait ExplicitTransaction: Send {
    /// 결과 커서 타입
    type Cursor: ResultCursor;

    /// 쿼리 실행
    fn run(&mut self, query: Query) -> impl Future<Output = DriverResult<Self::Cursor>> + Send;

    /// 커밋
    fn commit(&mut self) -> impl Future<Output = DriverResult<()>> + Send;

    /// 롤백
    fn rollback(&mut self) -> impl Future<Output = DriverResult<()>> + Send;

    /// 트랜잭션 닫기 (커밋되지 않았으면 롤백)
    fn close(&mut self) -> impl Future<Output = DriverResult<()>> + Send;

    /// 트랜잭션 상태
    fn state(&self) -> TransactionState;
}
