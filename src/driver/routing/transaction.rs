//! 클러스터 트랜잭션
//!
//! 트랜잭션은 하나의 물리 연결 위에서 모든 작업을 직렬로 처리하므로,
//! 내부 트랜잭션을 비동기 뮤텍스 뒤에 두고 `run` 호출을 한 번에 하나씩만
//! 흘려보냅니다. 종료 연산(`commit`, `rollback`, `close`)은 전송 실패와
//! 쓰기 거부를 모두 분류합니다.

use std::fmt;

use parking_lot::Mutex;

use super::classifier::FailureClassifier;
use super::cursor::RoutingCursor;
use super::handler::SharedErrorHandler;
use super::super::address::ServerAddress;
use super::super::error::DriverResult;
use super::super::session::{AccessMode, Query};
use super::super::transaction::{ExplicitTransaction, TransactionState};

type Cleanup = Box<dyn FnOnce() + Send>;

/// 에러를 분류하는 트랜잭션 래퍼
///
/// `&self`로 여러 태스크에서 공유할 수 있습니다. 정리 작업은 첫 번째 종료
/// 연산에서 결과와 무관하게 한 번만 실행됩니다.
pub struct RoutingTransaction<T> {
    delegate: tokio::sync::Mutex<T>,
    classifier: FailureClassifier,
    cleanup: Mutex<Option<Cleanup>>,
    last_state: Mutex<TransactionState>,
}

impl<T: ExplicitTransaction> RoutingTransaction<T> {
    /// 트랜잭션 래핑
    pub fn new(
        delegate: T,
        mode: AccessMode,
        address: ServerAddress,
        handler: SharedErrorHandler,
    ) -> Self {
        let state = delegate.state();
        Self {
            delegate: tokio::sync::Mutex::new(delegate),
            classifier: FailureClassifier::new(mode, address, handler),
            cleanup: Mutex::new(None),
            last_state: Mutex::new(state),
        }
    }

    /// 종료 시 실행할 정리 작업 설정 (세션의 연결 반환 등)
    pub fn with_cleanup(self, cleanup: impl FnOnce() + Send + 'static) -> Self {
        *self.cleanup.lock() = Some(Box::new(cleanup));
        self
    }

    /// 접근 모드
    pub fn access_mode(&self) -> AccessMode {
        self.classifier.access_mode()
    }

    /// 바인딩된 서버 주소
    pub fn address(&self) -> &ServerAddress {
        self.classifier.address()
    }

    /// 쿼리 실행
    ///
    /// 동시에 호출되면 먼저 락을 잡은 호출이 끝날 때까지 기다립니다.
    pub async fn run(&self, query: Query) -> DriverResult<RoutingCursor<T::Cursor>> {
        let result = {
            let mut tx = self.delegate.lock().await;
            let result = tx.run(query).await;
            *self.last_state.lock() = tx.state();
            result
        };
        let cursor = self.classifier.check(result)?;
        Ok(RoutingCursor::new(cursor, self.classifier.clone()))
    }

    /// 커밋
    pub async fn commit(&self) -> DriverResult<()> {
        let mut tx = self.delegate.lock().await;
        let result = tx.commit().await;
        self.finish(&tx, result)
    }

    /// 롤백
    pub async fn rollback(&self) -> DriverResult<()> {
        let mut tx = self.delegate.lock().await;
        let result = tx.rollback().await;
        self.finish(&tx, result)
    }

    /// 트랜잭션 닫기
    pub async fn close(&self) -> DriverResult<()> {
        let mut tx = self.delegate.lock().await;
        let result = tx.close().await;
        self.finish(&tx, result)
    }

    /// 현재 상태 (진행 중인 호출이 끝날 때까지 기다림)
    pub async fn current_state(&self) -> TransactionState {
        self.delegate.lock().await.state()
    }

    /// 래퍼를 벗기고 내부 트랜잭션 반환
    ///
    /// 정리 작업이 남아 있으면 실행하지 않고 버립니다.
    pub fn into_inner(self) -> T {
        self.delegate.into_inner()
    }

    /// 락을 쥔 채로 호출되므로 상태 기록이 종료 연산과 어긋나지 않음
    fn finish(&self, tx: &T, result: DriverResult<()>) -> DriverResult<()> {
        *self.last_state.lock() = tx.state();
        self.run_cleanup();
        self.classifier.check(result)
    }

    fn run_cleanup(&self) {
        let cleanup = self.cleanup.lock().take();
        if let Some(cleanup) = cleanup {
            tracing::debug!("Running transaction cleanup for {}", self.classifier.address());
            cleanup();
        }
    }
}

impl<T: ExplicitTransaction> ExplicitTransaction for RoutingTransaction<T> {
    type Cursor = RoutingCursor<T::Cursor>;

    async fn run(&mut self, query: Query) -> DriverResult<Self::Cursor> {
        RoutingTransaction::run(self, query).await
    }

    async fn commit(&mut self) -> DriverResult<()> {
        RoutingTransaction::commit(self).await
    }

    async fn rollback(&mut self) -> DriverResult<()> {
        RoutingTransaction::rollback(self).await
    }

    async fn close(&mut self) -> DriverResult<()> {
        RoutingTransaction::close(self).await
    }

    /// 다른 호출이 진행 중이면 마지막으로 끝난 호출 시점의 상태를 돌려줍니다.
    /// 진행 중인 호출의 결과까지 기다리려면 [`RoutingTransaction::current_state`].
    fn state(&self) -> TransactionState {
        match self.delegate.try_lock() {
            Ok(tx) => tx.state(),
            Err(_) => *self.last_state.lock(),
        }
    }
}

impl<T> fmt::Debug for RoutingTransaction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingTransaction")
            .field("classifier", &self.classifier)
            .field("cleanup_pending", &self.cleanup.lock().is_some())
            .field("last_state", &*self.last_state.lock())
            .finish()
    }
}
