//! 테스트용 대역
//!
//! 호출을 기록하는 핸들러와 정해진 에러를 돌려주는 프로토콜 대역.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::handler::RoutingErrorHandler;
use crate::driver::address::ServerAddress;
use crate::driver::error::{DriverError, DriverResult};
use crate::driver::record::{Record, Value};
use crate::driver::result::{QueryResult, ResultCursor, ResultSummary};
use crate::driver::session::{Query, QuerySession};
use crate::driver::transaction::{ExplicitTransaction, TransactionState};

pub(crate) fn localhost() -> ServerAddress {
    ServerAddress::new("localhost", 7687)
}

// ============================================================================
// RecordingHandler
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SinkCall {
    ConnectionFailure(ServerAddress),
    WriteFailure(ServerAddress),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHandler {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingHandler {
    pub(crate) fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }

    pub(crate) fn connection_failures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, SinkCall::ConnectionFailure(_)))
            .count()
    }

    pub(crate) fn write_failures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, SinkCall::WriteFailure(_)))
            .count()
    }
}

impl RoutingErrorHandler for RecordingHandler {
    fn on_connection_failure(&self, address: &ServerAddress) {
        self.calls.lock().push(SinkCall::ConnectionFailure(address.clone()));
    }

    fn on_write_failure(&self, address: &ServerAddress) {
        self.calls.lock().push(SinkCall::WriteFailure(address.clone()));
    }
}

// ============================================================================
// Failure - 대역이 돌려줄 에러
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Failure {
    Connection,
    Io,
    Timeout,
    Client(&'static str),
}

impl Failure {
    pub(crate) fn to_error(self) -> DriverError {
        match self {
            Failure::Connection => DriverError::connection("oh no"),
            Failure::Io => DriverError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "broken pipe",
            )),
            Failure::Timeout => DriverError::timeout("Bolt operation timed out"),
            Failure::Client(code) => DriverError::client(code, "oh no!"),
        }
    }
}

fn fail_or<T>(failure: Option<Failure>, ok: impl FnOnce() -> DriverResult<T>) -> DriverResult<T> {
    match failure {
        Some(f) => Err(f.to_error()),
        None => ok(),
    }
}

pub(crate) fn sample_result() -> QueryResult {
    let record = Record::new(vec!["n".into()], vec![Value::Integer(1)]);
    QueryResult::new(vec!["n".into()], vec![record], ResultSummary::default())
}

// ============================================================================
// ScriptedCursor
// ============================================================================

#[derive(Debug)]
pub(crate) struct ScriptedCursor {
    failure: Option<Failure>,
    inner: QueryResult,
    touched: Arc<AtomicUsize>,
}

impl ScriptedCursor {
    pub(crate) fn new(failure: Option<Failure>) -> Self {
        Self {
            failure,
            inner: sample_result(),
            touched: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn touches(&self) -> Arc<AtomicUsize> {
        self.touched.clone()
    }

    fn touch(&self) {
        self.touched.fetch_add(1, Ordering::SeqCst);
    }
}

impl ResultCursor for ScriptedCursor {
    async fn keys(&mut self) -> DriverResult<Vec<String>> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.keys().await,
        }
    }

    async fn has_next(&mut self) -> DriverResult<bool> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.has_next().await,
        }
    }

    async fn next(&mut self) -> DriverResult<Record> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.next().await,
        }
    }

    async fn single(&mut self) -> DriverResult<Record> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.single().await,
        }
    }

    async fn peek(&mut self) -> DriverResult<Record> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.peek().await,
        }
    }

    async fn list(&mut self) -> DriverResult<Vec<Record>> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.list().await,
        }
    }

    async fn list_map<T, F>(&mut self, f: F) -> DriverResult<Vec<T>>
    where
        T: Send,
        F: FnMut(Record) -> T + Send,
    {
        self.touch();
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => self.inner.list_map(f).await,
        }
    }

    async fn consume(&mut self) -> DriverResult<ResultSummary> {
        self.touch();
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => self.inner.consume().await,
        }
    }

    fn remove(&mut self) -> DriverResult<()> {
        self.touch();
        Ok(())
    }
}

// ============================================================================
// ScriptedSession
// ============================================================================

#[derive(Debug, Default)]
pub(crate) struct ScriptedSession {
    pub(crate) run_failure: Option<Failure>,
    pub(crate) close_failure: Option<Failure>,
    pub(crate) cursor_failure: Option<Failure>,
    pub(crate) queries: Vec<String>,
    pub(crate) closed: usize,
}

impl ScriptedSession {
    pub(crate) fn failing_run(failure: Failure) -> Self {
        Self {
            run_failure: Some(failure),
            ..Default::default()
        }
    }

    pub(crate) fn failing_close(failure: Failure) -> Self {
        Self {
            close_failure: Some(failure),
            ..Default::default()
        }
    }

    pub(crate) fn failing_cursor(failure: Failure) -> Self {
        Self {
            cursor_failure: Some(failure),
            ..Default::default()
        }
    }
}

impl QuerySession for ScriptedSession {
    type Cursor = ScriptedCursor;

    async fn run(&mut self, query: Query) -> DriverResult<ScriptedCursor> {
        self.queries.push(query.text);
        let cursor_failure = self.cursor_failure;
        fail_or(self.run_failure, || Ok(ScriptedCursor::new(cursor_failure)))
    }

    /// 이미 닫힌 세션의 close는 조용히 성공
    async fn close(&mut self) -> DriverResult<()> {
        self.closed += 1;
        if self.closed > 1 {
            return Ok(());
        }
        fail_or(self.close_failure, || Ok(()))
    }
}

// ============================================================================
// ScriptedTransaction
// ============================================================================

/// 동시에 진행 중인 run 호출 수를 추적
#[derive(Debug, Default)]
pub(crate) struct Overlap {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    total: AtomicUsize,
}

impl Overlap {
    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub(crate) struct ScriptedTransaction {
    pub(crate) run_failure: Option<Failure>,
    pub(crate) terminate_failure: Option<Failure>,
    pub(crate) run_delay: Option<Duration>,
    pub(crate) overlap: Arc<Overlap>,
    pub(crate) state: TransactionState,
    pub(crate) terminations: usize,
}

impl Default for ScriptedTransaction {
    fn default() -> Self {
        Self {
            run_failure: None,
            terminate_failure: None,
            run_delay: None,
            overlap: Arc::new(Overlap::default()),
            state: TransactionState::Active,
            terminations: 0,
        }
    }
}

impl ScriptedTransaction {
    pub(crate) fn failing_run(failure: Failure) -> Self {
        Self {
            run_failure: Some(failure),
            ..Default::default()
        }
    }

    pub(crate) fn failing_termination(failure: Failure) -> Self {
        Self {
            terminate_failure: Some(failure),
            ..Default::default()
        }
    }

    pub(crate) fn slow(delay: Duration, overlap: Arc<Overlap>) -> Self {
        Self {
            run_delay: Some(delay),
            overlap,
            ..Default::default()
        }
    }

    fn terminate(&mut self, success: TransactionState) -> DriverResult<()> {
        self.terminations += 1;
        match self.terminate_failure {
            Some(f) => {
                self.state = TransactionState::Failed;
                Err(f.to_error())
            }
            None => {
                self.state = success;
                Ok(())
            }
        }
    }
}

impl ExplicitTransaction for ScriptedTransaction {
    type Cursor = ScriptedCursor;

    async fn run(&mut self, _query: Query) -> DriverResult<ScriptedCursor> {
        self.overlap.enter();
        if let Some(delay) = self.run_delay {
            tokio::time::sleep(delay).await;
        }
        self.overlap.exit();
        fail_or(self.run_failure, || Ok(ScriptedCursor::new(None)))
    }

    async fn commit(&mut self) -> DriverResult<()> {
        self.terminate(TransactionState::Committed)
    }

    async fn rollback(&mut self) -> DriverResult<()> {
        self.terminate(TransactionState::RolledBack)
    }

    async fn close(&mut self) -> DriverResult<()> {
        if self.state.is_terminated() {
            return Ok(());
        }
        self.terminate(TransactionState::RolledBack)
    }

    fn state(&self) -> TransactionState {
        self.state
    }
}
