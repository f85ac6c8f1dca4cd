//! 클러스터 결과 커서
//!
//! `run`이 성공한 뒤에도 레코드를 당겨오는 연산마다 네트워크 I/O가
//! 일어나므로, 모든 소비 연산의 에러를 같은 규칙으로 분류합니다.

use super::classifier::FailureClassifier;
use super::super::error::{DriverError, DriverResult};
use super::super::record::Record;
use super::super::result::{ResultCursor, ResultSummary, REMOVE_UNSUPPORTED_MESSAGE};

/// 에러를 분류하는 결과 커서 래퍼
#[derive(Debug)]
pub struct RoutingCursor<C> {
    delegate: C,
    classifier: FailureClassifier,
}

impl<C: ResultCursor> RoutingCursor<C> {
    /// 커서 래핑
    pub fn new(delegate: C, classifier: FailureClassifier) -> Self {
        Self {
            delegate,
            classifier,
        }
    }

    /// 바인딩된 분류기
    pub fn classifier(&self) -> &FailureClassifier {
        &self.classifier
    }

    /// 내부 커서 참조
    pub fn get_ref(&self) -> &C {
        &self.delegate
    }

    /// 래퍼를 벗기고 내부 커서 반환
    pub fn into_inner(self) -> C {
        self.delegate
    }
}

impl<C: ResultCursor> ResultCursor for RoutingCursor<C> {
    async fn keys(&mut self) -> DriverResult<Vec<String>> {
        self.classifier.check(self.delegate.keys().await)
    }

    async fn has_next(&mut self) -> DriverResult<bool> {
        self.classifier.check(self.delegate.has_next().await)
    }

    async fn next(&mut self) -> DriverResult<Record> {
        self.classifier.check(self.delegate.next().await)
    }

    async fn single(&mut self) -> DriverResult<Record> {
        self.classifier.check(self.delegate.single().await)
    }

    async fn peek(&mut self) -> DriverResult<Record> {
        self.classifier.check(self.delegate.peek().await)
    }

    async fn list(&mut self) -> DriverResult<Vec<Record>> {
        self.classifier.check(self.delegate.list().await)
    }

    async fn list_map<T, F>(&mut self, f: F) -> DriverResult<Vec<T>>
    where
        T: Send,
        F: FnMut(Record) -> T + Send,
    {
        self.classifier.check(self.delegate.list_map(f).await)
    }

    async fn consume(&mut self) -> DriverResult<ResultSummary> {
        self.classifier.check(self.delegate.consume().await)
    }

    /// 지원하지 않음. 내부 커서와 핸들러를 건드리지 않습니다.
    fn remove(&mut self) -> DriverResult<()> {
        Err(DriverError::client_rejected(REMOVE_UNSUPPORTED_MESSAGE))
    }
}
