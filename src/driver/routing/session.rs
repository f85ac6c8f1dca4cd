//! 클러스터 세션
//!
//! 하나의 클러스터 멤버에 바인딩된 세션을 감싸서 `run`과 `close`에서 올라오는
//! 에러를 분류합니다.

use super::classifier::FailureClassifier;
use super::cursor::RoutingCursor;
use super::handler::SharedErrorHandler;
use super::super::address::ServerAddress;
use super::super::error::DriverResult;
use super::super::session::{AccessMode, Query, QuerySession, SessionConfig};

/// 에러를 분류하는 세션 래퍼
///
/// 성공한 `run`은 같은 접근 모드, 주소, 핸들러를 가진 [`RoutingCursor`]를
/// 돌려줍니다. 닫힌 상태는 따로 추적하지 않고 내부 세션에 맡깁니다.
///
/// # Example
///
/// ```ignore
/// let mut session = RoutingSession::new(raw, AccessMode::Write, address, handler);
/// let mut cursor = session.run(Query::new("CREATE (n:Person)")).await?;
/// let summary = cursor.consume().await?;
/// session.close().await?;
/// ```
#[derive(Debug)]
pub struct RoutingSession<S> {
    delegate: S,
    classifier: FailureClassifier,
}

impl<S: QuerySession> RoutingSession<S> {
    /// 세션 래핑
    pub fn new(
        delegate: S,
        mode: AccessMode,
        address: ServerAddress,
        handler: SharedErrorHandler,
    ) -> Self {
        Self {
            delegate,
            classifier: FailureClassifier::new(mode, address, handler),
        }
    }

    /// 세션 설정의 기본 접근 모드로 래핑
    pub fn from_config(
        delegate: S,
        config: &SessionConfig,
        address: ServerAddress,
        handler: SharedErrorHandler,
    ) -> Self {
        Self::new(delegate, config.default_access_mode, address, handler)
    }

    /// 접근 모드
    pub fn access_mode(&self) -> AccessMode {
        self.classifier.access_mode()
    }

    /// 바인딩된 서버 주소
    pub fn address(&self) -> &ServerAddress {
        self.classifier.address()
    }

    /// 내부 세션 참조
    pub fn get_ref(&self) -> &S {
        &self.delegate
    }

    /// 래퍼를 벗기고 내부 세션 반환
    pub fn into_inner(self) -> S {
        self.delegate
    }
}

impl<S: QuerySession> QuerySession for RoutingSession<S> {
    type Cursor = RoutingCursor<S::Cursor>;

    async fn run(&mut self, query: Query) -> DriverResult<Self::Cursor> {
        let cursor = self.classifier.check(self.delegate.run(query).await)?;
        Ok(RoutingCursor::new(cursor, self.classifier.clone()))
    }

    /// 전송 실패만 분류합니다.
    async fn close(&mut self) -> DriverResult<()> {
        self.classifier.check_transport(self.delegate.close().await)
    }
}
