//! Session
//!
//! 세션 설정과 프로토콜 세션 계약

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use super::error::DriverResult;
use super::record::Value;
use super::result::ResultCursor;

// ============================================================================
// AccessMode - 접근 모드
// ============================================================================

/// 접근 모드
///
/// 세션이나 트랜잭션 생성 시 고정되며, 서버의 쓰기 거부를 어떻게
/// 해석할지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessMode {
    /// 읽기
    Read,
    /// 쓰기
    #[default]
    Write,
}

impl AccessMode {
    /// 모든 접근 모드
    pub const ALL: [AccessMode; 2] = [AccessMode::Read, AccessMode::Write];

    /// 모드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Bookmark - 북마크
// ============================================================================

/// 인과적 일관성 북마크
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bookmark {
    value: String,
}

impl Bookmark {
    /// 새 북마크 생성
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// 북마크 값
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Bookmark {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// SessionConfig - 세션 설정
// ============================================================================

/// 세션 설정
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// 데이터베이스 이름
    pub database: Option<String>,
    /// 기본 접근 모드
    pub default_access_mode: AccessMode,
    /// 북마크
    pub bookmarks: Vec<Bookmark>,
}

impl SessionConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 빌더 시작
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// 데이터베이스 설정
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// 접근 모드 설정
    pub fn with_access_mode(mut self, mode: AccessMode) -> Self {
        self.default_access_mode = mode;
        self
    }
}

/// 세션 설정 빌더
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// 데이터베이스 설정
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.config.database = Some(database.into());
        self
    }

    /// 읽기 모드로 설정
    pub fn with_read_access(mut self) -> Self {
        self.config.default_access_mode = AccessMode::Read;
        self
    }

    /// 쓰기 모드로 설정
    pub fn with_write_access(mut self) -> Self {
        self.config.default_access_mode = AccessMode::Write;
        self
    }

    /// 북마크 추가
    pub fn with_bookmark(mut self, bookmark: Bookmark) -> Self {
        self.config.bookmarks.push(bookmark);
        self
    }

    /// 빌드
    pub fn build(self) -> SessionConfig {
        self.config
    }
}

// ============================================================================
// Query - 쿼리
// ============================================================================

/// 쿼리
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// 쿼리 텍스트
    pub text: String,
    /// 파라미터
    pub parameters: HashMap<String, Value>,
}

impl Query {
    /// 새 쿼리 생성
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: HashMap::new(),
        }
    }

    /// 파라미터 추가
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// QuerySession - 프로토콜 세션 계약
// ============================================================================

/// 하나의 물리 연결에 바인딩된 쿼리 실행 세션
///
/// 프로토콜 계층 구현은 번역되지 않은 에러를 그대로 반환합니다.
/// 클러스터 래퍼([`RoutingSession`](super::routing::RoutingSession))도 같은
/// 트레이트를 구현하므로 호출자는 어느 쪽을 들고 있는지 신경 쓰지 않아도 됩니다.
pub trait QuerySession: Send {
    /// 결과 커서 타입
    type Cursor: ResultCursor;

    /// 쿼리 실행
    fn run(&mut self, query: Query) -> impl Future<Output = DriverResult<Self::Cursor>> + Send;

    /// 세션 닫기
    fn close(&mut self) -> impl Future<Output = DriverResult<()>> + Send;
}

// ============================================================================
// Tests
// ============================================================================
