//! Driver Error Types
//!
//! 드라이버 에러 정의
//!
//! 프로토콜 계층은 에러를 종류별 variant로 구분해서 올려 보냅니다.
//! 전송 실패(`Connection`, `Io`, `Timeout`, `ServiceUnavailable`)와 서버가 보고한
//! 클라이언트 에러(`Client`)는
//! 클러스터 계층에서 분류되고, 나머지는 그대로 통과합니다.

use std::io;
use thiserror::Error;

// ============================================================================
// DriverError - 드라이버 에러
// ============================================================================

/// 드라이버 에러
#[derive(Error, Debug)]
pub enum DriverError {
    /// 연결 에러 (전송 실패)
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O 에러 (전송 실패)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 서비스 불가, 서버 종료 등 (전송 실패)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 서버가 보고한 클라이언트 에러
    #[error("Client error: {code} - {message}")]
    Client { code: String, message: String },

    /// 클라이언트 측에서 거부한 요청
    #[error("{0}")]
    ClientRejected(String),

    /// 세션 만료 (재시도 가능)
    #[error("{message}")]
    SessionExpired {
        message: String,
        #[source]
        source: Option<Box<DriverError>>,
    },

    /// 남은 레코드 없음
    #[error("{0}")]
    NoSuchRecord(String),

    /// 서버 에러
    #[error("Server error: {code} - {message}")]
    Server { code: String, message: String },

    /// 트랜잭션 에러
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// 프로토콜 에러
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// 타임아웃 에러 (전송 실패)
    #[error("Timeout: {0}")]
    Timeout(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DriverError {
    /// 연결 에러 생성
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// 서버 클라이언트 에러 생성
    pub fn client(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Client {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 클라이언트 거부 에러 생성
    pub fn client_rejected(msg: impl Into<String>) -> Self {
        Self::ClientRejected(msg.into())
    }

    /// 세션 만료 에러 생성
    pub fn session_expired(msg: impl Into<String>) -> Self {
        Self::SessionExpired {
            message: msg.into(),
            source: None,
        }
    }

    /// 원인을 포함한 세션 만료 에러 생성
    pub fn session_expired_with_cause(msg: impl Into<String>, cause: DriverError) -> Self {
        Self::SessionExpired {
            message: msg.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// 레코드 없음 에러 생성
    pub fn no_such_record(msg: impl Into<String>) -> Self {
        Self::NoSuchRecord(msg.into())
    }

    /// 서버 에러 생성
    pub fn server(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 트랜잭션 에러 생성
    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }

    /// 프로토콜 에러 생성
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// 타임아웃 에러 생성
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// 서비스 불가 에러 생성
    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    /// 설정 에러 생성
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// 전송 실패 여부
    ///
    /// 연결 자체를 더 이상 쓸 수 없는 경우에만 true 입니다.
    /// 프로토콜 계층의 읽기/쓰기 타임아웃과 서버 종료도 여기에 속합니다.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Io(_) | Self::Timeout(_) | Self::ServiceUnavailable(_)
        )
    }

    /// 세션 만료 여부
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// 서버 상태 코드
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Client { code, .. } | Self::Server { code, .. } => Some(code),
            _ => None,
        }
    }

    /// 재시도 가능 여부
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::SessionExpired { .. }
            | Self::Connection(_)
            | Self::Io(_)
            | Self::Timeout(_)
            | Self::ServiceUnavailable(_) => true,
            Self::Server { code, .. } => is_transient_code(code),
            _ => false,
        }
    }

    /// 클라이언트 에러 여부
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Client { .. } | Self::ClientRejected(_) | Self::Configuration(_)
        )
    }
}

/// 일시적 에러 코드 확인
fn is_transient_code(code: &str) -> bool {
    code.starts_with("Neo.TransientError")
}

// ============================================================================
// Result Type
// ============================================================================

/// 드라이버 결과 타입
pub type DriverResult<T> = Result<T, DriverError>;

// ============================================================================
// Tests
// ============================================================================
