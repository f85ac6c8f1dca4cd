//! 실패 분류기
//!
//! 프로토콜 계층에서 올라온 에러를 접근 모드와 서버 주소에 따라 분류하고,
//! 필요한 경우 에러 핸들러에 알린 뒤 호출자에게 보일 에러로 번역합니다.
//!
//! | 원본 에러 | 접근 모드 | 핸들러 호출 | 결과 |
//! |-----------|-----------|-------------|------|
//! | 전송 실패 | 모두 | `on_connection_failure` | 세션 만료 |
//! | 쓰기 거부 코드 | `WRITE` | `on_write_failure` | 세션 만료 |
//! | 쓰기 거부 코드 | `READ` | 없음 | 클라이언트 에러 |
//! | 그 외 | 모두 | 없음 | 원본 그대로 |

use std::fmt;

use super::handler::{RoutingErrorHandler, SharedErrorHandler};
use super::super::address::ServerAddress;
use super::super::error::{DriverError, DriverResult};
use super::super::session::AccessMode;

/// 리더가 아닌 서버에 쓰기 시도
pub const NOT_A_LEADER: &str = "Neo.ClientError.Cluster.NotALeader";

/// 읽기 전용 데이터베이스에 쓰기 시도
pub const FORBIDDEN_ON_READ_ONLY_DATABASE: &str =
    "Neo.ClientError.General.ForbiddenOnReadOnlyDatabase";

/// 쓰기 거부로 취급하는 서버 코드 (정확히 일치해야 함)
pub const WRITE_REJECTION_CODES: [&str; 2] = [NOT_A_LEADER, FORBIDDEN_ON_READ_ONLY_DATABASE];

/// READ 모드에서 쓰기 거부를 받았을 때의 메시지
pub const READ_MODE_WRITE_MESSAGE: &str = "Write queries cannot be performed in READ access mode.";

/// 연결 실패 메시지
pub fn connection_lost_message(address: &ServerAddress) -> String {
    format!("Server at {} is no longer available", address)
}

/// 쓰기 거부 메시지
pub fn writes_rejected_message(address: &ServerAddress) -> String {
    format!("Server at {} no longer accepts writes", address)
}

/// 쓰기 거부 코드 여부
pub fn is_write_rejection(error: &DriverError) -> bool {
    match error {
        DriverError::Client { code, .. } => WRITE_REJECTION_CODES.contains(&code.as_str()),
        _ => false,
    }
}

// ============================================================================
// FailureKind / Classified - 분류 결과
// ============================================================================

/// 분류 결과 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 관여하지 않음, 원본 그대로
    PassThrough,
    /// 연결 실패, 세션 만료
    SessionExpired,
    /// WRITE 모드 쓰기 거부, 세션 만료
    WriteRedirected,
    /// READ 모드 쓰기 시도, 호출자 실수
    ClientRejected,
}

impl FailureKind {
    /// 라우팅 계층에 알림이 가는 종류인지
    pub fn notifies_routing(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::WriteRedirected)
    }
}

/// 분류된 실패
#[derive(Debug)]
pub struct Classified {
    /// 분류 종류
    pub kind: FailureKind,
    /// 호출자에게 보일 에러
    pub error: DriverError,
}

impl Classified {
    fn new(kind: FailureKind, error: DriverError) -> Self {
        Self { kind, error }
    }

    /// 번역된 에러
    pub fn into_error(self) -> DriverError {
        self.error
    }
}

// ============================================================================
// classify - 분류 함수
// ============================================================================

/// 전송 실패와 쓰기 거부를 모두 분류
///
/// 핸들러 호출은 번역된 에러가 반환되기 전에 끝납니다.
pub fn classify(
    error: DriverError,
    mode: AccessMode,
    address: &ServerAddress,
    handler: &dyn RoutingErrorHandler,
) -> Classified {
    if error.is_transport_failure() {
        return session_expired(error, address, handler);
    }

    if !is_write_rejection(&error) {
        return Classified::new(FailureKind::PassThrough, error);
    }

    match mode {
        AccessMode::Read => {
            tracing::debug!(
                "Write rejected by {} in READ access mode: {}",
                address,
                error
            );
            Classified::new(
                FailureKind::ClientRejected,
                DriverError::client_rejected(READ_MODE_WRITE_MESSAGE),
            )
        }
        AccessMode::Write => {
            tracing::warn!("Server {} no longer accepts writes: {}", address, error);
            handler.on_write_failure(address);
            Classified::new(
                FailureKind::WriteRedirected,
                DriverError::session_expired_with_cause(writes_rejected_message(address), error),
            )
        }
    }
}

/// 전송 실패만 분류 (세션 close 용)
pub fn classify_transport_only(
    error: DriverError,
    address: &ServerAddress,
    handler: &dyn RoutingErrorHandler,
) -> Classified {
    if error.is_transport_failure() {
        session_expired(error, address, handler)
    } else {
        Classified::new(FailureKind::PassThrough, error)
    }
}

fn session_expired(
    error: DriverError,
    address: &ServerAddress,
    handler: &dyn RoutingErrorHandler,
) -> Classified {
    tracing::warn!("Connection to {} failed: {}", address, error);
    handler.on_connection_failure(address);
    Classified::new(
        FailureKind::SessionExpired,
        DriverError::session_expired_with_cause(connection_lost_message(address), error),
    )
}

// ============================================================================
// FailureClassifier - 바인딩된 분류기
// ============================================================================

/// 접근 모드, 서버 주소, 에러 핸들러를 묶어 둔 분류기
///
/// 세션, 커서, 트랜잭션 래퍼가 하나씩 들고 있으며 생성 후 바뀌지 않습니다.
/// 결과를 캐시하지 않으므로 호출마다 독립적으로 분류합니다.
#[derive(Clone)]
pub struct FailureClassifier {
    mode: AccessMode,
    address: ServerAddress,
    handler: SharedErrorHandler,
}

impl FailureClassifier {
    /// 새 분류기 생성
    pub fn new(mode: AccessMode, address: ServerAddress, handler: SharedErrorHandler) -> Self {
        Self {
            mode,
            address,
            handler,
        }
    }

    /// 접근 모드
    pub fn access_mode(&self) -> AccessMode {
        self.mode
    }

    /// 서버 주소
    pub fn address(&self) -> &ServerAddress {
        &self.address
    }

    /// 에러 핸들러
    pub fn handler(&self) -> &SharedErrorHandler {
        &self.handler
    }

    /// 에러 분류
    pub fn classify(&self, error: DriverError) -> Classified {
        classify(error, self.mode, &self.address, self.handler.as_ref())
    }

    /// 결과의 에러를 번역
    pub fn check<T>(&self, result: DriverResult<T>) -> DriverResult<T> {
        result.map_err(|e| self.classify(e).into_error())
    }

    /// 전송 실패만 번역
    pub fn check_transport<T>(&self, result: DriverResult<T>) -> DriverResult<T> {
        result.map_err(|e| classify_transport_only(e, &self.address, self.handler.as_ref()).into_error())
    }
}

impl fmt::Debug for FailureClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureClassifier")
            .field("mode", &self.mode)
            .field("address", &self.address)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
