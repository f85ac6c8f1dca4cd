//! Server Address
//!
//! 클러스터 멤버 주소

use std::fmt;

use super::error::{DriverError, DriverResult};

/// 기본 Bolt 포트
pub const DEFAULT_PORT: u16 = 7687;

const URI_SCHEMES: [&str; 6] = [
    "bolt://",
    "bolt+s://",
    "bolt+ssc://",
    "zeta4g://",
    "zeta4g+s://",
    "zeta4g+ssc://",
];

// ============================================================================
// ServerAddress - 서버 주소
// ============================================================================

/// 서버 주소
///
/// 세션, 트랜잭션, 결과 커서에 바인딩된 뒤에는 바뀌지 않으며
/// 에러 핸들러에 전달되는 조회 키로만 쓰입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddress {
    /// 호스트
    pub host: String,
    /// 포트
    pub port: u16,
}

impl ServerAddress {
    /// 새 서버 주소 생성
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// URI에서 파싱
    pub fn from_uri(uri: &str) -> DriverResult<Self> {
        let rest = URI_SCHEMES
            .iter()
            .find_map(|scheme| uri.strip_prefix(scheme))
            .unwrap_or(uri);

        // 경로/쿼리 부분은 무시
        let authority = rest.split(['/', '?']).next().unwrap_or_default();

        match authority.split_once(':') {
            None if authority.is_empty() => {
                Err(DriverError::configuration("Missing host in server address"))
            }
            None => Ok(Self::new(authority, DEFAULT_PORT)),
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(DriverError::configuration("Missing host in server address"));
                }
                let port = port
                    .parse()
                    .map_err(|_| DriverError::configuration(format!("Invalid port: {}", port)))?;
                Ok(Self::new(host, port))
            }
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        Self::new("localhost", DEFAULT_PORT)
    }
}
