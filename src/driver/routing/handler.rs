//! 라우팅 에러 핸들러
//!
//! 분류된 실패를 받아 라우팅 테이블을 무효화합니다.

use std::sync::Arc;

use parking_lot::RwLock;

use super::table::RoutingTable;
use super::super::address::ServerAddress;

/// 에러 알림 싱크
///
/// 두 메서드 모두 반환값이 없고, 같은 주소로 여러 번 불려도
/// 내부 상태가 깨지지 않아야 합니다. 서로 다른 연결에 바인딩된 세션과
/// 트랜잭션에서 동시에 호출될 수 있습니다.
pub trait RoutingErrorHandler: Send + Sync {
    /// 서버 연결 실패
    fn on_connection_failure(&self, address: &ServerAddress);

    /// 서버가 쓰기를 거부함
    fn on_write_failure(&self, address: &ServerAddress);
}

impl<H: RoutingErrorHandler + ?Sized> RoutingErrorHandler for Arc<H> {
    fn on_connection_failure(&self, address: &ServerAddress) {
        (**self).on_connection_failure(address)
    }

    fn on_write_failure(&self, address: &ServerAddress) {
        (**self).on_write_failure(address)
    }
}

/// 공유 핸들러 타입
pub type SharedErrorHandler = Arc<dyn RoutingErrorHandler>;

// ============================================================================
// RoutingTableErrorHandler - 라우팅 테이블 기반 핸들러
// ============================================================================

/// 라우팅 테이블을 직접 갱신하는 핸들러
///
/// 연결 실패한 서버는 모든 역할에서 제거하고, 쓰기를 거부한 서버는
/// 라이터 목록에서만 제거합니다.
#[derive(Debug)]
pub struct RoutingTableErrorHandler {
    table: RwLock<RoutingTable>,
}

impl RoutingTableErrorHandler {
    /// 새 핸들러 생성
    pub fn new(table: RoutingTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// 현재 라우팅 테이블 스냅샷
    pub fn routing_table(&self) -> RoutingTable {
        self.table.read().clone()
    }

    /// 라우팅 테이블 교체 (갱신 결과 반영)
    pub fn replace_table(&self, table: RoutingTable) {
        *self.table.write() = table;
    }
}

impl RoutingErrorHandler for RoutingTableErrorHandler {
    fn on_connection_failure(&self, address: &ServerAddress) {
        let mut table = self.table.write();
        if table.remove_server(address) {
            tracing::warn!(
                "Removed {} from routing table of database '{}' after connection failure",
                address,
                table.database
            );
        }
    }

    fn on_write_failure(&self, address: &ServerAddress) {
        let mut table = self.table.write();
        if table.remove_writer(address) {
            tracing::warn!(
                "Removed {} from writers of database '{}' after write rejection",
                address,
                table.database
            );
        }
    }
}
