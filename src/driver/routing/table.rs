//! 라우팅 테이블
//!
//! 클러스터의 서버 역할별 목록을 관리합니다.
//! 테이블 갱신 알고리즘은 로드 밸런서 쪽 책임이고, 여기서는 조회와
//! 무효화만 다룹니다.

use std::time::Instant;

use super::super::address::ServerAddress;

/// 서버 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerRole {
    /// 라우팅 테이블 제공자
    Route,
    /// 쓰기 트랜잭션 처리 (리더)
    Write,
    /// 읽기 트랜잭션 처리 (팔로워)
    Read,
}

/// 라우팅 테이블
#[derive(Debug, Clone)]
pub struct RoutingTable {
    /// 라우터 목록
    pub routers: Vec<ServerAddress>,
    /// 라이터 목록 (리더)
    pub writers: Vec<ServerAddress>,
    /// 리더 목록 (팔로워)
    pub readers: Vec<ServerAddress>,
    /// 데이터베이스 이름
    pub database: String,
    /// TTL (초)
    pub ttl_seconds: u64,
    /// 생성/갱신 시간
    pub updated_at: Instant,
}

impl RoutingTable {
    /// 새 라우팅 테이블 생성
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            routers: Vec::new(),
            writers: Vec::new(),
            readers: Vec::new(),
            database: database.into(),
            ttl_seconds: 300,
            updated_at: Instant::now(),
        }
    }

    /// 라우터 추가
    pub fn add_router(&mut self, address: ServerAddress) {
        push_unique(&mut self.routers, address);
    }

    /// 라이터 추가
    pub fn add_writer(&mut self, address: ServerAddress) {
        push_unique(&mut self.writers, address);
    }

    /// 리더 추가
    pub fn add_reader(&mut self, address: ServerAddress) {
        push_unique(&mut self.readers, address);
    }

    /// 역할별 서버 추가
    pub fn add_server(&mut self, role: ServerRole, address: ServerAddress) {
        match role {
            ServerRole::Route => self.add_router(address),
            ServerRole::Write => self.add_writer(address),
            ServerRole::Read => self.add_reader(address),
        }
    }

    /// 모든 역할에서 서버 제거
    ///
    /// 실제로 제거된 항목이 있으면 true.
    pub fn remove_server(&mut self, address: &ServerAddress) -> bool {
        let routers = remove_from(&mut self.routers, address);
        let writers = remove_from(&mut self.writers, address);
        let readers = remove_from(&mut self.readers, address);
        routers || writers || readers
    }

    /// 라이터 목록에서만 제거
    pub fn remove_writer(&mut self, address: &ServerAddress) -> bool {
        remove_from(&mut self.writers, address)
    }

    /// 라우팅 테이블이 만료되었는지 확인
    pub fn is_expired(&self) -> bool {
        self.updated_at.elapsed().as_secs() >= self.ttl_seconds
    }

    /// 테이블 갱신 시간 업데이트
    pub fn mark_updated(&mut self) {
        self.updated_at = Instant::now();
    }

    /// TTL 설정
    pub fn set_ttl(&mut self, seconds: u64) {
        self.ttl_seconds = seconds;
    }

    /// 서버가 있는지 확인
    pub fn has_servers(&self) -> bool {
        !self.writers.is_empty() || !self.readers.is_empty()
    }

    /// 쓰기 가능한 서버가 있는지 확인
    pub fn has_writers(&self) -> bool {
        !self.writers.is_empty()
    }

    /// 읽기 가능한 서버가 있는지 확인
    pub fn has_readers(&self) -> bool {
        !self.readers.is_empty()
    }

    /// 라우터가 있는지 확인
    pub fn has_routers(&self) -> bool {
        !self.routers.is_empty()
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::new("zeta4g")
    }
}

fn push_unique(list: &mut Vec<ServerAddress>, address: ServerAddress) {
    if !list.contains(&address) {
        list.push(address);
    }
}

fn remove_from(list: &mut Vec<ServerAddress>, address: &ServerAddress) -> bool {
    let before = list.len();
    list.retain(|a| a != address);
    list.len() != before
}
