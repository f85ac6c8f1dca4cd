//! Result
//!
//! 결과 커서 계약과 버퍼링된 결과

use std::collections::VecDeque;
use std::future::Future;

use super::error::{DriverError, DriverResult};
use super::record::Record;
use super::session::Query;

/// 결과에서 레코드 제거는 지원하지 않음
pub const REMOVE_UNSUPPORTED_MESSAGE: &str = "Removing records from a result is not supported.";

// ============================================================================
// ResultSummary - 결과 요약
// ============================================================================

/// 결과 요약
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSummary {
    /// 쿼리
    pub query: Option<Query>,
    /// 카운터
    pub counters: Counters,
    /// 데이터베이스 정보
    pub database: Option<String>,
    /// 서버 정보
    pub server: Option<String>,
}

/// 카운터
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    /// 생성된 노드 수
    pub nodes_created: i64,
    /// 삭제된 노드 수
    pub nodes_deleted: i64,
    /// 생성된 관계 수
    pub relationships_created: i64,
    /// 삭제된 관계 수
    pub relationships_deleted: i64,
    /// 설정된 속성 수
    pub properties_set: i64,
}

impl Counters {
    /// 변경 사항 존재 여부
    pub fn contains_updates(&self) -> bool {
        self.nodes_created > 0
            || self.nodes_deleted > 0
            || self.relationships_created > 0
            || self.relationships_deleted > 0
            || self.properties_set > 0
    }
}

// ============================================================================
// ResultCursor - 결과 커서 계약
// ============================================================================

/// 결과 소비 연산
///
/// 각 연산은 독립적으로 네트워크 I/O를 일으킬 수 있으므로 `run`이 성공한
/// 뒤에도 실패할 수 있습니다.
pub trait ResultCursor: Send {
    /// 컬럼 이름
    fn keys(&mut self) -> impl Future<Output = DriverResult<Vec<String>>> + Send;

    /// 남은 레코드 존재 여부
    fn has_next(&mut self) -> impl Future<Output = DriverResult<bool>> + Send;

    /// 다음 레코드로 이동하며 가져오기
    fn next(&mut self) -> impl Future<Output = DriverResult<Record>> + Send;

    /// 정확히 하나인 레코드 가져오기
    fn single(&mut self) -> impl Future<Output = DriverResult<Record>> + Send;

    /// 이동하지 않고 다음 레코드 보기
    fn peek(&mut self) -> impl Future<Output = DriverResult<Record>> + Send;

    /// 남은 레코드 전부 가져오기
    fn list(&mut self) -> impl Future<Output = DriverResult<Vec<Record>>> + Send;

    /// 남은 레코드를 변환하여 가져오기
    fn list_map<T, F>(&mut self, f: F) -> impl Future<Output = DriverResult<Vec<T>>> + Send
    where
        T: Send,
        F: FnMut(Record) -> T + Send;

    /// 남은 레코드를 버리고 요약 반환
    fn consume(&mut self) -> impl Future<Output = DriverResult<ResultSummary>> + Send;

    /// 현재 레코드 제거
    fn remove(&mut self) -> DriverResult<()>;
}

// ============================================================================
// QueryResult - 버퍼링된 결과
// ============================================================================

/// 모든 레코드를 이미 받아 둔 결과
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    keys: Vec<String>,
    records: VecDeque<Record>,
    summary: ResultSummary,
}

impl QueryResult {
    /// 새 결과 생성
    pub fn new(keys: Vec<String>, records: Vec<Record>, summary: ResultSummary) -> Self {
        Self {
            keys,
            records: records.into(),
            summary,
        }
    }

    /// 빈 결과 생성
    pub fn empty() -> Self {
        Self::default()
    }

    /// 남은 레코드 수
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl ResultCursor for QueryResult {
    async fn keys(&mut self) -> DriverResult<Vec<String>> {
        Ok(self.keys.clone())
    }

    async fn has_next(&mut self) -> DriverResult<bool> {
        Ok(!self.records.is_empty())
    }

    async fn next(&mut self) -> DriverResult<Record> {
        self.records
            .pop_front()
            .ok_or_else(|| DriverError::no_such_record("No more records"))
    }

    async fn single(&mut self) -> DriverResult<Record> {
        let record = self.records.pop_front().ok_or_else(|| {
            DriverError::no_such_record("Cannot retrieve a single record, because this result is empty.")
        })?;
        if !self.records.is_empty() {
            return Err(DriverError::no_such_record(
                "Expected a result with a single record, but this result contains at least one more.",
            ));
        }
        Ok(record)
    }

    async fn peek(&mut self) -> DriverResult<Record> {
        self.records
            .front()
            .cloned()
            .ok_or_else(|| DriverError::no_such_record("Cannot peek past the last record"))
    }

    async fn list(&mut self) -> DriverResult<Vec<Record>> {
        Ok(self.records.drain(..).collect())
    }

    async fn list_map<T, F>(&mut self, f: F) -> DriverResult<Vec<T>>
    where
        T: Send,
        F: FnMut(Record) -> T + Send,
    {
        Ok(self.records.drain(..).map(f).collect())
    }

    async fn consume(&mut self) -> DriverResult<ResultSummary> {
        self.records.clear();
        Ok(self.summary.clone())
    }

    fn remove(&mut self) -> DriverResult<()> {
        Err(DriverError::client_rejected(REMOVE_UNSUPPORTED_MESSAGE))
    }
}

// ============================================================================
// Tests
// ============================================================================
