//! 에러 타입 정의 모듈
//!
//! linefix에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// linefix에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum LineFixError {
    /// 탭 너비가 허용 범위 밖
    #[error("탭 너비는 1 이상 1024 이하여야 합니다: {value}")]
    InvalidTabWidth { value: usize },

    /// 유효하지 않은 제외 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 내장 규칙 컴파일 실패
    #[error("규칙 컴파일 실패 ({pattern})")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 입력 경로가 존재하지 않음
    #[error("경로를 찾을 수 없습니다: {path}")]
    PathNotFound { path: PathBuf },

    /// 소스 파일 열기/읽기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 폴더 탐색 실패
    #[error("폴더 탐색 실패 ({path}): {reason}")]
    WalkError { path: PathBuf, reason: String },

    /// 임시 파일 생성/쓰기 실패
    #[error("임시 파일 쓰기 실패 ({file}): {reason}")]
    TempFileError { file: PathBuf, reason: String },

    /// 백업 복사 실패
    #[error("백업 생성 실패 ({file}): {reason}")]
    BackupError { file: PathBuf, reason: String },

    /// 임시 파일을 원본 위치로 교체 실패
    #[error("파일 교체 실패 ({file}): {reason}")]
    PersistError { file: PathBuf, reason: String },

    /// 출력 쓰기 실패
    #[error("출력 쓰기 실패: {reason}")]
    WriteError { reason: String },
}

/// linefix 결과 타입 별칭
pub type Result<T> = std::result::Result<T, LineFixError>;
