//! 파일 처리 모듈
//!
//! 개별 소스 파일의 읽기, 텍스트 판별, 변환, 미리보기 출력 또는 제자리 교체를 담당합니다.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{LineFixError, Result};
use crate::transform::LineTransformer;

/// 바이너리 판별 시 검사하는 앞부분 길이
const BINARY_SNIFF_LEN: usize = 8000;

/// 파일 처리 결과 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 내용이 바뀌어 교체됨
    Modified,
    /// 바뀐 내용 없음
    Unchanged,
    /// 미리보기로 출력됨
    Previewed,
    /// 바이너리로 판단되어 건너뜀
    Binary,
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct ProcessResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 결과 종류
    pub outcome: FileOutcome,
    /// 원본 크기
    pub bytes_read: u64,
    /// 쓴 크기 (교체 또는 미리보기)
    pub bytes_written: u64,
    /// 생성된 백업 경로
    pub backup: Option<PathBuf>,
}

impl ProcessResult {
    fn new(path: &Path, outcome: FileOutcome, bytes_read: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome,
            bytes_read,
            bytes_written: 0,
            backup: None,
        }
    }
}

/// 파일 처리 옵션
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// 표준 출력으로 미리보기 (파일 수정 없음)
    pub preview: bool,
    /// 교체 전 `.bak` 백업
    pub backup: bool,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리보기 설정
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// 백업 설정
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}

/// 단일 파일 처리
///
/// # Arguments
/// * `path` - 처리할 파일 경로
/// * `transformer` - 줄 변환기
/// * `options` - 처리 옵션
/// * `preview_out` - 미리보기 출력 대상
///
/// # Returns
/// 처리 결과. 읽기/쓰기/교체 실패는 에러로 반환되어 실행을 중단시킵니다.
pub fn process_file<W: Write>(
    path: &Path,
    transformer: &LineTransformer,
    options: &ProcessOptions,
    preview_out: &mut W,
) -> Result<ProcessResult> {
    let bytes = fs::read(path).map_err(|e| LineFixError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let bytes_read = bytes.len() as u64;

    let text = match decode_text(&bytes) {
        Some(text) => text,
        None => return Ok(ProcessResult::new(path, FileOutcome::Binary, bytes_read)),
    };

    let transformed = transformer.transform_text(text);

    if options.preview {
        write_preview(path, &transformed, preview_out)?;
        let mut result = ProcessResult::new(path, FileOutcome::Previewed, bytes_read);
        result.bytes_written = transformed.len() as u64;
        return Ok(result);
    }

    if transformed == text {
        return Ok(ProcessResult::new(path, FileOutcome::Unchanged, bytes_read));
    }

    let backup = replace_in_place(path, &transformed, options.backup)?;

    let mut result = ProcessResult::new(path, FileOutcome::Modified, bytes_read);
    result.bytes_written = transformed.len() as u64;
    result.backup = backup;
    Ok(result)
}

/// 표준 입력 등 스트림을 줄 단위로 변환하여 출력
///
/// UTF-8로 해석되지 않는 줄은 변환하지 않고 그대로 씁니다.
///
/// # Returns
/// 처리한 줄 수
pub fn process_stream<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    transformer: &LineTransformer,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LineFixError::FileOpenError {
                file: PathBuf::from("<stdin>"),
                reason: e.to_string(),
            })?;
        if n == 0 {
            break;
        }

        // UTF-8이 아닌 줄은 바이트 그대로 통과
        match std::str::from_utf8(&buf) {
            Ok(line) => writer.write_all(transformer.transform_line(line).as_bytes()),
            Err(_) => writer.write_all(&buf),
        }
        .map_err(write_error)?;
        lines += 1;
    }

    writer.flush().map_err(write_error)?;
    Ok(lines)
}

/// 텍스트 파일이면 UTF-8 문자열로, 바이너리면 None
///
/// 앞부분에 NUL 바이트가 있거나 UTF-8이 아니면 바이너리로 봅니다.
pub fn decode_text(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if head.contains(&0) {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}

/// `<file>.bak` 경로
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

fn write_preview<W: Write>(path: &Path, content: &str, out: &mut W) -> Result<()> {
    writeln!(out, "### BEGIN {}", path.display()).map_err(write_error)?;
    out.write_all(content.as_bytes()).map_err(write_error)?;
    writeln!(out, "### END {}", path.display()).map_err(write_error)?;
    Ok(())
}

/// 같은 폴더에 임시 파일을 쓰고 원본 위치로 원자적으로 교체
///
/// 심볼릭 링크는 실제 파일로 풀어서 링크 자체는 그대로 둡니다.
fn replace_in_place(path: &Path, content: &str, backup: bool) -> Result<Option<PathBuf>> {
    let target = resolve_link(path)?;
    let path = target.as_path();

    let temp_error = |e: std::io::Error| LineFixError::TempFileError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // 실패 시 drop 되면서 임시 파일은 삭제됨
    let mut temp = NamedTempFile::new_in(dir).map_err(temp_error)?;
    temp.write_all(content.as_bytes()).map_err(temp_error)?;
    temp.flush().map_err(temp_error)?;

    let permissions = fs::metadata(path)
        .map_err(|e| LineFixError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .permissions();
    fs::set_permissions(temp.path(), permissions).map_err(temp_error)?;

    let backup_file = if backup {
        let bak = backup_path(path);
        fs::copy(path, &bak).map_err(|e| LineFixError::BackupError {
            file: bak.clone(),
            reason: e.to_string(),
        })?;
        Some(bak)
    } else {
        None
    };

    temp.persist(path).map_err(|e| LineFixError::PersistError {
        file: path.to_path_buf(),
        reason: e.error.to_string(),
    })?;

    Ok(backup_file)
}

/// 심볼릭 링크면 최종 대상 경로, 아니면 그대로
fn resolve_link(path: &Path) -> Result<PathBuf> {
    let open_error = |e: std::io::Error| LineFixError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    if fs::symlink_metadata(path).map_err(open_error)?.file_type().is_symlink() {
        fs::canonicalize(path).map_err(open_error)
    } else {
        Ok(path.to_path_buf())
    }
}

fn write_error(e: std::io::Error) -> LineFixError {
    LineFixError::WriteError {
        reason: e.to_string(),
    }
}
