//! 파일 탐색 모듈
//!
//! 입력 경로에서 처리 대상 소스 파일을 수집합니다.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{LineFixError, Result};
use crate::pattern::ExcludeMatcher;

/// 처리 대상 확장자
pub const ALLOWED_EXTENSIONS: &[&str] = &["h", "cpp", "c", "m", "mm"];

/// 입력 소스
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 표준 입력 → 표준 출력
    Stdio,
    /// 파일/폴더 경로 목록
    Paths(Vec<PathBuf>),
}

impl InputSource {
    /// 위치 인자에서 입력 소스 결정
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            InputSource::Stdio
        } else {
            InputSource::Paths(paths)
        }
    }
}

/// 파일을 건너뛴 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 허용되지 않은 확장자
    Extension,
    /// 변형 파일 (`~ipad`, `.orig`)
    Variant,
    /// `--exclude` 패턴과 일치
    Excluded,
    /// 폴더 탐색 중 만난 심볼릭 링크
    Symlink,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Extension => write!(f, "대상 확장자 아님"),
            SkipReason::Variant => write!(f, "변형 파일"),
            SkipReason::Excluded => write!(f, "제외 패턴 일치"),
            SkipReason::Symlink => write!(f, "심볼릭 링크"),
        }
    }
}

/// 탐색 옵션
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// 최대 폴더 탐색 깊이
    pub max_depth: Option<usize>,
    /// 변형 파일 건너뛰기
    pub skip_variants: bool,
    /// 제외 패턴
    pub exclude: ExcludeMatcher,
}

impl WalkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 최대 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 변형 파일 건너뛰기 설정
    pub fn with_skip_variants(mut self, skip_variants: bool) -> Self {
        self.skip_variants = skip_variants;
        self
    }

    /// 제외 패턴 설정
    pub fn with_exclude(mut self, exclude: ExcludeMatcher) -> Self {
        self.exclude = exclude;
        self
    }
}

/// 수집 결과
#[derive(Debug, Default)]
pub struct Collected {
    /// 처리할 파일 (발견 순서)
    pub files: Vec<PathBuf>,
    /// 건너뛴 파일과 이유
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// 경로 목록에서 처리 대상 파일 수집
///
/// 파일은 필터를 거쳐 그대로, 폴더는 재귀적으로 탐색합니다.
/// 존재하지 않는 경로나 탐색 에러는 즉시 실패합니다.
pub fn collect_files(paths: &[PathBuf], options: &WalkOptions) -> Result<Collected> {
    let mut collected = Collected::default();

    for path in paths {
        if path.is_dir() {
            walk_directory(path, options, &mut collected)?;
        } else if path.is_file() {
            classify(path, options, &mut collected);
        } else {
            return Err(LineFixError::PathNotFound { path: path.clone() });
        }
    }

    Ok(collected)
}

fn walk_directory(root: &Path, options: &WalkOptions, collected: &mut Collected) -> Result<()> {
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e));

    for entry in entries {
        let entry = entry.map_err(|e| LineFixError::WalkError {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_file() {
            classify(entry.path(), options, collected);
        } else if entry.file_type().is_symlink() {
            collected
                .skipped
                .push((entry.path().to_path_buf(), SkipReason::Symlink));
        }
    }

    Ok(())
}

fn classify(path: &Path, options: &WalkOptions, collected: &mut Collected) {
    match skip_reason(path, options) {
        Some(reason) => collected.skipped.push((path.to_path_buf(), reason)),
        None => collected.files.push(path.to_path_buf()),
    }
}

/// 파일을 건너뛰어야 하면 그 이유를 반환
pub fn skip_reason(path: &Path, options: &WalkOptions) -> Option<SkipReason> {
    if !has_allowed_extension(path) {
        return Some(SkipReason::Extension);
    }

    if options.skip_variants && is_variant_file(path) {
        return Some(SkipReason::Variant);
    }

    let excluded = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| options.exclude.is_excluded(s))
        .unwrap_or(false);
    if excluded {
        return Some(SkipReason::Excluded);
    }

    None
}

/// 허용 확장자 여부 (대소문자 무시)
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// 변형 파일 여부: 파일 이름(확장자 제외)에 `~`가 있거나 `.orig`로 끝남
pub fn is_variant_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| stem.contains('~') || stem.ends_with(".orig"))
        .unwrap_or(false)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "int x;\n").unwrap();
        path
    }

    #[test]
    fn test_input_source() {
        assert_eq!(InputSource::from_paths(vec![]), InputSource::Stdio);
        assert_eq!(
            InputSource::from_paths(vec![PathBuf::from("a.c")]),
            InputSource::Paths(vec![PathBuf::from("a.c")])
        );
    }

    #[test]
    fn test_allowed_extension() {
        assert!(has_allowed_extension(Path::new("a.h")));
        assert!(has_allowed_extension(Path::new("a.cpp")));
        assert!(has_allowed_extension(Path::new("dir/a.MM")));
        assert!(!has_allowed_extension(Path::new("a.txt")));
        assert!(!has_allowed_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_variant_file() {
        assert!(is_variant_file(Path::new("View~ipad.m")));
        assert!(is_variant_file(Path::new("main.orig.c")));
        assert!(!is_variant_file(Path::new("main.c")));
    }

    #[test]
    fn test_collect_directory() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "b.m");
        touch(temp_dir.path(), "a.c");
        touch(temp_dir.path(), "notes.txt");

        let collected = collect_files(&[temp_dir.path().to_path_buf()], &WalkOptions::new()).unwrap();

        let names: Vec<_> = collected
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.c", "b.m"]);
        assert_eq!(collected.skipped.len(), 1);
        assert_eq!(collected.skipped[0].1, SkipReason::Extension);
    }

    #[test]
    fn test_hidden_dirs_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let git = temp_dir.path().join(".git");
        fs::create_dir(&git).unwrap();
        touch(&git, "hook.c");
        touch(temp_dir.path(), "main.c");

        let collected = collect_files(&[temp_dir.path().to_path_buf()], &WalkOptions::new()).unwrap();
        assert_eq!(collected.files.len(), 1);
    }

    #[test]
    fn test_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(temp_dir.path(), "root.c");
        touch(&sub, "deep.c");

        let options = WalkOptions::new().with_max_depth(Some(1));
        let collected = collect_files(&[temp_dir.path().to_path_buf()], &options).unwrap();
        assert_eq!(collected.files.len(), 1);
    }

    #[test]
    fn test_skip_variants_and_exclude() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "View~ipad.m");
        touch(temp_dir.path(), "View.m");
        touch(temp_dir.path(), "View_gen.m");

        let options = WalkOptions::new()
            .with_skip_variants(true)
            .with_exclude(ExcludeMatcher::new(&["*_gen.*".to_string()]).unwrap());
        let collected = collect_files(&[temp_dir.path().to_path_buf()], &options).unwrap();

        assert_eq!(collected.files.len(), 1);
        assert!(collected.files[0].ends_with("View.m"));
        let reasons: Vec<_> = collected.skipped.iter().map(|(_, r)| *r).collect();
        assert!(reasons.contains(&SkipReason::Variant));
        assert!(reasons.contains(&SkipReason::Excluded));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_in_walk_skipped_with_reason() {
        let temp_dir = TempDir::new().unwrap();
        let real = touch(temp_dir.path(), "real.c");
        std::os::unix::fs::symlink(&real, temp_dir.path().join("link.c")).unwrap();

        let collected = collect_files(&[temp_dir.path().to_path_buf()], &WalkOptions::new()).unwrap();

        assert_eq!(collected.files, vec![real]);
        assert_eq!(collected.skipped.len(), 1);
        assert!(collected.skipped[0].0.ends_with("link.c"));
        assert_eq!(collected.skipped[0].1, SkipReason::Symlink);
    }

    #[test]
    fn test_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.c");
        let result = collect_files(&[missing], &WalkOptions::new());
        assert!(matches!(result, Err(LineFixError::PathNotFound { .. })));
    }
}
