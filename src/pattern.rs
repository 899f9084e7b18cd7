//! 패턴 매칭 모듈
//!
//! `--exclude` glob 패턴을 사용한 파일 이름 제외 필터를 담당합니다.

use glob::Pattern;

use crate::error::{LineFixError, Result};

/// 컴파일된 제외 패턴 목록
#[derive(Debug, Default, Clone)]
pub struct ExcludeMatcher {
    patterns: Vec<Pattern>,
}

impl ExcludeMatcher {
    /// 새 제외 매처 생성
    ///
    /// # Arguments
    /// * `patterns` - 글로브 패턴 문자열 목록 (비어 있으면 아무것도 제외하지 않음)
    ///
    /// # Examples
    /// ```
    /// use linefix::pattern::ExcludeMatcher;
    ///
    /// let matcher = ExcludeMatcher::new(&["*_generated.*".to_string()]).unwrap();
    /// assert!(matcher.is_excluded("Model_generated.m"));
    /// assert!(!matcher.is_excluded("Model.m"));
    /// ```
    pub fn new(patterns: &[String]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|_| LineFixError::InvalidPattern { pattern: p.clone() })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns: compiled })
    }

    /// 파일 이름이 제외 패턴 중 하나와 일치하는지 확인
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    /// 패턴이 설정되어 있는지 확인
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }
}
