//! 치환 규칙 모듈
//!
//! 각 줄에 순서대로 적용되는 고정 정규식 규칙 테이블을 정의합니다.

use regex::Regex;

use crate::error::{LineFixError, Result};

/// 내장 규칙 테이블 (패턴, 치환 문자열)
///
/// 순서대로 적용되며 모두 멱등입니다.
const RULE_TABLE: &[(&str, &str)] = &[
    // 줄 끝 공백 (CR 포함)
    (r"[ \t\r\x0C\x0B]+$", ""),
    // 제어 키워드 뒤 공백
    (r"\b(if|for|while|switch|catch)\(", "$1 ("),
    (r"\}else\b", "} else"),
    (r"\belse\{", "else {"),
    (r"\)\{", ") {"),
    // Objective-C 메서드 선언
    (r"^([-+])\(", "$1 ("),
];

/// 컴파일된 치환 규칙
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// 규칙 컴파일
    pub fn new(pattern: &str, replacement: &'static str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| LineFixError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            replacement,
        })
    }

    /// 줄 안의 모든 일치 구간을 치환
    pub fn apply(&self, line: &str) -> String {
        self.pattern.replace_all(line, self.replacement).into_owned()
    }

    /// 패턴 원문
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// 순서가 있는 규칙 목록
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// 내장 규칙 테이블을 한 번 컴파일
    pub fn builtin() -> Result<Self> {
        let rules = RULE_TABLE
            .iter()
            .map(|(pattern, replacement)| Rule::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// 모든 규칙을 순서대로 적용
    ///
    /// # Examples
    /// ```
    /// use linefix::rules::RuleSet;
    ///
    /// let rules = RuleSet::builtin().unwrap();
    /// assert_eq!(rules.apply("if(x){   "), "if (x) {");
    /// ```
    pub fn apply(&self, line: &str) -> String {
        let mut current = line.to_string();
        for rule in &self.rules {
            current = rule.apply(&current);
        }
        current
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
