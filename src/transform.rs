//! 줄 변환 모듈
//!
//! 규칙 테이블과 탭/공백 변환을 한 줄 단위로 적용합니다.

use crate::error::{LineFixError, Result};
use crate::rules::RuleSet;

/// 기본 탭 너비
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// 허용하는 최대 탭 너비
pub const MAX_TAB_WIDTH: usize = 1024;

/// 들여쓰기 공백 처리 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhitespaceMode {
    /// 그대로 둠
    #[default]
    Keep,
    /// 탭을 공백으로
    Expand,
    /// 앞쪽 공백을 탭으로
    Unexpand,
}

impl WhitespaceMode {
    /// 플래그 조합에서 모드 결정 (둘 다 켜지면 Expand 우선)
    pub fn from_flags(expand: bool, unexpand: bool) -> Self {
        match (expand, unexpand) {
            (true, _) => WhitespaceMode::Expand,
            (false, true) => WhitespaceMode::Unexpand,
            (false, false) => WhitespaceMode::Keep,
        }
    }
}

impl std::fmt::Display for WhitespaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WhitespaceMode::Keep => write!(f, "Keep"),
            WhitespaceMode::Expand => write!(f, "Expand"),
            WhitespaceMode::Unexpand => write!(f, "Unexpand"),
        }
    }
}

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// 탭 너비
    pub tab_width: usize,
    /// 공백 처리 모드
    pub whitespace: WhitespaceMode,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            whitespace: WhitespaceMode::Keep,
        }
    }
}

impl TransformOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 탭 너비 설정
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// 공백 처리 모드 설정
    pub fn with_whitespace(mut self, whitespace: WhitespaceMode) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// 한 줄씩 규칙과 공백 변환을 적용하는 변환기
#[derive(Debug, Clone)]
pub struct LineTransformer {
    rules: RuleSet,
    tab_width: usize,
    whitespace: WhitespaceMode,
}

impl LineTransformer {
    /// 옵션을 검증하고 규칙을 컴파일하여 변환기 생성
    ///
    /// # Returns
    /// 탭 너비가 0이거나 `MAX_TAB_WIDTH`보다 크면 `LineFixError::InvalidTabWidth`
    pub fn new(options: &TransformOptions) -> Result<Self> {
        if options.tab_width == 0 || options.tab_width > MAX_TAB_WIDTH {
            return Err(LineFixError::InvalidTabWidth {
                value: options.tab_width,
            });
        }

        Ok(Self {
            rules: RuleSet::builtin()?,
            tab_width: options.tab_width,
            whitespace: options.whitespace,
        })
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn whitespace(&self) -> WhitespaceMode {
        self.whitespace
    }

    /// 한 줄 변환
    ///
    /// 줄 끝 문자를 떼고 규칙과 공백 변환을 적용한 뒤 `\n` 하나로 끝맺습니다.
    ///
    /// # Examples
    /// ```
    /// use linefix::transform::{LineTransformer, TransformOptions};
    ///
    /// let transformer = LineTransformer::new(&TransformOptions::new()).unwrap();
    /// assert_eq!(transformer.transform_line("foo   \n"), "foo\n");
    /// assert_eq!(transformer.transform_line("   \n"), "\n");
    /// ```
    pub fn transform_line(&self, line: &str) -> String {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let mut out = self.rules.apply(body);

        out = match self.whitespace {
            WhitespaceMode::Keep => out,
            WhitespaceMode::Expand => expand_tabs(&out, self.tab_width),
            WhitespaceMode::Unexpand => unexpand_leading(&out, self.tab_width),
        };

        out.push('\n');
        out
    }

    /// 텍스트 전체를 줄 단위로 변환
    pub fn transform_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            out.push_str(&self.transform_line(line));
        }
        out
    }
}

/// 탭을 다음 탭 위치까지의 공백으로 치환
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let spaces = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += 1;
        }
    }

    out
}

/// 앞쪽 들여쓰기만 탭 + 나머지 공백으로 재구성
///
/// 본문 중간의 공백은 건드리지 않습니다.
pub fn unexpand_leading(line: &str, tab_width: usize) -> String {
    let mut width = 0;
    let mut indent_len = 0;

    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += tab_width - width % tab_width,
            _ => break,
        }
        indent_len += 1;
    }

    let rest = &line[indent_len..];
    let mut out = String::with_capacity(line.len());
    out.extend(std::iter::repeat('\t').take(width / tab_width));
    out.extend(std::iter::repeat(' ').take(width % tab_width));
    out.push_str(rest);
    out
}
