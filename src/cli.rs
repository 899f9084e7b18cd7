//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::pattern::ExcludeMatcher;
use crate::processor::ProcessOptions;
use crate::transform::{TransformOptions, WhitespaceMode, DEFAULT_TAB_WIDTH};
use crate::walker::{InputSource, WalkOptions};

/// `--man` 출력 내용
pub const MANUAL: &str = r#"LINEFIX(1)

NAME
    linefix - C/C++/Objective-C 소스의 줄 단위 공백/스타일 정리

SYNOPSIS
    linefix [OPTIONS] [PATH]...

DESCRIPTION
    각 줄에 고정된 정규식 규칙을 순서대로 적용합니다:
      - 줄 끝 공백 제거 (CRLF는 LF로)
      - if/for/while/switch/catch 뒤 공백: "if(" -> "if ("
      - "}else" -> "} else", "else{" -> "else {", "){" -> ") {"
      - Objective-C 메서드 선언: "-(void)" -> "- (void)"
    공백만 있는 줄은 빈 줄이 되고, 마지막 줄에는 줄바꿈이 붙습니다.

    PATH가 없으면 표준 입력을 변환해 표준 출력으로 씁니다.
    파일은 확장자가 h, cpp, c, m, mm 일 때만 처리하고,
    폴더는 재귀적으로 탐색합니다 (숨김 폴더 제외).
    바이너리 파일은 건드리지 않습니다.

    수정은 같은 폴더의 임시 파일에 쓴 뒤 원본 위치로 원자적으로 교체합니다.

OPTIONS
    -b, --backup          교체 전 원본을 <file>.bak 으로 복사
    -v, --verbose         파일별 상세 출력
    -e, --expand          탭을 공백으로 변환
    -u, --unexpand        앞쪽 들여쓰기 공백을 탭으로 변환
                          (-e 와 함께 쓰면 -e 가 우선)
    -p, --preview         파일을 바꾸지 않고 결과를 표준 출력으로
    -s, --skip-variants   변형 파일 (View~ipad.m, foo.orig.c) 건너뛰기
    -t, --tab-width N     탭 너비 (기본값 4, 1 ~ 1024)
        --max-depth N     최대 폴더 탐색 깊이
        --exclude GLOB    파일 이름이 GLOB와 일치하면 건너뛰기 (반복 가능)
        --man             이 설명서 출력

EXIT STATUS
    0  정상 종료
    1  파일 열기/쓰기/교체 실패 또는 잘못된 설정
"#;

/// linefix CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "linefix",
    author = "YourName <your@email.com>",
    version,
    about = "SOURCE LINE FIXER - C/C++/Objective-C 소스의 공백과 스타일을 정리하는 CLI 도구",
    long_about = r#"
SOURCE LINE FIXER
=================

소스 파일의 각 줄에 고정된 정규식 규칙을 적용하고,
필요하면 탭/공백 들여쓰기를 변환합니다.

예제:
  linefix < in.c > out.c
  linefix --preview src/
  linefix --backup --expand -t 2 src/ include/
  linefix --skip-variants --exclude "*.pb.h" .
"#
)]
pub struct Args {
    /// 처리할 파일/폴더 경로 (없으면 표준 입력 → 표준 출력)
    pub paths: Vec<PathBuf>,

    /// 교체 전 원본을 .bak 으로 백업
    #[arg(short, long)]
    pub backup: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 탭을 공백으로 변환
    #[arg(short, long)]
    pub expand: bool,

    /// 앞쪽 공백을 탭으로 변환 (--expand 가 우선)
    #[arg(short, long)]
    pub unexpand: bool,

    /// 파일을 수정하지 않고 결과를 표준 출력으로
    #[arg(short, long)]
    pub preview: bool,

    /// 변형 파일 (~ipad, .orig) 건너뛰기
    #[arg(short, long = "skip-variants")]
    pub skip_variants: bool,

    /// 탭 너비
    #[arg(short, long, default_value_t = DEFAULT_TAB_WIDTH)]
    pub tab_width: usize,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 제외할 파일 이름 패턴 (glob 형식, 반복 가능)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// 설명서 출력
    #[arg(long)]
    pub man: bool,
}

impl Args {
    /// 입력 소스 결정
    pub fn input_source(&self) -> InputSource {
        InputSource::from_paths(self.paths.clone())
    }

    /// 공백 처리 모드
    pub fn whitespace_mode(&self) -> WhitespaceMode {
        WhitespaceMode::from_flags(self.expand, self.unexpand)
    }

    /// 변환 옵션 생성
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::new()
            .with_tab_width(self.tab_width)
            .with_whitespace(self.whitespace_mode())
    }

    /// 탐색 옵션 생성 (제외 패턴 컴파일)
    pub fn walk_options(&self) -> Result<WalkOptions> {
        Ok(WalkOptions::new()
            .with_max_depth(self.max_depth)
            .with_skip_variants(self.skip_variants)
            .with_exclude(ExcludeMatcher::new(&self.exclude)?))
    }

    /// 파일 처리 옵션 생성
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions::new()
            .with_preview(self.preview)
            .with_backup(self.backup)
    }
}
