//! linefix - SOURCE LINE FIXER
//!
//! C/C++/Objective-C 소스의 각 줄에 고정된 정규식 규칙을 적용하고
//! 탭/공백 들여쓰기를 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - ✂️ **줄 끝 공백 제거**: 공백만 있는 줄은 빈 줄로
//! - 🎨 **스타일 규칙**: `if(` → `if (`, `}else{` → `} else {` 등
//! - ↹ **탭 변환**: `--expand` / `--unexpand`
//! - 📁 **폴더 탐색**: h, cpp, c, m, mm 파일만 재귀적으로 처리
//! - 👀 **미리보기**: 파일을 건드리지 않고 결과만 출력
//! - 💾 **안전한 교체**: 임시 파일 후 원자적 교체, `.bak` 백업
//!
//! # 예제
//!
//! ```bash
//! # 표준 입력 → 표준 출력
//! linefix < main.c
//!
//! # 폴더 미리보기
//! linefix --preview src/
//!
//! # 백업과 함께 제자리 수정
//! linefix --backup --expand src/
//! ```

pub mod cli;
pub mod error;
pub mod pattern;
pub mod processor;
pub mod rules;
pub mod stats;
pub mod transform;
pub mod walker;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{LineFixError, Result};
pub use pattern::ExcludeMatcher;
pub use processor::{process_file, process_stream, FileOutcome, ProcessOptions, ProcessResult};
pub use rules::{Rule, RuleSet};
pub use stats::{format_bytes, Statistics};
pub use transform::{LineTransformer, TransformOptions, WhitespaceMode};
pub use walker::{collect_files, InputSource, SkipReason, WalkOptions};
