//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::processor::{FileOutcome, ProcessResult};

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 처리 대상 파일 수
    pub total_files: usize,
    /// 수정된 파일 수
    pub modified: usize,
    /// 변경 없는 파일 수
    pub unchanged: usize,
    /// 미리보기 출력한 파일 수
    pub previewed: usize,
    /// 바이너리로 건너뛴 파일 수
    pub binary: usize,
    /// 필터로 건너뛴 파일 수
    pub skipped: usize,
    /// 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize, skipped: usize) -> Self {
        Self {
            total_files,
            skipped,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 처리 결과 반영
    pub fn record(&mut self, result: &ProcessResult) {
        self.total_bytes_read += result.bytes_read;
        self.total_bytes_written += result.bytes_written;

        match result.outcome {
            FileOutcome::Modified => self.modified += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Previewed => self.previewed += 1,
            FileOutcome::Binary => self.binary += 1,
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력 (stderr)
    pub fn print_summary(&self) {
        eprintln!("\n{}", "═".repeat(50).bright_blue());
        eprintln!("{}", " 📊 처리 통계".bright_white().bold());
        eprintln!("{}", "═".repeat(50).bright_blue());

        eprintln!(
            "  {} 대상 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );

        if self.previewed > 0 {
            eprintln!(
                "  {} 미리보기:     {}",
                "👀".bright_magenta(),
                self.previewed.to_string().magenta()
            );
        } else {
            eprintln!(
                "  {} 수정:         {}",
                "✏️".bright_green(),
                self.modified.to_string().green()
            );
            eprintln!(
                "  {} 변경 없음:    {}",
                "✅".bright_green(),
                self.unchanged
            );
        }

        if self.binary > 0 {
            eprintln!(
                "  {} 바이너리:     {}",
                "⚠️".bright_yellow(),
                self.binary.to_string().yellow()
            );
        }

        eprintln!(
            "  {} 건너뜀:       {}",
            "⏭️".bright_white(),
            self.skipped
        );
        eprintln!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read)
        );
        eprintln!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.total_bytes_written)
        );
        eprintln!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        eprintln!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use linefix::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
