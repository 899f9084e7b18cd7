//! linefix - SOURCE LINE FIXER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;

use linefix::{
    cli::{Args, MANUAL},
    processor::{process_file, process_stream, FileOutcome, ProcessOptions, ProcessResult},
    stats::Statistics,
    transform::{LineTransformer, WhitespaceMode},
    walker::{collect_files, Collected, InputSource, WalkOptions},
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.man {
        print!("{}", MANUAL);
        return Ok(());
    }

    // 설정 검증 (파일을 건드리기 전에)
    let transformer =
        LineTransformer::new(&args.transform_options()).context("잘못된 설정입니다")?;
    let walk_options = args.walk_options().context("잘못된 설정입니다")?;

    if args.expand && args.unexpand && args.verbose {
        eprintln!(
            "{}",
            "⚠️ --expand 와 --unexpand 가 함께 지정되어 --expand 를 적용합니다.".yellow()
        );
    }

    match args.input_source() {
        InputSource::Stdio => run_stdio_mode(&args, &transformer),
        InputSource::Paths(paths) => run_files_mode(&args, &paths, &transformer, &walk_options),
    }
}

/// 표준 입력 → 표준 출력 모드
fn run_stdio_mode(args: &Args, transformer: &LineTransformer) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let lines = process_stream(stdin.lock(), &mut out, transformer)
        .context("표준 입력 처리 실패")?;

    if args.verbose {
        eprintln!("  {} {} 줄 처리", "✓".green(), lines);
    }

    Ok(())
}

/// 파일/폴더 모드
fn run_files_mode(
    args: &Args,
    paths: &[PathBuf],
    transformer: &LineTransformer,
    walk_options: &WalkOptions,
) -> Result<()> {
    if args.verbose {
        print_header(args, transformer);
    }

    let collected = collect_files(paths, walk_options).context("파일 검색 실패")?;
    print_skipped(&collected);

    let mut stats = Statistics::new(collected.files.len(), collected.skipped.len());
    let options = args.process_options();

    if collected.files.is_empty() {
        eprintln!("{}", "⚠️ 처리할 소스 파일이 없습니다.".yellow());
        return Ok(());
    }

    // 미리보기는 표준 출력에 쓰므로 진행률 바는 제자리 수정에서만
    let pb = if options.preview || args.verbose {
        ProgressBar::hidden()
    } else {
        create_progress_bar(collected.files.len())
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for path in &collected.files {
        let result = process_file(path, transformer, &options, &mut out)
            .with_context(|| format!("처리 중단: {}", path.display()))?;
        pb.inc(1);

        if args.verbose {
            print_result(&result, &options);
        } else if result.outcome == FileOutcome::Binary {
            pb.suspend(|| print_result(&result, &options));
        }

        stats.record(&result);
    }

    out.flush().context("표준 출력 쓰기 실패")?;
    pb.finish_and_clear();

    stats.print_summary();

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, transformer: &LineTransformer) {
    eprintln!("\n{}", "═".repeat(50).bright_blue());
    eprintln!("{}", " 🧹 SOURCE LINE FIXER".bright_white().bold());
    eprintln!("{}", "═".repeat(50).bright_blue());

    for path in &args.paths {
        eprintln!("  {} 입력 경로: {:?}", "📂".bright_cyan(), path);
    }

    eprintln!(
        "  {} 탭 너비: {}",
        "📏".bright_white(),
        transformer.tab_width()
    );
    if transformer.whitespace() != WhitespaceMode::Keep {
        eprintln!(
            "  {} 공백 모드: {}",
            "⚙️".bright_yellow(),
            transformer.whitespace()
        );
    }

    if args.preview {
        eprintln!(
            "  {} {}",
            "👀".bright_magenta(),
            "미리보기 모드 (파일 수정 없음)".magenta()
        );
    } else if args.backup {
        eprintln!("  {} {}", "💾".bright_green(), "백업 (.bak) 생성".green());
    }

    if args.skip_variants {
        eprintln!("  {} 변형 파일 건너뛰기", "⏭️".bright_white());
    }

    if let Some(depth) = args.max_depth {
        eprintln!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    for pattern in &args.exclude {
        eprintln!("  {} 제외 패턴: {}", "🔍".bright_magenta(), pattern);
    }

    eprintln!("{}", "═".repeat(50).bright_blue());
}

/// 건너뛴 파일 알림
fn print_skipped(collected: &Collected) {
    for (path, reason) in &collected.skipped {
        eprintln!(
            "  {} {} ({})",
            "⏭".dimmed(),
            path.display(),
            reason.to_string().dimmed()
        );
    }
}

/// 파일별 결과 출력
fn print_result(result: &ProcessResult, options: &ProcessOptions) {
    let path = result.path.display();
    match result.outcome {
        FileOutcome::Modified => {
            eprintln!("  {} {}", "✎".green(), path);
            if let Some(ref backup) = result.backup {
                eprintln!("    {} {}", "백업:".dimmed(), backup.display());
            }
        }
        FileOutcome::Unchanged => eprintln!("  {} {}", "✓".green(), path),
        FileOutcome::Previewed => eprintln!("  {} {}", "👀".magenta(), path),
        FileOutcome::Binary => eprintln!(
            "  {} {} {}",
            "⚠".yellow(),
            path,
            "(바이너리, 건너뜀)".yellow()
        ),
    }

    if options.preview && result.outcome == FileOutcome::Binary {
        eprintln!("    {}", "미리보기 출력 없음".dimmed());
    }
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
