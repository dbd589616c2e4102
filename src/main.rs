use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use webm_manifest::component::manifest_generator::{
    ManifestGenerator, default_manifest_path, write_manifest,
};
use webm_manifest::config::Config;
use webm_manifest::init;
use webm_manifest::tools::{FfprobeProber, validate_directory_exists};

/// 掃描 webm 錄影檔並產生 files.json
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// 錄影檔所在資料夾
    #[arg(value_name = "TARGET_DIR")]
    target_dir: PathBuf,

    /// 輸出檔案（預設為 TARGET_DIR/files.json）
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// ffprobe 執行檔（覆寫 settings.json）
    #[arg(long, value_name = "PROGRAM")]
    ffprobe: Option<String>,
}

fn main() {
    init::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        warn!("Program error: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::new();
    validate_directory_exists(&cli.target_dir)?;

    let program = cli
        .ffprobe
        .clone()
        .unwrap_or_else(|| config.settings.ffprobe_program.clone());
    let generator = ManifestGenerator::new(FfprobeProber::new(program));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("Invalid progress bar template")?,
    );
    spinner.set_message("掃描錄影檔中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let scanned = generator.scan(&cli.target_dir);
    spinner.finish_and_clear();
    let manifest = scanned
        .with_context(|| format!("無法掃描 {}", cli.target_dir.display()))?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_manifest_path(&cli.target_dir, &config.settings));
    write_manifest(&manifest, &output)?;

    info!("Program exited normally");
    println!(
        "{} {} 個錄影檔 -> {}",
        style("完成:").green().bold(),
        manifest.len(),
        output.display()
    );

    Ok(())
}
