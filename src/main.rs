use anyhow::Context;
use clap::Parser;
use logic_exercises::app::demo;
use logic_exercises::config::toml_config::CallSpec;
use logic_exercises::utils::error::ExerciseError;
use logic_exercises::utils::logger::{self, LogFormat};
use logic_exercises::utils::validation::Validate;
use logic_exercises::{
    render, CliConfig, Command, DemoConfig, Normalization, OutputFormat, Report,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, cli.verbose);

    tracing::info!("Starting logic-exercises CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入 TOML 配置 (沒有指定時使用示範預設值)
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match DemoConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ No se pudo cargar '{}': {}", path, e);
                    exit_with(&e);
                }
            }
        }
        None => DemoConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }

    let command = cli.command.clone().unwrap_or(Command::Demo);

    match run(&command, &config) {
        Ok((report, format)) => {
            let output = render(&report, format).context("failed to render report")?;
            print!("{}", output);
            tracing::info!("✅ Done");
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            exit_with(&e);
        }
    }

    Ok(())
}

/// 記錄錯誤並依嚴重程度結束程序
fn exit_with(e: &ExerciseError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("💡 Sugerencia: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}

fn run(command: &Command, config: &DemoConfig) -> Result<(Report, OutputFormat), ExerciseError> {
    let format: OutputFormat = config.output.format.parse()?;

    let report = match command {
        Command::Demo => {
            config.validate()?;
            demo::build_report(config)?
        }
        Command::Fibonacci { n } => demo::fibonacci_section(*n).into(),
        Command::Prime { values } => demo::primes_section(values).into(),
        Command::Palindrome { ascii, text } => {
            let normalization = if *ascii {
                Normalization::Ascii
            } else {
                config.palindromes.normalization
            };
            demo::palindromes_section(std::slice::from_ref(text), normalization).into()
        }
        Command::SumEven { numbers } => demo::even_sum_section(numbers).into(),
        Command::CallCost { zone, minutes } => {
            let call = CallSpec {
                zone: *zone,
                minutes: *minutes,
            };
            demo::call_cost_section(&[call])?.into()
        }
        Command::Fizzbuzz { n } => demo::fizzbuzz_section(*n)?.into(),
        Command::Zones => demo::zones_section().into(),
    };

    Ok((report, format))
}
