use clap::Parser;
use route_carbon::presentation::render_report;
use route_carbon::utils::error::{CalcError, ErrorSeverity};
use route_carbon::utils::{logger, validation::Validate};
use route_carbon::{
    build_distance_provider, city_catalog, CalculatorConfig, CliConfig, EmissionCalculator,
    OutputFormat, TripAssessor,
};

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,   // 網路錯誤，可重試
        ErrorSeverity::High => 1,     // 輸入或設定錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    };
    std::process::exit(exit_code);
}

fn load_config(path: Option<&str>) -> route_carbon::Result<CalculatorConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            CalculatorConfig::from_file(path)?
        }
        None => CalculatorConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting route-carbon CLI");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| exit_with(&e));

    if cli.list_cities {
        let catalog = city_catalog(&config.distance).unwrap_or_else(|e| exit_with(&e));
        for city in catalog.all_cities() {
            println!("{}", city);
        }
        return Ok(());
    }

    let provider = build_distance_provider(&config.distance).unwrap_or_else(|e| exit_with(&e));
    let assessor = TripAssessor::new(provider, EmissionCalculator::from_settings(&config));

    match assessor.assess(&cli.trip_request()).await {
        Ok(report) => match cli.format {
            OutputFormat::Text => print!("{}", render_report(&report, &config)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        Err(e) => exit_with(&e),
    }

    Ok(())
}
