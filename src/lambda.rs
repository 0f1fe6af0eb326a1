#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use route_carbon::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use route_carbon::{
    build_distance_provider, CalculatorConfig, EmissionCalculator, TripAssessor, TripReport,
    TripRequest,
};

#[cfg(feature = "lambda")]
fn load_config() -> route_carbon::Result<CalculatorConfig> {
    // 設定檔路徑由環境變數提供，未設定時使用預設值
    let config = match std::env::var("ROUTE_CARBON_CONFIG") {
        Ok(path) => CalculatorConfig::from_file(path)?,
        Err(_) => CalculatorConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<TripRequest>) -> Result<TripReport, Error> {
    tracing::info!("Starting route-carbon Lambda function");

    let config = load_config().map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let provider = build_distance_provider(&config.distance)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let assessor = TripAssessor::new(provider, EmissionCalculator::from_settings(&config));

    let report = assessor.assess(&event.payload).await.map_err(|e| {
        tracing::error!("❌ {} ({})", e, e.recovery_suggestion());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    tracing::info!("route-carbon Lambda function completed successfully");
    Ok(report)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
