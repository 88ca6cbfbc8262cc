use breed_browser::utils::error::{BrowseError, ErrorSeverity};
use breed_browser::utils::{logger, validation::Validate};
use breed_browser::{
    BreedApiClient, BrowseCommand, BrowseEngine, CliConfig, ConfigProvider, ConsolePresenter,
    TomlConfig,
};
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting breed-browser CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    if config.monitor {
        tracing::info!("🔍 Fetch monitoring enabled");
    }

    let command = config.command.clone().unwrap_or(BrowseCommand::Browse);

    // 配置來源：TOML 檔案優先，否則使用命令列參數
    let result = match &config.config {
        Some(path) => {
            let file_config = match TomlConfig::from_file(path).and_then(|c| {
                c.validate()?;
                Ok(c)
            }) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("❌ Could not load config file {}: {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 建議: {}", e.recovery_suggestion());
                    std::process::exit(3);
                }
            };
            run(&file_config, command).await
        }
        None => run(&config, command).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Done");
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Fetch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run<C: ConfigProvider>(provider: &C, command: BrowseCommand) -> breed_browser::Result<()> {
    let client = BreedApiClient::new(provider)?;
    let interactive = matches!(command, BrowseCommand::Browse);
    let presenter = ConsolePresenter::new(interactive);
    let engine = BrowseEngine::new_with_monitoring(client, presenter, provider.monitoring_enabled());

    match command {
        BrowseCommand::List => {
            engine.run_list().await?;
        }
        BrowseCommand::Image { breed } => {
            engine.run_image(&breed).await?;
        }
        BrowseCommand::Browse => {
            let breeds = engine.run_list().await?;
            if breeds.is_empty() {
                engine.finish();
                return Ok(());
            }
            let selection = prompt_selection(breeds.len())?;
            engine.run_image(&breeds[selection - 1]).await?;
        }
    }

    engine.finish();
    Ok(())
}

/// Reads a 1-based breed selection from stdin, re-prompting until the input
/// parses and is in range. EOF before a valid selection is an IO error.
fn prompt_selection(count: usize) -> breed_browser::Result<usize> {
    loop {
        print!("Select a breed (1-{}): ", count);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err(BrowseError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed before a breed was selected",
            )));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n),
            _ => eprintln!("Please enter a number between 1 and {}", count),
        }
    }
}
