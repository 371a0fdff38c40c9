use clap::Parser;
use whoart::core::layout;
use whoart::domain::model::Identity;
use whoart::domain::ports::IdentityProvider;
use whoart::utils::{logger, validation::Validate};
use whoart::{
    CliConfig, GitHubPipeline, GitIdentityProvider, Settings, StaticIdentityProvider, WhoArtEngine,
};

/// `--user` 優先於 Git 設定
enum Provider {
    Git(GitIdentityProvider),
    Static(StaticIdentityProvider),
}

impl IdentityProvider for Provider {
    fn identity(&self) -> Option<Identity> {
        match self {
            Provider::Git(git) => git.identity(),
            Provider::Static(fixed) => fixed.identity(),
        }
    }
}

fn identity_provider(settings: &Settings) -> Provider {
    match &settings.user {
        Some(user) => {
            Provider::Static(StaticIdentityProvider::new(Identity::username(user.as_str())))
        }
        None => Provider::Git(GitIdentityProvider::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    for line in layout::header(settings.color) {
        println!("{}", line);
    }
    println!();

    let provider = identity_provider(&settings);
    let pipeline = GitHubPipeline::new(provider, settings)?;
    let engine = WhoArtEngine::from_config(pipeline);

    let mut stdout = std::io::stdout();
    let outcome = engine.run(&mut stdout).await?;

    // 預設即使有階段失敗也以 0 結束；--strict 才改變
    let exit_code = outcome.exit_code(engine.strict_exit());
    if exit_code > 0 {
        tracing::debug!("Exiting with code {} (strict mode)", exit_code);
        std::process::exit(exit_code);
    }

    Ok(())
}
