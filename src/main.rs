use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use snap_recipe::{cli, config, editor, error, gemini, photo, render};
use cli::{Cli, Commands, SourceArgs};
use config::Config;
use error::Result;
use snap_recipe_common::{RecipeSession, EMPTY_PLACEHOLDER};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "snap_recipe=debug,snap_recipe_common=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 成功したかどうかを返す（生成失敗は通知表示済み）
async fn run(cli: Cli) -> Result<bool> {
    let config = Config::load()?;

    match cli.command {
        Commands::Generate { source, edit, json } => {
            println!("🍳 SnapRecipe - Turn your food photos into delicious recipes!\n");

            let flows = gemini::GeminiFlows::from_config(&config)?;
            let mut session = RecipeSession::new();
            select_source(&mut session, &source)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Generating...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = session.generate(&flows).await;
            spinner.finish_and_clear();

            for toast in session.drain_toasts() {
                println!("{}", render::render_toast(&toast));
            }
            if outcome.is_err() {
                return Ok(false);
            }

            if edit {
                if let Some(card) = session.card() {
                    println!("\n{}\n", render::render_card(card, session.source()));
                }
                editor::run_interactive_edit(&mut session)?;
            }

            match session.card() {
                Some(card) if json => println!("{}", serde_json::to_string_pretty(card)?),
                Some(card) if !edit => println!("\n{}", render::render_card(card, session.source())),
                Some(_) => {}
                None => println!("{}", EMPTY_PLACEHOLDER),
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;
            let changed = set_api_key.is_some() || set_model.is_some();

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                println!("✔ APIキーを設定しました");
            }
            if let Some(model) = set_model {
                println!("✔ モデルを設定しました: {}", model);
                config.model = model;
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.base_url);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(true)
}

fn select_source(session: &mut RecipeSession, source: &SourceArgs) -> Result<()> {
    if let Some(path) = &source.file {
        let photo = photo::load_local_photo(path)?;
        tracing::debug!(file = %photo.file_name, "写真を選択");
        session.select_file(photo.file_name, Some(photo.preview));
    } else if let Some(url) = &source.url {
        session.set_url(url.clone());
    }
    Ok(())
}
