use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vaccine_ocr_common::{Completion, ResultView};
use vaccine_ocr_rust::{cli, client, config, error, input, report};
use cli::{Cli, Commands};
use client::OcrClient;
use config::Config;
use error::VaccineOcrError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Process { image, endpoint, html, json } => {
            let config = load_config()?;
            println!("💉 vaccine-ocr - ラベルOCR比較\n");

            // 1. 画像チェック
            println!("[1/3] 画像を確認中...");
            let loaded = input::load_image(&image)?;
            let mut session = input::prepare_session(&loaded)?;
            println!(
                "✔ {} ({}x{}, {} bytes, {})\n",
                loaded.file_name, loaded.width, loaded.height, loaded.size(), loaded.mime_type
            );

            // 2. OCR
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = OcrClient::new(&endpoint, config.timeout_seconds)?;
            println!("[2/3] OCR処理中... ({})", client.process_url());

            let ticket = session.begin_submit().map_err(VaccineOcrError::from)?;
            let spinner = report::spinner("Tesseract / EasyOCR で処理中");
            let outcome = client.process(&loaded).await;
            spinner.finish_and_clear();

            let (outcome, body) = match outcome {
                Ok(processed) => (Ok(ResultView::from_response(&processed.response)), Some(processed.body)),
                Err(error) => (Err(error), None),
            };
            match session.finish_submit(ticket, outcome) {
                Completion::Rendered => {}
                Completion::Failed(error) => return Err(VaccineOcrError::from(error).into()),
                Completion::Stale => return Err(anyhow!("応答が破棄されました")),
            }
            let view = session.result().context("結果がありません")?;
            println!("✔ 処理完了\n");
            print!("{}", report::terminal::render(view));

            // 3. 保存
            if json.is_some() || html.is_some() {
                println!("\n[3/3] 結果を保存中...");
            }
            if let (Some(path), Some(body)) = (json, body.as_deref()) {
                report::write_json(&path, body)?;
                println!("✔ JSONを保存: {}", path.display());
            }
            if let Some(path) = html {
                report::write_html(&path, view, Some(loaded.data_url().as_str()))?;
                println!("✔ HTMLレポートを保存: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Health { endpoint } => {
            let config = load_config()?;
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = OcrClient::new(&endpoint, config.timeout_seconds)?;
            let status = client.health().await.map_err(VaccineOcrError::from)?;

            if status.is_healthy() {
                println!("✅ サーバー稼働中: {}", endpoint);
            } else {
                println!("⚠️  サーバー状態: {} ({})", status.status, endpoint);
            }
            println!("  時刻: {}", status.timestamp);
            println!("  最大ファイルサイズ: {:.1} MB", status.max_file_size as f64 / 1024.0 / 1024.0);
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = Config::load_or_default()?;
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 接続先を設定しました: {}", config.endpoint);
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました: {}秒", seconds);
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
                if let Ok(value) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  {}: {}", config::ENDPOINT_ENV, value);
                }
            }
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    Config::load().context("設定の読み込みに失敗しました（`vaccine-ocr config --set-endpoint URL` で作り直せます）")
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
