use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vaccine-ocr")]
#[command(about = "ワクチンラベルOCR比較ツール（Tesseract vs EasyOCR）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベル画像をOCRサーバーに送り、比較結果を表示
    Process {
        /// 画像ファイル（JPG/PNG、5MBまで）
        #[arg(required = true)]
        image: PathBuf,

        /// OCRサーバーのベースURL（設定・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// HTMLレポートの出力先
        #[arg(long)]
        html: Option<PathBuf>,

        /// サーバー応答JSONの保存先
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// OCRサーバーの稼働確認
    Health {
        /// OCRサーバーのベースURL
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定管理
    Config {
        /// 既定の接続先を設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::parse_from([
            "vaccine-ocr",
            "process",
            "label.jpg",
            "--endpoint",
            "http://ocr.local",
            "--html",
            "report.html",
        ]);

        match cli.command {
            Commands::Process { image, endpoint, html, json } => {
                assert_eq!(image, PathBuf::from("label.jpg"));
                assert_eq!(endpoint.as_deref(), Some("http://ocr.local"));
                assert_eq!(html, Some(PathBuf::from("report.html")));
                assert!(json.is_none());
            }
            _ => panic!("Processを期待"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["vaccine-ocr", "health", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Health { endpoint: None }));
    }
}
