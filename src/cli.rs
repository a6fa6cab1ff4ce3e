use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snap-recipe")]
#[command(about = "料理写真からレシピを生成・編集するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真からレシピを生成
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// 生成後に対話式で編集
        #[arg(short, long)]
        edit: bool,

        /// カードをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 写真ソース（ファイルとURLは排他）
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// ローカルの写真ファイル
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// 写真のURL
    #[arg(short, long)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_with_url() {
        let cli = Cli::try_parse_from(["snap-recipe", "generate", "--url", "https://example.com/p.jpg"])
            .unwrap();
        match cli.command {
            Commands::Generate { source, edit, json } => {
                assert_eq!(source.url.as_deref(), Some("https://example.com/p.jpg"));
                assert!(source.file.is_none());
                assert!(!edit);
                assert!(!json);
            }
            _ => panic!("Expected Generate"),
        }
    }

    #[test]
    fn test_file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "snap-recipe", "generate", "--file", "p.jpg", "--url", "https://example.com/p.jpg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_required() {
        assert!(Cli::try_parse_from(["snap-recipe", "generate"]).is_err());
    }
}
