//! sg-cli: パスの拡張メタデータ（存在/所有者/種別名/バージョン/実行形式）を
//! 解決して表示する診断用 CLI。

use clap::{Parser, Subcommand};
use serde::Serialize;
use sg_domain::model::FileMetadataSnapshot;
use sg_domain::service::classify_signature;
use std::error::Error;

type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug)]
struct SimpleError(String);

impl std::fmt::Display for SimpleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for SimpleError {}

fn err(msg: impl Into<String>) -> Box<dyn Error + Send + Sync> {
    Box::new(SimpleError(msg.into()))
}

#[derive(Parser, Debug)]
#[command(name = "sg-cli", about = "Spyglass file metadata CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// パスのメタデータを解決して表示
    Inspect {
        /// 対象パス（ファイルまたはディレクトリ）
        path: String,
        /// JSON形式で出力
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// 生のシグネチャワードを実行形式カテゴリに分類（診断用）
    Classify {
        /// 32bitシグネチャ（例: 0x00004550 または 10進数）
        signature: String,
        /// JSON形式で出力
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        sg_log_utils::log_event("sg-cli", &format!("failed: {}", err));
        eprintln!("sg-cli failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Inspect { path, json } => {
            let session =
                sg_app::open(path).map_err(|e| err(format!("Failed to resolve metadata: {e}")))?;
            let snapshot = session.snapshot();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonSnapshot::from(snapshot))?
                );
            } else {
                print_snapshot(snapshot);
            }
        }

        Command::Classify { signature, json } => {
            let word = parse_signature_word(&signature)?;
            let category = classify_signature(word);
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "signature": format!("0x{:08X}", word),
                        "category": category.as_str(),
                    })
                );
            } else {
                println!("0x{:08X} -> {}", word, category);
            }
        }
    }
    Ok(())
}

/// "0x"付き16進または10進のシグネチャ文字列をパース
fn parse_signature_word(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u32>()
    };
    parsed.map_err(|_| err(format!("Invalid signature word: {value}")))
}

fn print_snapshot(snapshot: &FileMetadataSnapshot) {
    println!("Metadata for {}:", snapshot.path());
    println!("  Exists:       {}", snapshot.exists());
    if !snapshot.exists() {
        return;
    }
    println!(
        "  Owner:        {}",
        snapshot.owner().unwrap_or("(unknown)")
    );
    println!("  Type name:    {}", snapshot.type_name());
    println!("  Executable:   {}", snapshot.executable_category());

    let version = snapshot.version();
    if version.is_empty() {
        println!("  Version:      (no version resource)");
        return;
    }
    println!("  Version:");
    let field = |label: &str, value: &str| {
        if !value.is_empty() {
            println!("    {:<14}{}", label, value);
        }
    };
    field("Company:", &version.company_name);
    field("Product:", &version.product_name);
    field("Description:", &version.file_description);
    field("Original:", &version.original_filename);
    field("Internal:", &version.internal_name);
    field("Copyright:", &version.legal_copyright);
    field("Comments:", &version.comments);
    if !version.file_version.is_zero() {
        println!("    File ver:     {}", version.file_version);
    }
    if !version.product_version.is_zero() {
        println!("    Product ver:  {}", version.product_version);
    }
    let mut flags: Vec<&str> = Vec::new();
    if version.is_debug {
        flags.push("debug");
    }
    if version.is_prerelease {
        flags.push("prerelease");
    }
    if version.is_patched {
        flags.push("patched");
    }
    if version.is_private_build {
        flags.push("private-build");
    }
    if version.is_special_build {
        flags.push("special-build");
    }
    if !flags.is_empty() {
        println!("    Flags:        {}", flags.join(", "));
    }
}

// JSON出力用構造体（CLIプレゼンテーション層専用）

#[derive(Serialize)]
struct JsonSnapshot {
    path: String,
    exists: bool,
    owner: Option<String>,
    executable_category: String,
    type_name: String,
    version: JsonVersionInfo,
}

#[derive(Serialize)]
struct JsonVersionInfo {
    company_name: String,
    product_name: String,
    file_description: String,
    original_filename: String,
    internal_name: String,
    legal_copyright: String,
    comments: String,
    file_version: String,
    product_version: String,
    file_version_text: String,
    product_version_text: String,
    is_debug: bool,
    is_prerelease: bool,
    is_patched: bool,
    is_private_build: bool,
    is_special_build: bool,
}

impl From<&FileMetadataSnapshot> for JsonSnapshot {
    fn from(snapshot: &FileMetadataSnapshot) -> Self {
        let version = snapshot.version();
        Self {
            path: snapshot.path().to_string(),
            exists: snapshot.exists(),
            owner: snapshot.owner().map(str::to_string),
            executable_category: snapshot.executable_category().as_str().to_string(),
            type_name: snapshot.type_name().to_string(),
            version: JsonVersionInfo {
                company_name: version.company_name.clone(),
                product_name: version.product_name.clone(),
                file_description: version.file_description.clone(),
                original_filename: version.original_filename.clone(),
                internal_name: version.internal_name.clone(),
                legal_copyright: version.legal_copyright.clone(),
                comments: version.comments.clone(),
                file_version: version.file_version.to_string(),
                product_version: version.product_version.to_string(),
                file_version_text: version.file_version_text.clone(),
                product_version_text: version.product_version_text.clone(),
                is_debug: version.is_debug,
                is_prerelease: version.is_prerelease,
                is_patched: version.is_patched,
                is_private_build: version.is_private_build,
                is_special_build: version.is_special_build,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_signature() {
        assert_eq!(parse_signature_word("0x00004550").unwrap(), 0x4550);
        assert_eq!(parse_signature_word("0X5A4D").unwrap(), 0x5A4D);
    }

    #[test]
    fn test_parse_decimal_signature() {
        assert_eq!(parse_signature_word("0").unwrap(), 0);
        assert_eq!(parse_signature_word("17744").unwrap(), 0x4550);
    }

    #[test]
    fn test_parse_invalid_signature() {
        assert!(parse_signature_word("PE").is_err());
        assert!(parse_signature_word("0xGG").is_err());
    }
}
