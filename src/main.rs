use clap::Parser;
use std::process;
use tracing::debug;

use manybaht::cli::{self, Cli};
use manybaht::config::{AppConfig, EncodingConfig};
use manybaht::services::LinkConverter;
use manybaht::system::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = AppConfig::load(cli.config.as_deref());
    let _log_guard = init_logging(&app_config.logging);

    // 编码参数在启动时构建并校验，失败立即退出
    let encoding = match EncodingConfig::from_section(&app_config.encoding) {
        Ok(encoding) => encoding,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    };
    debug!(
        "encoding parameters loaded, chunk size {} bytes",
        encoding.chunk_size()
    );

    let converter = LinkConverter::new(encoding.clone());
    let command = cli.into_command();
    let output = cli::run(&command, &converter, &encoding)?;
    println!("{}", output);

    Ok(())
}
