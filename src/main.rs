use anyhow::Result;
use log::{error, info};

use chain_pathfinder::cli::CliApp;
use chain_pathfinder::log_adapter::{LogAdapter, LogMode};

fn main() -> Result<()> {
    // 加载 .env 文件
    dotenv::dotenv().ok();

    let matches = CliApp::build_cli().get_matches();

    // 初始化日志系统
    let mode = if CliApp::is_json(&matches) {
        LogMode::Json
    } else {
        LogMode::Terminal
    };
    LogAdapter::init(mode, CliApp::is_verbose(&matches));

    info!("启动跨链路径查找...");

    let outcome = CliApp::from_matches(&matches).and_then(|app| app.run(&matches));
    match outcome {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("执行失败: {}", e);
            Err(e)
        }
    }
}
