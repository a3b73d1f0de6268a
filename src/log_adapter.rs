use log::LevelFilter;

/// 日志输出模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogMode {
    /// 终端模式：表格输出，日志正常显示
    Terminal,
    /// JSON模式：标准输出只保留结果文档，日志仅保留告警
    Json,
}

/// 日志适配器，根据输出模式决定默认日志级别
pub struct LogAdapter;

impl LogAdapter {
    /// 初始化日志系统，RUST_LOG 优先于默认级别
    pub fn init(mode: LogMode, verbose: bool) {
        let level = Self::default_level(mode, verbose);
        // 重复初始化（例如测试中）直接忽略
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init();
    }

    pub fn default_level(mode: LogMode, verbose: bool) -> LevelFilter {
        match (mode, verbose) {
            (_, true) => LevelFilter::Debug,
            (LogMode::Terminal, false) => LevelFilter::Info,
            (LogMode::Json, false) => LevelFilter::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(LogAdapter::default_level(LogMode::Terminal, false), LevelFilter::Info);
        assert_eq!(LogAdapter::default_level(LogMode::Json, false), LevelFilter::Warn);
        assert_eq!(LogAdapter::default_level(LogMode::Json, true), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        LogAdapter::init(LogMode::Terminal, false);
        LogAdapter::init(LogMode::Json, true);
    }
}
