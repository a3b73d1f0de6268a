use thiserror::Error;

/// 路径查询相关错误
///
/// 找不到路径不属于错误，查询函数以 `None` 表示。
#[derive(Debug, Error)]
pub enum PathError {
    #[error("未知的优化目标 `{0}`（可选: speed, security, cost, weight）")]
    UnknownCriterion(String),

    #[error("网络 `{0}` 不在配置的网络列表中")]
    UnknownNetwork(String),

    #[error("配置加载失败: {0}")]
    Config(#[from] ::config::ConfigError),
}
