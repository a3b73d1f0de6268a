use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::optimizer::{CrossChainPathOptimizer, DEFAULT_MAX_SCALE};
use crate::core::types::{Gateway, Network, OptimizeCriterion};
use crate::error::PathError;

/// 环境变量前缀，例如 PATHFINDER__OPTIMIZER__MAX_SCALE=100
pub const ENV_PREFIX: &str = "PATHFINDER";

/// 文件中缺省的列表为空，内置列表只在未指定文件时使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub gateways: Vec<GatewayConfig>,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub gateway: Gateway,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub max_scale: f64,                      // 速度/安全评分上限
    pub default_criterion: OptimizeCriterion, // 命令行未指定时使用
}

fn default_enabled() -> bool {
    true
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            default_criterion: OptimizeCriterion::Speed,
        }
    }
}

impl Default for Config {
    /// 内置的网络与网关列表
    fn default() -> Self {
        let networks = vec![
            Network::new("eth", "Ethereum"),
            Network::new("poly", "Polygon"),
            Network::new("avax", "Avalanche"),
            Network::new("bnb", "BNB Chain"),
        ];

        let gateways = vec![
            // 快速低费的 L2 桥
            Gateway::new("poly-bridge", "PolyBridge", &["eth", "poly"], 9.0, 8.0, 1.0),
            // 覆盖面广、安全性高，但慢且贵
            Gateway::new("multichain", "MultiChain", &["eth", "avax", "bnb"], 3.0, 9.0, 5.0),
            Gateway::new("bnb-link", "BnbLink", &["poly", "bnb"], 8.0, 6.0, 1.0),
        ]
        .into_iter()
        .map(|gateway| GatewayConfig { gateway, enabled: true })
        .collect();

        Self {
            networks,
            gateways,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// 未指定文件时使用内置列表；指定文件时按扩展名解析，并叠加
    /// `PATHFINDER__` 前缀的环境变量。
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                info!("从 {} 加载配置", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        info!(
            "配置加载完成，网络数量: {}, 网关数量: {}",
            config.networks.len(),
            config.gateways.len()
        );
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, PathError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(path))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn get_enabled_gateways(&self) -> Vec<Gateway> {
        self.gateways
            .iter()
            .filter(|config| config.enabled)
            .map(|config| config.gateway.clone())
            .collect()
    }

    fn find_network(&self, id: &str) -> Option<&Network> {
        self.networks.iter().find(|network| network.id == id)
    }

    /// 严格模式下校验网络ID
    pub fn require_network(&self, id: &str) -> Result<&Network, PathError> {
        self.find_network(id)
            .ok_or_else(|| PathError::UnknownNetwork(id.to_string()))
    }

    pub fn has_network(&self, id: &str) -> bool {
        self.find_network(id).is_some()
    }

    pub fn build_optimizer(&self) -> CrossChainPathOptimizer {
        CrossChainPathOptimizer::new(self.optimizer.max_scale)
    }
}
