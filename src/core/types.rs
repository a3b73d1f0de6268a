use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// 网络节点（一条区块链）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// 跨链网关（桥），可连接两个或多个网络
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub id: String,
    pub name: String,
    #[serde(alias = "supported_networks")]
    pub supported_networks: Vec<String>,
    pub speed: f64,    // 速度评分，越高越快
    pub security: f64, // 安全评分，越高越安全
    pub fee: f64,      // 手续费，越低越便宜
}

/// 边上的网关标注
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeMetadata {
    pub gateway_id: Option<String>,
    pub gateway_name: Option<String>,
    pub speed: Option<f64>,
    pub security: Option<f64>,
    pub fee: Option<f64>,
    /// 额外的自定义字段
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}

/// 有向带权边，表示某个网关从 source 桥接到 target 的能力
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64, // 构建时的占位权重（网关手续费）
    #[serde(default)]
    pub metadata: EdgeMetadata,
}

/// 一次路径查询的结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathResult {
    pub path: Vec<String>, // 从起点到终点（含两端）的网络ID
    pub distance: f64,     // 当前权重函数下的累计距离
    pub edges: Vec<Edge>,  // 依次经过的边
}

/// 路径优化目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptimizeCriterion {
    Speed,
    Security,
    Cost,
    /// 直接使用边上存储的权重，未知目标时的回退选项
    StoredWeight,
}

/// 路径查询选项
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathOptions {
    pub optimize: OptimizeCriterion,
}

impl Network {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: HashMap::new(),
        }
    }
}

impl Gateway {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        supported_networks: &[&str],
        speed: f64,
        security: f64,
        fee: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supported_networks: supported_networks.iter().map(|s| s.to_string()).collect(),
            speed,
            security,
            fee,
        }
    }
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            metadata: EdgeMetadata::default(),
        }
    }

    /// 由网关生成一条边，权重占位为网关手续费
    pub fn from_gateway(source: &str, target: &str, gateway: &Gateway) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight: gateway.fee,
            metadata: EdgeMetadata {
                gateway_id: Some(gateway.id.clone()),
                gateway_name: Some(gateway.name.clone()),
                speed: Some(gateway.speed),
                security: Some(gateway.security),
                fee: Some(gateway.fee),
                extra: HashMap::new(),
            },
        }
    }

    pub fn with_metadata(mut self, metadata: EdgeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn gateway_id(&self) -> Option<&str> {
        self.metadata.gateway_id.as_deref()
    }
}

impl PathResult {
    /// 起点与终点相同时的平凡结果
    pub fn trivial(node_id: &str) -> Self {
        Self {
            path: vec![node_id.to_string()],
            distance: 0.0,
            edges: Vec::new(),
        }
    }

    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// 路径上用到的网关ID（按顺序，可能重复）
    pub fn gateway_ids(&self) -> Vec<&str> {
        self.edges.iter().filter_map(|edge| edge.gateway_id()).collect()
    }
}

impl OptimizeCriterion {
    /// 参与比较的三个具名优化目标
    pub const NAMED: [OptimizeCriterion; 3] = [Self::Speed, Self::Security, Self::Cost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Security => "security",
            Self::Cost => "cost",
            Self::StoredWeight => "weight",
        }
    }

    /// 宽松解析：未知名称回退到存储权重，而不是报错
    pub fn from_name_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(criterion) => criterion,
            Err(_) => {
                log::warn!("未知的优化目标 '{}'，回退为存储权重", name);
                Self::StoredWeight
            }
        }
    }
}

impl FromStr for OptimizeCriterion {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 只接受小写的精确名称，其他写法一律视为未知
        match s {
            "speed" => Ok(Self::Speed),
            "security" => Ok(Self::Security),
            "cost" => Ok(Self::Cost),
            "weight" => Ok(Self::StoredWeight),
            _ => Err(PathError::UnknownCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for OptimizeCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for OptimizeCriterion {
    fn from(name: String) -> Self {
        Self::from_name_lenient(&name)
    }
}

impl From<OptimizeCriterion> for String {
    fn from(criterion: OptimizeCriterion) -> Self {
        criterion.as_str().to_string()
    }
}

impl Default for OptimizeCriterion {
    fn default() -> Self {
        Self::StoredWeight
    }
}

impl PathOptions {
    pub fn new(optimize: OptimizeCriterion) -> Self {
        Self { optimize }
    }
}
