use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::core::optimizer::CrossChainPathOptimizer;
use crate::core::types::{Gateway, Network, OptimizeCriterion, PathResult};
use crate::utils::{format_distance, format_path, format_score, gateway_label};

/// 路径中的一跳
#[derive(Debug, Clone, Tabled)]
pub struct HopRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "从")]
    pub from: String,
    #[tabled(rename = "到")]
    pub to: String,
    #[tabled(rename = "网关")]
    pub gateway: String,
    #[tabled(rename = "速度")]
    pub speed: String,
    #[tabled(rename = "安全")]
    pub security: String,
    #[tabled(rename = "费用")]
    pub fee: String,
    #[tabled(rename = "权重")]
    pub weight: String,
}

/// 多目标对比的一行
#[derive(Debug, Clone, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "优化目标")]
    pub criterion: String,
    #[tabled(rename = "路径")]
    pub path: String,
    #[tabled(rename = "跳数")]
    pub hops: String,
    #[tabled(rename = "距离")]
    pub distance: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct NetworkRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "名称")]
    pub name: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct GatewayRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "名称")]
    pub name: String,
    #[tabled(rename = "支持网络")]
    pub networks: String,
    #[tabled(rename = "速度")]
    pub speed: String,
    #[tabled(rename = "安全")]
    pub security: String,
    #[tabled(rename = "费用")]
    pub fee: String,
}

/// 按优化目标计算每跳权重并生成表格行
pub fn hop_rows(
    result: &PathResult,
    optimizer: &CrossChainPathOptimizer,
    criterion: OptimizeCriterion,
) -> Vec<HopRow> {
    result
        .edges
        .iter()
        .enumerate()
        .map(|(i, edge)| HopRow {
            index: i + 1,
            from: edge.source.clone(),
            to: edge.target.clone(),
            gateway: gateway_label(edge),
            speed: format_score(edge.metadata.speed),
            security: format_score(edge.metadata.security),
            fee: format_score(edge.metadata.fee),
            weight: format_distance(optimizer.edge_weight(criterion, edge)),
        })
        .collect()
}

pub fn render_path(
    result: &PathResult,
    optimizer: &CrossChainPathOptimizer,
    criterion: OptimizeCriterion,
) -> String {
    if result.edges.is_empty() {
        return format!("起点与终点相同: {}", format_path(&result.path));
    }
    Table::new(hop_rows(result, optimizer, criterion))
        .with(Style::rounded())
        .to_string()
}

pub fn render_comparison(results: &[(OptimizeCriterion, Option<PathResult>)]) -> String {
    let rows: Vec<ComparisonRow> = results
        .iter()
        .map(|(criterion, result)| match result {
            Some(found) => ComparisonRow {
                criterion: criterion.to_string(),
                path: format_path(&found.path),
                hops: found.hop_count().to_string(),
                distance: format_distance(found.distance),
            },
            None => ComparisonRow {
                criterion: criterion.to_string(),
                path: "无可用路径".to_string(),
                hops: "-".to_string(),
                distance: "-".to_string(),
            },
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_networks(networks: &[Network]) -> String {
    let rows: Vec<NetworkRow> = networks
        .iter()
        .map(|network| NetworkRow {
            id: network.id.clone(),
            name: network.name.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_gateways(gateways: &[Gateway]) -> String {
    let rows: Vec<GatewayRow> = gateways
        .iter()
        .map(|gateway| GatewayRow {
            id: gateway.id.clone(),
            name: gateway.name.clone(),
            networks: gateway.supported_networks.join(", "),
            speed: format_distance(gateway.speed),
            security: format_distance(gateway.security),
            fee: format_distance(gateway.fee),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
