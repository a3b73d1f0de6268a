use log::info;
use crate::core::network_graph::{create_network_graph, NetworkGraph};
use crate::core::shortest_path::find_shortest_path_with;
use crate::core::types::{Edge, Gateway, Network, OptimizeCriterion, PathOptions, PathResult};

/// 默认评分上限（速度、安全评分为 0-10）
pub const DEFAULT_MAX_SCALE: f64 = 10.0;

/// 跨链路径优化器
///
/// 将具名优化目标映射为边权函数，再交给最短路径引擎。
#[derive(Debug, Clone)]
pub struct CrossChainPathOptimizer {
    max_scale: f64, // 速度/安全评分的上限，用于把"越高越好"转换为权重
}

impl CrossChainPathOptimizer {
    pub fn new(max_scale: f64) -> Self {
        Self { max_scale }
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// 计算一条边在指定优化目标下的权重
    ///
    /// 缺失的评分按 0 处理；超出上限的评分截断为权重 0。
    pub fn edge_weight(&self, criterion: OptimizeCriterion, edge: &Edge) -> f64 {
        let meta = &edge.metadata;
        match criterion {
            OptimizeCriterion::Speed => (self.max_scale - meta.speed.unwrap_or(0.0)).max(0.0),
            OptimizeCriterion::Security => (self.max_scale - meta.security.unwrap_or(0.0)).max(0.0),
            OptimizeCriterion::Cost => meta.fee.unwrap_or(0.0),
            OptimizeCriterion::StoredWeight => edge.weight,
        }
    }

    /// 在已构建的图上按优化目标查找路径
    pub fn find_path_in_graph(
        &self,
        graph: &NetworkGraph,
        source: &str,
        target: &str,
        criterion: OptimizeCriterion,
    ) -> Option<PathResult> {
        find_shortest_path_with(graph, source, target, |edge| self.edge_weight(criterion, edge))
    }

    /// 构建网络图并按选项查找最优跨链路径
    pub fn find_optimal_path(
        &self,
        networks: &[Network],
        gateways: &[Gateway],
        source: &str,
        target: &str,
        options: &PathOptions,
    ) -> Option<PathResult> {
        info!("查找跨链路径 {} -> {}，优化目标: {}", source, target, options.optimize);

        let graph = create_network_graph(networks, gateways);
        let result = self.find_path_in_graph(&graph, source, target, options.optimize);

        match &result {
            Some(found) => info!("找到 {} 跳路径，距离 {}", found.hop_count(), found.distance),
            None => info!("{} 与 {} 之间没有可用路径", source, target),
        }
        result
    }

    /// 同一张图上依次按速度、安全、费用三个目标查找路径
    pub fn compare_criteria(
        &self,
        networks: &[Network],
        gateways: &[Gateway],
        source: &str,
        target: &str,
    ) -> Vec<(OptimizeCriterion, Option<PathResult>)> {
        let graph = create_network_graph(networks, gateways);

        OptimizeCriterion::NAMED
            .iter()
            .map(|&criterion| (criterion, self.find_path_in_graph(&graph, source, target, criterion)))
            .collect()
    }
}

impl Default for CrossChainPathOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCALE)
    }
}

/// 使用默认优化器查找最优跨链路径
pub fn find_optimal_cross_chain_path(
    networks: &[Network],
    gateways: &[Gateway],
    source: &str,
    target: &str,
    options: &PathOptions,
) -> Option<PathResult> {
    CrossChainPathOptimizer::default().find_optimal_path(networks, gateways, source, target, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_networks() -> Vec<Network> {
        vec![
            Network::new("eth", "Ethereum"),
            Network::new("poly", "Polygon"),
            Network::new("avax", "Avalanche"),
            Network::new("bnb", "BNB Chain"),
        ]
    }

    fn sample_gateways() -> Vec<Gateway> {
        vec![
            Gateway::new("poly-bridge", "PolyBridge", &["eth", "poly"], 9.0, 8.0, 1.0),
            Gateway::new("multichain", "MultiChain", &["eth", "avax", "bnb"], 3.0, 9.0, 5.0),
            Gateway::new("bnb-link", "BnbLink", &["poly", "bnb"], 8.0, 6.0, 1.0),
        ]
    }

    fn optimal(from: &str, to: &str, criterion: OptimizeCriterion) -> Option<PathResult> {
        find_optimal_cross_chain_path(
            &sample_networks(),
            &sample_gateways(),
            from,
            to,
            &PathOptions::new(criterion),
        )
    }

    #[test]
    fn test_speed_prefers_fast_gateways() {
        let result = optimal("eth", "bnb", OptimizeCriterion::Speed).unwrap();
        assert_eq!(result.path, vec!["eth", "poly", "bnb"]);
        assert_eq!(result.distance, 3.0);
        assert_eq!(result.gateway_ids(), vec!["poly-bridge", "bnb-link"]);
    }

    #[test]
    fn test_security_prefers_secure_gateways() {
        let result = optimal("eth", "avax", OptimizeCriterion::Security).unwrap();
        assert_eq!(result.path, vec!["eth", "avax"]);
        assert_eq!(result.distance, 1.0);
        assert_eq!(result.gateway_ids(), vec!["multichain"]);
    }

    #[test]
    fn test_cost_prefers_cheap_gateways() {
        let result = optimal("eth", "bnb", OptimizeCriterion::Cost).unwrap();
        assert_eq!(result.path, vec!["eth", "poly", "bnb"]);
        assert_eq!(result.distance, 2.0);
    }

    #[test]
    fn test_stored_weight_fallback_uses_fee() {
        let fallback = optimal("eth", "bnb", OptimizeCriterion::from_name_lenient("teleport")).unwrap();
        let cost = optimal("eth", "bnb", OptimizeCriterion::Cost).unwrap();
        assert_eq!(fallback, cost);
    }

    #[test]
    fn test_case_variant_criterion_falls_back() {
        // "Speed" 不是合法名称，按存储权重（费用）计算，而不是速度
        let result = optimal("eth", "bnb", OptimizeCriterion::from_name_lenient("Speed")).unwrap();
        assert_eq!(result.distance, 2.0);
    }

    #[test]
    fn test_unknown_network_returns_none() {
        assert!(optimal("eth", "solana", OptimizeCriterion::Speed).is_none());
    }

    #[test]
    fn test_edge_weight_transforms() {
        let optimizer = CrossChainPathOptimizer::default();
        let gateway = Gateway::new("g", "G", &["a", "b"], 7.0, 4.0, 2.5);
        let edge = Edge::from_gateway("a", "b", &gateway);

        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Speed, &edge), 3.0);
        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Security, &edge), 6.0);
        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Cost, &edge), 2.5);
        assert_eq!(optimizer.edge_weight(OptimizeCriterion::StoredWeight, &edge), 2.5);
    }

    #[test]
    fn test_scores_above_scale_are_clamped() {
        let optimizer = CrossChainPathOptimizer::new(5.0);
        let gateway = Gateway::new("g", "G", &["a", "b"], 8.0, 12.0, 0.0);
        let edge = Edge::from_gateway("a", "b", &gateway);

        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Speed, &edge), 0.0);
        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Security, &edge), 0.0);
    }

    #[test]
    fn test_missing_metadata_counts_as_zero() {
        let optimizer = CrossChainPathOptimizer::default();
        let edge = Edge::new("a", "b", 4.0);

        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Speed, &edge), 10.0);
        assert_eq!(optimizer.edge_weight(OptimizeCriterion::Cost, &edge), 0.0);
    }

    #[test]
    fn test_compare_criteria_covers_named_targets() {
        let optimizer = CrossChainPathOptimizer::default();
        let results = optimizer.compare_criteria(&sample_networks(), &sample_gateways(), "eth", "avax");

        let criteria: Vec<_> = results.iter().map(|(criterion, _)| *criterion).collect();
        assert_eq!(criteria, OptimizeCriterion::NAMED.to_vec());
        assert!(results.iter().all(|(_, result)| result.is_some()));
    }
}
