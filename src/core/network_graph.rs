use std::collections::HashMap;
use log::{debug, info};
use crate::core::types::{Edge, Gateway, Network};

/// 网络图：节点为区块链网络，边为网关提供的桥接
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    /// 网络ID -> 网络
    pub nodes: HashMap<String, Network>,
    /// 邻接表：网络ID -> 出边（按网关处理顺序）
    pub adjacency: HashMap<String, Vec<Edge>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// 添加节点，ID重复时后者覆盖前者
    pub fn add_node(&mut self, network: Network) {
        self.nodes.insert(network.id.clone(), network);
    }

    /// 添加有向边，存放在 source 对应的邻接表下
    pub fn add_edge(&mut self, edge: Edge) {
        self.adjacency
            .entry(edge.source.clone())
            .or_insert_with(Vec::new)
            .push(edge);
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// 获取指定网络的所有出边
    pub fn get_edges_from(&self, id: &str) -> Option<&Vec<Edge>> {
        self.adjacency.get(id)
    }

    /// 检查两个网络之间是否存在直接连接
    pub fn has_direct_path(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .map(|edges| edges.iter().any(|edge| edge.target == to))
            .unwrap_or(false)
    }

    /// 获取图的统计信息 (节点数, 边数)
    pub fn get_stats(&self) -> (usize, usize) {
        let node_count = self.nodes.len();
        let edge_count = self.adjacency.values().map(|edges| edges.len()).sum();
        (node_count, edge_count)
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// 从网络列表和网关列表构建网络图
///
/// 每个网关对其支持的网络两两连接，双向各生成一条边。
/// 引用了未知网络的组合会被静默跳过。
pub fn create_network_graph(networks: &[Network], gateways: &[Gateway]) -> NetworkGraph {
    let mut graph = NetworkGraph::new();

    for network in networks {
        graph.add_node(network.clone());
    }

    for gateway in gateways {
        let supported = &gateway.supported_networks;
        let mut gateway_edges = 0;

        for (i, a) in supported.iter().enumerate() {
            for b in &supported[i + 1..] {
                if a == b {
                    continue;
                }
                if !graph.contains_node(a) || !graph.contains_node(b) {
                    debug!("网关 {} 的组合 {}<->{} 引用了未知网络，跳过", gateway.id, a, b);
                    continue;
                }

                graph.add_edge(Edge::from_gateway(a, b, gateway));
                graph.add_edge(Edge::from_gateway(b, a, gateway));
                gateway_edges += 2;
            }
        }

        debug!("处理网关: {}, 生成边数量: {}", gateway.id, gateway_edges);
    }

    let (node_count, edge_count) = graph.get_stats();
    info!("网络图构建完成，网络数量: {}, 边数量: {}", node_count, edge_count);

    graph
}
