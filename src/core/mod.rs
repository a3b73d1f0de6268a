pub mod network_graph;
pub mod optimizer;
pub mod shortest_path;
pub mod types;

// 重新导出核心类型，方便外部使用
pub use network_graph::{create_network_graph, NetworkGraph};
pub use optimizer::{find_optimal_cross_chain_path, CrossChainPathOptimizer, DEFAULT_MAX_SCALE};
pub use shortest_path::{find_shortest_path, find_shortest_path_with};
pub use types::*;
