//! Chain Pathfinder - 跨链路径查找
//!
//! 根据区块链网络列表和跨链网关列表构建带权有向图，
//! 按速度、安全或费用等目标计算网络间的最短/最优桥接路径。

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log_adapter;
pub mod table_display;
pub mod utils;

// 重新导出常用类型
pub use crate::config::Config;
pub use crate::core::{
    create_network_graph, find_optimal_cross_chain_path, find_shortest_path, find_shortest_path_with,
    CrossChainPathOptimizer, Edge, EdgeMetadata, Gateway, Network, NetworkGraph, OptimizeCriterion,
    PathOptions, PathResult,
};
pub use crate::error::PathError;
