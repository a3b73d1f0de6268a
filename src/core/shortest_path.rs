use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use log::debug;
use crate::core::network_graph::NetworkGraph;
use crate::core::types::{Edge, PathResult};

/// 优先队列中的候选项，按距离升序、入队顺序升序出队
#[derive(Debug)]
struct QueueEntry<'a> {
    distance: f64,
    seq: u64,
    node: &'a str,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是大顶堆，反转比较得到最小距离优先
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 按边上存储的权重查找最短路径
pub fn find_shortest_path(graph: &NetworkGraph, source: &str, target: &str) -> Option<PathResult> {
    find_shortest_path_with(graph, source, target, |edge| edge.weight)
}

/// Dijkstra 最短路径，边权由 `weight_fn` 计算
///
/// 权重函数必须返回非负值。起点或终点不在图中、或终点不可达时返回 `None`。
pub fn find_shortest_path_with<F>(
    graph: &NetworkGraph,
    source: &str,
    target: &str,
    weight_fn: F,
) -> Option<PathResult>
where
    F: Fn(&Edge) -> f64,
{
    if !graph.contains_node(source) || !graph.contains_node(target) {
        debug!("起点 {} 或终点 {} 不在网络图中", source, target);
        return None;
    }

    if source == target {
        return Some(PathResult::trivial(source));
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut predecessors: HashMap<&str, &Edge> = HashMap::new();
    let mut finalized: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;

    distances.insert(source, 0.0);
    queue.push(QueueEntry { distance: 0.0, seq, node: source });

    while let Some(QueueEntry { distance, node, .. }) = queue.pop() {
        // 过期条目
        if !finalized.insert(node) {
            continue;
        }
        if node == target {
            break;
        }

        let edges = match graph.get_edges_from(node) {
            Some(edges) => edges,
            None => continue,
        };

        for edge in edges {
            let to = edge.target.as_str();
            if finalized.contains(to) {
                continue;
            }

            let weight = weight_fn(edge);
            debug_assert!(weight >= 0.0, "边 {}->{} 的权重为负或非数值: {}", edge.source, edge.target, weight);

            let candidate = distance + weight;
            let known = distances.get(to).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(to, candidate);
                predecessors.insert(to, edge);
                seq += 1;
                queue.push(QueueEntry { distance: candidate, seq, node: to });
            }
        }
    }

    if !finalized.contains(target) {
        debug!("{} 到 {} 不可达", source, target);
        return None;
    }

    let distance = distances.get(target).copied()?;
    let mut edges: Vec<Edge> = Vec::new();
    let mut current = target;
    while current != source {
        let edge: &Edge = *predecessors.get(current)?;
        edges.push(edge.clone());
        current = edge.source.as_str();
    }
    edges.reverse();

    let mut path = Vec::with_capacity(edges.len() + 1);
    path.push(source.to_string());
    path.extend(edges.iter().map(|edge| edge.target.clone()));

    debug!("找到路径 {:?}，距离 {}", path, distance);
    Some(PathResult { path, distance, edges })
}
