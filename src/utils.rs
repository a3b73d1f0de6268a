use crate::core::types::{Edge, PathResult};

/// 将路径格式化为 "eth -> poly -> bnb"
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// 格式化距离，整数不带小数
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{:.0}", distance)
    } else {
        format!("{:.4}", distance)
    }
}

/// 格式化可选的评分
pub fn format_score(score: Option<f64>) -> String {
    score.map(format_distance).unwrap_or_else(|| "-".to_string())
}

/// 边对应的网关名称，缺失时回退到网关ID
pub fn gateway_label(edge: &Edge) -> String {
    edge.metadata
        .gateway_name
        .clone()
        .or_else(|| edge.metadata.gateway_id.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// 一行摘要，例如 "eth -> poly -> bnb (2 跳, 距离 3)"
pub fn summarize(result: &PathResult) -> String {
    format!(
        "{} ({} 跳, 距离 {})",
        format_path(&result.path),
        result.hop_count(),
        format_distance(result.distance)
    )
}
