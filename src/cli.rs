use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use serde_json::json;

use crate::config::Config;
use crate::core::optimizer::CrossChainPathOptimizer;
use crate::core::types::{OptimizeCriterion, PathOptions, PathResult};
use crate::table_display;
use crate::utils::summarize;

// 命令行参数常量
const FROM_ARG: &str = "from";
const TO_ARG: &str = "to";
const OPTIMIZE_ARG: &str = "optimize";
const COMPARE_ARG: &str = "compare";
const STRICT_ARG: &str = "strict";
const CONFIG_ARG: &str = "config";
const JSON_ARG: &str = "json";
const LIST_ARG: &str = "list";
const VERBOSE_ARG: &str = "verbose";

/// CLI应用程序结构
pub struct CliApp {
    config: Config,
    optimizer: CrossChainPathOptimizer,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        let optimizer = config.build_optimizer();
        Self { config, optimizer }
    }

    /// 从命令行参数指定的配置文件创建实例
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let path = matches.get_one::<String>(CONFIG_ARG).map(String::as_str);
        let config = Config::load(path)?;
        Ok(Self::new(config))
    }

    pub fn is_json(matches: &ArgMatches) -> bool {
        matches.get_flag(JSON_ARG)
    }

    pub fn is_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag(VERBOSE_ARG)
    }

    /// 构建命令行参数解析器
    pub fn build_cli() -> Command {
        Command::new("chain-pathfinder")
            .version("1.0")
            .about("跨链路径查找工具")
            .arg(
                Arg::new(FROM_ARG)
                    .long(FROM_ARG)
                    .help("起始网络ID")
                    .value_name("NETWORK")
                    .required_unless_present(LIST_ARG),
            )
            .arg(
                Arg::new(TO_ARG)
                    .long(TO_ARG)
                    .help("目标网络ID")
                    .value_name("NETWORK")
                    .required_unless_present(LIST_ARG),
            )
            .arg(
                Arg::new(OPTIMIZE_ARG)
                    .long(OPTIMIZE_ARG)
                    .short('o')
                    .help("优化目标: speed, security, cost (默认取配置)")
                    .value_name("CRITERION"),
            )
            .arg(
                Arg::new(COMPARE_ARG)
                    .long(COMPARE_ARG)
                    .help("同时按 speed/security/cost 三个目标查找并对比")
                    .action(ArgAction::SetTrue)
                    .conflicts_with(OPTIMIZE_ARG),
            )
            .arg(
                Arg::new(STRICT_ARG)
                    .long(STRICT_ARG)
                    .help("未知的优化目标或网络ID直接报错")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(CONFIG_ARG)
                    .long(CONFIG_ARG)
                    .short('c')
                    .help("网络与网关配置文件 (toml/json/yaml)")
                    .value_name("FILE"),
            )
            .arg(
                Arg::new(JSON_ARG)
                    .long(JSON_ARG)
                    .help("以JSON格式输出结果")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(LIST_ARG)
                    .long(LIST_ARG)
                    .help("列出已配置的网络和网关")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(VERBOSE_ARG)
                    .long(VERBOSE_ARG)
                    .short('v')
                    .help("输出调试日志")
                    .action(ArgAction::SetTrue),
            )
    }

    /// 运行CLI应用程序，返回要打印到标准输出的内容
    pub fn run(&self, matches: &ArgMatches) -> Result<String> {
        let json = matches.get_flag(JSON_ARG);

        if matches.get_flag(LIST_ARG) {
            return self.list(json);
        }

        let strict = matches.get_flag(STRICT_ARG);
        let from = matches
            .get_one::<String>(FROM_ARG)
            .ok_or_else(|| anyhow!("缺少 --{}", FROM_ARG))?;
        let to = matches
            .get_one::<String>(TO_ARG)
            .ok_or_else(|| anyhow!("缺少 --{}", TO_ARG))?;

        if strict {
            self.config.require_network(from)?;
            self.config.require_network(to)?;
        }

        if matches.get_flag(COMPARE_ARG) {
            info!("执行多目标对比: {} -> {}", from, to);
            return self.compare(from, to, json);
        }

        let criterion = match matches.get_one::<String>(OPTIMIZE_ARG) {
            Some(name) if strict => name.parse::<OptimizeCriterion>()?,
            Some(name) => OptimizeCriterion::from_name_lenient(name),
            None => self.config.optimizer.default_criterion,
        };

        self.find(from, to, criterion, json)
    }

    fn find(&self, from: &str, to: &str, criterion: OptimizeCriterion, json: bool) -> Result<String> {
        let gateways = self.config.get_enabled_gateways();
        let result = self.optimizer.find_optimal_path(
            &self.config.networks,
            &gateways,
            from,
            to,
            &PathOptions::new(criterion),
        );

        if json {
            let document = json!({
                "from": from,
                "to": to,
                "optimize": criterion,
                "result": result,
            });
            return Ok(serde_json::to_string_pretty(&document)?);
        }

        Ok(self.render_result(from, to, criterion, result.as_ref()))
    }

    fn compare(&self, from: &str, to: &str, json: bool) -> Result<String> {
        let gateways = self.config.get_enabled_gateways();
        let results = self
            .optimizer
            .compare_criteria(&self.config.networks, &gateways, from, to);

        if json {
            let entries: Vec<_> = results
                .iter()
                .map(|(criterion, result)| json!({ "optimize": criterion, "result": result }))
                .collect();
            let document = json!({ "from": from, "to": to, "results": entries });
            return Ok(serde_json::to_string_pretty(&document)?);
        }

        Ok(table_display::render_comparison(&results))
    }

    fn list(&self, json: bool) -> Result<String> {
        let gateways = self.config.get_enabled_gateways();

        if json {
            let document = json!({ "networks": self.config.networks, "gateways": gateways });
            return Ok(serde_json::to_string_pretty(&document)?);
        }

        Ok(format!(
            "网络:\n{}\n\n网关:\n{}",
            table_display::render_networks(&self.config.networks),
            table_display::render_gateways(&gateways)
        ))
    }

    fn render_result(
        &self,
        from: &str,
        to: &str,
        criterion: OptimizeCriterion,
        result: Option<&PathResult>,
    ) -> String {
        match result {
            Some(found) => format!(
                "{}\n按 {} 优化: {}",
                table_display::render_path(found, &self.optimizer, criterion),
                criterion,
                summarize(found)
            ),
            None => match [from, to].into_iter().find(|id| !self.config.has_network(id)) {
                Some(unknown) => format!("网络 {} 未配置，{} 到 {} 没有可用路径", unknown, from, to),
                None => format!("{} 到 {} 没有可用路径", from, to),
            },
        }
    }
}
