//! `arena decide`: one turn's moves for a scenario file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arena_content::{ConfigLoader, Scenario, ScenarioLoader};
use arena_core::{BreadthFirstPathfinder, HeroAiConfig, HeroId, Move};
use arena_runtime::{StrategyProvider, decide_for, select_heroes};
use clap::Parser;
use serde::Serialize;

/// Decide moves for a scenario file
#[derive(Parser, Debug)]
pub struct Decide {
    /// Scenario snapshot (RON)
    pub scenario: PathBuf,

    /// Only decide for this hero id
    #[arg(long)]
    pub hero: Option<u32>,

    /// Strategy name, e.g. `careful_assassin`
    #[arg(long, default_value = "helpful_opportunist")]
    pub strategy: String,

    /// Threshold overrides (TOML); `ARENA_*` variables apply on top
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// One line of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub hero: HeroId,
    pub name: String,
    pub strategy: String,
    #[serde(rename = "move")]
    pub chosen: Move,
}

impl Decide {
    pub async fn execute(self) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => HeroAiConfig::default(),
        }
        .with_env_overrides();

        let provider = StrategyProvider::named(&self.strategy)?.with_config(config);
        tracing::info!(
            scenario = %self.scenario.display(),
            turn = scenario.turn,
            strategy = %provider.strategy(),
            "deciding moves"
        );

        let reports = decide_all(scenario, provider, self.hero.map(HeroId)).await?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&reports)?
        } else {
            serde_json::to_string(&reports)?
        };
        println!("{json}");
        Ok(())
    }
}

/// Runs one blocking decision per hero in parallel and reports them in roster
/// order.
pub async fn decide_all(
    scenario: Scenario,
    provider: StrategyProvider,
    requested: Option<HeroId>,
) -> Result<Vec<MoveReport>> {
    let ids = select_heroes(&scenario.roster, requested)?;
    let strategy = provider.strategy().to_string();
    let scenario = Arc::new(scenario);
    let provider = Arc::new(provider);

    let mut tasks = Vec::with_capacity(ids.len());
    for id in ids {
        let scenario = Arc::clone(&scenario);
        let provider = Arc::clone(&provider);
        tasks.push(tokio::task::spawn_blocking(move || {
            decide_for(
                provider.as_ref(),
                &scenario.board,
                &BreadthFirstPathfinder,
                id,
                scenario.turn,
            )
            .map(|chosen| (id, chosen))
        }));
    }

    let mut reports = Vec::with_capacity(tasks.len());
    for task in tasks {
        let (id, chosen) = task.await.context("decision task panicked")??;
        let name = scenario
            .hero(id)
            .map(|hero| hero.name.clone())
            .unwrap_or_default();
        reports.push(MoveReport {
            hero: id,
            name,
            strategy: strategy.clone(),
            chosen,
        });
    }
    Ok(reports)
}
