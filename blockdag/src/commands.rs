//! The two top-level commands. Each one builds its own graph, computes, writes
//! and drops everything before returning.

use consensus::{CycleCheck, CycleDetector, DagSets};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::output::{self, OutputWriter};

/// Checks the input graph for cycles and writes `correct` or `impossible`.
pub fn run_check(config: &Config) -> Result<CycleCheck> {
    let graph = loader::load(&config.io.input, config.graph.max_name_len)?;

    let check = CycleDetector::new(&graph).check();
    info!("DAG check finished: {:?}", check);

    let mut writer = OutputWriter::new(output::open(&config.io.output)?, config.output.format);
    writer.write_check(check)?;
    Ok(check)
}

/// Computes the causal sets of `vertex` and writes them. Writes nothing and
/// returns `Ok(None)` when the vertex is not in the graph.
pub fn run_sets(config: &Config, vertex: &str) -> Result<Option<DagSets>> {
    let graph = loader::load(&config.io.input, config.graph.max_name_len)?;

    let Some(sets) = DagSets::compute(&graph, vertex)? else {
        info!("Vertex {} not found, nothing to compute", vertex);
        return Ok(None);
    };
    info!(
        "Computed sets for {}: past={} future={} anticone={} tips={}",
        sets.vertex,
        sets.past.len(),
        sets.future.len(),
        sets.anticone.len(),
        sets.tips.len()
    );

    let mut writer = OutputWriter::new(output::open(&config.io.output)?, config.output.format);
    writer.write_sets(&sets)?;
    Ok(Some(sets))
}
