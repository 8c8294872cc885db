use netgrow::prelude::*;
use netgrow_examples::{init_tracing, NetworkStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Classic road-like defaults: 45 degree minimum angle, links 100..250 long.
    let params = GrowthParams::new(500);
    let engine = GrowthEngine::new(params, DegreeDistribution::road_like())?;

    let mut rng = StdRng::seed_from_u64(2025);
    let report = engine.create_net(&mut rng)?;
    info!(
        "Grew {} nodes with seed 2025 ({:?}).",
        report.network.node_count(),
        report.termination
    );

    println!("termination:      {:?}", report.termination);
    println!(
        "visits/attempts:  {} / {} ({} rejected)",
        report.visits, report.attempts, report.rejected
    );
    println!("{}", NetworkStats::of_report(&report));

    Ok(())
}
