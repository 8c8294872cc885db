use netgrow::prelude::*;
use netgrow_examples::{init_tracing, NetworkStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same seed per row so only the connectivity differs.
    println!("connectivity  nodes  links  mean-degree  termination");
    for connectivity in [0.0, 0.25, 0.5, 0.75, 0.95, 1.0] {
        let params = GrowthParams::new(800).with_connectivity(connectivity);
        let engine = GrowthEngine::new(params, DegreeDistribution::road_like())?;
        let report = engine.create_net(&mut StdRng::seed_from_u64(42))?;
        let stats = NetworkStats::of_report(&report);
        if !report.termination.is_satisfied() {
            warn!("connectivity {connectivity:.2} stalled early.");
        }

        println!(
            "{connectivity:>12.2}  {:>5}  {:>5}  {:>11.2}  {:?}",
            stats.nodes, stats.links, stats.mean_degree, report.termination
        );
    }

    Ok(())
}
