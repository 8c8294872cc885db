use netgrow::prelude::*;
use netgrow_examples::{init_tracing, NetworkStats};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Right angles only; link lengths snap to multiples of the minimum distance.
    let params = GrowthParams::new(400)
        .with_grid_mode(true)
        .with_distance_range(100.0, 300.0)
        .with_min_link_angle_degrees(90.0)
        .with_connectivity(0.8);

    // Grid junctions have at most four arms.
    let degrees = DegreeDistribution::new()
        .with(2, 2.0)?
        .with(3, 5.0)?
        .with(4, 8.0)?;

    let engine = GrowthEngine::new(params, degrees)?;
    let report = engine.create_net(&mut StdRng::seed_from_u64(7))?;

    println!("termination: {:?}", report.termination);
    println!("{}", NetworkStats::of_report(&report));

    Ok(())
}
