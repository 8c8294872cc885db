use glam::Vec2;
use netgrow::prelude::*;
use netgrow_examples::{init_tracing, NetworkStats};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Grow onto an existing straight road: two end points that still want links.
    let mut seed = Network::new();
    let west = seed.add_node(Vec2::new(-200.0, 0.0), 3);
    let east = seed.add_node(Vec2::new(200.0, 0.0), 3);
    seed.connect(west, east)?;

    let engine = GrowthEngine::new(GrowthParams::new(300), DegreeDistribution::road_like())?;

    let mut saturated = 0usize;
    let mut exhausted = 0usize;
    let mut reconnects = 0usize;
    let mut sink = FnSink::new(|event| match event {
        GrowthEvent::NodeFrozen {
            reason: FreezeReason::Saturated,
            ..
        } => saturated += 1,
        GrowthEvent::NodeFrozen {
            reason: FreezeReason::Exhausted,
            ..
        } => exhausted += 1,
        GrowthEvent::LinkCreated {
            reconnect: true, ..
        } => reconnects += 1,
        _ => {}
    });

    let report =
        engine.create_net_from_with_events(seed, &mut StdRng::seed_from_u64(99), &mut sink)?;
    drop(sink);

    println!("termination:        {:?}", report.termination);
    println!("frozen (saturated): {saturated}");
    println!("frozen (exhausted): {exhausted}");
    println!("reconnect links:    {reconnects}");
    println!("{}", NetworkStats::of_report(&report));

    Ok(())
}
