// demos/basic_usage.rs
use shopper_sim::{BehaviorProfile, Shopper, StatsCollector, StorefrontClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    println!("🛒 Spawning 5 shoppers against {}", base_url);
    let collector = StatsCollector::new();

    let mut handles = Vec::new();
    for _ in 0..5 {
        let profile = BehaviorProfile::boutique()?;
        let storefront = StorefrontClient::new(&base_url)?;
        let mut shopper = Shopper::new(profile, storefront, Arc::new(collector.clone()));
        handles.push(tokio::spawn(async move { shopper.run_cycles(10).await }));
    }

    for handle in handles {
        handle.await?;
    }

    let stats = collector.snapshot().await;
    println!(
        "✅ {} actions, {:.1}% success, {:.0}ms mean latency",
        stats.total_actions, stats.success_rate, stats.average_latency_ms
    );
    for (kind, count) in &stats.actions_by_kind {
        println!("📊 {}: {}", kind, count);
    }

    Ok(())
}
