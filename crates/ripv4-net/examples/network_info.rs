//! Network block example
//!
//! Run with: RUST_LOG=trace cargo run -p ripv4-net --example network_info -- 10.0.0.0/8

use ripv4_net::network;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let block = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "192.168.0.0/24".to_string());

    let net = network(&block)?;

    println!("Block: {}", net);
    println!("─────────────────────────────");
    println!("Mask:          {}", net.mask());
    println!("Hostmask:      {}", net.hostmask());
    println!("Broadcast:     {}", net.broadcast());
    println!("First usable:  {}", net.first());
    println!("Last usable:   {}", net.last());
    println!("Usable hosts:  {}", net.size());

    Ok(())
}
