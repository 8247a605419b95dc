//! Junkcoin network info tool
//!
//! Exercises the startup surface: registers every supported network and
//! prints its resolved parameters. Any malformed or duplicate network
//! aborts startup; a node must never come up with a degraded registry.

use jkc_chaincfg::consensus::last_checkpoint_height;
use jkc_chaincfg::params::{networks, Registry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::new();
    registry.register(networks::mainnet()?)?;
    registry.register(networks::testnet()?)?;

    println!("Registered Junkcoin networks:");
    println!();

    for params in registry.networks() {
        println!("{}", params.name);
        println!("  Magic:        0x{:08x}", params.net);
        println!("  Port:         {}", params.default_port);
        println!("  Genesis:      {}", params.genesis_hash);
        println!(
            "  Retarget:     every {} blocks ({}s spacing, {}s window)",
            params.blocks_per_retarget(),
            params.target_time_per_block,
            params.target_timespan
        );
        println!("  Pow limit:    0x{:08x}", params.pow_limit_bits);
        println!("  Maturity:     {} confirmations", params.coinbase_maturity);
        println!("  Bech32 HRP:   {}", params.bech32_hrp_segwit);
        println!("  Coin type:    {}", params.hd_coin_type);
        match last_checkpoint_height(&params) {
            Some(height) => println!("  Checkpoints:  {} (last at height {})", params.checkpoints.len(), height),
            None => println!("  Checkpoints:  none"),
        }
        for seed in &params.dns_seeds {
            println!("  DNS seed:     {} (filtering: {})", seed.host, seed.filtering);
        }
        println!();
    }

    Ok(())
}
