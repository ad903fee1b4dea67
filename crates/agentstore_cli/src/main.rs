//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `agentstore_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use agentstore_core::{Agent, AgentRepository, JsonCodec, KvAgentRepository, MemoryStore};

fn main() {
    println!("agentstore_core version={}", agentstore_core::core_version());

    let repo = KvAgentRepository::new(MemoryStore::new(), JsonCodec, "agents");
    let probe = match repo.create(&Agent::new("probe-0", "probe")) {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("probe create failed: {err}");
            std::process::exit(1);
        }
    };
    match repo.save(&probe) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("probe save rejected by store");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("probe save failed: {err}");
            std::process::exit(1);
        }
    }
    match repo.count() {
        Ok(count) => println!("agentstore_core probe_count={count}"),
        Err(err) => {
            eprintln!("probe count failed: {err}");
            std::process::exit(1);
        }
    }
}
