//! Bell state example
//!
//! Runs every built-in sample circuit and prints its histogram and the
//! classifier's description. Set `RUST_LOG=debug` to see each gate.

use qcirc_core::library;
use qcirc_sim::{Simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let simulator = Simulator::new(SimulatorConfig::strict())?;

    for template in library::all()? {
        let circuit = &template.circuit;
        println!("=== {} ===", template.name);
        println!("{}", template.description);
        println!("Expected: {}", template.expected_output);
        println!();

        let result = simulator.run(circuit)?;
        print!("{}", result);
        println!();
        println!("Classifier: {}", simulator.classify(circuit.gates(), circuit.num_qubits()));
        if let Some(stats) = result.statistics() {
            print!("{}", stats);
        }
        println!();
    }

    Ok(())
}
