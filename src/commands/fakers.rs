//! Fakers command handler.

use mock_generator::FakerRegistry;

/// Print every built-in faker method, one per line.
pub fn run_fakers() -> anyhow::Result<()> {
    let registry = FakerRegistry::builtin();
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
