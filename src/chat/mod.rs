pub mod intent;
pub mod orchestrator;
