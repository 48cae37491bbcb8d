pub mod generator_orchestrator;
