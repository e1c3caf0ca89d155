mod fixtures;
mod state_machine_tests;
