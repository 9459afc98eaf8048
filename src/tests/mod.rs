pub mod config_loader_tests;
pub mod game_tests;
pub mod grid_tests;
pub mod input_tests;
pub mod scoring_tests;
pub mod time_tests;
