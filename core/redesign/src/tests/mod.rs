mod stub_generator;
mod run_app_tests;
