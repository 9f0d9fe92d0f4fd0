pub mod json_result_loader;
