mod text_preview_test;
mod tracing_config_test;
