pub mod app_builder;
