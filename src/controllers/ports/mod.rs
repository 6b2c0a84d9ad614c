pub mod sweep_presenter;
