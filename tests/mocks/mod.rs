pub mod backend_mock;
pub mod bootstrap_mock;
