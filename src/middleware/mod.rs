pub mod identity;

pub use identity::extract_identity;
