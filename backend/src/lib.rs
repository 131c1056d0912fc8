pub mod system;

pub use system::{StartupError, System};
