pub mod errors;
pub mod logging;
pub mod narrative;
pub mod sentiment;
