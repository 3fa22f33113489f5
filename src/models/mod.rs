pub mod direction;
pub mod signal;
pub mod window;

pub use direction::*;
pub use signal::{new_signal_id, Signal, SignalEdit};
pub use window::StatsWindow;
