mod balloon;
mod collision;

pub use balloon::{balloon_step, sample_wind_input, snapshot_previous_positions};
pub use collision::{collision_system, contact_response_system};
