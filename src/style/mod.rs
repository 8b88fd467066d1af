mod layout_state;

pub use layout_state::*;
