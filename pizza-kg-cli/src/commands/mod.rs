pub mod lookup;
pub mod map;
