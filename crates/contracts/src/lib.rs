pub mod devtools;
pub mod shared;
