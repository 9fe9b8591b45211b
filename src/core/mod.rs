pub mod animation;
pub mod card;
pub mod constants;
pub mod layout;
pub mod links;
pub mod math;
pub mod session;
pub mod shake;

pub use animation::*;
pub use card::*;
pub use constants::*;
pub use layout::*;
pub use links::*;
pub use math::*;
pub use session::*;
pub use shake::*;
