pub mod bullet;
pub mod clouds;
pub mod collision;
pub mod controls;
pub mod match_loop;
pub mod plane;
pub mod policy;
pub mod presentation;

pub use bullet::*;
pub use clouds::*;
pub use collision::*;
pub use controls::build_control;
pub use match_loop::*;
pub use plane::*;
pub use policy::*;
pub use presentation::*;
