pub mod steering;
pub mod keyboard;
pub mod pursuit;
pub mod replay;

pub use keyboard::{KeyScheme, KeyboardControl};
pub use pursuit::PursuitControl;
pub use replay::ReplayControl;
pub use steering::steer;

use combatants_shared::ControlKind;

use crate::policy::{Control, IdleControl};

/// Resolve a control kind to a boxed control.
pub fn build_control(kind: ControlKind) -> Box<dyn Control> {
    match kind {
        ControlKind::Idle => Box::new(IdleControl),
        ControlKind::Pursuit => Box::new(PursuitControl::new()),
        ControlKind::Arrows => Box::new(KeyboardControl::new(KeyScheme::ARROWS)),
        ControlKind::Wasd => Box::new(KeyboardControl::new(KeyScheme::WASD)),
    }
}
