//! Number of swings per combat round.

use crate::state::Class;

/// Swing progression of one class group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwingProgression {
    /// Levels per extra swing.
    pub denominator: i32,
    pub bonus: i32,
    pub cap: i32,
}

impl SwingProgression {
    pub const fn for_class(class: Class) -> Self {
        match class {
            Class::Mage | Class::Bishop => Self::new(10, 0, 5),
            Class::Priest | Class::Thief => Self::new(10, 0, 10),
            Class::Fighter | Class::Samurai | Class::Lord => Self::new(5, 1, 24),
            Class::Ninja => Self::new(5, 2, 36),
        }
    }

    const fn new(denominator: i32, bonus: i32, cap: i32) -> Self {
        Self {
            denominator,
            bonus,
            cap,
        }
    }
}

/// Upper bound on swings granted by equipment. Above every class cap.
pub const MAX_EQUIPPED_SWINGS: i32 = 99;

/// Swings per round.
///
/// # Formula
///
/// ```text
/// max(min(level / denominator + bonus, cap), equipped_attack_count), floored at 1
/// ```
///
/// Level division floors. Equipment can raise the count above the class cap
/// but never lower it; its contribution is limited to [`MAX_EQUIPPED_SWINGS`].
pub fn attack_count(level: i32, class: Class, equipped_attack_count: i32) -> u32 {
    let progression = SwingProgression::for_class(class);
    let from_level = (level.div_euclid(progression.denominator) + progression.bonus)
        .min(progression.cap);
    let equipped = equipped_attack_count.min(MAX_EQUIPPED_SWINGS);
    from_level.max(equipped).max(1) as u32
}
