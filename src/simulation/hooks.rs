//! Collaborator seams: the core drives enemies and presentation through
//! these traits instead of reaching for shared game objects.

use crate::direction::Direction;

/// An enemy that can be scared by a super pellet
pub trait Enemy {
    fn start_frightened(&mut self);
}

/// Whatever owns the enemies; the core only broadcasts through it
pub trait EnemyRegistry {
    fn for_each_enemy(&mut self, f: &mut dyn FnMut(&mut dyn Enemy));
}

/// Receives the per-step presentation state
pub trait PresentationSink {
    fn present(&mut self, facing: Option<Direction>, visibly_powered: bool);
}

/// No enemies to scare
impl EnemyRegistry for () {
    fn for_each_enemy(&mut self, _f: &mut dyn FnMut(&mut dyn Enemy)) {}
}

/// Headless runs drop the presentation state
impl PresentationSink for () {
    fn present(&mut self, _facing: Option<Direction>, _visibly_powered: bool) {}
}

impl<E: Enemy> EnemyRegistry for Vec<E> {
    fn for_each_enemy(&mut self, f: &mut dyn FnMut(&mut dyn Enemy)) {
        for enemy in self.iter_mut() {
            f(enemy);
        }
    }
}
