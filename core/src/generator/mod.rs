use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts, asked for a fresh one on every engine (re)start.
pub trait MineGenerator {
    fn generate(&mut self, config: &BoardConfig) -> Result<MineLayout>;
}

/// A fixed layout replays itself on every reset.
impl MineGenerator for MineLayout {
    fn generate(&mut self, config: &BoardConfig) -> Result<MineLayout> {
        self.check_fits(config)?;
        Ok(self.clone())
    }
}
