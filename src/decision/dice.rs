/// A single throw of a six-sided die.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
#[display(fmt = "🎲 {}", _0)]
pub struct DiceFace(pub u32);

impl DiceFace {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;
}
