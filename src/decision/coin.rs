#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum CoinFace {
    Head,
    Tail,
}
