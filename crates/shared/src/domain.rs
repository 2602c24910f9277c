use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(LineItemId);

/// Amount in the smallest currency denomination (paise for INR).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Subunits(pub i64);

impl Subunits {
    pub const ZERO: Subunits = Subunits(0);

    pub fn times(self, quantity: u32) -> Subunits {
        Subunits(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl std::ops::Add for Subunits {
    type Output = Subunits;

    fn add(self, rhs: Subunits) -> Subunits {
        Subunits(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Subunits {
    fn sum<I: Iterator<Item = Subunits>>(iter: I) -> Subunits {
        iter.fold(Subunits::ZERO, |acc, value| acc + value)
    }
}
