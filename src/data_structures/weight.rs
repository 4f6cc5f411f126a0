use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Numeric edge weight usable by every algorithm in the crate.
///
/// Weights need a total order, so floating point values are used through
/// `OrderedFloat`. Arithmetic goes through the checked methods so that an
/// overflow surfaces as an error instead of wrapping around.
///
/// Path sums are accumulated in `Wide` (`i128` for integers, `f64` for
/// floats) and narrowed back to the caller's type only once they are final,
/// so intermediate sums and reduced weights may leave the range of `Self`.
pub trait Weight: Copy + Ord + Debug + Zero + Send + Sync {
    /// Accumulator type for path sums and reduced weights
    type Wide: Weight;

    /// Lossless conversion into the accumulator type
    fn widen(self) -> Self::Wide;

    /// Converts an accumulated value back, `None` if it does not fit
    fn narrow(wide: Self::Wide) -> Option<Self>;

    /// Adds two weights, returning `None` on overflow
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Subtracts `rhs` from `self`, returning `None` on overflow
    fn checked_difference(self, rhs: Self) -> Option<Self>;

    /// Returns false for values that cannot take part in a path length (NaN, infinities)
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                type Wide = i128;

                fn widen(self) -> i128 {
                    self as i128
                }

                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                type Wide = OrderedFloat<f64>;

                fn widen(self) -> OrderedFloat<f64> {
                    OrderedFloat(self.0 as f64)
                }

                fn narrow(wide: OrderedFloat<f64>) -> Option<Self> {
                    let value = wide.0 as $t;
                    value.is_finite().then(|| OrderedFloat(value))
                }

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self.0 + rhs.0;
                    sum.is_finite().then(|| OrderedFloat(sum))
                }

                fn checked_difference(self, rhs: Self) -> Option<Self> {
                    let diff = self.0 - rhs.0;
                    diff.is_finite().then(|| OrderedFloat(diff))
                }

                fn is_valid(&self) -> bool {
                    self.0.is_finite()
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
