use core::hash::Hasher;

/// Componentwise `Add`, `Sub`, `Mul`, `Div` and `Neg` between two values of
/// the same type, plus `Mul`/`Div` by a scalar broadcast to every field.
///
/// Division by zero is whatever the field type does: integers panic, floats
/// give infinity or NaN.
macro_rules! impl_componentwise_ops {
    ($ty:ident { $($field:ident),+ }, $scalar:ty) => {
        impl core::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl core::ops::Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl core::ops::Div for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl core::ops::Mul<$scalar> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $scalar) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl core::ops::Div<$scalar> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $scalar) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }
    };
}

/// `Hash` for `f32`-valued types, consistent with their derived `PartialEq`.
macro_rules! impl_float_hash {
    ($ty:ident { $($field:ident),+ }) => {
        impl core::hash::Hash for $ty {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $( $crate::coords::ops::hash_f32(self.$field, state); )+
            }
        }
    };
}

pub(crate) use {impl_componentwise_ops, impl_float_hash};

/// Hashes the bit pattern of `v`, folding `-0.0` into `0.0` since they compare equal.
#[inline]
pub(crate) fn hash_f32<H: Hasher>(v: f32, state: &mut H) {
    let v = if v == 0.0 { 0.0 } else { v };
    state.write_u32(v.to_bits());
}

#[cfg(test)]
pub(crate) fn hash_of<T: core::hash::Hash>(value: &T) -> u64 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}
