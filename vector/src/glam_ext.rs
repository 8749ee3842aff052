use crate::{error::ComponentError, operand::Operand, ops::impl_reflected, scalar::Scalar};
use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_operand {
    ($($t:ident => $n:literal),*) => {
        $(
            impl Operand for $t {
                #[inline]
                fn len(&self) -> usize {
                    $n
                }

                #[inline]
                fn component(&self, index: usize) -> Result<Scalar, ComponentError> {
                    self.to_array()
                        .get(index)
                        .map(|&c| Scalar::from(c))
                        .ok_or(ComponentError::OutOfRange { index, len: $n })
                }

                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }
            }
        )*

        impl_reflected!($([] $t),*);
    };
}

impl_glam_operand!(
    Vec2 => 2,
    Vec3 => 3,
    Vec4 => 4,
    DVec2 => 2,
    DVec3 => 3,
    DVec4 => 4,
    IVec2 => 2,
    IVec3 => 3,
    IVec4 => 4
);
