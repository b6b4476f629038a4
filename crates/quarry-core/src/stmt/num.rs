use super::Value;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) as $target:ty
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $target)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value as $target)
                }
            }
        )*
    };
}

impl_num! {
    I64(i8) as i64
    I64(i16) as i64
    I64(i32) as i64
    I64(i64) as i64
    I64(u8) as i64
    I64(u16) as i64
    I64(u32) as i64
    F64(f32) as f64
    F64(f64) as f64
}
