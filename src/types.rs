//! Short numeric and scalar aliases.
//!
//! Integer aliases come with `<NAME>_MIN` / `<NAME>_MAX` bound constants,
//! generated in one pass with `paste`.

macro_rules! int_aliases {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Alias for `", stringify!($ty), "`.")]
                pub type $name = $ty;

                #[doc = concat!("Smallest `", stringify!($name), "` value.")]
                pub const [<$name:upper _MIN>]: $name = <$ty>::MIN;

                #[doc = concat!("Largest `", stringify!($name), "` value.")]
                pub const [<$name:upper _MAX>]: $name = <$ty>::MAX;
            )+
        }
    };
}

int_aliases! {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    ISize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    USize => usize,
}

/// Alias for `f32`.
pub type F32 = f32;

/// Alias for `f64`.
pub type F64 = f64;

/// Alias for `char`.
pub type C = char;

/// Alias for `bool`.
pub type Bool = bool;

/// Alias for the unit type.
pub type Void = ();
