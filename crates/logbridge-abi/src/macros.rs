//! Helper macros for ABI function generation.
//!
//! `abi_fn!` generates one `#[unsafe(no_mangle)] pub unsafe extern "C" fn`.
//! `severity_fns!` generates the per-severity entry points of a surface,
//! which differ only in name and tier.

/// Generate an ABI-compatible extern "C" function.
///
/// ```ignore
/// abi_fn! {
///     /// Doc comment for the function.
///     fn my_func(arg1: Type1, arg2: Type2) -> ReturnType {
///         // implementation body
///     }
/// }
/// ```
macro_rules! abi_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };

    // Variant without return type (returns ())
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? )
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) {
            unsafe { $body }
        }
    };
}

/// Generate one entry point per severity.
///
/// `explicit` entries take `(handle, message)`, `implicit` entries take
/// `(message)` and always use the default handle.
#[allow(unused_macros)]
macro_rules! severity_fns {
    (explicit: $( $(#[$meta:meta])* $name:ident => $severity:expr; )*) => {
        $(
            abi_fn! {
                $(#[$meta])*
                fn $name(log: $crate::util::RawLogHandle, message: *const ::std::ffi::c_char) {
                    $crate::util::forward(log, $severity, message)
                }
            }
        )*
    };
    (implicit: $( $(#[$meta:meta])* $name:ident => $severity:expr; )*) => {
        $(
            abi_fn! {
                $(#[$meta])*
                fn $name(message: *const ::std::ffi::c_char) {
                    $crate::util::forward_default($severity, message)
                }
            }
        )*
    };
}
