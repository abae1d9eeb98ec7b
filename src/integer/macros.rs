/// Shorthand for creating a big integer in tests.
#[macro_export]
macro_rules! BI {
    ($value:expr) => {
        $crate::BigInt::from($value as i64)
    };
}
