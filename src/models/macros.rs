/// Defines a fixed-width row newtype over `[i64; ITEM_COUNT]` and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)
/// - `Display` (comma-separated values, the worksheet row shape)
/// - `From<[i64; ITEM_COUNT]>` in both directions
/// - `new` / `values` accessors
///
/// Usage:
///   define_row_type!(SalesRecord);
#[macro_export]
macro_rules! define_row_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub [i64; $crate::models::ITEM_COUNT]);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut first = true;
                for value in self.0.iter() {
                    if !first {
                        ::std::write!(f, ",")?;
                    }
                    ::std::write!(f, "{}", value)?;
                    first = false;
                }
                ::std::result::Result::Ok(())
            }
        }

        impl ::std::convert::From<[i64; $crate::models::ITEM_COUNT]> for $name {
            fn from(values: [i64; $crate::models::ITEM_COUNT]) -> Self {
                $name(values)
            }
        }

        impl ::std::convert::From<$name> for [i64; $crate::models::ITEM_COUNT] {
            fn from(row: $name) -> Self {
                row.0
            }
        }

        impl $name {
            pub fn new(values: [i64; $crate::models::ITEM_COUNT]) -> Self {
                $name(values)
            }

            pub fn values(&self) -> &[i64; $crate::models::ITEM_COUNT] {
                &self.0
            }
        }
    };
}
