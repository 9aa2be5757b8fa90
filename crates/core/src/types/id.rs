//! Newtype IDs for type-safe entity references.
//!
//! Seed records are keyed by short string ids (`"1"`, `"o1"`, `"s1"`), and
//! relationships are resolved by matching those strings. Use the `define_id!`
//! macro to create wrappers that prevent accidentally comparing a product id
//! with an order id.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
/// - `PartialEq<str>` so ids compare directly against path segments
///
/// # Example
///
/// ```rust
/// # use philagri_core::define_id;
/// define_id!(FieldId);
/// define_id!(HarvestId);
///
/// let field = FieldId::new("f1");
/// let harvest = HarvestId::new("f1");
///
/// assert_eq!(field.as_str(), harvest.as_str());
/// // These are different types, so this won't compile:
/// // let _: FieldId = harvest;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Marketplace entities
define_id!(ProductId);
define_id!(OrderId);
define_id!(MessageId);
define_id!(ReviewId);

// Any marketplace party. Buyers (`b1`), sellers (`s1`) and the demo user
// (`u1`) share one id space since orders and messages mix them freely.
define_id!(UserId);

// Farm-operational entities
define_id!(WorkerId);
define_id!(CropId);
define_id!(MachineId);
define_id!(FertilizerId);
define_id!(TaskId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_compares_against_str() {
        let id = ProductId::new("1");
        assert_eq!(id, "1");
        assert_ne!(id, "2");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_display_is_raw_value() {
        assert_eq!(OrderId::from("o1").to_string(), "o1");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&UserId::new("b1")).unwrap_or_default();
        assert_eq!(json, "\"b1\"");
    }
}
