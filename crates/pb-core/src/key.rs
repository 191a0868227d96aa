//! Registry discriminator keys.
//!
//! A key is either a plain string (`"DHL"`, `"UPS"`) or a closed enumeration
//! (`PaymentType::CreditCard`).  Matching is exact and case-sensitive in both
//! cases: there is no normalization, prefix matching, or fallback.

use std::fmt;
use std::hash::Hash;

/// Anything usable as a registry key.
///
/// Blanket-implemented, so `String`, `&'static str`, integers, and enums
/// declared with [`closed_key!`](crate::closed_key) all qualify without
/// ceremony.  `Display` is required so that lookup failures can name the key.
pub trait RegistryKey: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> RegistryKey for T where T: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Declare a closed enumeration usable as a [`RegistryKey`].
///
/// Each variant is paired with its canonical text form.  The generated type
/// gets `ALL`, `as_str`, `Display`, and an exact-match `FromStr` that fails
/// with [`PbError::Parse`](crate::PbError::Parse) on unknown text.
///
/// ```rust
/// pb_core::closed_key! {
///     /// Supported couriers.
///     pub enum Courier {
///         Dhl => "DHL",
///         Ups => "UPS",
///     }
/// }
///
/// assert_eq!(Courier::Dhl.as_str(), "DHL");
/// assert_eq!("UPS".parse::<Courier>().unwrap(), Courier::Ups);
/// assert!("ups".parse::<Courier>().is_err());
/// ```
#[macro_export]
macro_rules! closed_key {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vattr:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis enum $name {
            $( $(#[$vattr])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical text form, as accepted by `FromStr`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::PbError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err($crate::PbError::Parse(format!(
                        "unknown {} {other:?}",
                        stringify!($name),
                    ))),
                }
            }
        }
    };
}
