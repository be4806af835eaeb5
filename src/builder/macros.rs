//! Macros for declaring state enums.

/// Derive the serde traits, `State` and `Display` for a fieldless enum.
///
/// Variants listed under `final:` report `is_final`, those under `error:`
/// report `is_error`. `Display` prints the variant name, as `State::name`
/// does. Extra attributes (docs, further derives) are passed through.
///
/// # Example
///
/// ```
/// use keycalc::core::State;
/// use keycalc::state_enum;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum Screen {
///         Showing,
///         Blank,
///         Errored,
///     }
///     final: [Errored]
///     error: [Errored]
/// }
///
/// assert_eq!(Screen::Blank.name(), "Blank");
/// assert!(Screen::Errored.is_error());
/// assert_eq!(Screen::Showing.to_string(), "Showing");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
