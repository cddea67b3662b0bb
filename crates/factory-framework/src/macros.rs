//! # Accessor Generation
//!
//! [`factory_accessors!`] expands a rule-key/property-name table into a
//! statically declared `set_<name>` / `get_<name>` method pair per entry,
//! delegating to the factory's [`StateTable`](crate::StateTable). This is the
//! typed replacement for dispatching on string-concatenated method names: the
//! full accessor surface is visible to the compiler, and a typo in a property
//! name is a compile error, not a runtime miss.

/// Generates an accessor pair per rule entry inside an `impl` block.
///
/// The first argument names the field holding the factory's
/// [`StateTable`](crate::StateTable); each `Variant => name` entry produces
/// `set_<name>(value)` (validate-then-commit, returning the current ledger)
/// and `get_<name>()` (pure read).
///
/// ```
/// use factory_framework::{factory_accessors, Rule, StateTable, Validators};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum TrackProp {
///     Title,
/// }
///
/// struct Track {
///     state: StateTable<TrackProp, String>,
/// }
///
/// impl Track {
///     factory_accessors!(state, TrackProp, String, {
///         Title => title,
///     });
/// }
///
/// let rule = Rule::new([(TrackProp::Title, "title")]).unwrap();
/// let validators =
///     Validators::new().with(TrackProp::Title, |t: &String| !t.is_empty(), "Title must not be empty");
/// let mut track = Track { state: StateTable::new(rule, validators) };
///
/// let ledger = track.set_title("Jolene".to_string()).unwrap();
/// assert!(ledger.is_empty());
/// assert_eq!(track.get_title(), Some(&"Jolene".to_string()));
/// ```
#[macro_export]
macro_rules! factory_accessors {
    ($state:ident, $key_ty:ty, $value_ty:ty, { $($variant:ident => $name:ident),+ $(,)? }) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("Validates and commits `", stringify!($name), "`, returning the current error ledger.")]
                pub fn [<set_ $name>](
                    &mut self,
                    value: $value_ty,
                ) -> ::core::result::Result<
                    &$crate::ErrorLedger<$value_ty>,
                    $crate::FrameworkError,
                > {
                    self.$state.set(<$key_ty>::$variant, value)
                }

                #[doc = concat!("Pure read of the committed `", stringify!($name), "` value.")]
                pub fn [<get_ $name>](&self) -> ::core::option::Option<&$value_ty> {
                    self.$state.get(<$key_ty>::$variant)
                }
            )+
        }
    };
}
