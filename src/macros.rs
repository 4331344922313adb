/// Generate accessor functions for fields of `global_state::Globals`.
///
/// Usage:
/// `global_signals! {
///     pub fn1 => field1: Type1,
///     fn2 => field2: Type2,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}

/// Reactive localized string: `tr!(language, TextKey::Today)` expands to a
/// closure re-reading the language signal.
#[macro_export]
macro_rules! tr {
    ($language:expr, $key:expr) => {
        move || $crate::i18n::text($language.get(), $key)
    };
}
