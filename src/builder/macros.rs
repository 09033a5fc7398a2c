//! Macros for ergonomic state, event and table declaration.

/// Generate a state enum and its `State` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`;
/// do not derive those again through the attributes.
///
/// # Example
///
/// ```
/// use switchyard::core::State;
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Closed,
///         Opened,
///         Walking,
///     }
/// }
///
/// assert_eq!(Door::Walking.name(), "Walking");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
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
        }
    };
}

/// Generate an event enum, its kind enum and the `Event` implementation.
///
/// Variants may carry named payload fields. The kind enum gets one unit
/// variant per event variant, with the same name.
///
/// # Example
///
/// ```
/// use switchyard::core::Event;
/// use switchyard::event_enum;
///
/// event_enum! {
///     #[derive(Debug)]
///     pub enum DoorEvent: DoorEventKind {
///         Open,
///         Walk { ready: bool, distance: u32 },
///     }
/// }
///
/// let walk = DoorEvent::Walk { ready: true, distance: 5 };
/// assert_eq!(walk.kind(), DoorEventKind::Walk);
/// assert_eq!(DoorEvent::Open.kind(), DoorEventKind::Open);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({ $($field:ident : $field_ty:ty),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $({ $($field: $field_ty),* })?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };
}

/// Declare a transition table row by row.
///
/// Each row reads `source, kind => target, action` with an optional
/// `, if guard` suffix. Expands to a `Result<TransitionTable, BuildError>`
/// produced by [`TableBuilder`](crate::builder::TableBuilder).
///
/// # Example
///
/// ```
/// use switchyard::{event_enum, state_enum, transition_table};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Opened,
///         Walking,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent: DoorEventKind {
///         Open,
///         Close,
///         Walk { ready: bool },
///     }
/// }
///
/// fn noop(_: &DoorEvent) {}
/// fn is_ready(e: &DoorEvent) -> bool {
///     matches!(e, DoorEvent::Walk { ready: true })
/// }
///
/// let table = transition_table! {
///     initial: Door::Closed;
///     Door::Closed, DoorEventKind::Open  => Door::Opened,  noop;
///     Door::Opened, DoorEventKind::Close => Door::Closed,  noop;
///     Door::Opened, DoorEventKind::Walk  => Door::Walking, noop, if is_ready;
/// }
/// .unwrap();
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.states().len(), 3);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        initial: $initial:expr;
        $(
            $from:expr, $kind:expr => $to:expr, $action:expr $(, if $guard:expr)?
        );+ $(;)?
    ) => {{
        let build = || -> ::std::result::Result<_, $crate::builder::BuildError> {
            let builder = $crate::builder::TableBuilder::new().initial($initial);
            $(
                let builder = builder.transition(
                    $crate::builder::TransitionBuilder::new()
                        .from($from)
                        .on($kind)
                        .to($to)
                        .action($action)
                        $(.when($guard))?,
                )?;
            )+
            builder.build()
        };
        build()
    }};
}
