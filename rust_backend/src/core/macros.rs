/// Declares the numeric entity ids of a timetable snapshot.
///
/// Each id is a `u64` newtype that serializes as a bare number, prints as
/// that number, and converts from `u64` so constructors can take
/// `impl Into<Id>`:
///
/// ```
/// examtt_reports::timetable_ids! {
///     /// A building on campus.
///     BuildingId,
/// }
///
/// let id = BuildingId::from(12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[macro_export]
macro_rules! timetable_ids {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug,
                Copy,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub u64);

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::write!(f, "{}", self.0)
                }
            }

            impl ::std::convert::From<u64> for $name {
                fn from(raw: u64) -> Self {
                    $name(raw)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    timetable_ids! {
        /// Test-only id.
        SeatId,
    }

    #[test]
    fn test_id_serializes_as_bare_number() {
        let id = SeatId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<SeatId>("42").unwrap(), id);
        assert_eq!(id.to_string(), "42");
    }
}
