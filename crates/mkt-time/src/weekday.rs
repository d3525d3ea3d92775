//! `Weekday` — day-of-week enum.

/// Day of the week, numbered 1–7 from Monday.
///
/// A weekday is always derived from a [`Date`](crate::Date), never stored
/// alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Sunday, indexed by `ordinal() - 1`.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Look up by ordinal (1 = Monday … 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Saturday or Sunday: never a trading day.
    pub fn is_weekend(&self) -> bool {
        *self >= Weekday::Saturday
    }

    /// 1 = Monday … 7 = Sunday.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for (i, wd) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(wd.ordinal()), i + 1);
            assert_eq!(Weekday::from_ordinal(wd.ordinal()), Some(*wd));
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn weekend_split() {
        let weekend: Vec<_> = Weekday::ALL.into_iter().filter(Weekday::is_weekend).collect();
        assert_eq!(weekend, [Weekday::Saturday, Weekday::Sunday]);
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
