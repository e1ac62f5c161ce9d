use std::fmt;
use std::ops::BitOr;

/// Optional features of a model, stored as bit flags.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ModelOptions(u8);

impl ModelOptions {
    pub const NONE: Self = Self(0);

    /// The model only contributes fields and methods to other models.
    pub const MIXIN: Self = Self(1 << 0);

    /// The model's table is not automatically generated (e.g. SQL views).
    pub const MANUAL: Self = Self(1 << 1);

    /// The model is part of the framework itself.
    pub const SYSTEM: Self = Self(1 << 2);

    /// The model's records are short-lived and periodically vacuumed.
    pub const TRANSIENT: Self = Self(1 << 3);

    /// The model is the link table of a many-to-many relation.
    pub const MANY2MANY_LINK: Self = Self(1 << 4);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ModelOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for ModelOptions {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::MIXIN, "MIXIN"),
            (Self::MANUAL, "MANUAL"),
            (Self::SYSTEM, "SYSTEM"),
            (Self::TRANSIENT, "TRANSIENT"),
            (Self::MANY2MANY_LINK, "MANY2MANY_LINK"),
        ];
        let mut set = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .peekable();
        if set.peek().is_none() {
            return fmt.write_str("NONE");
        }
        let mut first = true;
        for name in set {
            if !first {
                fmt.write_str(" | ")?;
            }
            fmt.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
