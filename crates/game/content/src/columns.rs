//! Column layout for tabular character data.
//!
//! Header names are resolved to column indices once per file. Bonus columns are
//! not discovered by inspecting header text: they are declared up front as an
//! explicit `column name → attribute` mapping ([`BonusColumns`]), and only the
//! declared names are looked up.

use attr_core::Attribute;

/// Columns every row must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "level", "base_attack", "base_defense", "max_health"];

/// Growth columns; absent columns default to zero growth.
pub const GROWTH_COLUMNS: [&str; 3] = ["attack_growth", "defense_growth", "health_growth"];

/// A declared percentage-bonus column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BonusColumn {
    pub column: String,
    pub attribute: Attribute,
}

impl BonusColumn {
    pub fn new(column: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            column: column.into(),
            attribute,
        }
    }
}

/// Ordered list of declared bonus columns.
///
/// Declaration order matters: when several columns map to the same attribute,
/// the first one with a parseable value in a row wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BonusColumns(Vec<BonusColumn>);

impl BonusColumns {
    /// No bonus columns.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn new(columns: Vec<BonusColumn>) -> Self {
        Self(columns)
    }

    /// Declare another column (builder pattern).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, attribute: Attribute) -> Self {
        self.0.push(BonusColumn::new(column, attribute));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &BonusColumn> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BonusColumns {
    /// `attack_bonus`, `defense_bonus` and `health_bonus`.
    fn default() -> Self {
        Self::none()
            .with("attack_bonus", Attribute::Attack)
            .with("defense_bonus", Attribute::Defense)
            .with("health_bonus", Attribute::Health)
    }
}

/// Column indices resolved from a header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: Option<usize>,
    pub level: Option<usize>,
    pub base_attack: Option<usize>,
    pub base_defense: Option<usize>,
    pub max_health: Option<usize>,
    pub attack_growth: Option<usize>,
    pub defense_growth: Option<usize>,
    pub health_growth: Option<usize>,
    /// Present bonus columns, in declaration order.
    pub bonuses: Vec<(usize, Attribute)>,
}

impl ColumnLayout {
    /// Resolve indices for `headers`. Header names are compared after trimming
    /// whitespace and a leading byte-order mark.
    pub fn resolve<S: AsRef<str>>(headers: &[S], bonus_columns: &BonusColumns) -> Self {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| normalize(header.as_ref()) == wanted)
        };

        let bonuses = bonus_columns
            .iter()
            .filter_map(|declared| find(&declared.column).map(|idx| (idx, declared.attribute)))
            .collect();

        Self {
            name: find("name"),
            level: find("level"),
            base_attack: find("base_attack"),
            base_defense: find("base_defense"),
            max_health: find("max_health"),
            attack_growth: find("attack_growth"),
            defense_growth: find("defense_growth"),
            health_growth: find("health_growth"),
            bonuses,
        }
    }

    /// Required columns missing from the header row.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let indices = [
            self.name,
            self.level,
            self.base_attack,
            self.base_defense,
            self.max_health,
        ];
        REQUIRED_COLUMNS
            .iter()
            .zip(indices)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| *name)
            .collect()
    }
}

fn normalize(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}
