use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::sailor::Sailor;

/// Canonical sailor fields, in their fixed base-zero order. The order is the
/// order [`ColumnMap`] slots are laid out in and the order the row builder
/// walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Helm,
    SailNo,
    Rank,
    Gender,
    Age,
    Club,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Helm,
        Field::SailNo,
        Field::Rank,
        Field::Gender,
        Field::Age,
        Field::Club,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Parses a raw cell and writes it into the candidate's canonical field.
    pub fn apply(self, sailor: &mut Sailor, raw: &str) {
        match self {
            Field::Helm => sailor.set_name(raw),
            Field::SailNo => sailor.set_sailno(raw),
            Field::Rank => sailor.set_rank(raw),
            Field::Gender => sailor.set_gender(raw),
            Field::Age => sailor.set_age(raw),
            Field::Club => sailor.set_club(raw),
        }
    }
}

struct FieldRule {
    field: Field,
    pattern: &'static str,
}

/// Ordered rule table: the first rule whose pattern matches a header cell
/// claims that cell. Patterns are matched case-insensitively against the
/// cell text with all whitespace removed, so "Sail No" matches `sailno`.
const FIELD_RULES: [FieldRule; 6] = [
    FieldRule { field: Field::Helm, pattern: "helm" },
    FieldRule { field: Field::SailNo, pattern: "sailno" },
    FieldRule { field: Field::Rank, pattern: "rank|seriesplace" },
    FieldRule { field: Field::Gender, pattern: "m/f" },
    FieldRule { field: Field::Age, pattern: "age" },
    FieldRule { field: Field::Club, pattern: "club" },
];

static RULE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| {
            RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .expect("field rule pattern compiles")
        })
        .collect()
});

/// Per-document binding from canonical field to header column index. Built
/// once from the header row, consumed for every data row of that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; Field::ALL.len()],
}

impl ColumnMap {
    pub fn unbound() -> Self {
        Self {
            columns: [None; Field::ALL.len()],
        }
    }

    /// Scans the header cells in document order. Each cell is claimed by the
    /// first rule it matches; a later cell matching the same rule overwrites
    /// the earlier binding. Cells matching no rule bind nothing, and fields
    /// without a matching header simply stay unbound.
    pub fn from_header<S: AsRef<str>>(cells: &[S]) -> Self {
        let mut map = Self::unbound();
        for (column, cell) in cells.iter().enumerate() {
            let squashed: String = cell
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            for (rule, regex) in FIELD_RULES.iter().zip(RULE_REGEXES.iter()) {
                if regex.is_match(&squashed) {
                    map.columns[rule.field.index()] = Some(column);
                    break;
                }
            }
        }
        map
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns[field.index()]
    }

    pub fn bound_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }
}

/// Builds one candidate sailor from one data row. Fields are independently
/// bindable: an unbound field contributes nothing and does not suppress later
/// bound fields. The candidate is owned and unattached; resolution against
/// the registry happens separately.
pub fn build_candidate<S: AsRef<str>>(row: &[S], map: &ColumnMap) -> Sailor {
    let mut sailor = Sailor::new();
    for field in Field::ALL {
        if let Some(column) = map.column(field) {
            if let Some(raw) = row.get(column) {
                field.apply(&mut sailor, raw.as_ref());
            }
        }
    }
    sailor
}
