//! Derived views over the loaded entries: filtering, sorting, generations

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::i18n::{self, Lang};
use crate::state::Pokemon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SortKey {
    Id,
    Name,
    Weight,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// What a sort actually does: one key, one direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortMode {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortMode {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// The eight labels offered in the sort selector, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SortOption {
    NumberAsc,
    NumberDesc,
    NameAsc,
    NameDesc,
    WeightAsc,
    WeightDesc,
    HeightAsc,
    HeightDesc,
}

impl SortOption {
    pub fn all() -> &'static [SortOption] {
        &[
            SortOption::NumberAsc,
            SortOption::NumberDesc,
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::WeightAsc,
            SortOption::WeightDesc,
            SortOption::HeightAsc,
            SortOption::HeightDesc,
        ]
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        let s = i18n::strings(lang);
        match self {
            SortOption::NumberAsc => s.number_asc,
            SortOption::NumberDesc => s.number_desc,
            SortOption::NameAsc => s.a_z,
            SortOption::NameDesc => s.z_a,
            SortOption::WeightAsc => s.weight_asc,
            SortOption::WeightDesc => s.weight_desc,
            SortOption::HeightAsc => s.height_asc,
            SortOption::HeightDesc => s.height_desc,
        }
    }

    fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }

    /// Next selector value; `None` stands for "all" and sits between the ends.
    pub fn cycle_next(current: Option<SortOption>) -> Option<SortOption> {
        let all = Self::all();
        match current {
            None => all.first().copied(),
            Some(option) => all.get(option.index() + 1).copied(),
        }
    }

    pub fn cycle_prev(current: Option<SortOption>) -> Option<SortOption> {
        let all = Self::all();
        match current {
            None => all.last().copied(),
            Some(option) => option.index().checked_sub(1).map(|idx| all[idx]),
        }
    }
}

/// Binding from selector labels to sort modes
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
    clap::ValueEnum,
)]
pub enum SortTable {
    /// Every label sorts by what it names
    #[default]
    Labeled,
    /// The historical binding, where most labels sort by another key
    Legacy,
}

impl SortTable {
    pub fn mode(&self, option: SortOption) -> SortMode {
        use SortDirection::{Ascending as Asc, Descending as Desc};
        use SortKey::{Height, Id, Name, Weight};

        match self {
            SortTable::Labeled => match option {
                SortOption::NumberAsc => SortMode::new(Id, Asc),
                SortOption::NumberDesc => SortMode::new(Id, Desc),
                SortOption::NameAsc => SortMode::new(Name, Asc),
                SortOption::NameDesc => SortMode::new(Name, Desc),
                SortOption::WeightAsc => SortMode::new(Weight, Asc),
                SortOption::WeightDesc => SortMode::new(Weight, Desc),
                SortOption::HeightAsc => SortMode::new(Height, Asc),
                SortOption::HeightDesc => SortMode::new(Height, Desc),
            },
            SortTable::Legacy => match option {
                SortOption::NumberAsc => SortMode::new(Id, Asc),
                SortOption::NumberDesc => SortMode::new(Name, Desc),
                SortOption::NameAsc => SortMode::new(Name, Asc),
                SortOption::NameDesc => SortMode::new(Weight, Asc),
                SortOption::WeightAsc => SortMode::new(Height, Asc),
                SortOption::WeightDesc => SortMode::new(Weight, Desc),
                SortOption::HeightAsc => SortMode::new(Id, Desc),
                SortOption::HeightDesc => SortMode::new(Height, Desc),
            },
        }
    }
}

/// Indices of entries whose name in `lang` contains `query` (case-insensitive)
/// and whose generation matches `generation` when set. Source order is kept.
pub fn filter(
    entries: &[Pokemon],
    lang: Lang,
    query: &str,
    generation: Option<u8>,
) -> Vec<usize> {
    let query = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let matches_query =
                query.is_empty() || entry.name.get(lang).to_lowercase().contains(&query);
            let matches_generation = generation.map_or(true, |wanted| entry.generation == wanted);
            matches_query && matches_generation
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Reorder a copy of `indices` by `mode`. The sort is stable, so equal keys
/// keep their filtered order; `None` returns the indices unchanged.
pub fn sort(
    entries: &[Pokemon],
    indices: &[usize],
    mode: Option<SortMode>,
    lang: Lang,
) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    let Some(mode) = mode else {
        return sorted;
    };

    sorted.sort_by(|&a, &b| {
        let (a, b) = (&entries[a], &entries[b]);
        let ordering = match mode.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => compare_names(a.name.get(lang), b.name.get(lang)),
            SortKey::Weight => a.weight.total_cmp(&b.weight),
            SortKey::Height => a.height.total_cmp(&b.height),
        };
        match mode.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Locale-aware name comparison: accents and case only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Distinct generations in order of first appearance.
pub fn generations(entries: &[Pokemon]) -> Vec<u8> {
    let mut seen = Vec::new();
    for entry in entries {
        if !seen.contains(&entry.generation) {
            seen.push(entry.generation);
        }
    }
    seen
}

/// Next generation filter value; `None` stands for "all".
pub fn cycle_generation(generations: &[u8], current: Option<u8>, forward: bool) -> Option<u8> {
    let position = current.and_then(|wanted| generations.iter().position(|&g| g == wanted));
    match (position, forward) {
        (None, true) => generations.first().copied(),
        (None, false) => generations.last().copied(),
        (Some(idx), true) => generations.get(idx + 1).copied(),
        (Some(idx), false) => idx.checked_sub(1).map(|idx| generations[idx]),
    }
}

/// Resolve a localized name to an entry of the list, for evolution links.
pub fn find_by_name<'a>(
    entries: &'a [Pokemon],
    lang: Lang,
    name: &str,
) -> Option<&'a Pokemon> {
    if name.is_empty() {
        return None;
    }
    entries.iter().find(|entry| entry.name.get(lang) == name)
}
