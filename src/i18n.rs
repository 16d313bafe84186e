//! User-facing strings, one static table per language

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display language
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub fn all() -> &'static [Lang] {
        &[Lang::Fr, Lang::En]
    }

    pub fn toggle(&self) -> Self {
        match self {
            Lang::Fr => Lang::En,
            Lang::En => Lang::Fr,
        }
    }

    /// ISO 639-1 code, as used for the keys of localized names in the API
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }
}

/// Every string the UI shows. Adding a field forces both tables to fill it in.
#[derive(Debug)]
pub struct Strings {
    pub language_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub sort: &'static str,
    pub all: &'static str,
    pub generation: &'static str,
    pub no_results: &'static str,

    pub number_asc: &'static str,
    pub number_desc: &'static str,
    pub a_z: &'static str,
    pub z_a: &'static str,
    pub weight_asc: &'static str,
    pub weight_desc: &'static str,
    pub height_asc: &'static str,
    pub height_desc: &'static str,

    pub weight: &'static str,
    pub height: &'static str,
    pub types: &'static str,
    pub stats: &'static str,
    pub hp: &'static str,
    pub atk: &'static str,
    pub def: &'static str,
    pub spe_atk: &'static str,
    pub spe_def: &'static str,
    pub vit: &'static str,
    pub evolved_from: &'static str,
    pub evolves_to: &'static str,
    pub none: &'static str,
    pub image: &'static str,
    pub image_shiny: &'static str,

    pub hint_move: &'static str,
    pub hint_open: &'static str,
    pub hint_close: &'static str,
    pub hint_search: &'static str,
    pub hint_sort: &'static str,
    pub hint_generation: &'static str,
    pub hint_language: &'static str,
    pub hint_clear: &'static str,
    pub hint_apply: &'static str,
    pub hint_cancel: &'static str,
    pub hint_quit: &'static str,
}

static FR: Strings = Strings {
    language_name: "Français",
    loading: "Chargement en cours...",
    error: "Erreur",
    search: "Rechercher",
    search_placeholder: "Rechercher un Pokémon...",
    sort: "Tri",
    all: "Tous",
    generation: "Génération",
    no_results: "Aucun résultat",

    number_asc: "N° croissant",
    number_desc: "N° décroissant",
    a_z: "A-Z",
    z_a: "Z-A",
    weight_asc: "Poids croissant",
    weight_desc: "Poids décroissant",
    height_asc: "Taille croissante",
    height_desc: "Taille décroissante",

    weight: "Poids",
    height: "Taille",
    types: "Types",
    stats: "Statistiques",
    hp: "PV",
    atk: "Attaque",
    def: "Défense",
    spe_atk: "Atq. Spé.",
    spe_def: "Déf. Spé.",
    vit: "Vitesse",
    evolved_from: "Évolue de",
    evolves_to: "Évolue en",
    none: "Aucune",
    image: "Image",
    image_shiny: "Chromatique",

    hint_move: "Déplacer",
    hint_open: "Ouvrir",
    hint_close: "Fermer",
    hint_search: "Rechercher",
    hint_sort: "Tri",
    hint_generation: "Génération",
    hint_language: "Langue",
    hint_clear: "Effacer",
    hint_apply: "Valider",
    hint_cancel: "Annuler",
    hint_quit: "Quitter",
};

static EN: Strings = Strings {
    language_name: "English",
    loading: "Loading...",
    error: "Error",
    search: "Search",
    search_placeholder: "Search for a Pokémon...",
    sort: "Sort",
    all: "All",
    generation: "Generation",
    no_results: "No results",

    number_asc: "No. ascending",
    number_desc: "No. descending",
    a_z: "A-Z",
    z_a: "Z-A",
    weight_asc: "Weight ascending",
    weight_desc: "Weight descending",
    height_asc: "Height ascending",
    height_desc: "Height descending",

    weight: "Weight",
    height: "Height",
    types: "Types",
    stats: "Stats",
    hp: "HP",
    atk: "Attack",
    def: "Defense",
    spe_atk: "Sp. Atk",
    spe_def: "Sp. Def",
    vit: "Speed",
    evolved_from: "Evolves from",
    evolves_to: "Evolves into",
    none: "None",
    image: "Image",
    image_shiny: "Shiny",

    hint_move: "Move",
    hint_open: "Open",
    hint_close: "Close",
    hint_search: "Search",
    hint_sort: "Sort",
    hint_generation: "Generation",
    hint_language: "Language",
    hint_clear: "Clear",
    hint_apply: "Apply",
    hint_cancel: "Cancel",
    hint_quit: "Quit",
};

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::Fr => &FR,
        Lang::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        for lang in Lang::all() {
            assert_eq!(lang.toggle().toggle(), *lang);
            assert_ne!(lang.toggle(), *lang);
        }
    }

    #[test]
    fn test_tables_differ_per_language() {
        assert_eq!(strings(Lang::Fr).no_results, "Aucun résultat");
        assert_eq!(strings(Lang::En).no_results, "No results");
        assert_ne!(strings(Lang::Fr).loading, strings(Lang::En).loading);
    }

    #[test]
    fn test_codes_match_api_keys() {
        assert_eq!(Lang::Fr.code(), "fr");
        assert_eq!(Lang::En.code(), "en");
    }
}
