#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime type taxonomy, severity levels, dataset keys, and localized labels.
//!
//! This crate defines the closed vocabularies shared by every other crate:
//! the coarse display [`CrimeType`] attached to each incident, the
//! fine-grained [`CrimeFilterKey`] used only for UI filtering, the three
//! statistics datasets ([`DatasetKey`]) that drive incident generation, and
//! the UI [`Language`]s that labels are translated into.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse crime category shown on markers, charts and the incident table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeType {
    /// Unlawful taking of property.
    Theft,
    /// Physical attack on a person.
    Assault,
    /// Unlawful entry to commit a theft or felony.
    Burglary,
    /// Willful damage of property.
    Vandalism,
    /// Drug and narcotics offenses.
    #[serde(rename = "Narcotics")]
    #[strum(serialize = "Narcotics")]
    Drugs,
    /// Road traffic offenses.
    #[serde(rename = "Traffic Violation")]
    #[strum(serialize = "Traffic Violation")]
    Traffic,
    /// Murder and manslaughter.
    Homicide,
}

impl CrimeType {
    /// Returns the severity a single incident of this type carries when no
    /// regional magnitude is available.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::Theft | Self::Vandalism | Self::Traffic => Severity::Low,
            Self::Burglary | Self::Drugs => Severity::Medium,
            Self::Assault => Severity::High,
            Self::Homicide => Severity::Critical,
        }
    }

    /// Returns the marker/chart color for this type as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Theft => "#3b82f6",
            Self::Assault => "#ef4444",
            Self::Burglary => "#f97316",
            Self::Vandalism => "#eab308",
            Self::Drugs => "#a855f7",
            Self::Traffic => "#10b981",
            Self::Homicide => "#dc2626",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Theft,
            Self::Assault,
            Self::Burglary,
            Self::Vandalism,
            Self::Drugs,
            Self::Traffic,
            Self::Homicide,
        ]
    }
}

/// Severity label attached to every incident.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Severity {
    /// Minor offenses.
    Low,
    /// Moderate offenses.
    Medium,
    /// Serious offenses.
    High,
    /// Most severe offenses.
    Critical,
}

/// Fine-grained filter label. Distinct from [`CrimeType`]; assigned per
/// incident by a deterministic hash of its id.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CrimeFilterKey {
    Drugs,
    Extremism,
    HumanTrafficking,
    Bribery,
    Extortion,
    Fraud,
    Theft,
    IntentionalHomicide,
    Rape,
    Robbery,
    Looting,
    Hooliganism,
}

impl CrimeFilterKey {
    /// Fallback used when a dataset has no filter keys configured.
    pub const DEFAULT: Self = Self::Theft;

    /// Returns the translated label for this filter key.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match language {
            Language::Uz => match self {
                Self::Drugs => "Giyohvandlik",
                Self::Extremism => "Ekstremizm",
                Self::HumanTrafficking => "Odam savdosi",
                Self::Bribery => "Poraxo'rlik",
                Self::Extortion => "Tovlamachilik",
                Self::Fraud => "Firibgarlik",
                Self::Theft => "O'g'rilik",
                Self::IntentionalHomicide => "Qasddan odam o'ldirish",
                Self::Rape => "Nomusga tegish",
                Self::Robbery => "Bosqinchilik",
                Self::Looting => "Talonchilik",
                Self::Hooliganism => "Bezorilik",
            },
            Language::En => match self {
                Self::Drugs => "Narcotics",
                Self::Extremism => "Extremism",
                Self::HumanTrafficking => "Human trafficking",
                Self::Bribery => "Bribery",
                Self::Extortion => "Extortion",
                Self::Fraud => "Fraud",
                Self::Theft => "Theft",
                Self::IntentionalHomicide => "Intentional homicide",
                Self::Rape => "Sexual assault",
                Self::Robbery => "Robbery",
                Self::Looting => "Looting",
                Self::Hooliganism => "Hooliganism",
            },
            Language::Ru => match self {
                Self::Drugs => "Наркотики",
                Self::Extremism => "Экстремизм",
                Self::HumanTrafficking => "Торговля людьми",
                Self::Bribery => "Взяточничество",
                Self::Extortion => "Вымогательство",
                Self::Fraud => "Мошенничество",
                Self::Theft => "Кража",
                Self::IntentionalHomicide => "Умышленное убийство",
                Self::Rape => "Изнасилование",
                Self::Robbery => "Разбой",
                Self::Looting => "Грабеж",
                Self::Hooliganism => "Хулиганство",
            },
        }
    }
}

/// One of the three crime-statistics datasets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DatasetKey {
    /// Detectable crimes.
    Aniqlanadigan,
    /// Cyber crimes.
    Kiber,
    /// Preventable crimes.
    OldiniOlish,
}

impl DatasetKey {
    /// Returns the raw key string (e.g. `"oldini_olish"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Aniqlanadigan => "aniqlanadigan",
            Self::Kiber => "kiber",
            Self::OldiniOlish => "oldini_olish",
        }
    }

    /// Returns the uppercase prefix used in generated incident ids.
    #[must_use]
    pub fn id_prefix(self) -> String {
        self.key().to_uppercase()
    }

    /// Returns the single display type assigned to every incident
    /// generated from this dataset.
    #[must_use]
    pub const fn crime_type(self) -> CrimeType {
        match self {
            Self::Aniqlanadigan => CrimeType::Theft,
            Self::Kiber => CrimeType::Traffic,
            Self::OldiniOlish => CrimeType::Burglary,
        }
    }

    /// Returns the ordered filter keys valid for this dataset. Order is
    /// significant: the classifier indexes into this slice.
    #[must_use]
    pub const fn filter_keys(self) -> &'static [CrimeFilterKey] {
        match self {
            Self::Aniqlanadigan => &[
                CrimeFilterKey::Drugs,
                CrimeFilterKey::Extremism,
                CrimeFilterKey::HumanTrafficking,
                CrimeFilterKey::Bribery,
            ],
            Self::Kiber => &[
                CrimeFilterKey::Extortion,
                CrimeFilterKey::Fraud,
                CrimeFilterKey::Theft,
            ],
            Self::OldiniOlish => &[
                CrimeFilterKey::IntentionalHomicide,
                CrimeFilterKey::Rape,
                CrimeFilterKey::Robbery,
                CrimeFilterKey::Looting,
                CrimeFilterKey::Fraud,
                CrimeFilterKey::Theft,
                CrimeFilterKey::Hooliganism,
            ],
        }
    }

    /// Returns the name of the aggregate JSON file holding this dataset.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Aniqlanadigan => "aniqlanadigan_jinoyatlar.json",
            Self::Kiber => "kiber_jinoyat.json",
            Self::OldiniOlish => "oldini_olish.json",
        }
    }

    /// Returns the translated dataset title.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Aniqlanadigan) => "Detectable Crimes",
            (Language::En, Self::Kiber) => "Cyber Crimes",
            (Language::En, Self::OldiniOlish) => "Preventable Crimes",
            (Language::Uz, Self::Aniqlanadigan) => "Aniqlanadigan jinoyatlar",
            (Language::Uz, Self::Kiber) => "Kiber jinoyatlar",
            (Language::Uz, Self::OldiniOlish) => "Oldini olish mumkin bo`lgan jinoyatlar",
            (Language::Ru, Self::Aniqlanadigan) => "Выявляемые преступления",
            (Language::Ru, Self::Kiber) => "Киберпреступления",
            (Language::Ru, Self::OldiniOlish) => "Предотвращаемые преступления",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Aniqlanadigan, Self::Kiber, Self::OldiniOlish]
    }
}

/// UI language.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Uz,
    Ru,
}

impl Language {
    /// English name of the language, used when instructing an LLM which
    /// language to answer in.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Uz => "Uzbek",
            Self::Ru => "Russian",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn crime_type_display_matches_serde_names() {
        for crime_type in CrimeType::all() {
            let json = serde_json::to_value(crime_type).unwrap();
            assert_eq!(json.as_str(), Some(crime_type.to_string().as_str()));
        }
        assert_eq!(CrimeType::Traffic.to_string(), "Traffic Violation");
        assert_eq!(CrimeType::from_str("Narcotics").unwrap(), CrimeType::Drugs);
    }

    #[test]
    fn dataset_keys_round_trip_through_strum() {
        for dataset in DatasetKey::all() {
            assert_eq!(dataset.to_string(), dataset.key());
            assert_eq!(DatasetKey::from_str(dataset.key()).unwrap(), *dataset);
        }
        assert_eq!(DatasetKey::OldiniOlish.id_prefix(), "OLDINI_OLISH");
    }

    #[test]
    fn every_dataset_has_filter_keys() {
        for dataset in DatasetKey::all() {
            assert!(
                !dataset.filter_keys().is_empty(),
                "{dataset:?} has no filter keys"
            );
        }
    }

    #[test]
    fn filter_keys_serialize_snake_case() {
        let json = serde_json::to_value(CrimeFilterKey::HumanTrafficking).unwrap();
        assert_eq!(json, "human_trafficking");
        assert_eq!(
            CrimeFilterKey::from_str("intentional_homicide").unwrap(),
            CrimeFilterKey::IntentionalHomicide
        );
    }

    #[test]
    fn language_defaults_to_uzbek() {
        assert_eq!(Language::default(), Language::Uz);
        assert_eq!(Language::from_str("ru").unwrap().english_name(), "Russian");
    }
}
