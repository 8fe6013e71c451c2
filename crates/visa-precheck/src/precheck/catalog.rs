use serde::{Deserialize, Serialize};

/// The six document categories a Schengen application is expected to carry.
/// This enum is the whole required-document catalog: declaration order is
/// display order, and every component resolves keys and labels through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredDocument {
    Passport,
    BankStatement,
    TravelInsurance,
    FlightReservation,
    Accommodation,
    ApplicationForm,
}

impl RequiredDocument {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Passport,
            Self::BankStatement,
            Self::TravelInsurance,
            Self::FlightReservation,
            Self::Accommodation,
            Self::ApplicationForm,
        ]
    }

    /// Stable key shared with the upstream classifier's vocabulary.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::BankStatement => "bank_statement",
            Self::TravelInsurance => "travel_insurance",
            Self::FlightReservation => "flight_reservation",
            Self::Accommodation => "accommodation",
            Self::ApplicationForm => "application_form",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Passport => "Pasaport",
            Self::BankStatement => "Banka Dökümü",
            Self::TravelInsurance => "Seyahat Sağlık Sigortası",
            Self::FlightReservation => "Uçuş Rezervasyonu",
            Self::Accommodation => "Konaklama Belgesi",
            Self::ApplicationForm => "Başvuru Formu",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|doc| doc.key() == raw)
    }
}
