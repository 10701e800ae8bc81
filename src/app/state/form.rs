use crate::app::effects::SubmitTicket;
use crate::core::LocationCategory;
use crate::shared::FormField;
use indexmap::IndexMap;

/// Rohwerte der Formularfelder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub category: LocationCategory,
    pub description: String,
    pub website: String,
    pub photo_url: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub submitted_by: String,
    pub contact_email: String,
    pub consent: bool,
}

/// Einzelne Feldänderung aus der UI.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Category(LocationCategory),
    Description(String),
    Website(String),
    PhotoUrl(String),
    Address(String),
    Latitude(Option<f64>),
    Longitude(Option<f64>),
    SubmittedBy(String),
    ContactEmail(String),
    Consent(bool),
}

impl FieldEdit {
    /// Betroffenes Feld.
    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::Name(_) => FormField::Name,
            FieldEdit::Category(_) => FormField::Category,
            FieldEdit::Description(_) => FormField::Description,
            FieldEdit::Website(_) => FormField::Website,
            FieldEdit::PhotoUrl(_) => FormField::PhotoUrl,
            FieldEdit::Address(_) => FormField::Address,
            FieldEdit::Latitude(_) => FormField::Latitude,
            FieldEdit::Longitude(_) => FormField::Longitude,
            FieldEdit::SubmittedBy(_) => FormField::SubmittedBy,
            FieldEdit::ContactEmail(_) => FormField::ContactEmail,
            FieldEdit::Consent(_) => FormField::Consent,
        }
    }
}

/// Zustand des Einreichungsformulars.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub values: FormValues,
    /// Feldfehler der letzten Prüfung, in Feldreihenfolge
    pub errors: IndexMap<FormField, String>,
    /// Submit läuft oder Erfolgsmeldung steht noch (Button deaktiviert)
    pub submitting: bool,
    /// Erfolgsmeldung sichtbar
    pub show_success: bool,
    /// Fehlermeldung des letzten Submits sichtbar
    pub show_error: bool,
    /// Zuletzt ausgegebenes Submit-Ticket
    pub latest_submit: Option<SubmitTicket>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nächstes Submit-Ticket ausgeben und als aktuell merken.
    pub fn issue_submit_ticket(&mut self) -> SubmitTicket {
        let next = self.latest_submit.map_or(1, |t| t.0 + 1);
        let ticket = SubmitTicket(next);
        self.latest_submit = Some(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: SubmitTicket) -> bool {
        self.latest_submit == Some(ticket)
    }

    /// Länge der Beschreibung in Zeichen (nicht Bytes).
    pub fn description_len(&self) -> usize {
        self.values.description.chars().count()
    }
}
