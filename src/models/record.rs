use serde::Serialize;

/// The scalar fields extracted from a travel document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    PassportNumber,
    Nationality,
    DateOfBirth,
    Gender,
    IssueDate,
    ExpiryDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::PassportNumber,
        Field::Nationality,
        Field::DateOfBirth,
        Field::Gender,
        Field::IssueDate,
        Field::ExpiryDate,
    ];

    /// Key used in exported JSON
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::PassportNumber => "passportNumber",
            Field::Nationality => "nationality",
            Field::DateOfBirth => "dateOfBirth",
            Field::Gender => "gender",
            Field::IssueDate => "issueDate",
            Field::ExpiryDate => "expiryDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::PassportNumber => "Passport Number",
            Field::Nationality => "Nationality",
            Field::DateOfBirth => "Date of Birth",
            Field::Gender => "Gender",
            Field::IssueDate => "Date of Issue",
            Field::ExpiryDate => "Date of Expiry",
        }
    }
}

/// Result of a single parse call.
///
/// Every scalar field is either `None` or a fully formatted, non-empty value.
/// Dates are `DD/MM/YYYY`, gender is `Male` or `Female`, names are
/// `GIVEN SURNAME`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub full_name: Option<String>,
    pub passport_number: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub mrz_lines: Vec<String>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Sets `field` unless it already holds a value. Empty values are ignored.
    /// Returns whether the value was stored.
    pub fn set_if_absent(&mut self, field: Field, value: String) -> bool {
        if value.is_empty() {
            return false;
        }
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn is_absent(&self, field: Field) -> bool {
        self.slot(field).is_none()
    }

    /// Copies every field of `other` that is still absent here.
    pub fn merge_absent(&mut self, other: ParsedRecord) {
        for field in Field::ALL {
            if let Some(value) = other.get(field) {
                self.set_if_absent(field, value.to_string());
            }
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when no scalar field was extracted
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_none())
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::FullName => &self.full_name,
            Field::PassportNumber => &self.passport_number,
            Field::Nationality => &self.nationality,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Gender => &self.gender,
            Field::IssueDate => &self.issue_date,
            Field::ExpiryDate => &self.expiry_date,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::PassportNumber => &mut self.passport_number,
            Field::Nationality => &mut self.nationality,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Gender => &mut self.gender,
            Field::IssueDate => &mut self.issue_date,
            Field::ExpiryDate => &mut self.expiry_date,
        }
    }
}
