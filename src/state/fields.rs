//! Static registry of the 24 clinical input fields
//!
//! Field keys and choice literals are part of the wire payload sent to
//! the prediction endpoint and must not be renamed.

/// Number of display groups the form is split into
pub const GROUP_COUNT: usize = 3;

/// Titles shown in the progress bar, one per group
pub const GROUP_TITLES: [&str; GROUP_COUNT] = ["Basic & Vitals", "Lab Values", "Clinical History"];

const NORMAL_ABNORMAL: &[&str] = &["normal", "abnormal"];
const PRESENT_NOTPRESENT: &[&str] = &["present", "notpresent"];
const YES_NO: &[&str] = &["yes", "no"];
const GOOD_POOR: &[&str] = &["good", "poor"];

/// Input kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form numeric entry, sent as a JSON number (omitted when blank)
    Numeric,
    /// One of a fixed, ordered set of string choices
    Choice(&'static [&'static str]),
}

/// Immutable descriptor for a single form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Payload key (wire contract)
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Example value shown while the field is empty
    pub placeholder: Option<&'static str>,
    /// Display-only unit suffix
    pub unit: Option<&'static str>,
}

impl FieldSpec {
    const fn numeric(
        key: &'static str,
        label: &'static str,
        placeholder: &'static str,
        unit: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Numeric,
            placeholder: Some(placeholder),
            unit,
        }
    }

    const fn choice(
        key: &'static str,
        label: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Choice(choices),
            placeholder: None,
            unit: None,
        }
    }

    /// Declared choices, or an empty slice for numeric fields
    pub fn choices(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(choices) => choices,
            FieldKind::Numeric => &[],
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Numeric)
    }
}

/// The 24 fields in submission order
pub const FIELDS: [FieldSpec; 24] = [
    FieldSpec::numeric("Age", "Age", "e.g. 45", Some("yrs")),
    FieldSpec::numeric("Blood_Pressure", "Blood Pressure", "e.g. 80", Some("mm/Hg")),
    FieldSpec::numeric("Specific_Gravity", "Specific Gravity", "e.g. 1.020", None),
    FieldSpec::numeric("Albumin", "Albumin", "0-5", Some("g/dL")),
    FieldSpec::numeric("Sugar", "Sugar", "0-5", Some("g/dL")),
    FieldSpec::choice("Red_Blood_Cells", "Red Blood Cells", NORMAL_ABNORMAL),
    FieldSpec::choice("Pus_Cell", "Pus Cell", NORMAL_ABNORMAL),
    FieldSpec::choice("Pus_Cell_Clumps", "Pus Cell Clumps", PRESENT_NOTPRESENT),
    FieldSpec::choice("Bacteria", "Bacteria", PRESENT_NOTPRESENT),
    FieldSpec::numeric(
        "Blood_Glucose_Random",
        "Blood Glucose (Random)",
        "e.g. 121",
        Some("mg/dL"),
    ),
    FieldSpec::numeric("Blood_Urea", "Blood Urea", "e.g. 36", Some("mg/dL")),
    FieldSpec::numeric(
        "Serum_Creatinine",
        "Serum Creatinine",
        "e.g. 1.2",
        Some("mg/dL"),
    ),
    FieldSpec::numeric("Sodium", "Sodium", "e.g. 138", Some("mEq/L")),
    FieldSpec::numeric("Potassium", "Potassium", "e.g. 4.5", Some("mEq/L")),
    FieldSpec::numeric("Hemoglobin", "Hemoglobin", "e.g. 13.5", Some("g/dL")),
    FieldSpec::numeric("Packed_Cell_Volume", "Packed Cell Volume", "e.g. 44", None),
    FieldSpec::numeric(
        "White_Blood_Cell_Count",
        "WBC Count",
        "e.g. 7800",
        Some("cells/cumm"),
    ),
    FieldSpec::numeric(
        "Red_Blood_Cell_Count",
        "RBC Count",
        "e.g. 5.2",
        Some("millions/cmm"),
    ),
    FieldSpec::choice("Hypertension", "Hypertension", YES_NO),
    FieldSpec::choice("Diabetes_Mellitus", "Diabetes Mellitus", YES_NO),
    FieldSpec::choice(
        "Coronary_Artery_Disease",
        "Coronary Artery Disease",
        YES_NO,
    ),
    FieldSpec::choice("Appetite", "Appetite", GOOD_POOR),
    FieldSpec::choice("Pedal_Edema", "Pedal Edema", YES_NO),
    FieldSpec::choice("Anemia", "Anemia", YES_NO),
];

/// Fields per group (ceiling division so the last group may be shorter)
pub fn group_size() -> usize {
    FIELDS.len().div_ceil(GROUP_COUNT)
}

/// Index range of `FIELDS` covered by a display group
pub fn group_range(group: usize) -> std::ops::Range<usize> {
    let size = group_size();
    let start = (group * size).min(FIELDS.len());
    let end = ((group + 1) * size).min(FIELDS.len());
    start..end
}

/// The contiguous slice of field specs for a display group
pub fn group_fields(group: usize) -> &'static [FieldSpec] {
    &FIELDS[group_range(group)]
}
