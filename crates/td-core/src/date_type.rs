//! Date types and the field names derived from their prefixes.

/// Name of the fact carrying an explicit, comma-separated resolution order.
pub const CALCULATED_DATES: &str = "calculatedDates";

/// The identity of a date being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateType {
    /// Next hearing date (mandatory).
    NextHearingDate,
    /// Due date (mandatory).
    DueDate,
    /// Priority date (mandatory).
    PriorityDate,
    /// An optional, dynamically named date; zero or more per batch.
    IntermediateDate,
}

impl DateType {
    /// The mandatory date types, in the only order they may be resolved in.
    pub const MANDATORY: [DateType; 3] = [
        DateType::NextHearingDate,
        DateType::DueDate,
        DateType::PriorityDate,
    ];

    /// The fixed field prefix of a mandatory date type.
    ///
    /// Intermediate dates have no fixed prefix.
    pub fn default_prefix(&self) -> Option<&'static str> {
        match self {
            DateType::NextHearingDate => Some("nextHearingDate"),
            DateType::DueDate => Some("dueDate"),
            DateType::PriorityDate => Some("priorityDate"),
            DateType::IntermediateDate => None,
        }
    }

    /// Classify a prefix. Anything that is not a mandatory prefix names an
    /// intermediate date.
    pub fn from_prefix(prefix: &str) -> DateType {
        Self::MANDATORY
            .into_iter()
            .find(|t| t.default_prefix() == Some(prefix))
            .unwrap_or(DateType::IntermediateDate)
    }

    /// Return `true` for the three mandatory date types.
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, DateType::IntermediateDate)
    }
}

impl std::fmt::Display for DateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DateType::NextHearingDate => "NEXT_HEARING_DATE",
            DateType::DueDate => "DUE_DATE",
            DateType::PriorityDate => "PRIORITY_DATE",
            DateType::IntermediateDate => "INTERMEDIATE_DATE",
        };
        write!(f, "{s}")
    }
}

/// Suffixes appended to a prefix to form the names of the facts a date type
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSuffix {
    /// `<prefix>`: the direct value.
    Value,
    /// `<prefix>Origin`: an absolute origin date.
    Origin,
    /// `<prefix>OriginRef`: origin taken from other dates.
    OriginRef,
    /// `<prefix>OriginEarliest`: earliest of other dates.
    OriginEarliest,
    /// `<prefix>OriginLatest`: latest of other dates.
    OriginLatest,
    /// `<prefix>Time`: time of day.
    Time,
    /// `<prefix>IntervalDays`.
    IntervalDays,
    /// `<prefix>NonWorkingCalendar`: comma-separated calendar ids.
    NonWorkingCalendar,
    /// `<prefix>NonWorkingDaysOfWeek`: comma-separated weekday names.
    NonWorkingDaysOfWeek,
    /// `<prefix>SkipNonWorkingDays`.
    SkipNonWorkingDays,
    /// `<prefix>MustBeWorkingDay`.
    MustBeWorkingDay,
}

impl FieldSuffix {
    /// Origin suffixes, most specific first.
    pub const ORIGINS: [FieldSuffix; 4] = [
        FieldSuffix::OriginEarliest,
        FieldSuffix::OriginLatest,
        FieldSuffix::OriginRef,
        FieldSuffix::Origin,
    ];

    /// The literal suffix text.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSuffix::Value => "",
            FieldSuffix::Origin => "Origin",
            FieldSuffix::OriginRef => "OriginRef",
            FieldSuffix::OriginEarliest => "OriginEarliest",
            FieldSuffix::OriginLatest => "OriginLatest",
            FieldSuffix::Time => "Time",
            FieldSuffix::IntervalDays => "IntervalDays",
            FieldSuffix::NonWorkingCalendar => "NonWorkingCalendar",
            FieldSuffix::NonWorkingDaysOfWeek => "NonWorkingDaysOfWeek",
            FieldSuffix::SkipNonWorkingDays => "SkipNonWorkingDays",
            FieldSuffix::MustBeWorkingDay => "MustBeWorkingDay",
        }
    }
}

/// A date type paired with the concrete prefix its facts are named after.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTypeObject {
    date_type: DateType,
    prefix: String,
}

impl DateTypeObject {
    /// Pair a date type with a prefix.
    pub fn new(date_type: DateType, prefix: impl Into<String>) -> Self {
        Self {
            date_type,
            prefix: prefix.into(),
        }
    }

    /// Build the instance for a prefix, classifying it with
    /// [`DateType::from_prefix`].
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(DateType::from_prefix(&prefix), prefix)
    }

    /// The instance for a mandatory date type under its fixed prefix.
    pub fn mandatory(date_type: DateType) -> Option<Self> {
        date_type
            .default_prefix()
            .map(|p| Self::new(date_type, p))
    }

    /// The date type.
    pub fn date_type(&self) -> DateType {
        self.date_type
    }

    /// The field-name prefix, also the key the result is stored under.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the fact `<prefix><suffix>`.
    pub fn field(&self, suffix: FieldSuffix) -> String {
        format!("{}{}", self.prefix, suffix.as_str())
    }
}
