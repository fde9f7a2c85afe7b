use chrono::{NaiveDateTime, TimeDelta};

/// Conversion from a domain record to a flat row of named fields.
///
/// Both sinks consume this view: the CSV writer turns `None` into an empty
/// cell, the SQL writer binds it as NULL.
pub trait Record {
    /// Entity-kind key; also the output file / table name.
    const KIND: &'static str;

    fn header() -> &'static [&'static str];

    fn values(&self) -> Vec<Option<String>>;
}

/// One entity kind rendered as rows, ready for a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRows {
    pub kind: &'static str,
    pub header: &'static [&'static str],
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableRows {
    pub fn of<R: Record>(records: &[R]) -> Self {
        Self {
            kind: R::KIND,
            header: R::header(),
            rows: records.iter().map(Record::values).collect(),
        }
    }
}

pub fn text(value: impl ToString) -> Option<String> {
    Some(value.to_string())
}

pub fn opt_text<T: ToString>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(ToString::to_string)
}

pub fn timestamp(value: &NaiveDateTime) -> Option<String> {
    Some(value.format("%Y-%m-%d %H:%M:%S").to_string())
}

pub fn opt_timestamp(value: &Option<NaiveDateTime>) -> Option<String> {
    value.as_ref().and_then(timestamp)
}

/// Durations are emitted as whole seconds.
pub fn duration_secs(value: &TimeDelta) -> Option<String> {
    Some(value.num_seconds().to_string())
}
