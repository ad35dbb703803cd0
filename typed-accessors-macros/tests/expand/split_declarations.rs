//! Reader-only and writer-only declarations, plus untouched plain fields
//! and a duplicate declaration merging into one accessor pair.

use typed_accessors::typed_accessors;

#[typed_accessors]
#[derive(Default)]
pub struct Report {
    #[reader(bool_yn)]
    approved: Option<bool>,
    #[writer(float)]
    score: Option<f64>,
    #[reader(int)]
    #[writer(int)]
    revision: Option<i64>,
    label: String,
}

fn main() {
    let mut report = Report::default();

    // Writer-only slot: stored value observed through the plain field.
    report.set_score("99.5").unwrap();
    assert_eq!(report.score, Some(99.5));

    // Reader-only slot reads the field as-is.
    report.approved = Some(true);
    assert_eq!(report.approved(), Some(true));

    // reader + writer of one type behaves like a full accessor.
    report.set_revision(3).unwrap();
    assert_eq!(report.revision(), Some(3));

    report.label = "ok".to_owned();
}
