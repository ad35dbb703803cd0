//! All four semantic types on one struct, full accessor form.

use typed_accessors::typed_accessors;

#[typed_accessors]
#[derive(Default)]
pub struct Sensor {
    #[accessor(float)]
    distance: Option<f64>,
    #[accessor(int)]
    count: Option<i64>,
    #[accessor(bool_yn)]
    onfire: Option<bool>,
    #[accessor(date)]
    day: Option<chrono::NaiveDate>,
}

fn main() {
    let mut sensor = Sensor::default();

    sensor.set_distance("12.5").unwrap();
    sensor.set_count(42.9).unwrap();
    sensor.set_onfire("yes");
    sensor.set_day("2024-01-15").unwrap();

    assert_eq!(sensor.distance(), Some(12.5));
    assert_eq!(sensor.count(), Some(42));
    assert_eq!(sensor.onfire(), Some(true));
    assert_eq!(
        sensor.day(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}
