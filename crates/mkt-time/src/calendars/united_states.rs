//! U.S. equities market (NYSE / Nasdaq) holiday catalogue.
//!
//! Holidays, in catalogue order:
//! * New Year's Day (Jan 1; if Sun → Mon; if Sat → not observed)
//! * Martin Luther King Jr. Day (3rd Mon in Jan)
//! * Presidents' Day / Washington's Birthday (3rd Mon in Feb)
//! * Good Friday (Easter Sunday − 2)
//! * Memorial Day (last Mon in May)
//! * Juneteenth (Jun 19, from 2022; if Sun → Mon; if Sat → Fri)
//! * Independence Day (Jul 4; if Sun → Mon; if Sat → Fri)
//! * Labor Day (1st Mon in Sep)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25; if Sun → Mon; if Sat → Fri)
//! * National day of mourning for President Carter (Jan 9, 2025 only)

use crate::date::Date;
use crate::holiday::HolidayRule;
use crate::holiday_calendar::HolidayCatalogue;
use crate::month::Month;
use crate::weekday::Weekday;

/// Name of the canonical catalogue.
pub const US_EQUITIES: &str = "US Equities";

/// First year the exchanges closed for Juneteenth.
pub const JUNETEENTH_FIRST_YEAR: i32 = 2022;

/// Build the canonical U.S. equities holiday catalogue.
///
/// # Panics
/// Only if one of the constants below is not a real date, which would be a
/// defect in this file rather than a runtime condition.
pub fn us_equities_catalogue() -> HolidayCatalogue {
    const DEFECT: &str = "US equities catalogue constants are valid";
    let rules = vec![
        HolidayRule::new_years("New Years"),
        HolidayRule::nth_weekday("Martin Luther King Day", Month::January, Weekday::Monday, 3)
            .expect(DEFECT),
        HolidayRule::nth_weekday("Presidents Day", Month::February, Weekday::Monday, 3)
            .expect(DEFECT),
        HolidayRule::good_friday("Good Friday"),
        HolidayRule::last_weekday("Memorial Day", Month::May, Weekday::Monday),
        HolidayRule::since_year("Juneteenth", Month::June, 19, JUNETEENTH_FIRST_YEAR)
            .expect(DEFECT),
        HolidayRule::month_day("Independence Day", Month::July, 4).expect(DEFECT),
        HolidayRule::nth_weekday("Labor Day", Month::September, Weekday::Monday, 1)
            .expect(DEFECT),
        HolidayRule::nth_weekday("Thanksgiving Day", Month::November, Weekday::Thursday, 4)
            .expect(DEFECT),
        HolidayRule::month_day("Christmas Day", Month::December, 25).expect(DEFECT),
        HolidayRule::one_time(
            "Carter Memorial",
            Date::from_ymd(2025, 1, 9).expect(DEFECT),
        ),
    ];
    HolidayCatalogue::new(US_EQUITIES, rules)
}
