use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use promobot::jobs::payments::{sum_for_date, summary_slot, SummarySlot};
use promobot::jobs::scheduler::next_midnight;
use promobot::util::{format_date, local_date};

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn sums_only_exact_date_matches() {
    let dates = strings(&["01.08.2026", "02.08.2026", "01.08.2026", "1.8.2026"]);
    let amounts = strings(&["100", "999", "250", "777"]);
    assert_eq!(sum_for_date(&dates, &amounts, "01.08.2026"), 350);
}

#[test]
fn non_numeric_amounts_are_skipped() {
    let dates = strings(&["01.08.2026", "01.08.2026", "01.08.2026"]);
    let amounts = strings(&["100", "n/a", "1 200"]);
    assert_eq!(sum_for_date(&dates, &amounts, "01.08.2026"), 100);
}

#[test]
fn missing_amount_cells_do_not_panic() {
    // The amount column can be shorter than the date column when trailing
    // cells are empty.
    let dates = strings(&["01.08.2026", "01.08.2026"]);
    let amounts = strings(&["40"]);
    assert_eq!(sum_for_date(&dates, &amounts, "01.08.2026"), 40);
}

#[test]
fn no_matches_sum_to_zero() {
    let dates = strings(&["02.08.2026"]);
    let amounts = strings(&["500"]);
    assert_eq!(sum_for_date(&dates, &amounts, "01.08.2026"), 0);
}

#[test]
fn summary_overwrites_an_existing_date_row() {
    let existing = strings(&["Дата", "31.07.2026", "01.08.2026"]);
    assert_eq!(
        summary_slot(&existing, "01.08.2026"),
        SummarySlot::Existing(3)
    );
}

#[test]
fn summary_appends_after_the_last_occupied_row() {
    let existing = strings(&["Дата", "31.07.2026"]);
    assert_eq!(summary_slot(&existing, "01.08.2026"), SummarySlot::Append(3));
    assert_eq!(summary_slot(&[], "01.08.2026"), SummarySlot::Append(1));
}

#[test]
fn next_midnight_in_a_fixed_offset_zone() {
    let tz: Tz = "Europe/Moscow".parse().unwrap();
    // 13:00 in Moscow -> next midnight is 21:00 UTC the same day.
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
    assert_eq!(
        next_midnight(now, tz),
        Utc.with_ymd_and_hms(2026, 8, 7, 21, 0, 0).unwrap()
    );
}

#[test]
fn next_midnight_just_before_and_at_the_boundary() {
    let tz: Tz = "Europe/Moscow".parse().unwrap();
    let almost = Utc.with_ymd_and_hms(2026, 8, 7, 20, 59, 59).unwrap();
    let boundary = Utc.with_ymd_and_hms(2026, 8, 7, 21, 0, 0).unwrap();
    assert_eq!(next_midnight(almost, tz), boundary);
    // Exactly at midnight the job must arm for the following day, not now.
    assert_eq!(
        next_midnight(boundary, tz),
        Utc.with_ymd_and_hms(2026, 8, 8, 21, 0, 0).unwrap()
    );
}

#[test]
fn next_midnight_rolls_over_the_year() {
    let tz: Tz = "Europe/Moscow".parse().unwrap();
    // 01:00 Moscow on Jan 1 -> next midnight is Jan 2, i.e. Jan 1 21:00 UTC.
    let now = Utc.with_ymd_and_hms(2026, 12, 31, 22, 0, 0).unwrap();
    assert_eq!(
        next_midnight(now, tz),
        Utc.with_ymd_and_hms(2027, 1, 1, 21, 0, 0).unwrap()
    );
}

#[test]
fn next_midnight_survives_a_skipped_midnight() {
    // Brazil's old DST began at local midnight: on 2018-11-04 the São Paulo
    // clock jumped straight from 00:00 to 01:00, so midnight itself does not
    // exist and the job runs at the first hour that does.
    let tz: Tz = "America/Sao_Paulo".parse().unwrap();
    let now = Utc.with_ymd_and_hms(2018, 11, 3, 12, 0, 0).unwrap();
    assert_eq!(
        next_midnight(now, tz),
        Utc.with_ymd_and_hms(2018, 11, 4, 3, 0, 0).unwrap()
    );
}

#[test]
fn date_strings_use_day_month_year() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(format_date(date), "07.08.2026");
}

#[test]
fn local_date_respects_the_zone() {
    let tz: Tz = "Europe/Moscow".parse().unwrap();
    // 22:30 UTC is already the next day in Moscow.
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 22, 30, 0).unwrap();
    assert_eq!(
        local_date(now, tz),
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    );
}
