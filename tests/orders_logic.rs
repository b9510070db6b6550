use promobot::sheets::orders::{target_row, RequestFields};
use promobot::sheets::{CellWrite, Schema, FIRST_DATA_ROW};

fn lines(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn short_request_payload_is_placeholder_filled() {
    // Trailing newline in the message yields a present-but-empty fourth line;
    // only genuinely absent lines get the placeholder.
    let fields = RequestFields::from_lines(
        &lines(&["#заявка_Shop1", "Jane", "1000", "1200", ""]),
        "-",
    );
    assert_eq!(fields.full_name, "Jane");
    assert_eq!(fields.buyout_price, "1000");
    assert_eq!(fields.payment_price, "1200");
    assert_eq!(fields.payment_details, "");
    assert_eq!(fields.ad_date, "-");
    assert_eq!(fields.size, "-");
    assert_eq!(fields.social_link, "-");
    assert_eq!(fields.article_number, "-");
}

#[test]
fn full_request_payload_maps_in_order() {
    let fields = RequestFields::from_lines(
        &lines(&[
            "#заявка_Shop1",
            "Jane Doe",
            "1000",
            "1200",
            "card 1234",
            "10.08.2026",
            "M",
            "https://example.com/jane",
            "A-77",
        ]),
        "-",
    );
    assert_eq!(fields.full_name, "Jane Doe");
    assert_eq!(fields.buyout_price, "1000");
    assert_eq!(fields.payment_price, "1200");
    assert_eq!(fields.payment_details, "card 1234");
    assert_eq!(fields.ad_date, "10.08.2026");
    assert_eq!(fields.size, "M");
    assert_eq!(fields.social_link, "https://example.com/jane");
    assert_eq!(fields.article_number, "A-77");
}

#[test]
fn appends_start_at_the_data_region() {
    // Untouched discovery column: the row lands on the first data row.
    assert_eq!(target_row(0), FIRST_DATA_ROW);
    // Two header rows occupied: same landing spot.
    assert_eq!(target_row(2), FIRST_DATA_ROW);
}

#[test]
fn sequential_appends_never_collide() {
    // An empty list gains its first order on row 3. The store then reports
    // three occupied rows in the discovery column (two blanks plus the new
    // order), so the next append under the same lock targets row 4.
    let first = target_row(0);
    assert_eq!(first, 3);
    let second = target_row(first as usize);
    assert_eq!(second, 4);
}

#[test]
fn cell_writes_use_a1_ranges() {
    let write = CellWrite::new("Shop1", "P", 3, "12345");
    assert_eq!(write.range, "Shop1!P3");
    assert_eq!(write.value, "12345");
}

#[test]
fn cleared_row_range_spans_the_whole_layout() {
    let schema = Schema::default();
    let (first, last) = schema.row_bounds();
    assert_eq!((first, last), ("A", "Q"));
}
