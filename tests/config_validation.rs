use promobot::config::BotConfig;
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "hashtagMarker": "#",
        "requestHashtag": "#заявка",
        "paymentHashtag": "#оплата",
        "paidHashtag": "#выкуплено",
        "feedbackHashtag": "#отзыв",
        "rejectionHashtag": "#отказ",
        "greetingTrigger": "Вафелька",
        "emptyPlaceholder": "-",
        "handlePrefix": "@",
        "orderedStatus": "Заказано",
        "paidStatus": "Выкуплено",
        "paymentsList": "Оплаты",
        "summaryList": "Сводка",
        "timezone": "Europe/Moscow",
        "greetingReplies": ["на месте!", "слушаю"],
        "requestReplies": ["заявка принята"],
        "paymentReplies": ["оплата записана"],
        "paidReplies": ["выкуп записан"],
        "feedbackReplies": ["отзыв записан"],
        "rejectionReplies": ["заявка снята"],
        "wrongHashtagNotice": "не знаю такой хэштег",
        "missingReplyNotice": "нужен ответ на заявку",
        "mediaReplyNotice": "это ответ на фото",
        "incorrectReplyNotice": "это не ответ на заявку",
        "listNotFoundNotice": "нет такого списка"
    })
}

fn parse(value: Value) -> Result<BotConfig, String> {
    let config: BotConfig = serde_json::from_value(value).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

#[test]
fn sample_config_is_valid() {
    let config = parse(sample()).expect("sample config must validate");
    assert_eq!(config.tz(), chrono_tz::Europe::Moscow);
    assert_eq!(
        config.action_hashtags(),
        ["#оплата", "#выкуплено", "#отзыв", "#отказ"]
    );
}

#[test]
fn timezone_and_job_delay_have_defaults() {
    let mut value = sample();
    value.as_object_mut().unwrap().remove("timezone");
    let config = parse(value).expect("defaults must apply");
    assert_eq!(config.timezone, "Europe/Moscow");
    assert_eq!(config.job_delay_secs, 5);
}

#[test]
fn empty_reply_pool_is_rejected() {
    let mut value = sample();
    value["paidReplies"] = json!([]);
    let err = parse(value).unwrap_err();
    assert!(err.contains("paidReplies"), "unexpected error: {err}");
}

#[test]
fn hashtag_must_start_with_the_marker() {
    let mut value = sample();
    value["rejectionHashtag"] = json!("отказ");
    let err = parse(value).unwrap_err();
    assert!(err.contains("rejectionHashtag"), "unexpected error: {err}");
}

#[test]
fn unknown_timezone_is_rejected() {
    let mut value = sample();
    value["timezone"] = json!("Mars/Olympus_Mons");
    let err = parse(value).unwrap_err();
    assert!(err.contains("timezone"), "unexpected error: {err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let mut value = sample();
    value["hashtagRequest"] = json!("#заявка");
    assert!(parse(value).is_err());
}

#[test]
fn column_schema_is_seventeen_distinct_columns() {
    use promobot::sheets::Schema;
    let schema = Schema::default();
    schema.validate().expect("default schema must validate");

    let mut broken = schema;
    broken.order_number = "P";
    assert!(broken.validate().is_err(), "duplicate column must fail");

    let mut lowercase = schema;
    lowercase.handle = "a";
    assert!(lowercase.validate().is_err(), "lowercase column must fail");
}
