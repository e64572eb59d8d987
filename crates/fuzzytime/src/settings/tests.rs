use crate::{Settings, compute_phrase};

#[test]
fn partial_documents_merge_over_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "allow_future": true,
            "countdown_cutoff": 600,
            "strings": { "suffix_from_now": "to go", "numbers": ["zero", "one", "two"] }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.refresh_millis, 60_000);
    assert!(settings.allow_future);
    assert_eq!(settings.countdown_cutoff, Some(600.0));
    assert_eq!(settings.countup_cutoff, None);
    assert_eq!(settings.thresholds, [0.0]);

    assert_eq!(compute_phrase(-3 * 86_400_000, &settings), "3 days to go");
    assert_eq!(compute_phrase(2 * 60_000, &settings), "two minutes ago");
}

#[test]
fn null_suffix_disables_it() {
    let settings: Settings = serde_json::from_str(r#"{ "strings": { "suffix_ago": null } }"#).unwrap();
    assert_eq!(compute_phrase(60_000, &settings), "about a minute");
}

#[test]
fn empty_document_is_the_default() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.refresh_millis, Settings::default().refresh_millis);
    assert!(!settings.fire_thresholds);
}

#[test]
fn false_cutoffs_are_disabled() {
    let settings: Settings =
        serde_json::from_str(r#"{ "countdown_cutoff": false, "countup_cutoff": null }"#).unwrap();
    assert_eq!(settings.countdown_cutoff, None);
    assert_eq!(settings.countup_cutoff, None);

    let settings: Settings = serde_json::from_str(r#"{ "countup_cutoff": 30.5 }"#).unwrap();
    assert_eq!(settings.countup_cutoff, Some(30.5));

    assert!(serde_json::from_str::<Settings>(r#"{ "countdown_cutoff": true }"#).is_err());
}
