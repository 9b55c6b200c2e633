// tests/views.rs
//
// RoundView filtering/ordering and default-pair resolution.
//
use boxstats::aggregate::RoundFilter;
use boxstats::data::{FightData, RoundView};
use boxstats::records::{FeatureAvailability, RoundRecord};
use boxstats::registry::{self, DatasetEntry};

fn rec(round: u32, boxer: &str, control: f64) -> RoundRecord {
    RoundRecord {
        round,
        boxer: boxer.into(),
        punches_thrown: 50,
        punches_landed: 20,
        sig_punches_thrown: 30,
        sig_punches_landed: 10,
        head_punches_landed: 6,
        body_punches_landed: 4,
        jabs_landed: 10,
        power_punches_landed: 10,
        ring_control_pct: control,
    }
}

fn fight(records: Vec<RoundRecord>) -> FightData {
    let features = FeatureAvailability {
        ring_control: records.iter().any(|r| r.ring_control_pct > 0.0),
        head_body: true,
        jab_power: true,
    };
    FightData {
        label: "Fixture".into(),
        records,
        features,
    }
}

#[test]
fn view_keeps_only_the_selected_pair() {
    let raw = fight(vec![
        rec(1, "A", 50.0),
        rec(1, "B", 50.0),
        rec(1, "C", 0.0),
        rec(2, "A", 50.0),
    ]);
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    assert_eq!(view.len(), 3);
    assert!(view.records().all(|r| r.boxer == "A" || r.boxer == "B"));
}

#[test]
fn view_orders_by_round_then_boxer() {
    let raw = fight(vec![
        rec(2, "B", 50.0),
        rec(1, "B", 50.0),
        rec(2, "A", 50.0),
        rec(1, "A", 50.0),
    ]);
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    let order: Vec<(u32, String)> = view.records().map(|r| (r.round, r.boxer.clone())).collect();
    assert_eq!(
        order,
        vec![
            (1, "A".into()),
            (1, "B".into()),
            (2, "A".into()),
            (2, "B".into()),
        ]
    );
}

#[test]
fn round_filter_narrows_the_view() {
    let raw = fight(vec![rec(1, "A", 50.0), rec(2, "A", 50.0), rec(2, "B", 50.0)]);
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::Round(2));
    assert_eq!(view.len(), 2);
    assert_eq!(view.rounds(), vec![2]);

    let empty = RoundView::from_fight(&raw, "A", "B", RoundFilter::Round(7));
    assert!(empty.is_empty());
    assert!(empty.record(0).is_none());
}

#[test]
fn series_follow_one_boxer_round_ascending() {
    let raw = fight(vec![
        rec(2, "A", 60.0),
        rec(1, "A", 40.0),
        rec(1, "B", 60.0),
        rec(2, "B", 40.0),
    ]);
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    let series = view.series_for("A", |r| r.ring_control_pct);
    assert_eq!(series, vec![(1, 40.0), (2, 60.0)]);
}

#[test]
fn ring_control_degrades_when_view_is_all_zero() {
    // Tracked in the fight overall, but the selected round has no reading.
    let mut r2 = rec(2, "A", 0.0);
    r2.ring_control_pct = 0.0;
    let raw = fight(vec![rec(1, "A", 55.0), rec(1, "B", 45.0), r2, rec(2, "B", 0.0)]);
    assert!(raw.features.ring_control);

    let all = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    assert!(all.ring_control_available());

    let round2 = RoundView::from_fight(&raw, "A", "B", RoundFilter::Round(2));
    assert!(!round2.ring_control_available());
}

#[test]
fn head_body_degrades_with_the_feature_flag() {
    let mut raw = fight(vec![rec(1, "A", 50.0), rec(1, "B", 50.0)]);
    raw.features.head_body = false;
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    assert!(!view.head_body_available());
}

#[test]
fn owned_rows_match_record_headers() {
    let raw = fight(vec![rec(1, "A", 50.0)]);
    let view = RoundView::from_fight(&raw, "A", "B", RoundFilter::AllRounds);
    let rows = view.to_owned_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), RoundRecord::HEADERS.len());
    assert_eq!(rows[0][1], "A");
}

#[test]
fn fight_lists_boxers_sorted_and_rounds_ascending() {
    let raw = fight(vec![rec(2, "Zed", 50.0), rec(1, "Abe", 50.0), rec(1, "Zed", 50.0)]);
    assert_eq!(raw.boxers(), vec!["Abe".to_string(), "Zed".to_string()]);
    assert_eq!(raw.rounds(), vec![1, 2]);
}

/* ---------------- registry ---------------- */

fn entry(pair: Option<(&'static str, &'static str)>) -> DatasetEntry {
    DatasetEntry {
        label: "Fixture",
        file: "fixture.csv",
        default_pair: pair,
        source_note: "",
    }
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn registered_pair_wins_when_both_present() {
    let boxers = names(&["Abe", "Cid", "Zed"]);
    let pair = registry::resolve_default_pair(&entry(Some(("Zed", "Cid"))), &boxers);
    assert_eq!(pair, Some(("Zed".into(), "Cid".into())));
}

#[test]
fn unknown_registered_name_falls_back_alphabetically() {
    let boxers = names(&["Abe", "Cid", "Zed"]);
    let pair = registry::resolve_default_pair(&entry(Some(("Zed", "Nobody"))), &boxers);
    assert_eq!(pair, Some(("Abe".into(), "Cid".into())));
}

#[test]
fn no_registered_pair_falls_back_alphabetically() {
    let boxers = names(&["Abe", "Zed"]);
    let pair = registry::resolve_default_pair(&entry(None), &boxers);
    assert_eq!(pair, Some(("Abe".into(), "Zed".into())));
}

#[test]
fn fewer_than_two_boxers_resolves_to_none() {
    assert_eq!(registry::resolve_default_pair(&entry(None), &names(&["Abe"])), None);
    assert_eq!(registry::resolve_default_pair(&entry(None), &[]), None);
}

#[test]
fn registry_labels_are_unique_and_resolvable() {
    let all = registry::all();
    assert!(!all.is_empty());
    for (i, d) in all.iter().enumerate() {
        assert!(all.iter().skip(i + 1).all(|o| o.label != d.label));
        let found = registry::by_label(d.label).unwrap();
        assert_eq!(found.file, d.file);
        assert!(registry::data_path(d).ends_with(d.file));
    }
}
