// src/aggregate.rs
//
// Match aggregation and the winner heuristic.
//
// Pure functions over borrowed records; no caching here. The store memoizes
// loaded fights, views re-run these on every selection change.

use std::collections::BTreeMap;

use crate::records::{MatchAggregate, RoundRecord};

/// Round selection: the whole fight or one specific round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundFilter {
    AllRounds,
    Round(u32),
}

impl RoundFilter {
    pub fn label(&self) -> String {
        match self {
            RoundFilter::AllRounds => s!("All Rounds"),
            RoundFilter::Round(n) => format!("Round {}", n),
        }
    }
}

/// Round to one decimal place, matching the displayed precision.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Accuracy ratio with the divide-by-zero guard: a boxer who threw nothing
/// reads as 0% accuracy, not an error.
fn accuracy_pct(landed: u32, thrown: u32) -> f64 {
    round1(landed as f64 * 100.0 / thrown.max(1) as f64)
}

#[derive(Clone, Debug, Default)]
struct Tally {
    thrown: u32,
    landed: u32,
    sig_thrown: u32,
    sig_landed: u32,
    head_landed: u32,
    body_landed: u32,
    ring_control_sum: f64,
    rounds: u32,
}

/// Reduce `records` into one aggregate row per boxer present, plus the rows
/// for the two requested boxers. A requested boxer with no records yields
/// `None` ("statistics unavailable"), distinct from an all-zero row.
///
/// The full table is sorted by boxer name, so permuting the input changes
/// nothing in the output.
pub fn aggregate<'r, I>(
    records: I,
    boxer_a: &str,
    boxer_b: &str,
) -> (
    Option<MatchAggregate>,
    Option<MatchAggregate>,
    Vec<MatchAggregate>,
)
where
    I: IntoIterator<Item = &'r RoundRecord>,
{
    // BTreeMap keeps the table in name order for free.
    let mut groups: BTreeMap<String, Tally> = BTreeMap::new();

    for r in records {
        let t = groups.entry(r.boxer.clone()).or_default();
        t.thrown += r.punches_thrown;
        t.landed += r.punches_landed;
        t.sig_thrown += r.sig_punches_thrown;
        t.sig_landed += r.sig_punches_landed;
        t.head_landed += r.head_punches_landed;
        t.body_landed += r.body_punches_landed;
        t.ring_control_sum += r.ring_control_pct;
        t.rounds += 1;
    }

    let table: Vec<MatchAggregate> = groups
        .into_iter()
        .map(|(boxer, t)| MatchAggregate {
            boxer,
            total_thrown: t.thrown,
            total_landed: t.landed,
            punch_accuracy_pct: accuracy_pct(t.landed, t.thrown),
            total_sig_thrown: t.sig_thrown,
            total_sig_landed: t.sig_landed,
            sig_accuracy_pct: accuracy_pct(t.sig_landed, t.sig_thrown),
            total_head_landed: t.head_landed,
            total_body_landed: t.body_landed,
            avg_ring_control: round1(t.ring_control_sum / t.rounds.max(1) as f64),
        })
        .collect();

    let find = |name: &str| table.iter().find(|a| a.boxer == name).cloned();
    (find(boxer_a), find(boxer_b), table)
}

/// Filter records to one round, or pass everything through for AllRounds.
/// A round number absent from the data yields an empty subset; callers must
/// treat that as "no data for this round", not aggregate over nothing.
pub fn select_rounds<'r>(records: &'r [RoundRecord], filter: RoundFilter) -> Vec<&'r RoundRecord> {
    match filter {
        RoundFilter::AllRounds => records.iter().collect(),
        RoundFilter::Round(n) => records.iter().filter(|r| r.round == n).collect(),
    }
}

/// Predicted winner (or draw) and the numbers the call was based on.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Winner(String),
    Draw,
}

/// One side of the comparison, kept so the presentation layer can render a
/// justification without recomputing.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeSide {
    pub boxer: String,
    pub sig_landed: u32,
    pub sig_accuracy_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub a: OutcomeSide,
    pub b: OutcomeSide,
}

impl Outcome {
    /// Human-readable justification for the verdict.
    pub fn explain(&self) -> String {
        match &self.verdict {
            Verdict::Winner(name) => {
                let (w, l) = if *name == self.a.boxer {
                    (&self.a, &self.b)
                } else {
                    (&self.b, &self.a)
                };
                format!(
                    "{} landed more significant punches ({} vs {}) with a significant punch accuracy of {:.1}%.",
                    w.boxer, w.sig_landed, l.sig_landed, w.sig_accuracy_pct
                )
            }
            Verdict::Draw => format!(
                "Both boxers landed the same number of significant punches ({}).",
                self.a.sig_landed
            ),
        }
    }
}

/// Single-criterion heuristic: strictly more significant punches landed wins;
/// exact equality is a draw. Accuracy, head/body split and ring control are
/// displayed but never break the tie.
pub fn predict_outcome(stats_a: &MatchAggregate, stats_b: &MatchAggregate) -> Outcome {
    let verdict = if stats_a.total_sig_landed > stats_b.total_sig_landed {
        Verdict::Winner(stats_a.boxer.clone())
    } else if stats_b.total_sig_landed > stats_a.total_sig_landed {
        Verdict::Winner(stats_b.boxer.clone())
    } else {
        Verdict::Draw
    };

    Outcome {
        verdict,
        a: OutcomeSide {
            boxer: stats_a.boxer.clone(),
            sig_landed: stats_a.total_sig_landed,
            sig_accuracy_pct: stats_a.sig_accuracy_pct,
        },
        b: OutcomeSide {
            boxer: stats_b.boxer.clone(),
            sig_landed: stats_b.total_sig_landed,
            sig_accuracy_pct: stats_b.sig_accuracy_pct,
        },
    }
}

/// Whole-fight rollup across every boxer, for the Fight Comparison page.
#[derive(Clone, Debug, PartialEq)]
pub struct FightTotals {
    pub total_thrown: u32,
    pub total_landed: u32,
    pub total_sig_thrown: u32,
    pub total_sig_landed: u32,
    pub punch_accuracy_pct: f64,
    pub sig_accuracy_pct: f64,
}

pub fn fight_totals(records: &[RoundRecord]) -> FightTotals {
    let mut t = FightTotals {
        total_thrown: 0,
        total_landed: 0,
        total_sig_thrown: 0,
        total_sig_landed: 0,
        punch_accuracy_pct: 0.0,
        sig_accuracy_pct: 0.0,
    };
    for r in records {
        t.total_thrown += r.punches_thrown;
        t.total_landed += r.punches_landed;
        t.total_sig_thrown += r.sig_punches_thrown;
        t.total_sig_landed += r.sig_punches_landed;
    }
    if t.total_thrown > 0 {
        t.punch_accuracy_pct = round1(t.total_landed as f64 * 100.0 / t.total_thrown as f64);
    }
    if t.total_sig_thrown > 0 {
        t.sig_accuracy_pct = round1(t.total_sig_landed as f64 * 100.0 / t.total_sig_thrown as f64);
    }
    t
}
