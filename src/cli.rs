// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::aggregate::{self, RoundFilter, Verdict};
use crate::config::consts::*;
use crate::csv::Delim;
use crate::data::{FightData, RoundView};
use crate::file;
use crate::gen;
use crate::loader;
use crate::records::{MatchAggregate, RoundRecord};
use crate::registry;

#[derive(Clone, Debug)]
pub struct Params {
    pub list: bool,
    pub dataset: Option<String>,
    pub data_file: Option<PathBuf>,
    pub boxer_a: Option<String>,
    pub boxer_b: Option<String>,
    pub round: RoundFilter,
    pub out: Option<PathBuf>,
    pub format: Delim,
    pub include_headers: bool,
    pub export_raw: bool,
    pub generate: bool,
    pub gen_rounds: u32,
}

impl Params {
    pub fn new() -> Self {
        Self {
            list: false,
            dataset: None,
            data_file: None,
            boxer_a: None,
            boxer_b: None,
            round: RoundFilter::AllRounds,
            out: None,
            format: Delim::Csv,
            include_headers: true,
            export_raw: false,
            generate: false,
            gen_rounds: DEFAULT_GEN_ROUNDS,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub enum Mode {
    Cli(Params),
    Gui,
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn Error>> {
    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui);
    }
    let mut params = Params::new();
    parse_cli(&mut params)?;
    Ok(Mode::Cli(params))
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list" => params.list = true,
            "-d" | "--dataset" => {
                params.dataset = Some(args.next().ok_or("Missing value for --dataset")?);
            }
            "--data" => {
                params.data_file =
                    Some(PathBuf::from(args.next().ok_or("Missing value for --data")?));
            }
            "-a" | "--boxer-a" => {
                params.boxer_a = Some(args.next().ok_or("Missing value for --boxer-a")?);
            }
            "-b" | "--boxer-b" => {
                params.boxer_b = Some(args.next().ok_or("Missing value for --boxer-b")?);
            }
            "-r" | "--round" => {
                let v = args.next().ok_or("Missing value for --round")?;
                params.round = if v.eq_ignore_ascii_case("all") {
                    RoundFilter::AllRounds
                } else {
                    RoundFilter::Round(v.parse()?)
                };
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "--raw" => params.export_raw = true,
            "--generate" => params.generate = true,
            "--rounds" => {
                params.gen_rounds = args.next().ok_or("Missing value for --rounds")?.parse()?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    if params.list {
        for d in registry::all() {
            println!("{} — {}", d.label, d.source_note);
        }
        return Ok(());
    }

    if params.generate {
        let a = params.boxer_a.as_deref().unwrap_or(DEFAULT_GEN_BOXER_A);
        let b = params.boxer_b.as_deref().unwrap_or(DEFAULT_GEN_BOXER_B);
        if params.gen_rounds == 0 {
            return Err("--rounds must be at least 1".into());
        }
        let records = gen::generate(a, b, params.gen_rounds);
        let path = params
            .out
            .unwrap_or_else(|| PathBuf::from(DATA_DIR).join(DEFAULT_GEN_FILE));
        gen::write_csv(&path, &records)?;
        println!("Generated {} rounds → {}", params.gen_rounds, path.display());
        return Ok(());
    }

    let fight = load_fight(&params)?;

    let boxers = fight.boxers();
    if boxers.len() < 2 {
        return Err("not enough data: need at least two boxers in the dataset".into());
    }

    let (boxer_a, boxer_b) = resolve_pair(&params, &fight, &boxers)?;
    let view = RoundView::from_fight(&fight, &boxer_a, &boxer_b, params.round);
    if view.is_empty() {
        // Empty subset is a notice, not an aggregation over nothing.
        println!("No data for {}.", params.round.label());
        return Ok(());
    }

    let (stats_a, stats_b, table) = aggregate::aggregate(view.records(), &boxer_a, &boxer_b);
    let (stats_a, stats_b) = match (stats_a, stats_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err("statistics unavailable for one of the selected boxers".into()),
    };

    println!(
        "{} vs {} — {} ({})",
        boxer_a,
        boxer_b,
        fight.label,
        params.round.label()
    );
    println!();
    print_table(&table);
    println!();

    let outcome = aggregate::predict_outcome(&stats_a, &stats_b);
    match &outcome.verdict {
        Verdict::Winner(name) => println!("Predicted winner: {}", name),
        Verdict::Draw => println!("Prediction: Draw / too close to call"),
    }
    println!("{}", outcome.explain());

    if let Some(out) = &params.out {
        let (headers, rows): (Vec<String>, Vec<Vec<String>>) = if params.export_raw {
            (
                RoundRecord::HEADERS.iter().map(|h| s!(*h)).collect(),
                view.to_owned_rows(),
            )
        } else {
            (
                MatchAggregate::HEADERS.iter().map(|h| s!(*h)).collect(),
                table.iter().map(|a| a.to_row()).collect(),
            )
        };
        file::write_table(
            out,
            &Some(headers),
            &rows,
            params.include_headers,
            params.format,
        )?;
        println!("Exported → {}", out.display());
    }

    Ok(())
}

fn load_fight(params: &Params) -> Result<FightData, Box<dyn Error>> {
    if let Some(path) = &params.data_file {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("custom"));
        return Ok(loader::load(path, &label)?);
    }
    let entry = match &params.dataset {
        Some(label) => registry::by_label(label)
            .ok_or_else(|| format!("Unknown dataset: {} (try --list)", label))?,
        None => &registry::all()[0],
    };
    Ok(loader::load(&registry::data_path(entry), entry.label)?)
}

fn resolve_pair(
    params: &Params,
    fight: &FightData,
    boxers: &[String],
) -> Result<(String, String), Box<dyn Error>> {
    // Explicit names must exist; a typo is "statistics unavailable", not a
    // silent fallback.
    for name in [&params.boxer_a, &params.boxer_b].into_iter().flatten() {
        if !boxers.iter().any(|b| b == name) {
            return Err(format!("no statistics for boxer {:?} in this dataset", name).into());
        }
    }
    if let (Some(a), Some(b)) = (&params.boxer_a, &params.boxer_b) {
        if a == b {
            return Err("boxer A and boxer B must differ".into());
        }
        return Ok((a.clone(), b.clone()));
    }

    let entry = params
        .dataset
        .as_deref()
        .and_then(registry::by_label)
        .or_else(|| registry::all().iter().find(|d| d.label == fight.label));

    let (da, db) = match entry {
        Some(e) => registry::resolve_default_pair(e, boxers)
            .ok_or("not enough data: need at least two boxers")?,
        None => (boxers[0].clone(), boxers[1].clone()),
    };

    // A single explicit name keeps its slot; the other side defaults.
    let a = match &params.boxer_a {
        Some(a) => a.clone(),
        None if params.boxer_b.as_deref() != Some(da.as_str()) => da.clone(),
        None => db.clone(),
    };
    let b = match &params.boxer_b {
        Some(b) => b.clone(),
        None if db != a => db,
        // default collides with the explicit pick → next distinct name
        None => boxers
            .iter()
            .find(|x| **x != a)
            .cloned()
            .ok_or("not enough data: need at least two boxers")?,
    };
    Ok((a, b))
}

fn print_table(table: &[MatchAggregate]) {
    let headers: Vec<String> = MatchAggregate::HEADERS.iter().map(|h| s!(*h)).collect();
    let rows: Vec<Vec<String>> = table.iter().map(|a| a.to_row()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let print_row = |row: &[String]| {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:>w$}", c, w = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    };

    print_row(&headers);
    for row in &rows {
        print_row(row);
    }
}
