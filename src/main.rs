use std::path::Path;
use std::process::ExitCode;
use std::{env, fs};

use greenplate::Weekday;
use greenplate::menu::{MenuRecord, parse_menu};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("Usage: parse-menu <menu.pdf> <menu.json>");
        return ExitCode::from(2);
    }

    match run(Path::new(&args[0]), &args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(pdf_path: &Path, out_path: &str) -> anyhow::Result<()> {
    let parsed = parse_menu(pdf_path)?;
    let record = MenuRecord::new(parsed);

    fs::write(out_path, serde_json::to_string_pretty(&record)?)?;

    println!("Wrote {out_path}");
    for day in Weekday::ALL {
        println!("{}: {} items", day.name(), record.days.day(day).len());
    }
    Ok(())
}
