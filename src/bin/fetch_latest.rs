//! Prints the URL of the newest weekly menu PDF; with an output path it
//! also downloads the file there.
//!
//! Usage: fetch-latest [menu.pdf]

use std::{env, fs};

use greenplate::source::{DEFAULT_FALLBACK_PDF_URL, build_client, download_pdf, latest_menu_url};

fn main() -> anyhow::Result<()> {
    let client = build_client()?;
    let url = latest_menu_url(&client, DEFAULT_FALLBACK_PDF_URL)?;
    println!("{url}");

    if let Some(out_path) = env::args().nth(1) {
        let bytes = download_pdf(&client, &url)?;
        fs::write(&out_path, bytes)?;
        eprintln!("Wrote {out_path}");
    }
    Ok(())
}
