//! Source discovery and retrieval: finds the newest weekly menu PDF linked
//! from the university index page and downloads it.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

pub const INDEX_URL: &str = "https://ubs.antalya.edu.tr/";

/// Stopgap used when the index page yields no matching link, so the
/// pipeline always has something to fetch. Callers with a better guess pass
/// their own fallback to [`latest_menu_url`].
pub const DEFAULT_FALLBACK_PDF_URL: &str =
    "https://admin.antalya.edu.tr/files/418/8_12_25-12_12_25_HAFTALIK_MENU.pdf";

pub fn build_client() -> anyhow::Result<Client> {
    let client = Client::builder()
        // Avoid macOS system proxy lookup that can panic in sandboxed contexts.
        .no_proxy()
        .user_agent("Mozilla/5.0 (compatible; GreenPlateBot/1.0)")
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}

pub fn fetch_index_page(client: &Client) -> anyhow::Result<String> {
    let text = client.get(INDEX_URL).send()?.error_for_status()?.text()?;
    Ok(text)
}

pub fn download_pdf(client: &Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
    Ok(bytes.to_vec())
}

/// Collects every anchor pointing at a weekly menu PDF on the trusted file
/// host. Relative hrefs are resolved against the index page first.
pub fn find_menu_links(html: &str) -> Vec<String> {
    let Ok(pattern) =
        regex::Regex::new(r"(?i)^https?://admin\.antalya\.edu\.tr/files/.*HAFTALIK.*MENU\.pdf$")
    else {
        return Vec::new();
    };
    let Ok(base) = Url::parse(INDEX_URL) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let selector = Selector::parse("a").unwrap();

    let mut links = Vec::new();
    for element in doc.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let link = match base.join(href) {
                Ok(link) => link.to_string(),
                Err(_) => continue,
            };
            if pattern.is_match(&link) && !links.contains(&link) {
                links.push(link);
            }
        }
    }
    links
}

/// Comparison key for a filename-embedded range like "8_12_25-12_12_25":
/// end date first, then start date, with 2-digit years normalized to the
/// 2000s. Links without a range sort lowest.
pub fn filename_date_key(url: &str) -> (i32, u32, u32, i32, u32, u32) {
    let Ok(re) = regex::Regex::new(r"(\d{1,2})_(\d{1,2})_(\d{2,4})-(\d{1,2})_(\d{1,2})_(\d{2,4})")
    else {
        return (0, 0, 0, 0, 0, 0);
    };
    let Some(caps) = re.captures(url) else {
        return (0, 0, 0, 0, 0, 0);
    };
    let field = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let year = |i: usize| {
        let y = field(i) as i32;
        if y < 100 { y + 2000 } else { y }
    };
    (year(6), field(5), field(4), year(3), field(2), field(1))
}

/// Picks the link whose embedded date range ends latest; ties are broken
/// arbitrarily.
pub fn pick_latest(links: Vec<String>) -> Option<String> {
    links.into_iter().max_by_key(|link| filename_date_key(link))
}

/// Resolves the URL of the newest weekly menu, falling back to `fallback`
/// when the index page exposes no matching link.
pub fn latest_menu_url(client: &Client, fallback: &str) -> anyhow::Result<String> {
    let html = fetch_index_page(client)?;
    Ok(pick_latest(find_menu_links(&html)).unwrap_or_else(|| fallback.to_string()))
}
