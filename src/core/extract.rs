//! Listing-page extraction engine.
//!
//! Parses the HTML of a Tabelog ranked-listing page into [`Restaurant`]
//! records. Extraction of a single row is fallible and returns an
//! `Option`; the batch collects only the present values, so one malformed
//! row never aborts a scrape.

use crate::core::types::{PriceRange, Restaurant};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Site origin used to absolutize relative restaurant links.
pub const BASE_URL: &str = "https://tabelog.com";

/// Placeholder used by the site for a missing value.
const PLACEHOLDER: &str = "-";

/// Fallback for absent fields.
const NOT_AVAILABLE: &str = "N/A";

static ENTRY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".list-rst").expect("valid selector"));
static NAME_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".list-rst__rst-name a").expect("valid selector"));
static RATING: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".list-rst__rating-val").expect("valid selector"));
static AREA_GENRE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".list-rst__area-genre").expect("valid selector"));
static PRICE_VAL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".c-rating-v3__val").expect("valid selector"));

/// Extract up to `limit` restaurants from a listing page.
///
/// Ranks are assigned 1-based over the returned set. Rows that fail to
/// extract are logged with their 1-based position and skipped.
pub fn extract_restaurants(html: &str, limit: usize) -> Vec<Restaurant> {
    let document = Html::parse_document(html);

    let mut restaurants = Vec::new();
    for (i, entry) in document.select(&ENTRY).take(limit).enumerate() {
        match extract_entry(entry, restaurants.len() as u32 + 1) {
            Some(restaurant) => restaurants.push(restaurant),
            None => warn!("Skipping unextractable listing entry {}", i + 1),
        }
    }
    restaurants
}

/// Extract a single listing row.
///
/// Returns `None` when the row carries none of the expected elements
/// (title link, rating, area/genre), which marks it as malformed rather
/// than merely sparse. Sparse rows get `"N/A"` defaults per field.
fn extract_entry(entry: ElementRef<'_>, rank: u32) -> Option<Restaurant> {
    let name_link = entry.select(&NAME_LINK).next();
    let rating_el = entry.select(&RATING).next();
    let area_genre_el = entry.select(&AREA_GENRE).next();

    if name_link.is_none() && rating_el.is_none() && area_genre_el.is_none() {
        return None;
    }

    let name = name_link
        .map(element_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let url = name_link
        .and_then(|link| link.value().attr("href"))
        .map(normalize_url)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let rating = rating_el
        .map(element_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let (location, cuisine) =
        split_area_genre(&area_genre_el.map(element_text).unwrap_or_default());

    let price = join_prices(entry.select(&PRICE_VAL).map(|el| element_text(el)));

    Some(Restaurant {
        name,
        rating,
        url,
        cuisine,
        price,
        location,
        rank,
    })
}

/// Collect and trim an element's text content.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Prefix relative hrefs with the site origin; pass absolute ones through.
fn normalize_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{BASE_URL}{href}")
    }
}

/// Split the combined area/genre field on the literal `" / "` separator.
///
/// Two or more parts yield (location, cuisine); a single part is treated
/// as location only; an empty field leaves both `"N/A"`.
pub fn split_area_genre(text: &str) -> (String, String) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string());
    }

    let mut parts = trimmed.split(" / ");
    let location = parts.next().unwrap_or(trimmed).trim().to_string();
    match parts.next() {
        Some(cuisine) => (location, cuisine.trim().to_string()),
        None => (location, NOT_AVAILABLE.to_string()),
    }
}

/// Join non-placeholder price fragments with `" / "`.
pub fn join_prices(values: impl Iterator<Item = String>) -> String {
    let surviving: Vec<String> = values
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != PLACEHOLDER)
        .collect();

    if surviving.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        surviving.join(" / ")
    }
}

/// Parse the leading yen figure out of a price string, e.g.
/// `"¥3,000～¥3,999"` → `3000`. Returns `None` when no figure is present.
pub fn parse_dinner_price(price: &str) -> Option<u64> {
    let start = price.find('¥')? + '¥'.len_utf8();
    let digits: String = price[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Drop restaurants whose dinner price falls outside `range`, then
/// reassign ranks 1-based over the survivors.
///
/// Restaurants without a parseable price are kept; the filter only acts
/// on figures it can read.
pub fn apply_price_filter(restaurants: Vec<Restaurant>, range: &PriceRange) -> Vec<Restaurant> {
    let mut filtered: Vec<Restaurant> = restaurants
        .into_iter()
        .filter(|r| match parse_dinner_price(&r.price) {
            Some(yen) => range.contains(yen),
            None => true,
        })
        .collect();

    for (i, restaurant) in filtered.iter_mut().enumerate() {
        restaurant.rank = i as u32 + 1;
    }
    filtered
}
