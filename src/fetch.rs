use anyhow::{anyhow, Result};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const API_BASE: &str = "https://scrapbox.io/api/pages";

/// One entry of a project's page list.
#[derive(Clone, Debug, Deserialize)]
pub struct PageEntry {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageList {
    #[serde(default)]
    pages: Vec<PageEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RelatedEntry {
    pub title: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelatedPages {
    #[serde(default)]
    pub links1hop: Vec<RelatedEntry>,
}

/// Link information for one page: direct outbound links plus one-hop related
/// pages. Fields are defaulted so partial API responses still parse.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageDetail {
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default, rename = "relatedPages")]
    pub related_pages: RelatedPages,
}

/// Extract the `project` query parameter from a location search string,
/// falling back to the given default.
pub fn project_from_query(search: &str, default: &str) -> String {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("project="))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| default.to_owned())
}

async fn fetch_text(url: &str) -> Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: not a Response: {e:?}"))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {url}: status {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow!("{e:?}"))?)
        .await
        .map_err(|e| anyhow!("fetch {url}: body read: {e:?}"))?;
    text.as_string().ok_or_else(|| anyhow!("non-string body"))
}

/// Ordered page list for a project. Attempted exactly once per session.
pub async fn fetch_page_list(project: &str) -> Result<Vec<PageEntry>> {
    let url = format!("{API_BASE}/{project}");
    let body = fetch_text(&url).await?;
    let list: PageList = serde_json::from_str(&body)?;
    Ok(list.pages)
}

/// Link graph for one page. Attempted exactly once per tap.
pub async fn fetch_page_detail(project: &str, title: &str) -> Result<PageDetail> {
    let encoded = js_sys::encode_uri_component(title);
    let url = format!("{API_BASE}/{project}/{encoded}");
    let body = fetch_text(&url).await?;
    Ok(serde_json::from_str(&body)?)
}
