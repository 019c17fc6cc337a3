use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::source::{CellView, HtmlTable};
use crate::text::{parse_int, NumberError};
use log::warn;
use scraper::{Html, Selector};
use url::Url;

pub mod columns;
mod food;
mod recipe;

pub use food::FoodTableExtractor;
pub use recipe::RecipeTableExtractor;

pub struct ParsingContext {
    pub document: Html,
    pub config: ExtractorConfig,
}

impl ParsingContext {
    pub fn new(html: &str, config: ExtractorConfig) -> Self {
        Self {
            document: Html::parse_document(html),
            config,
        }
    }
}

pub trait Extractor {
    type Output;

    fn parse(&self, context: &ParsingContext) -> Result<Self::Output, ExtractError>;
}

/// First table in `document` matching `selector`.
pub(crate) fn select_table<'a>(
    document: &'a Html,
    selector: &str,
    table: &'static str,
) -> Result<HtmlTable<'a>, ExtractError> {
    let parsed =
        Selector::parse(selector).map_err(|_| ExtractError::InvalidSelector(selector.to_string()))?;
    document
        .select(&parsed)
        .next()
        .map(HtmlTable::new)
        .ok_or_else(|| ExtractError::TableNotFound {
            table,
            selector: selector.to_string(),
        })
}

/// Follow `path` below `cell`, naming `what` was expected when it is missing.
pub(crate) fn descend<'a>(
    cell: &'a CellView,
    path: &[usize],
    context: &str,
    what: &str,
) -> Result<&'a CellView, ExtractError> {
    cell.descend(path)
        .map_err(|err| ExtractError::structure(context, format!("{what}: {err}")))
}

/// Absolute URL of an `<img>`.
///
/// Lazy-loaded images carry a `data:` placeholder in `src` and the real
/// location in `data-src`.
pub(crate) fn image_src(img: &CellView, base: &Url, context: &str) -> Result<String, ExtractError> {
    let src = img
        .attr("src")
        .filter(|src| !src.trim().is_empty() && !src.starts_with("data:"))
        .or_else(|| img.attr("data-src"))
        .ok_or_else(|| ExtractError::MissingAttribute {
            context: format!("{context} <{}>", img.tag),
            attribute: "src",
        })?;
    Ok(base.join(src.trim())?.to_string())
}

/// Integer value of a cell; `None` stands in for non-numeric text unless `strict`.
pub(crate) fn coerce_int(
    text: &str,
    field: &str,
    strict: bool,
) -> Result<Option<i64>, ExtractError> {
    match parse_int(text) {
        Ok(value) => Ok(Some(value)),
        Err(err) if strict => {
            warn!("Rejecting {field} value {text:?}: {err}");
            Err(ExtractError::InvalidNumber {
                field: field.to_string(),
                value: text.to_string(),
            })
        }
        Err(NumberError::NotANumber) => Ok(None),
        Err(err) => {
            warn!("Treating {field} value {text:?} as missing: {err}");
            Ok(None)
        }
    }
}
