use super::{CellView, RowView, TableSource};
use scraper::ElementRef;

/// A `<table>` element of a parsed document.
#[derive(Debug, Clone, Copy)]
pub struct HtmlTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlTable<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn text_content(element: ElementRef) -> String {
    element.text().collect()
}

impl From<ElementRef<'_>> for CellView {
    fn from(element: ElementRef<'_>) -> Self {
        let value = element.value();
        CellView {
            tag: value.name().to_string(),
            text: text_content(element),
            attributes: value
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children: child_elements(element).map(CellView::from).collect(),
        }
    }
}

impl TableSource for HtmlTable<'_> {
    fn heading(&self) -> Option<String> {
        child_elements(self.element).next().map(text_content)
    }

    // The HTML parser always wraps bare rows in a tbody, so only row groups
    // need to be walked. Rows of nested tables are not included.
    fn rows(&self) -> Vec<RowView> {
        child_elements(self.element)
            .filter(|group| group.value().name() == "tbody")
            .flat_map(child_elements)
            .filter(|row| row.value().name() == "tr")
            .map(|row| {
                RowView::new(
                    child_elements(row)
                        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                        .map(CellView::from)
                        .collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_table(document: &Html) -> HtmlTable<'_> {
        let selector = Selector::parse("table").unwrap();
        HtmlTable::new(document.select(&selector).next().unwrap())
    }

    #[test]
    fn test_rows_and_cells() {
        let document = Html::parse_document(
            r#"<table>
                <tr><th>Name</th><th>Amount</th></tr>
                <tr><td><a href="/Wood"><b>Wood</b></a></td><td>5</td></tr>
            </table>"#,
        );
        let table = first_table(&document);
        let rows = table.rows();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_header());
        assert_eq!(rows[1].cells.len(), 2);

        let name = &rows[1].cells[0];
        assert_eq!(name.tag, "td");
        assert_eq!(name.text, "Wood");
        assert_eq!(name.children[0].attr("href"), Some("/Wood"));
        assert_eq!(name.descend(&[0, 0]).unwrap().tag, "b");
    }

    #[test]
    fn test_heading_is_first_child_text() {
        let document = Html::parse_document(
            r#"<table><caption>Crafted at Anvil</caption><tbody><tr><td>x</td></tr></tbody></table>"#,
        );
        let table = first_table(&document);
        assert_eq!(table.heading().as_deref(), Some("Crafted at Anvil"));
    }

    #[test]
    fn test_nested_table_rows_are_skipped() {
        let document = Html::parse_document(
            r#"<table><tbody>
                <tr><td><table><tr><td>inner</td></tr></table></td></tr>
                <tr><td>outer</td></tr>
            </tbody></table>"#,
        );
        let table = first_table(&document);
        assert_eq!(table.rows().len(), 2);
    }
}
