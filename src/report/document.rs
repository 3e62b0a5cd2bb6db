//! The document model produced by the report builders.

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// A table with a header row, body rows and an optional footer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    /// Column titles.
    pub head: Vec<String>,
    /// Body rows, one cell per column.
    pub body: Vec<Vec<String>>,
    /// Closing row, rendered after the body.
    pub foot: Option<Vec<String>>,
}

/// One block of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A section heading.
    Heading {
        /// Heading text.
        text: String,
    },
    /// Labelled values, one per line.
    Fields {
        /// `(label, value)` pairs in display order.
        fields: Vec<(String, String)>,
    },
    /// A table.
    Table(TableBlock),
    /// Small print.
    Note {
        /// Note text.
        text: String,
    },
}

/// A generated document ready to render and emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Name of the file the document is emitted as.
    pub filename: String,
    /// Header title line.
    pub title: String,
    /// Header subtitle line.
    pub subtitle: String,
    /// Body content in order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Returns the value of the first field labelled `label`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Fields { fields } => fields
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.as_str()),
            _ => None,
        })
    }

    /// Returns the first table in the document.
    pub fn table(&self) -> Option<&TableBlock> {
        self.blocks.iter().find_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Renders the document as plain text.
    pub fn render(&self) -> String {
        let rule = "=".repeat(self.title.len().max(self.subtitle.len()));
        let mut out = format!("{}\n{}\n{}\n", self.title, self.subtitle, rule);

        for block in &self.blocks {
            out.push('\n');
            match block {
                Block::Heading { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
                Block::Fields { fields } => {
                    for (label, value) in fields {
                        out.push_str(&format!("{}: {}\n", label, value));
                    }
                }
                Block::Table(table) => out.push_str(&render_table(table)),
                Block::Note { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out
    }
}

fn to_row(cells: &[String]) -> Row {
    Row::new(cells.iter().map(|c| Cell::new(c)).collect())
}

fn render_table(block: &TableBlock) -> String {
    let mut table = Table::new();
    table.set_titles(to_row(&block.head));
    for row in &block.body {
        table.add_row(to_row(row));
    }
    if let Some(foot) = &block.foot {
        table.add_empty_row();
        table.add_row(to_row(foot));
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            filename: "sample.txt".to_string(),
            title: "ModernTech Solutions".to_string(),
            subtitle: "Digital Payslip".to_string(),
            blocks: vec![
                Block::Heading { text: "Employee Information".to_string() },
                Block::Fields {
                    fields: vec![("Name".to_string(), "Sipho Zulu".to_string())],
                },
                Block::Table(TableBlock {
                    head: vec!["Description".to_string(), "Amount".to_string()],
                    body: vec![vec!["Base Salary".to_string(), "65,000".to_string()]],
                    foot: Some(vec!["Final Salary".to_string(), "64,800".to_string()]),
                }),
                Block::Note { text: "No signature is required.".to_string() },
            ],
        }
    }

    #[test]
    fn test_render_includes_every_block() {
        let text = sample().render();
        assert!(text.starts_with("ModernTech Solutions\nDigital Payslip\n"));
        assert!(text.contains("Employee Information"));
        assert!(text.contains("Name: Sipho Zulu"));
        assert!(text.contains("Base Salary"));
        assert!(text.contains("64,800"));
        assert!(text.contains("No signature is required."));
    }

    #[test]
    fn test_field_and_table_lookup() {
        let document = sample();
        assert_eq!(document.field("Name"), Some("Sipho Zulu"));
        assert_eq!(document.field("Missing"), None);
        assert_eq!(document.table().unwrap().body.len(), 1);
    }
}
