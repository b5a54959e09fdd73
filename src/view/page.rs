//! A rendered dashboard [`Page`].

use snpview_table::Table;
use std::fmt::{Display, Formatter};
use tabled::builder::Builder;

/// One piece of a [`Page`].
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Subheader(String),
    Text(String),
    Table(Table<String>),
}

/// The output of a view: subheaders, lines of text, and tables, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new() -> Self {
        Page { blocks: Vec::new() }
    }

    pub fn subheader<S: Into<String>>(&mut self, subheader: S) -> &mut Self {
        self.blocks.push(Block::Subheader(subheader.into()));
        self
    }

    pub fn text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    pub fn table(&mut self, table: Table<String>) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Returns the lines of text, without subheaders or tables.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the table that follows a subheader.
    pub fn table_under(&self, subheader: &str) -> Option<&Table<String>> {
        self.blocks
            .iter()
            .skip_while(|block| !matches!(block, Block::Subheader(s) if s == subheader))
            .find_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Subheader(subheader) => {
                    writeln!(f)?;
                    writeln!(f, "{subheader}")?;
                    writeln!(f, "{}", "-".repeat(subheader.chars().count()))?;
                }
                Block::Text(text) => writeln!(f, "{text}")?,
                Block::Table(table) => writeln!(f, "{}", to_tabled(table))?,
            }
        }
        Ok(())
    }
}

/// Convert a [`Table`] into a printable [`tabled::Table`], with the row index as the first column.
pub fn to_tabled(table: &Table<String>) -> tabled::Table {
    let mut builder = Builder::default();

    let mut headers = vec![String::new()];
    headers.extend(table.headers.iter().cloned());
    builder.push_record(headers);

    table.index.iter().zip(&table.rows).for_each(|(label, row)| {
        let mut record = vec![label.to_string()];
        record.extend(row.iter().cloned());
        builder.push_record(record);
    });

    builder.build()
}
