//! Create and manipulate a row-based [`Table`].

use color_eyre::eyre::{eyre, ContextCompat, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// A row-based [`Table`] of generic data.
///
/// Every row carries an index label. Labels start out contiguous from zero,
/// survive [`filter`](Table::filter) and [`sort_by_key`](Table::sort_by_key)
/// with their rows, and are renumbered with [`reset_index`](Table::reset_index).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Table<T> {
    /// Names of the table columns.
    pub headers: Vec<T>,
    /// Rows of table values.
    pub rows: Vec<Vec<T>>,
    /// Index label of each row.
    pub index: Vec<usize>,
    /// Optional file path for where the table was read from.
    pub path: Option<PathBuf>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Returns a new row-based [`Table`] with empty headers and rows.
    ///
    /// ## Examples
    ///
    /// Let the compiler figure out the type from subsequent commands.
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// # assert_eq!(table.rows, vec![vec!["A", "B", "C"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    ///
    /// | 1 | 2 | 3 |
    /// |---|---|---|
    /// | A | B | C |
    pub fn new() -> Self {
        Table { headers: Vec::new(), rows: Vec::new(), index: Vec::new(), path: None }
    }

    /// Returns the number of rows in the [`Table`].
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the [`Table`] has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renumber the row index labels contiguously from zero.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["gene"];
    /// table.add_row(["rpoB"])?;
    /// table.add_row(["gyrA"])?;
    ///
    /// let mut filtered = table.filter("gene", |g| *g == "gyrA")?;
    /// assert_eq!(filtered.index, [1]);
    /// filtered.reset_index();
    /// assert_eq!(filtered.index, [0]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn reset_index(&mut self) {
        self.index = (0..self.rows.len()).collect();
    }
}

impl<T> Table<T>
where
    T: AsRef<str> + Clone,
{
    /// Add a new row to the table.
    ///
    /// ## Arguments
    ///
    /// * `row` - A iterable object of new data (`T`) to add as a row.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// table.add_row(["D", "E", "F"])?;
    /// # assert_eq!(table.rows, [["A", "B", "C"], ["D", "E", "F"]]);
    /// assert!(table.add_row(["G"]).is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    ///
    /// | 1 | 2 | 3 |
    /// |---|---|---|
    /// | A | B | C |
    /// | D | E | F |
    ///
    pub fn add_row<I>(&mut self, row: I) -> Result<(), Report>
    where
        I: IntoIterator<Item = T>,
    {
        let row = row.into_iter().collect::<Vec<T>>();
        // row must match the headers, or the existing rows for a headerless table
        let ex = match self.rows.first() {
            _ if !self.headers.is_empty() => Some(self.headers.len()),
            Some(first) => Some(first.len()),
            None => None,
        };
        if let Some(ex) = ex {
            let new = row.len();
            if ex != new {
                return Err(eyre!("New row size ({new}) does not match existing table ({ex})."));
            }
        }
        self.index.push(self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    /// Returns the column index (0-based) of the header in the [`Table`].
    ///
    /// # Arguments
    ///
    /// * `header` - Header name.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(vec!["A", "B", "C"])?;
    ///
    /// assert_eq!(table.get_header_index("1")?, 0);
    /// assert_eq!(table.get_header_index("3")?, 2);
    /// assert!(table.get_header_index("4").is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_header_index(&self, header: &str) -> Result<usize, Report> {
        let pos =
            self.headers.iter().position(|h| h.as_ref() == header).ok_or_else(|| {
                eyre!("Column '{header}' was not found in table: {:?}.", self.path)
            })?;

        Ok(pos)
    }

    /// Returns the [`Table`] value under a particular header and row position.
    ///
    /// ## Arguments
    ///
    /// - `header` - Column name.
    /// - `row` - Row position (0-based), regardless of the index label.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// assert_eq!(table.get("2", 0)?, &"B");
    /// assert!(table.get("2", 1).is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get(&self, header: &str, row: usize) -> Result<&T, Report> {
        let header_i = self.get_header_index(header)?;
        let row = self.get_row(row)?;
        Ok(&row[header_i])
    }

    /// Returns a [`Vec`] of [`Table`] values under a header.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// table.add_row(["D", "E", "F"])?;
    ///
    /// assert_eq!(table.get_column("1")?, [&"A", &"D"]);
    /// assert_eq!(table.get_column("3")?, [&"C", &"F"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_column(&self, header: &str) -> Result<Vec<&T>, Report> {
        let header_i = self.get_header_index(header)?;
        let column = self.rows.iter().map(|row| &row[header_i]).collect();
        Ok(column)
    }

    /// Return a row of [`Table`] values from a row position.
    pub fn get_row(&self, i: usize) -> Result<&[T], Report> {
        self.rows
            .get(i)
            .map(|row| row.as_slice())
            .wrap_err_with(|| eyre!("Row ({i}) does not exist in the table."))
    }

    /// Returns a new [`Table`] with only the given columns, in the given order.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// let selected = table.select(&["3", "1"])?;
    /// assert_eq!(selected.headers, ["3", "1"]);
    /// assert_eq!(selected.rows, [["C", "A"]]);
    /// assert!(table.select(&["4"]).is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn select(&self, headers: &[&str]) -> Result<Table<T>, Report> {
        let columns = headers
            .iter()
            .map(|h| self.get_header_index(h))
            .collect::<Result<Vec<_>, Report>>()?;
        Ok(self.take_columns(&columns))
    }

    /// Returns a new [`Table`] without the given columns.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// let dropped = table.drop(&["2"])?;
    /// assert_eq!(dropped.headers, ["1", "3"]);
    /// assert_eq!(dropped.rows, [["A", "C"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn drop(&self, headers: &[&str]) -> Result<Table<T>, Report> {
        let dropped = headers
            .iter()
            .map(|h| self.get_header_index(h))
            .collect::<Result<Vec<_>, Report>>()?;
        let columns = (0..self.headers.len()).filter(|i| !dropped.contains(i)).collect_vec();
        Ok(self.take_columns(&columns))
    }

    fn take_columns(&self, columns: &[usize]) -> Table<T> {
        let pick = |row: &Vec<T>| columns.iter().map(|i| row[*i].clone()).collect_vec();
        Table {
            headers: pick(&self.headers),
            rows: self.rows.iter().map(pick).collect(),
            index: self.index.clone(),
            path: self.path.clone(),
        }
    }

    /// Returns a new [`Table`] with the rows whose value under `header` satisfies the `predicate`.
    ///
    /// Kept rows retain their index label.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["genome", "gene"];
    /// table.add_row(["G1", "katG"])?;
    /// table.add_row(["G2", "rpoB"])?;
    /// table.add_row(["G1", "rpoB"])?;
    ///
    /// let g1 = table.filter("genome", |g| *g == "G1")?;
    /// assert_eq!(g1.rows, [["G1", "katG"], ["G1", "rpoB"]]);
    /// assert_eq!(g1.index, [0, 2]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn filter<F>(&self, header: &str, mut predicate: F) -> Result<Table<T>, Report>
    where
        F: FnMut(&T) -> bool,
    {
        self.try_filter(header, |value| Ok(predicate(value)))
    }

    /// Like [`filter`](Table::filter), but the `predicate` can fail.
    ///
    /// The first error stops the filter and is returned unchanged.
    pub fn try_filter<F>(&self, header: &str, mut predicate: F) -> Result<Table<T>, Report>
    where
        F: FnMut(&T) -> Result<bool, Report>,
    {
        let header_i = self.get_header_index(header)?;
        let mut table =
            Table { headers: self.headers.clone(), path: self.path.clone(), ..Default::default() };

        for (label, row) in self.index.iter().zip(&self.rows) {
            if predicate(&row[header_i])? {
                table.index.push(*label);
                table.rows.push(row.clone());
            }
        }

        Ok(table)
    }

    /// Stable sort of the rows by a `key` computed from the values under `header`.
    ///
    /// Index labels travel with their rows. The first key error is returned
    /// and leaves the table unchanged.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["POS", "REF"];
    /// table.add_row(["900", "G"])?;
    /// table.add_row(["100", "A"])?;
    /// table.add_row(["25", "C"])?;
    ///
    /// table.sort_by_key("POS", |p| Ok(p.parse::<u64>()?))?;
    /// assert_eq!(table.get_column("POS")?, [&"25", &"100", &"900"]);
    /// assert_eq!(table.index, [2, 1, 0]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn sort_by_key<K, F>(&mut self, header: &str, mut key: F) -> Result<(), Report>
    where
        K: Ord,
        F: FnMut(&T) -> Result<K, Report>,
    {
        let header_i = self.get_header_index(header)?;
        let keys =
            self.rows.iter().map(|row| key(&row[header_i])).collect::<Result<Vec<K>, Report>>()?;

        let mut keyed = keys
            .into_iter()
            .zip(std::mem::take(&mut self.rows).into_iter().zip(std::mem::take(&mut self.index)))
            .collect_vec();
        // slice::sort_by is stable, equal keys keep their input order
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let (rows, index): (Vec<Vec<T>>, Vec<usize>) =
            keyed.into_iter().map(|(_key, pair)| pair).unzip();
        self.rows = rows;
        self.index = index;

        Ok(())
    }

    /// Returns the distinct values under `header`, sorted ascending.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["genome"];
    /// table.add_row(["G2"])?;
    /// table.add_row(["G1"])?;
    /// table.add_row(["G2"])?;
    ///
    /// assert_eq!(table.unique("genome")?, ["G1", "G2"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn unique(&self, header: &str) -> Result<Vec<T>, Report>
    where
        T: Ord,
    {
        let values = self.get_column(header)?.into_iter().sorted().dedup().cloned().collect();
        Ok(values)
    }

    /// Returns a two-column [`Table`] of each distinct value under `header` and its number of occurrences.
    ///
    /// Rows are sorted by count (descending), ties by value (ascending).
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = snpview_table::Table::new();
    /// table.headers = vec!["gene"];
    /// table.add_row(["rpoB"])?;
    /// table.add_row(["katG"])?;
    /// table.add_row(["rpoB"])?;
    ///
    /// let counts = table.value_counts("gene", "count")?;
    /// assert_eq!(counts.headers, ["gene", "count"]);
    /// assert_eq!(counts.rows, [["rpoB", "2"], ["katG", "1"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn value_counts(&self, header: &str, count_header: &str) -> Result<Table<String>, Report> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        self.get_column(header)?.into_iter().for_each(|value| {
            *counts.entry(value.as_ref()).or_insert(0) += 1;
        });

        let mut table = Table::new();
        table.headers = vec![header.to_string(), count_header.to_string()];
        counts
            .into_iter()
            // BTreeMap iterates by value, the stable sort keeps that order for ties
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .try_for_each(|(value, count)| table.add_row([value.to_string(), count.to_string()]))?;

        Ok(table)
    }
}

impl Table<String> {
    /// Read a delimited file with a header row into a [`Table`].
    ///
    /// # Arguments
    ///
    /// * `path` - File path.
    /// * `delim` - Optional delimiter. Otherwise, will be identified based on path suffix (.tsv or .csv).
    ///
    /// # Examples
    ///
    /// ```
    /// use snpview_table::Table;
    /// use std::io::Write;
    ///
    /// let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    /// writeln!(file, "1,2,3\nA,B,\"C,D\"")?;
    /// let table = Table::read(&file.path(), None)?;
    /// assert_eq!(table.headers, ["1", "2", "3"]);
    /// assert_eq!(table.rows, [["A", "B", "C,D"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn read<P>(path: &P, delim: Option<char>) -> Result<Table<String>, Report>
    where
        P: AsRef<Path> + Debug,
    {
        // if not provided, lookup delimiter from file extension
        let delim = match delim {
            Some(c) => c,
            None => get_delimiter(path)?,
        };
        if !delim.is_ascii() {
            return Err(eyre!("Delimiter must be a single ASCII character: {delim:?}"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delim as u8)
            .from_path(path)
            .wrap_err_with(|| eyre!("Failed to read file: {path:?}"))?;

        let mut table = Table::new();
        table.headers = reader
            .headers()
            .wrap_err_with(|| eyre!("Failed to parse table headers: {path:?}"))?
            .iter()
            .map(String::from)
            .collect_vec();
        if table.headers.is_empty() {
            return Err(eyre!("Table has no header row: {path:?}"));
        }

        for result in reader.records() {
            let record = result.wrap_err_with(|| eyre!("Failed to parse table row: {path:?}"))?;
            table.add_row(record.iter().map(String::from))?;
        }

        debug!("Read {} rows from {path:?}", table.len());
        table.path = Some(path.as_ref().to_path_buf());

        Ok(table)
    }
}

/// Get delimiter based on file extension.
///
/// ## Arguments
///
/// - `path` - File path.
///
/// ## Examples
///
/// - `.tsv` => `\t`
/// - `.txt` => `\t`
/// - `.csv` => `,`
///
/// Note that `.txt` is assumed to be tab-delimited!
///
/// ```rust
/// use snpview_table::get_delimiter;
///
/// assert_eq!(get_delimiter(&"file.tsv")?, '\t');
/// assert_eq!(get_delimiter(&"file.csv")?, ',');
/// assert_eq!(get_delimiter(&"file.txt")?, '\t');
/// assert!(get_delimiter(&"file").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn get_delimiter<P>(path: &P) -> Result<char, Report>
where
    P: AsRef<Path> + Debug,
{
    let ext = path
        .as_ref()
        .extension()
        .wrap_err_with(|| eyre!("Failed to get file extension: {path:?}"))?
        .to_str()
        .wrap_err_with(|| eyre!("Failed to convert file extension to str: {path:?}"))?;
    // convert extension to the expected delimiter
    match ext {
        "tsv" | "txt" => Ok('\t'),
        "csv" => Ok(','),
        _ext => {
            Err(eyre!("Unknown file extension: {_ext:?}").suggestion("Options: tsv, csv, or txt"))
        }
    }
}
