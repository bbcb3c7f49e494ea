use itertools::Itertools;

pub const HEADER: &str = "name,time,build,read,space,overhead,bits";

/// The ordered sequence of output lines: the header first, then one data row
/// per `RESULT` line, in input order. Built fresh for each run.
#[derive(Debug, Clone)]
pub struct CsvTable {
    lines: Vec<String>,
}

impl CsvTable {
    pub fn new() -> Self {
        Self { lines: vec![HEADER.to_string()] }
    }

    /// Appends `,value` to whichever entry is currently last: the header
    /// before any data row has been pushed, the most recent data row after.
    /// A `bits` line arriving between results therefore tags the preceding
    /// row, not the header.
    pub fn extend_last(&mut self, value: &str) {
        if let Some(last) = self.lines.last_mut() {
            last.push(',');
            last.push_str(value);
        }
    }

    pub fn push_row<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.lines.push(values.into_iter().join(","));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-joined lines with a single trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.iter().join("\n");
        out.push('\n');
        out
    }
}

impl Default for CsvTable {
    fn default() -> Self {
        Self::new()
    }
}
