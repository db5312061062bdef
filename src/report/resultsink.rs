use std::io::{
    self,
    Write
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// 固定小數位數
    Fixed(usize),
    /// 科學記號，參數為尾數的小數位數
    Scientific(usize)
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            NumberFormat::Fixed(digits) => format!("{:.*}", digits, value),
            NumberFormat::Scientific(digits) => format!("{:.*e}", digits, value)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ResultSink
// ─────────────────────────────────────────────────────────────────────────────
//
// 只能依序附加的結果紀錄：區段標題、label = value 紀錄、表頭與數值列。
// 每筆數值紀錄都明確指定格式，sink 本身不決定小數位數。

pub trait ResultSink {
    fn section(&mut self, title: &str) -> io::Result<()>;

    fn record(&mut self, label: &str, value: f64, format: NumberFormat) -> io::Result<()>;

    fn text(&mut self, label: &str, value: &str) -> io::Result<()>;

    fn header(&mut self, columns: &[&str]) -> io::Result<()>;

    fn row(&mut self, values: &[f64], format: NumberFormat) -> io::Result<()>;

    /// 第一欄為標籤（例如方法名稱）的數值列
    fn labeled_row(&mut self, label: &str, values: &[f64], format: NumberFormat) -> io::Result<()>;

    /// 每欄各自指定格式，例如計數欄用 `Fixed(0)`、數值欄用科學記號
    fn mixed_row(&mut self, label: Option<&str>, cells: &[(f64, NumberFormat)]) -> io::Result<()>;
}

/// 以 tab 分隔的純文字輸出，可接任何 `Write`（檔案、stdout、`Vec<u8>`）
pub struct TextResultSink<W: Write> {
    writer: W,
    has_section: bool
}

impl<W: Write> TextResultSink<W> {
    pub fn new(writer: W) -> TextResultSink<W> {
        TextResultSink {
            writer,
            has_section: false
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for TextResultSink<W> {
    fn section(&mut self, title: &str) -> io::Result<()> {
        if self.has_section {
            writeln!(self.writer)?;
        }
        self.has_section = true;
        writeln!(self.writer, "{}", title)?;
        writeln!(self.writer, "{}", "=".repeat(title.chars().count()))
    }

    fn record(&mut self, label: &str, value: f64, format: NumberFormat) -> io::Result<()> {
        writeln!(self.writer, "{} = {}", label, format.format(value))
    }

    fn text(&mut self, label: &str, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{}: {}", label, value)
    }

    fn header(&mut self, columns: &[&str]) -> io::Result<()> {
        writeln!(self.writer, "{}", columns.join("\t"))
    }

    fn row(&mut self, values: &[f64], format: NumberFormat) -> io::Result<()> {
        let cells: Vec<String> = values.iter().map(|value| format.format(*value)).collect();
        writeln!(self.writer, "{}", cells.join("\t"))
    }

    fn labeled_row(&mut self, label: &str, values: &[f64], format: NumberFormat) -> io::Result<()> {
        let mut cells: Vec<String> = Vec::with_capacity(values.len() + 1);
        cells.push(label.to_owned());
        cells.extend(values.iter().map(|value| format.format(*value)));
        writeln!(self.writer, "{}", cells.join("\t"))
    }

    fn mixed_row(&mut self, label: Option<&str>, cells: &[(f64, NumberFormat)]) -> io::Result<()> {
        let line: Vec<String> = label
            .map(str::to_owned)
            .into_iter()
            .chain(cells.iter().map(|(value, format)| format.format(*value)))
            .collect();
        writeln!(self.writer, "{}", line.join("\t"))
    }
}
