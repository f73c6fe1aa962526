use std::path::PathBuf;

use csv_core::WriteResult;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Jsonl,
    Csv,
}

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "output::Args")]
pub struct Args {
    /// Write to this file instead of the terminal.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    #[arg(long, short='f', value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open the specified output file at {1:?}")]
    OpenOutputFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the output file at {1:?}")]
    WriteFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the terminal")]
    WriteStdout(#[source] std::io::Error),
    #[error("could not serialize the record to JSON")]
    SerializeJson(#[source] serde_json::Error),
    #[error("could not format a CSV field")]
    FormatCsv,
}

impl Args {
    pub fn to_output(self) -> Result<Output, Error> {
        let io = match &self.output {
            None => Box::new(std::io::stdout()) as Box<dyn std::io::Write + Send>,
            Some(path) => Box::new(
                std::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| Error::OpenOutputFile(e, path.clone()))?,
            ) as Box<_>,
        };
        Ok(Output::new(self, io))
    }
}

/// One row of command output.
///
/// JSON lines serialize the record itself, tables and CSV use [`Record::cells`].
pub trait Record: serde::Serialize {
    const COLUMNS: &'static [&'static str];

    /// Human readable cells, in the order of [`Record::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

/// Records rendered in one of the [`Format`]s.
///
/// The column titles are emitted along with the first record. Tables are only written out on
/// [`Output::commit`], the other formats are streamed as records arrive.
pub struct Output {
    args: Args,
    io: Box<dyn std::io::Write + Send>,
    sink: Sink,
}

enum Sink {
    Csv { has_columns: bool },
    Table(Option<comfy_table::Table>),
    Jsonl,
}

impl Output {
    pub fn new(args: Args, io: Box<dyn std::io::Write + Send>) -> Self {
        let sink = match args.format {
            Format::Table => Sink::Table(None),
            Format::Jsonl => Sink::Jsonl,
            Format::Csv => Sink::Csv { has_columns: false },
        };
        Self { args, io, sink }
    }

    pub fn write<R: Record>(&mut self, record: &R) -> Result<(), Error> {
        match &mut self.sink {
            Sink::Csv { has_columns } => {
                if !std::mem::replace(has_columns, true) {
                    self.write_csv_row(R::COLUMNS)?;
                }
                self.write_csv_row(&record.cells())?;
            }
            Sink::Table(table) => {
                table
                    .get_or_insert_with(|| {
                        let mut table = comfy_table::Table::new();
                        table
                            .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
                            .set_header(R::COLUMNS.to_vec());
                        table
                    })
                    .add_row(record.cells());
            }
            Sink::Jsonl => {
                serde_json::to_writer(&mut self.io, record).map_err(Error::SerializeJson)?;
                writeln!(self.io).map_err(|e| self.write_error(e))?;
                // Followers of a poll want every snapshot as soon as it is published.
                self.io.flush().map_err(|e| self.write_error(e))?;
            }
        }
        Ok(())
    }

    fn write_csv_row<V: AsRef<str>>(&mut self, cells: &[V]) -> Result<(), Error> {
        let longest = cells.iter().map(|c| c.as_ref().len()).max().unwrap_or(0);
        let mut buffer = vec![0; 2 + 2 * longest];
        let mut writer = csv_core::Writer::new();
        let mut line = Vec::new();
        for (index, cell) in cells.iter().enumerate() {
            if index != 0 {
                let (WriteResult::InputEmpty, n) = writer.delimiter(&mut buffer) else {
                    return Err(Error::FormatCsv);
                };
                line.extend_from_slice(&buffer[..n]);
            }
            let cell = cell.as_ref().as_bytes();
            let (WriteResult::InputEmpty, _, n) = writer.field(cell, &mut buffer) else {
                return Err(Error::FormatCsv);
            };
            line.extend_from_slice(&buffer[..n]);
        }
        let (WriteResult::InputEmpty, n) = writer.terminator(&mut buffer) else {
            return Err(Error::FormatCsv);
        };
        line.extend_from_slice(&buffer[..n]);
        self.io.write_all(&line).map_err(|e| self.write_error(e))
    }

    fn write_error(&self, e: std::io::Error) -> Error {
        match &self.args.output {
            None => Error::WriteStdout(e),
            Some(p) => Error::WriteFile(e, p.into()),
        }
    }

    pub fn commit(mut self) -> Result<(), Error> {
        if let Sink::Table(Some(table)) = &self.sink {
            writeln!(self.io, "{table}").map_err(|e| self.write_error(e))?;
        }
        self.io.flush().map_err(|e| self.write_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[derive(serde::Serialize)]
    struct Reading {
        register: &'static str,
        value: &'static str,
    }

    impl Record for Reading {
        const COLUMNS: &'static [&'static str] = &["Register", "Value"];

        fn cells(&self) -> Vec<String> {
            vec![self.register.into(), self.value.into()]
        }
    }

    fn output(format: Format) -> (Output, Buffer) {
        let buffer = Buffer::default();
        let args = Args {
            output: None,
            format,
        };
        (Output::new(args, Box::new(buffer.clone())), buffer)
    }

    fn text(buffer: &Buffer) -> String {
        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn csv_quotes_where_needed() {
        let (mut output, buffer) = output(Format::Csv);
        output
            .write(&Reading {
                register: "HEATING_CURVE_RISE_HK1",
                value: "0,5",
            })
            .unwrap();
        output.commit().unwrap();
        assert_eq!(text(&buffer), "Register,Value\nHEATING_CURVE_RISE_HK1,\"0,5\"\n");
    }

    #[test]
    fn csv_columns_are_written_once() {
        let (mut output, buffer) = output(Format::Csv);
        for value in ["1", "2"] {
            output
                .write(&Reading {
                    register: "RUNTIME",
                    value,
                })
                .unwrap();
        }
        assert_eq!(text(&buffer), "Register,Value\nRUNTIME,1\nRUNTIME,2\n");
    }

    #[test]
    fn jsonl_writes_one_record_per_line() {
        let (mut output, buffer) = output(Format::Jsonl);
        output
            .write(&Reading {
                register: "OUTSIDE_TEMPERATURE",
                value: "-5",
            })
            .unwrap();
        assert_eq!(
            text(&buffer),
            "{\"register\":\"OUTSIDE_TEMPERATURE\",\"value\":\"-5\"}\n"
        );
    }

    #[test]
    fn tables_are_written_on_commit() {
        let (mut output, buffer) = output(Format::Table);
        output
            .write(&Reading {
                register: "OUTSIDE_TEMPERATURE",
                value: "-5",
            })
            .unwrap();
        assert!(text(&buffer).is_empty());
        output.commit().unwrap();
        let table = text(&buffer);
        assert!(table.contains("Register"));
        assert!(table.contains("OUTSIDE_TEMPERATURE"));
    }

    #[test]
    fn empty_tables_write_nothing() {
        let (output, buffer) = output(Format::Table);
        output.commit().unwrap();
        assert!(text(&buffer).is_empty());
    }
}
