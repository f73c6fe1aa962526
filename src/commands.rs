use crate::connection::{self, TcpTransport};
use crate::coordinator::{self, Coordinator, Settings};
use crate::registers::ModelIdentity;
use crate::snapshot::Snapshot;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Pause between cycles that failed to identify the controller.
const IDENTIFICATION_RETRY: Duration = Duration::from_secs(1);

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "commands::DeviceArgs")]
pub struct DeviceArgs {
    #[clap(flatten)]
    connection: connection::Args,

    /// Give up after the controller failed to identify itself this many times in a row.
    #[arg(long, default_value = "3")]
    identification_attempts: u32,
}

impl DeviceArgs {
    fn to_coordinator(self) -> Coordinator<TcpTransport> {
        let settings = Settings {
            identification_attempts: self.identification_attempts,
        };
        Coordinator::new(TcpTransport::new(self.connection), settings)
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build()
}

/// Identify the controller, waiting out the cycles in which it does not answer yet.
async fn identify(
    coordinator: &Coordinator<TcpTransport>,
) -> Result<ModelIdentity, coordinator::Error> {
    loop {
        match coordinator.identify().await {
            Err(e @ coordinator::Error::Unidentified(..)) => {
                debug!(message = "retrying", error = (&e as &dyn std::error::Error));
                tokio::time::sleep(IDENTIFICATION_RETRY).await;
            }
            result => return result,
        }
    }
}

/// Run a single poll cycle, identifying the controller first.
async fn refresh(
    coordinator: &Coordinator<TcpTransport>,
) -> Result<Arc<Snapshot>, coordinator::Error> {
    identify(coordinator).await?;
    coordinator.refresh().await
}

pub mod registers {
    use crate::output;
    use crate::registers::{Family, RegisterCatalog};
    use strum::VariantArray as _;

    /// Search and output known registers.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        output: output::Args,
        /// Only list the registers of this controller family.
        #[arg(long)]
        family: Option<Family>,
        /// Only list registers whose name, vendor name or address contain this text.
        filter: Option<String>,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not output the registers")]
        Output(#[from] output::Error),
    }

    #[derive(serde::Serialize)]
    pub struct RegisterSchema {
        pub family: Family,
        pub register: &'static str,
        pub kind: &'static str,
        pub address: Option<u16>,
        pub encoding: String,
        pub unit: &'static str,
        pub minimum: Option<f64>,
        pub maximum: Option<f64>,
        pub name: &'static str,
    }

    impl RegisterSchema {
        pub fn all_registers(catalog: &RegisterCatalog) -> impl Iterator<Item = Self> + '_ {
            let family = catalog.family();
            let physical = catalog.descriptors().iter().map(move |d| RegisterSchema {
                family,
                register: d.id.into(),
                kind: if d.kind == crate::registers::RegisterKind::Input {
                    "input"
                } else {
                    "holding"
                },
                address: Some(d.address),
                encoding: d.encoding.to_string(),
                unit: d.unit,
                minimum: d.min,
                maximum: d.max,
                name: d.name,
            });
            let virtuals = catalog.virtuals().iter().map(move |v| RegisterSchema {
                family,
                register: v.id.into(),
                kind: "virtual",
                address: None,
                encoding: v.derivation.to_string(),
                unit: v.unit,
                minimum: None,
                maximum: None,
                name: "",
            });
            physical.chain(virtuals)
        }

        pub fn is_match(&self, pattern: &str) -> bool {
            let pattern = pattern.to_uppercase();
            self.register.contains(&pattern)
                || self.name.to_uppercase().contains(&pattern)
                || self.address.is_some_and(|a| a.to_string().contains(&pattern))
        }

    }

    impl output::Record for RegisterSchema {
        const COLUMNS: &'static [&'static str] = &[
            "Family", "Register", "Kind", "Address", "Encoding", "Unit", "Min", "Max", "Name",
        ];

        fn cells(&self) -> Vec<String> {
            let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
            vec![
                self.family.to_string(),
                self.register.to_string(),
                self.kind.to_string(),
                self.address.map(|a| a.to_string()).unwrap_or_default(),
                self.encoding.clone(),
                self.unit.to_string(),
                optional(self.minimum),
                optional(self.maximum),
                self.name.to_string(),
            ]
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let families = match args.family {
            Some(family) => vec![family],
            None => Family::VARIANTS.to_vec(),
        };
        let mut output = args.output.to_output()?;
        for family in families {
            for register in RegisterSchema::all_registers(family.catalog()) {
                if let Some(pattern) = &args.filter {
                    if !register.is_match(pattern) {
                        continue;
                    }
                }
                output.write(&register)?;
            }
        }
        Ok(output.commit()?)
    }
}

pub mod read {
    use super::DeviceArgs;
    use crate::codec::Value;
    use crate::registers::RegisterId;
    use crate::snapshot::BlockWords;
    use crate::{coordinator, output};

    /// Read every register of the controller once.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        device: DeviceArgs,
        #[clap(flatten)]
        output: output::Args,
        /// Output the raw words of every register block instead of decoded values.
        #[arg(long)]
        raw: bool,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not set up the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("could not read the registers")]
        Read(#[from] coordinator::Error),
        #[error("could not output the registers")]
        Output(#[from] output::Error),
    }

    #[derive(serde::Serialize)]
    struct Reading {
        register: RegisterId,
        value: Option<Value>,
        unit: &'static str,
    }

    impl output::Record for Reading {
        const COLUMNS: &'static [&'static str] = &["Register", "Value", "Unit"];

        fn cells(&self) -> Vec<String> {
            vec![
                self.register.to_string(),
                self.value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".into()),
                self.unit.to_string(),
            ]
        }
    }

    impl output::Record for BlockWords {
        const COLUMNS: &'static [&'static str] = &["Block", "Kind", "First", "Words"];

        fn cells(&self) -> Vec<String> {
            let words = match &self.words {
                None => "unavailable".to_string(),
                Some(words) => words
                    .iter()
                    .map(|w| format!("{w:04X}"))
                    .collect::<Vec<_>>()
                    .join(" "),
            };
            vec![
                self.name.to_string(),
                self.kind.to_string(),
                self.first.to_string(),
                words,
            ]
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let runtime = super::runtime().map_err(Error::Runtime)?;
        let mut output = args.output.to_output()?;
        let coordinator = args.device.to_coordinator();
        let snapshot = runtime.block_on(async {
            let snapshot = super::refresh(&coordinator).await;
            coordinator.shutdown().await;
            snapshot
        })?;
        if args.raw {
            for block in snapshot.blocks() {
                output.write(block)?;
            }
            return Ok(output.commit()?);
        }
        let Some(catalog) = coordinator.catalog() else {
            return Ok(output.commit()?);
        };
        for (register, value) in snapshot.values() {
            let unit = catalog
                .descriptor(register)
                .map(|d| d.unit)
                .or_else(|| catalog.virtual_register(register).map(|v| v.unit))
                .unwrap_or_default();
            output.write(&Reading {
                register,
                value,
                unit,
            })?;
        }
        Ok(output.commit()?)
    }
}

pub mod poll {
    use super::DeviceArgs;
    use crate::snapshot::Snapshot;
    use crate::{coordinator, output};
    use futures::StreamExt as _;
    use std::path::PathBuf;
    use tokio::sync::Notify;
    use tokio_stream::wrappers::WatchStream;
    use tracing::info;

    impl output::Record for Snapshot {
        const COLUMNS: &'static [&'static str] = &["Cycle", "Family", "Unavailable"];

        fn cells(&self) -> Vec<String> {
            let unavailable = self.values().filter(|(_, value)| value.is_none()).count();
            vec![
                self.cycle().to_string(),
                self.family().map(|f| f.to_string()).unwrap_or_default(),
                unavailable.to_string(),
            ]
        }
    }

    /// Poll the controller periodically, printing every snapshot as a JSON line.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        device: DeviceArgs,
        /// Write to this file instead of the terminal.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Time between the starts of two poll cycles.
        #[arg(long, default_value = "30s")]
        interval: humantime::Duration,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not set up the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("could not listen for the interrupt signal")]
        Signal(#[source] std::io::Error),
        #[error("polling stopped")]
        Poll(#[from] coordinator::Error),
        #[error("could not output the snapshot")]
        Output(#[from] output::Error),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let runtime = super::runtime().map_err(Error::Runtime)?;
        let mut output = output::Args {
            output: args.output,
            format: output::Format::Jsonl,
        }
        .to_output()?;
        let coordinator = args.device.to_coordinator();
        let refresh = Notify::new();
        runtime.block_on(async {
            let mut snapshots = WatchStream::from_changes(coordinator.subscribe());
            let print = async {
                while let Some(snapshot) = snapshots.next().await {
                    output.write(&*snapshot)?;
                }
                Ok::<_, Error>(())
            };
            let result = tokio::select! {
                result = coordinator.run(*args.interval, &refresh) => match result {
                    Ok(never) => match never {},
                    Err(e) => Err(Error::Poll(e)),
                },
                result = print => result,
                signal = tokio::signal::ctrl_c() => {
                    info!("interrupted, stopping");
                    signal.map_err(Error::Signal)
                }
            };
            coordinator.shutdown().await;
            result
        })?;
        Ok(output.commit()?)
    }
}

pub mod write {
    use super::DeviceArgs;
    use crate::coordinator;
    use crate::registers::RegisterId;

    /// Write a value into one holding register.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        device: DeviceArgs,
        /// Name of the register, as listed by the `registers` command.
        register: RegisterId,
        /// Value in the register's engineering unit.
        #[arg(allow_negative_numbers = true)]
        value: f64,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not set up the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("could not identify the controller")]
        Identify(#[from] coordinator::Error),
        #[error("the write was not carried out")]
        Write(#[from] coordinator::WriteError),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let runtime = super::runtime().map_err(Error::Runtime)?;
        let coordinator = args.device.to_coordinator();
        runtime.block_on(async {
            let result = async {
                super::identify(&coordinator).await?;
                coordinator.write(args.register, args.value).await?;
                Ok::<_, Error>(())
            }
            .await;
            coordinator.shutdown().await;
            result
        })
    }
}

pub mod reset {
    use super::DeviceArgs;
    use crate::coordinator;

    /// Issue the controller reset command.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        device: DeviceArgs,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not set up the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("could not identify the controller")]
        Identify(#[from] coordinator::Error),
        #[error("the controller was not reset")]
        Reset(#[from] coordinator::WriteError),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let runtime = super::runtime().map_err(Error::Runtime)?;
        let coordinator = args.device.to_coordinator();
        runtime.block_on(async {
            let result = async {
                let model = super::identify(&coordinator).await?;
                tracing::info!(message = "resetting", %model);
                coordinator.reset().await?;
                Ok::<_, Error>(())
            }
            .await;
            coordinator.shutdown().await;
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{Family, RegisterId};
    use clap::Parser as _;

    #[test]
    fn register_filter_matches_names_and_addresses() {
        let all = registers::RegisterSchema::all_registers(Family::Wpm.catalog())
            .collect::<Vec<_>>();
        let by_name = all.iter().filter(|r| r.is_match("outside")).count();
        assert!(by_name >= 1);
        let by_address = all.iter().filter(|r| r.is_match("1520")).collect::<Vec<_>>();
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].register, "RESET");
        assert!(all.iter().any(|r| r.kind == "virtual" && r.address.is_none()));
    }

    #[test]
    fn write_arguments_parse_register_names() {
        let args = write::Args::try_parse_from([
            "write",
            "--host",
            "isg.local",
            "comfort_temperature_hk1",
            "-21.5",
        ]);
        assert!(args.is_ok());
        assert!(
            write::Args::try_parse_from(["write", "--host", "isg", "NO_SUCH_REGISTER", "1"])
                .is_err()
        );
        assert_eq!(
            "comfort_temperature_hk1".parse::<RegisterId>().ok(),
            Some(RegisterId::ComfortTemperatureHk1)
        );
    }

    #[test]
    fn snapshot_rows_count_unavailable_registers() {
        use crate::output::Record as _;
        let snapshot = crate::snapshot::Snapshot::default()
            .with_value(RegisterId::OutsideTemperature, None)
            .with_value(RegisterId::Runtime, Some(crate::codec::Value::Integer(3)));
        assert_eq!(snapshot.cells(), ["0", "", "1"]);
    }

    #[test]
    fn device_arguments_default() {
        let args = DeviceArgs::try_parse_from(["device", "-H", "isg.local"]).unwrap();
        assert_eq!(args.identification_attempts, Settings::default().identification_attempts);
        assert_eq!(args.connection.address(), "isg.local:502");
    }
}
