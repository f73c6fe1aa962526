use crate::modbus::{self, ModbusTcpCodec, Operation, Request, Response, ResponseKind};
use crate::registers::RegisterKind;
use futures::{SinkExt as _, StreamExt as _};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_util::codec::Framed;
use tracing::{debug, info, trace, warn};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("lookup of `{1}` failed")]
    LookupHost(#[source] std::io::Error, String),
    #[error("could not connect to `{1}` over TCP")]
    Connect(#[source] std::io::Error, String),
    #[error("connecting to `{0}` timed out")]
    ConnectTimeout(String),
    #[error("there is no open connection to the ISG")]
    NotConnected,
    #[error("could not send out the request")]
    Send(#[source] std::io::Error),
    #[error("sending out the request timed out")]
    SendTimeout,
    #[error("could not read data from the stream")]
    Receive(#[source] std::io::Error),
    #[error("the response did not arrive in time")]
    ReadTimeout,
    #[error("the ISG closed the connection")]
    Closed,
    #[error("the ISG responded with exception code {0} ({name})", name = modbus::exception_name(*.0))]
    Exception(u8),
    #[error("the response contains {received} registers, but {expected} were requested")]
    ShortResponse { expected: u16, received: usize },
    #[error("the response does not match the request")]
    UnexpectedResponse,
}

impl Error {
    /// Whether the failure concerns only the request that produced it.
    ///
    /// Any other error leaves the session in an unknown state and the connection is dropped.
    pub fn is_block_local(&self) -> bool {
        matches!(self, Error::Exception(_) | Error::ShortResponse { .. })
    }
}

/// Exclusive access to the registers of one ISG.
///
/// Requests are issued one at a time; a transport never has more than one request in flight.
pub trait Transport: Send {
    fn connect(&mut self) -> impl Future<Output = Result<(), Error>> + Send;

    fn is_connected(&self) -> bool;

    /// Read `count` consecutive registers starting at the 1-based `address`.
    fn read_registers(
        &mut self,
        kind: RegisterKind,
        address: u16,
        count: u16,
    ) -> impl Future<Output = Result<Vec<u16>, Error>> + Send;

    /// Write consecutive holding registers starting at the 1-based `address`.
    fn write_registers(
        &mut self,
        address: u16,
        values: &[u16],
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn disconnect(&mut self) -> impl Future<Output = ()> + Send;
}

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "connection::Args")]
pub struct Args {
    /// Host name or IP address of the ISG.
    #[arg(long, short = 'H', env = "STIEBEL_ISG_HOST")]
    pub host: String,

    /// The Modbus TCP port of the ISG.
    #[arg(long, default_value = "502")]
    pub port: u16,

    /// The Modbus unit ID the ISG answers to.
    #[arg(long, short = 'i', default_value = "1")]
    pub unit_id: u8,

    /// Give up on establishing the TCP connection after this long.
    #[arg(long, default_value = "3s")]
    pub connect_timeout: humantime::Duration,

    /// Reconnect, if the modbus request can't be sent in this amount of time.
    #[arg(long, default_value = "1s")]
    pub send_timeout: humantime::Duration,

    /// If the modbus response isn't received in this amount of time, consider the request failed
    /// and reconnect.
    #[arg(long, default_value = "2s")]
    pub read_timeout: humantime::Duration,

    /// When busy, the ISG can respond with an exception code 6. Give it this amount of time to
    /// finish its current work before retrying.
    #[arg(long, default_value = "25ms")]
    pub server_busy_retry_delay: humantime::Duration,

    /// Give up on a request the ISG keeps answering as busy after this many retries.
    #[arg(long, default_value = "3")]
    pub server_busy_retries: u32,
}

impl Args {
    /// Arguments with the default port, unit ID and timeouts.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 502,
            unit_id: 1,
            connect_timeout: std::time::Duration::from_secs(3).into(),
            send_timeout: std::time::Duration::from_secs(1).into(),
            read_timeout: std::time::Duration::from_secs(2).into(),
            server_busy_retry_delay: std::time::Duration::from_millis(25).into(),
            server_busy_retries: 3,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

type TcpIo = Framed<TcpStream, ModbusTcpCodec>;

/// Modbus TCP connection to an ISG.
pub struct TcpTransport {
    args: Args,
    io: Option<TcpIo>,
    next_transaction_id: u16,
}

impl TcpTransport {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            io: None,
            next_transaction_id: 0,
        }
    }

    async fn open(&self) -> Result<TcpIo, Error> {
        let address = self.args.address();
        let addresses = tokio::net::lookup_host((self.args.host.as_str(), self.args.port))
            .await
            .map_err(|e| Error::LookupHost(e, address.clone()))?
            .collect::<Vec<_>>();
        debug!(message = "resolved", ?addresses);
        let socket = TcpStream::connect(&*addresses)
            .await
            .map_err(|e| Error::Connect(e, address))?;
        let nodelay_result = socket.set_nodelay(true);
        trace!(message = "setting nodelay", is_error = ?nodelay_result.err());
        Ok(Framed::new(socket, ModbusTcpCodec {}))
    }

    /// Send one request and wait for the response with the same transaction ID.
    ///
    /// A busy ISG is given some time and asked again. The connection is dropped unless the
    /// exchange completed or the ISG responded with an exception.
    async fn request(&mut self, operation: Operation) -> Result<ResponseKind, Error> {
        let mut retries = 0;
        loop {
            let response = self.send(operation.clone()).await?;
            if response.is_server_busy() && retries < self.args.server_busy_retries {
                retries += 1;
                debug!(message = "server busy, retrying", retries);
                tokio::time::sleep(*self.args.server_busy_retry_delay).await;
                continue;
            }
            return match response.kind {
                ResponseKind::Exception { code, .. } => Err(Error::Exception(code)),
                kind => Ok(kind),
            };
        }
    }

    async fn send(&mut self, operation: Operation) -> Result<Response, Error> {
        let mut io = self.io.take().ok_or(Error::NotConnected)?;
        let transaction_id = self.next_transaction_id;
        self.next_transaction_id = self.next_transaction_id.wrapping_add(1);
        let request = Request {
            unit_id: self.args.unit_id,
            transaction_id,
            operation,
        };
        let result = self.exchange(&mut io, &request).await;
        match &result {
            Ok(_) => self.io = Some(io),
            Err(e) => warn!(
                message = "request failed, dropping the connection",
                error = (e as &dyn std::error::Error)
            ),
        }
        result
    }

    async fn exchange(&self, io: &mut TcpIo, request: &Request) -> Result<Response, Error> {
        match tokio::time::timeout(*self.args.send_timeout, io.send(request)).await {
            Err(_) => return Err(Error::SendTimeout),
            Ok(Err(e)) => return Err(Error::Send(e)),
            Ok(Ok(())) => {}
        }
        let deadline = Instant::now() + *self.args.read_timeout;
        loop {
            let response = match tokio::time::timeout_at(deadline, io.next()).await {
                Err(_) => return Err(Error::ReadTimeout),
                Ok(None) => return Err(Error::Closed),
                Ok(Some(Err(e))) => return Err(Error::Receive(e)),
                Ok(Some(Ok(response))) => response,
            };
            if response.transaction_id != request.transaction_id {
                debug!(
                    message = "a response we were not expecting",
                    transaction = response.transaction_id
                );
                continue;
            }
            trace!(
                message = "decoded a response",
                transaction = response.transaction_id,
                exception = ?response.exception_code()
            );
            return Ok(response);
        }
    }
}

impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<(), Error> {
        let address = self.args.address();
        info!(message = "connecting...", %address);
        let io = tokio::time::timeout(*self.args.connect_timeout, self.open())
            .await
            .map_err(|_| Error::ConnectTimeout(address))??;
        info!(message = "connected");
        self.io = Some(io);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.io.is_some()
    }

    async fn read_registers(
        &mut self,
        kind: RegisterKind,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, Error> {
        let operation = match kind {
            RegisterKind::Input => Operation::ReadInputs { address, count },
            RegisterKind::Holding => Operation::ReadHoldings { address, count },
        };
        let function = operation.function_code();
        match self.request(operation).await? {
            ResponseKind::Registers { function: f, mut values } if f == function => {
                if values.len() < usize::from(count) {
                    return Err(Error::ShortResponse {
                        expected: count,
                        received: values.len(),
                    });
                }
                values.truncate(usize::from(count));
                Ok(values)
            }
            _ => {
                self.disconnect().await;
                Err(Error::UnexpectedResponse)
            }
        }
    }

    async fn write_registers(&mut self, address: u16, values: &[u16]) -> Result<(), Error> {
        let wire_address = address.wrapping_sub(1);
        let (operation, confirmed) = match values {
            &[value] => (
                Operation::WriteHolding { address, value },
                ResponseKind::WriteHolding {
                    address: wire_address,
                    value,
                },
            ),
            _ => (
                Operation::WriteHoldings {
                    address,
                    values: values.to_vec(),
                },
                ResponseKind::WriteHoldings {
                    address: wire_address,
                    count: values.len() as u16,
                },
            ),
        };
        if self.request(operation).await? != confirmed {
            self.disconnect().await;
            return Err(Error::UnexpectedResponse);
        }
        Ok(())
    }

    async fn disconnect(&mut self) {
        if let Some(mut io) = self.io.take() {
            info!(message = "disconnecting", address = %self.args.address());
            if let Err(e) = io.close().await {
                debug!(
                    message = "could not shut down the connection cleanly",
                    error = (&e as &dyn std::error::Error)
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_local_errors() {
        assert!(Error::Exception(2).is_block_local());
        assert!(Error::ShortResponse { expected: 3, received: 1 }.is_block_local());
        assert!(!Error::ReadTimeout.is_block_local());
        assert!(!Error::Closed.is_block_local());
        assert!(!Error::UnexpectedResponse.is_block_local());
    }

    #[test]
    fn exception_messages_name_the_code() {
        assert_eq!(
            Error::Exception(6).to_string(),
            "the ISG responded with exception code 6 (server device busy)"
        );
    }

    #[test]
    fn arguments_default() {
        use clap::Parser as _;
        let parsed = Args::try_parse_from(["test", "--host", "isg.local"]).unwrap();
        let defaults = Args::new("isg.local");
        assert_eq!(parsed.address(), "isg.local:502");
        assert_eq!(parsed.unit_id, defaults.unit_id);
        assert_eq!(*parsed.connect_timeout, *defaults.connect_timeout);
        assert_eq!(*parsed.send_timeout, *defaults.send_timeout);
        assert_eq!(*parsed.read_timeout, *defaults.read_timeout);
        assert_eq!(*parsed.server_busy_retry_delay, *defaults.server_busy_retry_delay);
        assert_eq!(parsed.server_busy_retries, defaults.server_busy_retries);
    }
}
