use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stiebel_isg_tools::codec::Value;
use stiebel_isg_tools::connection::{Args, Error, TcpTransport, Transport};
use stiebel_isg_tools::coordinator::{Coordinator, Settings, State};
use stiebel_isg_tools::registers::{Family, RegisterId, RegisterKind};
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tokio::net::{TcpListener, TcpStream};

/// Register tables served by [`serve`], addressed 0-based like on the wire.
#[derive(Default)]
struct Tables {
    inputs: BTreeMap<u16, u16>,
    holdings: BTreeMap<u16, u16>,
    /// Reads starting at these 0-based addresses are answered with an exception.
    rejected: BTreeSet<u16>,
    /// Requests are read but never answered.
    silent: bool,
    /// Number of upcoming requests to answer with "server device busy".
    busy: usize,
    requests: usize,
}

type Shared = Arc<Mutex<Tables>>;

fn respond(tables: &Shared, pdu: &[u8]) -> Option<Vec<u8>> {
    let mut tables = tables.lock().unwrap();
    tables.requests += 1;
    if tables.silent {
        return None;
    }
    if tables.busy > 0 {
        tables.busy -= 1;
        return Some(vec![pdu[0] | 0x80, 6]);
    }
    let function = pdu[0];
    let word = |offset: usize| u16::from_be_bytes([pdu[offset], pdu[offset + 1]]);
    let address = word(1);
    match function {
        3 | 4 if tables.rejected.contains(&address) => Some(vec![function | 0x80, 2]),
        3 | 4 => {
            let count = word(3);
            let table = if function == 3 {
                &tables.holdings
            } else {
                &tables.inputs
            };
            let mut response = vec![function, (count * 2) as u8];
            for a in address..address + count {
                response.extend(table.get(&a).copied().unwrap_or(0).to_be_bytes());
            }
            Some(response)
        }
        6 => {
            tables.holdings.insert(address, word(3));
            Some(pdu.to_vec())
        }
        16 => {
            let count = word(3);
            for i in 0..count {
                let value = word(6 + 2 * usize::from(i));
                tables.holdings.insert(address + i, value);
            }
            Some(pdu[..5].to_vec())
        }
        _ => Some(vec![function | 0x80, 1]),
    }
}

async fn connection(mut stream: TcpStream, tables: Shared) {
    loop {
        let mut header = [0u8; 7];
        if stream.read_exact(&mut header).await.is_err() {
            return;
        }
        let length = usize::from(u16::from_be_bytes([header[4], header[5]]));
        let mut pdu = vec![0; length - 1];
        if stream.read_exact(&mut pdu).await.is_err() {
            return;
        }
        let Some(response) = respond(&tables, &pdu) else {
            continue;
        };
        let mut frame = header[..4].to_vec();
        frame.extend((response.len() as u16 + 1).to_be_bytes());
        frame.push(header[6]);
        frame.extend(response);
        if stream.write_all(&frame).await.is_err() {
            return;
        }
    }
}

async fn serve(tables: Shared) -> Args {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(connection(stream, Arc::clone(&tables)));
        }
    });
    let mut args = Args::new("127.0.0.1");
    args.port = port;
    args.read_timeout = Duration::from_millis(200).into();
    args
}

#[tokio::test]
async fn reads_registers_with_one_based_addresses() {
    let tables = Shared::default();
    {
        let mut tables = tables.lock().unwrap();
        tables.holdings.insert(1501, 215);
        tables.inputs.insert(506, 0xFFCE);
    }
    let mut transport = TcpTransport::new(serve(Arc::clone(&tables)).await);
    transport.connect().await.unwrap();
    assert!(transport.is_connected());
    let words = transport.read_registers(RegisterKind::Holding, 1502, 2).await.unwrap();
    assert_eq!(words, [215, 0]);
    let words = transport.read_registers(RegisterKind::Input, 507, 1).await.unwrap();
    assert_eq!(words, [0xFFCE]);
}

#[tokio::test]
async fn exceptions_keep_the_connection() {
    let tables = Shared::default();
    tables.lock().unwrap().rejected.insert(500);
    let mut transport = TcpTransport::new(serve(Arc::clone(&tables)).await);
    transport.connect().await.unwrap();
    let error = transport.read_registers(RegisterKind::Input, 501, 10).await.unwrap_err();
    assert!(matches!(error, Error::Exception(2)));
    assert!(error.is_block_local());
    assert!(transport.is_connected());
    assert!(transport.read_registers(RegisterKind::Input, 511, 10).await.is_ok());
}

#[tokio::test]
async fn busy_servers_are_asked_again() {
    let tables = Shared::default();
    {
        let mut tables = tables.lock().unwrap();
        tables.inputs.insert(0, 42);
        tables.busy = 2;
    }
    let mut transport = TcpTransport::new(serve(Arc::clone(&tables)).await);
    transport.connect().await.unwrap();
    let words = transport.read_registers(RegisterKind::Input, 1, 1).await.unwrap();
    assert_eq!(words, [42]);
    assert_eq!(tables.lock().unwrap().requests, 3);

    tables.lock().unwrap().busy = usize::MAX;
    let error = transport.read_registers(RegisterKind::Input, 1, 1).await.unwrap_err();
    assert!(matches!(error, Error::Exception(6)));
    assert!(error.is_block_local());
    assert!(transport.is_connected());
    assert_eq!(tables.lock().unwrap().requests, 3 + 4);
}

#[tokio::test]
async fn unanswered_requests_drop_the_connection() {
    let tables = Shared::default();
    tables.lock().unwrap().silent = true;
    let mut transport = TcpTransport::new(serve(Arc::clone(&tables)).await);
    transport.connect().await.unwrap();
    let error = transport.read_registers(RegisterKind::Input, 1, 1).await.unwrap_err();
    assert!(matches!(error, Error::ReadTimeout));
    assert!(!error.is_block_local());
    assert!(!transport.is_connected());
    assert!(matches!(
        transport.read_registers(RegisterKind::Input, 1, 1).await,
        Err(Error::NotConnected)
    ));
}

#[tokio::test]
async fn writes_are_confirmed() {
    let tables = Shared::default();
    let mut transport = TcpTransport::new(serve(Arc::clone(&tables)).await);
    transport.connect().await.unwrap();
    transport.write_registers(1520, &[3]).await.unwrap();
    transport.write_registers(4001, &[1, 0, 1]).await.unwrap();
    let tables = tables.lock().unwrap();
    assert_eq!(tables.holdings.get(&1519), Some(&3));
    assert_eq!(tables.holdings.get(&4000), Some(&1));
    assert_eq!(tables.holdings.get(&4001), Some(&0));
    assert_eq!(tables.holdings.get(&4002), Some(&1));
}

#[tokio::test]
async fn refused_connections_are_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let mut args = Args::new("127.0.0.1");
    args.port = port;
    let mut transport = TcpTransport::new(args);
    assert!(matches!(transport.connect().await, Err(Error::Connect(..))));
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn polls_a_controller_over_tcp() {
    let tables = Shared::default();
    {
        let mut tables = tables.lock().unwrap();
        tables.inputs.insert(5001, 390);
        tables.inputs.insert(506, 0xFFCE);
        tables.inputs.insert(2500, 0b1_0000);
        tables.inputs.insert(3500, 12);
        tables.inputs.insert(3501, 345);
        tables.inputs.insert(3502, 6);
        tables.holdings.insert(1501, 200);
    }
    let coordinator = Coordinator::new(
        TcpTransport::new(serve(Arc::clone(&tables)).await),
        Settings::default(),
    );
    let snapshot = coordinator.refresh().await.unwrap();
    assert_eq!(coordinator.model().unwrap().family, Family::Wpm);
    assert_eq!(coordinator.state(), State::Published);
    assert_eq!(snapshot.get(RegisterId::OutsideTemperature), Some(Value::Decimal(-5.0)));
    assert_eq!(snapshot.get(RegisterId::IsHeating), Some(Value::Flag(true)));
    assert_eq!(snapshot.get(RegisterId::ProducedHeatingTotal), Some(Value::Integer(6345)));
    assert_eq!(snapshot.get(RegisterId::ProducedHeatingLifetime), Some(Value::Integer(6357)));

    coordinator.write(RegisterId::ComfortTemperatureHk1, 21.5).await.unwrap();
    assert_eq!(tables.lock().unwrap().holdings.get(&1501), Some(&215));
    assert_eq!(
        coordinator.snapshot().get(RegisterId::ComfortTemperatureHk1),
        Some(Value::Decimal(21.5))
    );
    coordinator.reset().await.unwrap();
    assert_eq!(tables.lock().unwrap().holdings.get(&1519), Some(&3));
    coordinator.shutdown().await;
    assert!(!coordinator.is_connected());
}
