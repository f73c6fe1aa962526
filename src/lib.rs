pub mod blocks;
pub mod codec;
pub mod commands;
pub mod connection;
pub mod coordinator;
pub mod modbus;
pub mod output;
pub mod registers;
pub mod snapshot;
pub mod synth;
