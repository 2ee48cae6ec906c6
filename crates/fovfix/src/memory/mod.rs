pub mod layout;
mod reader;

pub use reader::{GameProcess, ReadMemory, WriteMemory};
