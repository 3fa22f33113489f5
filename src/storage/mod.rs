pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use anyhow::Result;

/// Durable key-value storage holding raw record bytes.
pub trait KeyValueSlot {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for Box<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}
