//! A small tour of the file-like interface.
//!
//! Run with:
//!     cargo run --example banner

use std::sync::Arc;

use motdrs::{MotdDevice, OpenMode, Whence};

fn main() -> Result<(), motdrs::MotdError> {
    let dev = Arc::new(MotdDevice::new());

    // Publish a banner.
    let mut writer = dev.open(OpenMode::WriteOnly);
    writer.write(b"Welcome to motdrs!\n")?;
    writer.write(b"All systems nominal.\n")?;

    // Read it back from an independent handle.
    let mut reader = dev.open(OpenMode::ReadOnly);
    let banner = reader.read_bytes(4096)?;
    print!("{}", String::from_utf8_lossy(&banner));

    // Patch a word in place.
    let mut editor = dev.open(OpenMode::ReadWrite);
    editor.seek(31, Whence::Set)?;
    editor.write(b"humming")?;

    let patched = dev.read_bytes(0, 4096);
    print!("{}", String::from_utf8_lossy(&patched));

    // A fresh write-only open starts the banner over.
    let mut writer = dev.open(OpenMode::WriteOnly);
    writer.write(b"Maintenance window at 02:00 UTC.\n")?;
    println!("banner is now {} bytes", dev.len());

    Ok(())
}
