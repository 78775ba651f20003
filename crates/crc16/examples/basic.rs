//! Basic CRC-16 usage.
//!
//! Run: `cargo run -p crc16 --example basic`

use std::io::Write;

use crc16::{BitOrder, Checksum, Crc16Conf, Crc16Params, Crc16Xmodem, MODBUS, PPP, catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let data = b"123456789";

  // One-shot with a predefined configuration
  println!("CRC-16/MODBUS:  {:#06x}", crc16::checksum(&MODBUS, data));

  // Streaming
  let mut d = PPP.digest();
  for chunk in data.chunks(4) {
    d.write(chunk);
  }
  println!("CRC-16/PPP:     {:#06x}", d.finalize());

  // Framing: append the checksum in the variant's byte order
  let mut frame = vec![0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
  let mut d = MODBUS.digest();
  d.update(&frame);
  d.finalize_into(&mut frame);
  println!("Modbus frame:   {frame:02x?}");
  MODBUS.verify(&frame[..6], u16::from_le_bytes([frame[6], frame[7]]))?;

  // Custom parameters (CRC-16/DNP)
  let dnp = Crc16Conf::new(Crc16Params::new(0x3D65, BitOrder::Reflected, 0x0000, 0xFFFF, false));
  println!("CRC-16/DNP:     {:#06x}", dnp.checksum(data));

  // Lookup by name
  let conf = catalog::by_name("CRC-16/KERMIT")?;
  println!("CRC-16/KERMIT:  {:#06x}", conf.checksum(data));

  // Checksum bytes while writing them somewhere else
  let mut writer = Crc16Xmodem::writer(Vec::new());
  writer.write_all(data)?;
  let (buf, crc) = writer.into_parts();
  println!("XMODEM writer:  {crc:#06x} over {} bytes", buf.len());

  Ok(())
}
