//! Fuzz target for CRC-16 combine.
//!
//! Splits the input at arbitrary points, checksums each piece and folds the
//! pieces back together with `combine`.

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Checksum, ChecksumCombine, Crc16Arc, Crc16Modbus, Crc16X25, Crc16Xmodem, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fn pieces<'a>(data: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::with_capacity(splits.len() + 1);
  let mut rest = data;
  let mut consumed = 0;
  for &split in splits {
    let (head, tail) = rest.split_at(split - consumed);
    out.push(head);
    rest = tail;
    consumed = split;
  }
  out.push(rest);
  out
}

fn combine_chain<C: ChecksumCombine<Output = u16>>(data: &[u8], splits: &[usize]) {
  let expected = C::checksum(data);
  let mut parts = pieces(data, splits).into_iter();
  let first = parts.next().unwrap_or_default();
  let combined = parts.fold(C::checksum(first), |acc, p| C::combine(acc, C::checksum(p), p.len()));
  assert_eq!(combined, expected);
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let max_split = data.len() + 1;
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % max_split).collect();
  splits.sort_unstable();
  splits.dedup();

  combine_chain::<Crc16X25>(data, &splits);
  combine_chain::<Crc16Modbus>(data, &splits);
  combine_chain::<Crc16Xmodem>(data, &splits);
  combine_chain::<Crc16Arc>(data, &splits);

  for (name, conf) in catalog::ALL {
    let expected = conf.checksum(data);
    let mut parts = pieces(data, &splits).into_iter();
    let first = parts.next().unwrap_or_default();
    let combined = parts.fold(conf.checksum(first), |acc, p| conf.combine(acc, conf.checksum(p), p.len()));
    assert_eq!(combined, expected, "{name}");
  }
});
