//! Fuzz target for streaming CRC-16 computation.
//!
//! Any chunking of the input, with resets and resumes mixed in, must agree
//! with the one-shot checksum for every catalogue entry.

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Crc16Digest, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  chunk_sizes: Vec<u8>,
  resume_at: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  for (name, conf) in catalog::ALL {
    let oneshot = conf.checksum(data);

    // Garbage before a reset must not leak into the result.
    let mut d = conf.digest();
    d.update(b"prefix");
    d.reset();

    let mut rest = data.as_slice();
    let mut sizes = input.chunk_sizes.iter().map(|&s| usize::from(s).max(1)).cycle();
    while !rest.is_empty() {
      let n = sizes.next().unwrap_or(rest.len()).min(rest.len());
      let (head, tail) = rest.split_at(n);
      assert_eq!(d.write(head), head.len());
      rest = tail;
    }
    assert_eq!(d.finalize(), oneshot, "{name}");

    let split = input.resume_at % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut resumed = Crc16Digest::resume(conf, conf.checksum(a));
    resumed.update(b);
    assert_eq!(resumed.finalize(), oneshot, "{name} resume at {split}");
  }
});
