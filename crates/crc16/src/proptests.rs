//! Property tests for the table-driven CRC-16 engine.
//!
//! The oracle is the bitwise reference in `common::reference`, driven with
//! arbitrary parameter sets, plus `crc-fast` for the variants it knows.
//!
//! 1. **Table correctness**: any polynomial, either bit order, folds exactly
//!    like the bitwise definition
//! 2. **Chunking equivalence**: any chunking of the input through a digest
//!    equals the one-shot checksum
//! 3. **Combine correctness**: `crc(A || B) == combine(crc(A), crc(B), len(B))`

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use crate::{
  BitOrder, Crc16Arc, Crc16Conf, Crc16Params, Crc16X25,
  common::reference::{crc16_normal_bitwise, crc16_reflected_bitwise},
};

fn arb_bit_order() -> impl Strategy<Value = BitOrder> {
  prop_oneof![Just(BitOrder::Reflected), Just(BitOrder::Normal)]
}

fn arb_params() -> impl Strategy<Value = Crc16Params> {
  (any::<u16>(), arb_bit_order(), any::<u16>(), any::<u16>(), any::<bool>())
    .prop_map(|(poly, order, init, xor_out, be)| Crc16Params::new(poly, order, init, xor_out, be))
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=2048)
}

fn reference(params: &Crc16Params, data: &[u8]) -> u16 {
  let raw = match params.bit_order {
    BitOrder::Reflected => crc16_reflected_bitwise(params.polynomial.reverse_bits(), params.initial, data),
    BitOrder::Normal => crc16_normal_bitwise(params.polynomial, params.initial, data),
  };
  raw ^ params.xor_out
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn table_fold_matches_bitwise(params in arb_params(), data in arb_data()) {
    let conf = Crc16Conf::new(params);
    prop_assert_eq!(conf.checksum(&data), reference(&params, &data));
  }

  #[test]
  fn chunking_equivalence(
    params in arb_params(),
    data in arb_data(),
    chunk_pattern in proptest::collection::vec(1usize..=97, 1..=16)
  ) {
    let conf = Crc16Conf::new(params);
    let mut d = conf.digest();
    let mut rest = data.as_slice();
    let mut sizes = chunk_pattern.iter().cycle();
    while !rest.is_empty() {
      let n = sizes.next().copied().unwrap_or(1).min(rest.len());
      let (head, tail) = rest.split_at(n);
      prop_assert_eq!(d.write(head), n);
      rest = tail;
    }
    prop_assert_eq!(d.finalize(), conf.checksum(&data));
  }

  #[test]
  fn combine_correctness(params in arb_params(), data in arb_data(), split in any::<usize>()) {
    let conf = Crc16Conf::new(params);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = conf.combine(conf.checksum(a), conf.checksum(b), b.len());
    prop_assert_eq!(combined, reference(&params, &data),
      "combine(crc(A), crc(B), len(B)) != crc(A||B) at split {}/{}",
      split, data.len());
  }

  #[test]
  fn resume_continues_finalized_crc(params in arb_params(), data in arb_data(), split in any::<usize>()) {
    let conf = Crc16Conf::new(params);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut d = crate::Crc16Digest::resume(&conf, conf.checksum(a));
    d.update(b);
    prop_assert_eq!(d.finalize(), conf.checksum(&data));
  }

  #[test]
  fn output_bytes_follow_byte_order(params in arb_params(), data in arb_data()) {
    let conf = Crc16Conf::new(params);
    let mut d = conf.digest();
    d.update(&data);
    let crc = d.finalize();
    let expected = if params.big_endian { crc.to_be_bytes() } else { crc.to_le_bytes() };
    prop_assert_eq!(d.to_bytes(), expected);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn x25_matches_crc_fast_rust(data in arb_data()) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc16IbmSdlc, &data) as u16;
    prop_assert_eq!(Crc16X25::checksum(&data), reference);
  }

  #[test]
  fn arc_matches_crc_fast_rust(data in arb_data()) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc16Arc, &data) as u16;
    prop_assert_eq!(Crc16Arc::checksum(&data), reference);
  }

  #[test]
  fn x25_streaming_matches_crc_fast_rust(data in arb_data(), chunk in 1usize..=257) {
    let mut ours = crate::X25.digest();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc16IbmSdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u16);
  }

  #[test]
  fn arc_combine_matches_crc_fast_rust(data in arb_data(), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let ours = Crc16Arc::combine(Crc16Arc::checksum(a), Crc16Arc::checksum(b), b.len());

    let ref_crc_a = crc_fast::checksum(CrcAlgorithm::Crc16Arc, a);
    let ref_crc_b = crc_fast::checksum(CrcAlgorithm::Crc16Arc, b);
    let ref_combined =
      crc_fast::checksum_combine(CrcAlgorithm::Crc16Arc, ref_crc_a, ref_crc_b, b.len() as u64) as u16;

    prop_assert_eq!(ours, ref_combined);
  }
}
