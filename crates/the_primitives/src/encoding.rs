//! C2 — deterministic, length-prefixed byte encoder for scalars and lists.
//!
//! Inspired by RLP but not claiming wire compatibility with it. Used
//! wherever a canonical byte image of a value is required before hashing
//! (transaction leaves today; header fields in a future revision). The
//! encoder performs no I/O, allocates, and never panics on well-typed
//! input; its only failure mode is the programmer error of passing a
//! negative count through [`encode_number`].

#![allow(clippy::cast_possible_truncation)]

use crate::Amount;
use thiserror::Error;

/// Programmer-error stratum: the caller handed the encoder an input that
/// cannot represent a non-negative integer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("encodeNumber requires a non-negative integer")]
    InvalidInput,
}

/// Encode a raw byte string per the scalar rules:
/// - length 1, byte < 0x80: emitted as-is.
/// - length 0..=55: `[0x80 + len] ++ bytes`.
/// - length > 55: `[0xb7 + len(L)] ++ L ++ bytes`, `L` the minimal
///   big-endian encoding of `len`.
#[must_use]
pub fn encode_bytes(b: &[u8]) -> Vec<u8> {
    if b.len() == 1 && b[0] < 0x80 {
        return vec![b[0]];
    }
    if b.len() <= 55 {
        let mut out = Vec::with_capacity(1 + b.len());
        out.push(0x80 + b.len() as u8);
        out.extend_from_slice(b);
        return out;
    }
    let len_bytes = minimal_big_endian(Amount::from(b.len() as u64));
    let mut out = Vec::with_capacity(1 + len_bytes.len() + b.len());
    out.push(0xb7 + len_bytes.len() as u8);
    out.extend_from_slice(&len_bytes);
    out.extend_from_slice(b);
    out
}

/// Encode the UTF-8 bytes of a string as a scalar.
#[must_use]
pub fn encode_string(s: &str) -> Vec<u8> {
    encode_bytes(s.as_bytes())
}

/// Encode a non-negative arbitrary-precision integer.
///
/// `0` encodes as the empty byte string (`[0x80]`); `n > 0` encodes the
/// minimal big-endian bytes of `n` with no leading zero byte.
#[must_use]
pub fn encode_big_int(n: &Amount) -> Vec<u8> {
    if n.is_zero() {
        encode_bytes(&[])
    } else {
        encode_bytes(&minimal_big_endian(*n))
    }
}

/// Encode a signed count known (at the type level, for callers who haven't
/// yet proven non-negativity) to be representable as a non-negative
/// integer. Delegates to [`encode_big_int`] once validated.
///
/// # Errors
/// Returns [`EncodeError::InvalidInput`] if `n` is negative.
pub fn encode_number(n: i128) -> Result<Vec<u8>, EncodeError> {
    if n < 0 {
        return Err(EncodeError::InvalidInput);
    }
    Ok(encode_big_int(&Amount::from(n as u128)))
}

/// Encode a list of already-encoded items.
/// - payload 0..=55: `[0xc0 + plen] ++ payload`.
/// - payload > 55: `[0xf7 + len(L)] ++ L ++ payload`.
#[must_use]
pub fn encode_list(items: &[Vec<u8>]) -> Vec<u8> {
    let payload_len: usize = items.iter().map(Vec::len).sum();
    let mut payload = Vec::with_capacity(payload_len);
    for item in items {
        payload.extend_from_slice(item);
    }
    if payload.len() <= 55 {
        let mut out = Vec::with_capacity(1 + payload.len());
        out.push(0xc0 + payload.len() as u8);
        out.extend_from_slice(&payload);
        return out;
    }
    let len_bytes = minimal_big_endian(Amount::from(payload.len() as u64));
    let mut out = Vec::with_capacity(1 + len_bytes.len() + payload.len());
    out.push(0xf7 + len_bytes.len() as u8);
    out.extend_from_slice(&len_bytes);
    out.extend_from_slice(&payload);
    out
}

/// Minimal big-endian representation of `n`, with no leading zero byte.
/// `minimal_big_endian(0)` is the sole exception: it returns a single zero
/// byte, since length encoding never needs to represent a genuinely empty
/// value (call sites only reach this helper for lengths already known to
/// exceed 55).
#[must_use]
pub fn minimal_big_endian(n: Amount) -> Vec<u8> {
    if n.is_zero() {
        return vec![0u8];
    }
    let mut buf = [0u8; 32];
    n.to_big_endian(&mut buf);
    let first_nonzero = buf.iter().position(|&b| b != 0).unwrap_or(31);
    buf[first_nonzero..].to_vec()
}

/// A parser for the byte format above, kept for round-trip tests and fuzzing.
/// It carries no consensus semantics of its own — the wire format's
/// authority is the encoder, not this decoder.
pub mod decode {
    use super::Amount;
    use thiserror::Error;

    #[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
    pub enum DecodeError {
        #[error("input ended before a complete item could be read")]
        Truncated,
        #[error("length prefix encodes a value with a leading zero byte")]
        NonMinimalLength,
        #[error("trailing bytes after decoding a complete item")]
        Trailing,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Item {
        Scalar(Vec<u8>),
        List(Vec<Item>),
    }

    impl Item {
        #[must_use]
        pub fn as_amount(&self) -> Option<Amount> {
            match self {
                Item::Scalar(bytes) if bytes.is_empty() => Some(Amount::zero()),
                Item::Scalar(bytes) if bytes.len() <= 32 && (bytes[0] != 0) => {
                    let mut buf = [0u8; 32];
                    buf[32 - bytes.len()..].copy_from_slice(bytes);
                    Some(Amount::from_big_endian(&buf))
                }
                _ => None,
            }
        }
    }

    /// Decode exactly one item from `input`, rejecting trailing bytes.
    pub fn decode_one(input: &[u8]) -> Result<Item, DecodeError> {
        let (item, rest) = decode_item(input)?;
        if !rest.is_empty() {
            return Err(DecodeError::Trailing);
        }
        Ok(item)
    }

    fn read_length(src: &[u8], len_of_len: usize) -> Result<(usize, &[u8]), DecodeError> {
        if src.len() < len_of_len {
            return Err(DecodeError::Truncated);
        }
        let (len_bytes, rest) = src.split_at(len_of_len);
        if len_bytes[0] == 0 {
            return Err(DecodeError::NonMinimalLength);
        }
        let mut acc: usize = 0;
        for b in len_bytes {
            acc = acc
                .checked_shl(8)
                .and_then(|a| a.checked_add(usize::from(*b)))
                .ok_or(DecodeError::Truncated)?;
        }
        Ok((acc, rest))
    }

    fn decode_item(src: &[u8]) -> Result<(Item, &[u8]), DecodeError> {
        let (&tag, rest) = src.split_first().ok_or(DecodeError::Truncated)?;
        match tag {
            0x00..=0x7f => Ok((Item::Scalar(vec![tag]), rest)),
            0x80..=0xb7 => {
                let len = usize::from(tag - 0x80);
                if rest.len() < len {
                    return Err(DecodeError::Truncated);
                }
                let (payload, rest) = rest.split_at(len);
                Ok((Item::Scalar(payload.to_vec()), rest))
            }
            0xb8..=0xbf => {
                let len_of_len = usize::from(tag - 0xb7);
                let (len, rest) = read_length(rest, len_of_len)?;
                if rest.len() < len {
                    return Err(DecodeError::Truncated);
                }
                let (payload, rest) = rest.split_at(len);
                Ok((Item::Scalar(payload.to_vec()), rest))
            }
            0xc0..=0xf7 => {
                let plen = usize::from(tag - 0xc0);
                if rest.len() < plen {
                    return Err(DecodeError::Truncated);
                }
                let (mut payload, rest) = rest.split_at(plen);
                let mut items = Vec::new();
                while !payload.is_empty() {
                    let (item, remainder) = decode_item(payload)?;
                    items.push(item);
                    payload = remainder;
                }
                Ok((Item::List(items), rest))
            }
            0xf8..=0xff => {
                let len_of_len = usize::from(tag - 0xf7);
                let (plen, rest) = read_length(rest, len_of_len)?;
                if rest.len() < plen {
                    return Err(DecodeError::Truncated);
                }
                let (mut payload, rest) = rest.split_at(plen);
                let mut items = Vec::new();
                while !payload.is_empty() {
                    let (item, remainder) = decode_item(payload)?;
                    items.push(item);
                    payload = remainder;
                }
                Ok((Item::List(items), rest))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_big_int_vectors() {
        assert_eq!(encode_big_int(&Amount::zero()), vec![0x80]);
        assert_eq!(encode_big_int(&Amount::from(127u64)), vec![0x7f]);
        assert_eq!(encode_big_int(&Amount::from(128u64)), vec![0x81, 0x80]);
    }

    #[test]
    fn encode_number_rejects_negative() {
        assert_eq!(encode_number(-1), Err(EncodeError::InvalidInput));
        assert!(encode_number(0).is_ok());
    }

    #[test]
    fn encode_list_of_string_and_bigint() {
        let items = vec![encode_string("cat"), encode_big_int(&Amount::from(1024u64))];
        let encoded = encode_list(&items);
        // list header is 0xc0 + payload length (4 bytes for "cat" + 3 for 1024 = 7).
        assert_eq!(
            encoded,
            vec![0xc7, 0x83, 0x63, 0x61, 0x74, 0x82, 0x04, 0x00]
        );
    }

    #[test]
    fn encode_bytes_single_byte_below_0x80_is_identity() {
        assert_eq!(encode_bytes(&[0x42]), vec![0x42]);
        assert_eq!(encode_bytes(&[0x7f]), vec![0x7f]);
        // 0x80 itself does not qualify for the identity case.
        assert_eq!(encode_bytes(&[0x80]), vec![0x81, 0x80]);
    }

    #[test]
    fn encode_bytes_long_scalar_uses_length_of_length() {
        let payload = vec![0xABu8; 56];
        let encoded = encode_bytes(&payload);
        assert_eq!(encoded[0], 0xb7 + 1);
        assert_eq!(encoded[1], 56);
        assert_eq!(&encoded[2..], &payload[..]);
    }

    #[test]
    fn minimal_big_endian_has_no_leading_zero_except_for_zero() {
        assert_eq!(minimal_big_endian(Amount::zero()), vec![0u8]);
        assert_eq!(minimal_big_endian(Amount::from(256u64)), vec![1, 0]);
        assert_eq!(minimal_big_endian(Amount::from(255u64)), vec![255]);
    }

    #[test]
    fn decode_round_trips_scalars_and_lists() {
        let encoded = encode_big_int(&Amount::from(1024u64));
        let item = decode::decode_one(&encoded).unwrap();
        assert_eq!(item.as_amount(), Some(Amount::from(1024u64)));

        let list_items = vec![encode_string("cat"), encode_big_int(&Amount::from(1024u64))];
        let encoded_list = encode_list(&list_items);
        let decoded = decode::decode_one(&encoded_list).unwrap();
        match decoded {
            decode::Item::List(elems) => {
                assert_eq!(elems.len(), 2);
                assert_eq!(elems[0], decode::Item::Scalar(b"cat".to_vec()));
                assert_eq!(elems[1].as_amount(), Some(Amount::from(1024u64)));
            }
            decode::Item::Scalar(_) => panic!("expected a list"),
        }
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let mut encoded = encode_big_int(&Amount::from(7u64));
        encoded.push(0xFF);
        assert_eq!(
            decode::decode_one(&encoded),
            Err(decode::DecodeError::Trailing)
        );
    }

    proptest::proptest! {
        #[test]
        fn encode_decode_round_trip_amounts(n in 0u128..u128::MAX) {
            let amount = Amount::from(n);
            let encoded = encode_big_int(&amount);
            let decoded = decode::decode_one(&encoded).unwrap();
            proptest::prop_assert_eq!(decoded.as_amount(), Some(amount));
        }

        #[test]
        fn encode_bytes_equal_inputs_equal_outputs(a in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..200)) {
            let first = encode_bytes(&a);
            let second = encode_bytes(&a);
            proptest::prop_assert_eq!(first, second);
        }
    }
}
