// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decoder for the base64 text assets bundled with the registry.
//!
//! The assets are produced at build time, so the decoder trusts its input: the length is
//! expected to be a multiple of four and only the standard alphabet (RFC 4648, with `=`
//! padding) is expected. Malformed input is *not* rejected. It yields unspecified bytes,
//! but never panics.

/// The standard base64 alphabet, in sextet order.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
const PAD: u8 = b'=';

/// The standard decoder, for callers that do not keep their own instance.
pub const STANDARD: Base64Decoder = Base64Decoder::new();

/// Base64 decoder backed by an ASCII lookup table.
///
/// The table is built once by [`Base64Decoder::new`], which is `const`, so a decoder may be
/// stored in a constant or constructed by the owner of the registry and shared from there.
#[derive(Clone)]
pub struct Base64Decoder {
	table: [u8; 128],
}

impl Base64Decoder {
	/// Build the lookup table.
	pub const fn new() -> Self {
		let mut table = [0u8; 128];
		let mut i = 0;
		while i < ALPHABET.len() {
			table[ALPHABET[i] as usize] = i as u8;
			i += 1;
		}
		Base64Decoder { table }
	}

	/// Six-bit value of the given character.
	///
	/// Characters outside of the alphabet (including `=`) map to `0`.
	pub fn sextet(&self, ch: u8) -> u8 {
		self.table.get(ch as usize).copied().unwrap_or(0)
	}

	/// Decode `input` into raw bytes.
	///
	/// The output buffer is allocated once, with the length returned by [`decoded_len`].
	/// Bytes that only carry padding bits fall beyond that length and are dropped.
	pub fn decode(&self, input: &str) -> Vec<u8> {
		let input = input.as_bytes();
		let len = decoded_len_of(input);
		let mut output = vec![0u8; len];

		let mut at = 0;
		for group in input.chunks(4) {
			if at >= len {
				break
			}

			let mut sextets = [0u8; 4];
			for (sextet, ch) in sextets.iter_mut().zip(group) {
				*sextet = self.sextet(*ch);
			}
			let [c0, c1, c2, c3] = sextets;

			let bytes = [c0 << 2 | c1 >> 4, c1 << 4 | c2 >> 2, c2 << 6 | c3];
			let take = bytes.len().min(len - at);
			output[at..at + take].copy_from_slice(&bytes[..take]);
			at += take;
		}

		output
	}
}

impl Default for Base64Decoder {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Base64Decoder {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str("Base64Decoder")
	}
}

/// Decode `input` with the [`STANDARD`] decoder.
pub fn decode(input: &str) -> Vec<u8> {
	STANDARD.decode(input)
}

/// Number of bytes `input` decodes to: `(len - padding) * 3 / 4`, truncated.
pub fn decoded_len(input: &str) -> usize {
	decoded_len_of(input.as_bytes())
}

fn decoded_len_of(input: &[u8]) -> usize {
	let padding = match input {
		[.., PAD, PAD] => 2,
		[.., PAD] => 1,
		_ => 0,
	};
	(input.len() - padding) * 3 / 4
}

#[cfg(test)]
mod tests {
	use super::*;
	use ::base64::Engine as _;

	fn encode(bytes: &[u8]) -> String {
		::base64::engine::general_purpose::STANDARD.encode(bytes)
	}

	#[test]
	fn decodes_known_vectors() {
		assert_eq!(decode("TWFu"), b"Man".to_vec());
		assert_eq!(decode("TWE="), b"Ma".to_vec());
		assert_eq!(decode("TQ=="), b"M".to_vec());
		assert_eq!(decode("TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu"), b"Many hands make light work.");
		assert!(decode("").is_empty());
	}

	#[test]
	fn table_matches_alphabet() {
		let decoder = Base64Decoder::new();
		for (expected, ch) in [
			(0, b'A'),
			(25, b'Z'),
			(26, b'a'),
			(51, b'z'),
			(52, b'0'),
			(61, b'9'),
			(62, b'+'),
			(63, b'/'),
		] {
			assert_eq!(decoder.sextet(ch), expected, "sextet of {}", ch as char);
		}

		for (i, ch) in ALPHABET.iter().enumerate() {
			assert_eq!(decoder.sextet(*ch) as usize, i);
		}
	}

	#[test]
	fn characters_outside_alphabet_map_to_zero() {
		let decoder = Base64Decoder::new();
		assert_eq!(decoder.sextet(b'='), 0);
		assert_eq!(decoder.sextet(b'-'), 0);
		assert_eq!(decoder.sextet(0xff), 0);
	}

	#[test]
	fn length_follows_padding() {
		assert_eq!(decoded_len(""), 0);
		assert_eq!(decoded_len("AAAA"), 3);
		assert_eq!(decoded_len("AAA="), 2);
		assert_eq!(decoded_len("AA=="), 1);
		assert_eq!(decoded_len("AAAAAAAA"), 6);
		assert_eq!(decoded_len("AAAAAAA="), 5);
		assert_eq!(decoded_len("AAAAAA=="), 4);

		for n in (4..=64).step_by(4) {
			let input = "A".repeat(n);
			for pad in 0..=2 {
				let mut padded = input[..n - pad].to_string();
				padded.push_str(&"=".repeat(pad));
				assert_eq!(decoded_len(&padded), (n - pad) * 3 / 4);
				assert_eq!(decode(&padded).len(), (n - pad) * 3 / 4);
			}
		}
	}

	#[test]
	fn decodes_whatever_the_reference_encoder_produces() {
		let bytes: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();

		// every residue of the length modulo three, which covers zero, two and one `=`
		for len in 0..bytes.len() {
			let encoded = encode(&bytes[..len]);
			match len % 3 {
				0 => assert!(!encoded.ends_with('=')),
				1 => assert!(encoded.ends_with("==")),
				_ => assert!(encoded.ends_with('=') && !encoded.ends_with("==")),
			}
			assert_eq!(decode(&encoded), &bytes[..len]);
		}
	}

	#[test]
	fn malformed_input_does_not_panic() {
		// wrong length
		assert_eq!(decode("TWF").len(), 2);
		assert_eq!(decode("T").len(), 0);
		// invalid characters
		assert_eq!(decode("T€€=").len(), decoded_len("T€€="));
		assert_eq!(decode("====").len(), 1);
	}
}
