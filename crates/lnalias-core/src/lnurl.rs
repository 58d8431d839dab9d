//! # LNURL Codec
//!
//! Bech32 validation and decoding of LNURL strings.
//!
//! LNURLs routinely exceed the 90 character limit of BIP-173, so decoding
//! uses a checksum type with the standard Bech32 generator and a relaxed
//! code length.

use crate::error::{AliasError, AliasResult};
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Checksum, Fe32, Hrp};

/// Human-readable part used when encoding LNURLs
pub const LNURL_HRP: &str = "lnurl";

/// Maximum accepted length of the data part of an LNURL
pub const LNURL_MAX_LENGTH: usize = 10_000;

/// Bech32 checksum with the code length cap lifted to `LNURL_MAX_LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LnurlChecksum {}

impl Checksum for LnurlChecksum {
    type MidstateRepr = <Bech32 as Checksum>::MidstateRepr;
    const CODE_LENGTH: usize = LNURL_MAX_LENGTH;
    const CHECKSUM_LENGTH: usize = <Bech32 as Checksum>::CHECKSUM_LENGTH;
    const GENERATOR_SH: [Self::MidstateRepr; 5] = <Bech32 as Checksum>::GENERATOR_SH;
    const TARGET_RESIDUE: Self::MidstateRepr = <Bech32 as Checksum>::TARGET_RESIDUE;
}

/// Returns true if `candidate` decodes as an LNURL. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    decode(candidate).is_ok()
}

/// Decode an LNURL (optionally prefixed, e.g. `lightning:` or `lnurlp=`)
/// into the URL it points at.
pub fn decode(candidate: &str) -> AliasResult<String> {
    let bech = strip_scheme(candidate);

    let checked = CheckedHrpstring::new::<LnurlChecksum>(bech)
        .map_err(|e| AliasError::Decode(e.to_string()))?;

    validate_padding(bech)?;

    let bytes: Vec<u8> = checked.byte_iter().collect();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encode a URL as a lowercase LNURL
pub fn encode(url: &str) -> AliasResult<String> {
    let hrp = Hrp::parse(LNURL_HRP).map_err(|e| AliasError::Configuration(e.to_string()))?;

    bech32::encode::<LnurlChecksum>(hrp, url.as_bytes())
        .map_err(|e| AliasError::InvalidLnurl(e.to_string()))
}

/// Reject leftover bits that do not form a byte: at most four padding
/// bits, all zero.
fn validate_padding(bech: &str) -> AliasResult<()> {
    let data_part = match bech.rfind('1') {
        Some(sep) => &bech[sep + 1..],
        None => return Err(AliasError::Decode("missing separator".to_string())),
    };
    let data_len = data_part
        .len()
        .saturating_sub(<LnurlChecksum as Checksum>::CHECKSUM_LENGTH);

    let padding_bits = (data_len * 5) % 8;
    if padding_bits >= 5 {
        return Err(AliasError::Decode("excess padding".to_string()));
    }
    if padding_bits == 0 {
        return Ok(());
    }

    let last = data_part
        .chars()
        .nth(data_len - 1)
        .ok_or_else(|| AliasError::Decode("missing data".to_string()))?;
    let group = Fe32::from_char(last)
        .map_err(|e| AliasError::Decode(e.to_string()))?
        .to_u8();

    if group & ((1 << padding_bits) - 1) != 0 {
        return Err(AliasError::Decode("non-zero padding".to_string()));
    }
    Ok(())
}

/// Best-effort prefix strip: only an input with exactly one `:` or `=`
/// delimiter loses its prefix, anything else is decoded as given.
fn strip_scheme(candidate: &str) -> &str {
    let parts: Vec<&str> = candidate.split([':', '=']).collect();
    if parts.len() == 2 {
        parts[1]
    } else {
        candidate
    }
}
