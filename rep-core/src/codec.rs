//! Value codecs
//!
//! A codec is the stateless, symmetric mapping between a domain value and a
//! transport's unit of exchange. The pairing is static: the reader and writer
//! side of one channel file must agree on the codec type.

use crate::error::CoreError;

/// Bidirectional mapping between a domain value and a unit of exchange.
pub trait Codec {
    type Value;
    type Unit;

    fn encode(&self, value: &Self::Value) -> Result<Self::Unit, CoreError>;

    fn decode(&self, unit: &Self::Unit) -> Result<Self::Value, CoreError>;
}

/// Binary scalar codec: one `f64` per frame.
///
/// Unit layout (12 bytes): `[u32 little-endian count == 1][f64 native-endian]`.
/// The leading count field is redundant for single scalars but is kept so the
/// on-disk frames stay bit-compatible with other implementations of the same
/// format; decoding rejects anything other than count == 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarFrameCodec;

const COUNT_FIELD: usize = 4;
const SCALAR_UNIT_LEN: usize = COUNT_FIELD + std::mem::size_of::<f64>();

impl Codec for ScalarFrameCodec {
    type Value = f64;
    type Unit = Vec<u8>;

    fn encode(&self, value: &f64) -> Result<Vec<u8>, CoreError> {
        let mut unit = Vec::with_capacity(SCALAR_UNIT_LEN);
        unit.extend_from_slice(&1u32.to_le_bytes());
        unit.extend_from_slice(&value.to_ne_bytes());
        Ok(unit)
    }

    fn decode(&self, unit: &Vec<u8>) -> Result<f64, CoreError> {
        if unit.len() < SCALAR_UNIT_LEN {
            return Err(CoreError::Format(format!(
                "scalar unit too short: {} bytes, need {SCALAR_UNIT_LEN}",
                unit.len()
            )));
        }
        let count = u32::from_le_bytes(unit[..COUNT_FIELD].try_into().expect("4-byte slice"));
        if count != 1 {
            return Err(CoreError::Format(format!(
                "scalar unit count must be 1, got {count}"
            )));
        }
        let bytes: [u8; 8] = unit[COUNT_FIELD..SCALAR_UNIT_LEN]
            .try_into()
            .expect("8-byte slice");
        Ok(f64::from_ne_bytes(bytes))
    }
}

/// Text scalar codec: one `f64` per line, fixed-point with two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarLineCodec;

impl Codec for ScalarLineCodec {
    type Value = f64;
    type Unit = String;

    fn encode(&self, value: &f64) -> Result<String, CoreError> {
        Ok(format!("{value:.2}"))
    }

    fn decode(&self, unit: &String) -> Result<f64, CoreError> {
        unit.trim()
            .parse::<f64>()
            .map_err(|e| CoreError::Format(format!("unparsable scalar line {unit:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_codec_round_trips_bit_exact() {
        let codec = ScalarFrameCodec;
        for value in [0.0, -0.0, 0.52, -123.456, f64::MAX, f64::MIN_POSITIVE] {
            let unit = codec.encode(&value).unwrap();
            assert_eq!(unit.len(), 12);
            let back = codec.decode(&unit).unwrap();
            assert_eq!(back.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn frame_codec_rejects_short_unit() {
        let err = ScalarFrameCodec.decode(&vec![1, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
    }

    #[test]
    fn frame_codec_rejects_bad_count() {
        let mut unit = 2u32.to_le_bytes().to_vec();
        unit.extend_from_slice(&0.5f64.to_ne_bytes());
        let err = ScalarFrameCodec.decode(&unit).unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
    }

    #[test]
    fn line_codec_round_trips_to_two_decimals() {
        let codec = ScalarLineCodec;
        let unit = codec.encode(&0.5234).unwrap();
        assert_eq!(unit, "0.52");
        let back = codec.decode(&unit).unwrap();
        assert!((back - 0.5234).abs() < 0.005);
    }

    #[test]
    fn line_codec_rejects_garbage() {
        let err = ScalarLineCodec.decode(&"not-a-number".to_string()).unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
    }
}
